use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use route_planner::algorithm::Candidate;
use route_planner::data_structures::MinHeap;

// Every parent must compare <= each of its children
fn assert_heap_order<T: Ord + std::fmt::Debug>(heap: &MinHeap<T>) {
    let items = heap.as_slice();
    for i in 1..items.len() {
        let parent = (i - 1) / 2;
        assert!(items[parent] <= items[i], "Heap order violated at index {}", i);
    }
}

#[test]
fn test_pop_empty_returns_none() {
    let mut heap: MinHeap<i32> = MinHeap::new();
    assert!(heap.is_empty());
    assert_eq!(heap.pop(), None);
    assert_eq!(heap.peek(), None);
}

#[test]
fn test_pop_returns_minimum() {
    let mut heap = MinHeap::new();
    for value in [5, 3, 8, 1, 9, 2] {
        heap.push(value);
    }

    assert_eq!(heap.len(), 6);
    assert_eq!(heap.peek(), Some(&1));
    assert_eq!(heap.pop(), Some(1));
    assert_eq!(heap.pop(), Some(2));
    assert_eq!(heap.pop(), Some(3));
    assert_eq!(heap.len(), 3);
}

#[test]
fn test_duplicates_are_kept() {
    let mut heap = MinHeap::new();
    for value in [4, 4, 1, 4, 1] {
        heap.push(value);
    }

    let drained: Vec<i32> = std::iter::from_fn(|| heap.pop()).collect();
    assert_eq!(drained, vec![1, 1, 4, 4, 4]);
    assert!(heap.is_empty());
}

#[test]
fn test_random_operations_keep_heap_order() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut heap = MinHeap::new();
    let mut reference: Vec<u32> = Vec::new();

    for _ in 0..2_000 {
        if rng.gen_bool(0.6) || reference.is_empty() {
            let value = rng.gen_range(0..100);
            heap.push(value);
            reference.push(value);
        } else {
            let min = *reference.iter().min().unwrap();
            let pos = reference.iter().position(|&v| v == min).unwrap();
            reference.swap_remove(pos);
            assert_eq!(heap.pop(), Some(min), "pop must return the global minimum");
        }
        assert_heap_order(&heap);
        assert_eq!(heap.len(), reference.len());
    }

    // Draining yields non-decreasing values
    let mut previous = None;
    while let Some(value) = heap.pop() {
        if let Some(prev) = previous {
            assert!(prev <= value);
        }
        previous = Some(value);
    }
}

#[test]
fn test_clear() {
    let mut heap = MinHeap::with_capacity(4);
    heap.push(1);
    heap.push(2);
    heap.clear();
    assert!(heap.is_empty());
    assert_eq!(heap.pop(), None);
}

// Builds a candidate with the given costs along `path`
fn candidate(estimate: f64, cost: f64, path: &[usize]) -> Candidate<f64> {
    let mut candidate = Candidate::new(estimate, cost, path[0]);
    for &next in &path[1..] {
        candidate = candidate.extend(next, estimate, cost);
    }
    candidate
}

#[test]
fn test_candidate_tracks_its_path() {
    let start = Candidate::new(1.5, 0.0, 7);
    assert_eq!(start.path(), &[7]);
    assert_eq!(start.current(), 7);

    let next = start.extend(3, 2.5, 1.0);
    assert_eq!(next.path(), &[7, 3]);
    assert_eq!(next.current(), 3);
    assert_eq!(next.estimate(), 2.5);
    assert_eq!(next.cost(), 1.0);

    // Extending leaves the original untouched
    assert_eq!(start.path(), &[7]);
    assert_eq!(start.cost(), 0.0);
}

#[test]
fn test_candidate_ordering() {
    // Estimate decides first
    let a = candidate(1.0, 5.0, &[9]);
    let b = candidate(2.0, 0.0, &[0]);
    assert!(a < b);

    // Equal estimates fall through to cost so far
    let c = candidate(2.0, 1.0, &[0, 3]);
    let d = candidate(2.0, 2.0, &[0, 1, 2]);
    assert!(c < d);

    // Then to the path, compared id by id
    let e = candidate(2.0, 2.0, &[0, 1, 2]);
    let f = candidate(2.0, 2.0, &[0, 3, 2]);
    assert!(e < f);
    assert_eq!(e, candidate(2.0, 2.0, &[0, 1, 2]));
}

#[test]
fn test_candidates_pop_in_tie_break_order() {
    let mut heap = MinHeap::new();
    heap.push(candidate(2.0, 2.0, &[0, 3, 2]));
    heap.push(candidate(3.5, 1.0, &[0, 4]));
    heap.push(candidate(2.0, 1.0, &[0, 3]));
    heap.push(candidate(2.0, 2.0, &[0, 1, 2]));

    let order: Vec<Vec<usize>> = std::iter::from_fn(|| heap.pop())
        .map(|c| c.path().to_vec())
        .collect();
    assert_eq!(
        order,
        vec![vec![0, 3], vec![0, 1, 2], vec![0, 3, 2], vec![0, 4]]
    );
}
