use std::fmt::Debug;

/// An array-backed binary min-heap used as the search frontier
///
/// The element at index 0 is always the minimum; for every `i > 0` the
/// element at `(i - 1) / 2` compares less than or equal to the one at `i`.
#[derive(Debug, Clone)]
pub struct MinHeap<T>
where
    T: Ord + Debug,
{
    /// Implicit binary tree in level order
    heap: Vec<T>,
}

impl<T> Default for MinHeap<T>
where
    T: Ord + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> MinHeap<T>
where
    T: Ord + Debug,
{
    /// Creates a new empty priority queue
    pub fn new() -> Self {
        MinHeap { heap: Vec::new() }
    }

    /// Creates an empty priority queue with room for `capacity` items
    pub fn with_capacity(capacity: usize) -> Self {
        MinHeap {
            heap: Vec::with_capacity(capacity),
        }
    }

    /// Returns true if the priority queue is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of elements in the priority queue
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Pushes an item and sifts it up to restore the heap order
    pub fn push(&mut self, item: T) {
        self.heap.push(item);
        self.sift_up(self.heap.len() - 1);
    }

    /// Removes the smallest item, or returns `None` when the queue is empty
    pub fn pop(&mut self) -> Option<T> {
        if self.heap.is_empty() {
            return None;
        }

        let last = self.heap.len() - 1;
        self.heap.swap(0, last);
        let min = self.heap.pop();
        self.sift_down(0);
        min
    }

    /// Returns the smallest item without removing it
    pub fn peek(&self) -> Option<&T> {
        self.heap.first()
    }

    /// Clears the priority queue
    pub fn clear(&mut self) {
        self.heap.clear();
    }

    /// Backing storage in heap (level) order
    pub fn as_slice(&self) -> &[T] {
        &self.heap
    }

    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if self.heap[parent] <= self.heap[idx] {
                break;
            }
            self.heap.swap(parent, idx);
            idx = parent;
        }
    }

    fn sift_down(&mut self, mut idx: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * idx + 1;
            if left >= len {
                break;
            }

            // Pick the smaller child; on a tie the left one wins
            let right = left + 1;
            let child = if right < len && self.heap[right] < self.heap[left] {
                right
            } else {
                left
            };

            if self.heap[child] >= self.heap[idx] {
                break;
            }
            self.heap.swap(child, idx);
            idx = child;
        }
    }
}
