//! Fixed-capacity binary min-heap with in-place priority updates.
//!
//! The open set of the A* search needs three things a plain
//! `std::collections::BinaryHeap` cannot give it: an O(1) "is this cell
//! already queued?" test, a way to re-position an entry after its cost
//! drops, and a hard capacity tied to the grid size.
//!
//! The heap itself only stores small `Copy` handles (cell ids). The slot
//! each handle currently occupies, and the priority used to order handles,
//! live in a companion [`HeapStore`]. For the planner that is the per-run
//! search arena. The heap writes a handle's slot on every move and clears it
//! when the handle leaves, so membership is answered by a single lookup.
//!
//! ```text
//!   heap slots:   [ 7 | 3 | 9 | 4 ]        store.heap_index(3) == Some(1)
//!                   ▲               store.heap_index(5) == None
//!                   └── remove_first() returns 7
//! ```

use std::cmp::Ordering;

/// Per-item bookkeeping the heap needs from its owner.
pub trait HeapStore<T> {
    /// Slot the item currently occupies, if any.
    fn heap_index(&self, item: T) -> Option<usize>;

    /// Record the item's new slot (`None` once it leaves the heap).
    fn set_heap_index(&mut self, item: T, index: Option<usize>);

    /// `Ordering::Less` when `a` must be removed before `b`.
    fn compare(&self, a: T, b: T) -> Ordering;
}

/// Binary min-heap over handles whose slots are tracked by a [`HeapStore`].
#[derive(Clone, Debug)]
pub struct IndexedMinHeap<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T: Copy + PartialEq> IndexedMinHeap<T> {
    /// Create an empty heap that can hold at most `capacity` items.
    pub fn new(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Number of items currently held.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the heap is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Maximum number of items.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The current minimum, without removing it.
    #[inline]
    pub fn peek(&self) -> Option<T> {
        self.items.first().copied()
    }

    /// Insert an item that is not already in the heap.
    ///
    /// # Panics
    ///
    /// Panics when the heap is full. The capacity is sized from the grid's
    /// cell count, so overflowing it means the grid and heap disagree.
    pub fn add<S: HeapStore<T>>(&mut self, item: T, store: &mut S) {
        assert!(
            self.items.len() < self.capacity,
            "IndexedMinHeap capacity exceeded: capacity {}, attempted size {}",
            self.capacity,
            self.items.len() + 1
        );

        let index = self.items.len();
        self.items.push(item);
        store.set_heap_index(item, Some(index));
        self.sift_up(index, store);
    }

    /// O(1) membership test.
    ///
    /// The stored slot must be in range and actually hold `item`, so a stale
    /// index can never produce a false positive.
    #[inline]
    pub fn contains<S: HeapStore<T>>(&self, item: T, store: &S) -> bool {
        store
            .heap_index(item)
            .is_some_and(|index| self.items.get(index) == Some(&item))
    }

    /// Remove and return the minimum item, or `None` if the heap is empty.
    pub fn remove_first<S: HeapStore<T>>(&mut self, store: &mut S) -> Option<T> {
        if self.items.is_empty() {
            return None;
        }

        // swap_remove moves the last item into the root slot
        let first = self.items.swap_remove(0);
        store.set_heap_index(first, None);

        if let Some(&moved) = self.items.first() {
            store.set_heap_index(moved, Some(0));
            self.sift_down(0, store);
        }

        Some(first)
    }

    /// Restore heap order after `item`'s priority was decreased.
    ///
    /// Only sifts up: priorities never increase while an item is queued.
    /// Items that are not in the heap are ignored.
    pub fn update_item<S: HeapStore<T>>(&mut self, item: T, store: &mut S) {
        if !self.contains(item, store) {
            return;
        }
        if let Some(index) = store.heap_index(item) {
            self.sift_up(index, store);
        }
    }

    /// Remove every item, clearing their stored slots.
    pub fn clear<S: HeapStore<T>>(&mut self, store: &mut S) {
        for item in self.items.drain(..) {
            store.set_heap_index(item, None);
        }
    }

    fn sift_up<S: HeapStore<T>>(&mut self, mut index: usize, store: &mut S) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if store.compare(self.items[index], self.items[parent]) != Ordering::Less {
                break;
            }
            self.swap(index, parent, store);
            index = parent;
        }
    }

    fn sift_down<S: HeapStore<T>>(&mut self, mut index: usize, store: &mut S) {
        let len = self.items.len();
        loop {
            let left = 2 * index + 1;
            if left >= len {
                break;
            }

            let right = left + 1;
            let mut smallest = left;
            if right < len && store.compare(self.items[right], self.items[left]) == Ordering::Less
            {
                smallest = right;
            }

            if store.compare(self.items[smallest], self.items[index]) != Ordering::Less {
                break;
            }

            self.swap(index, smallest, store);
            index = smallest;
        }
    }

    fn swap<S: HeapStore<T>>(&mut self, a: usize, b: usize, store: &mut S) {
        self.items.swap(a, b);
        store.set_heap_index(self.items[a], Some(a));
        store.set_heap_index(self.items[b], Some(b));
    }
}
