use std::cmp::Ordering;

/// A heap slot: the item plus the key it is ordered by.
///
/// `seq` is the insertion number, so two items of equal weight come out in
/// the order they went in.
#[derive(Debug, Clone)]
struct Entry<T> {
    weight: usize,
    seq: u64,
    item: T,
}

impl<T> Entry<T> {
    fn key(&self) -> (usize, u64) {
        (self.weight, self.seq)
    }
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

/// Min-priority queue keyed by weight, FIFO among equal weights.
#[derive(Debug, Clone)]
pub struct MinHeap<T> {
    elements: Vec<Entry<T>>,
    next_seq: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapErr {
    HeapUnderflow,
}

impl<T> MinHeap<T> {
    pub fn new() -> Self {
        MinHeap {
            elements: vec![],
            next_seq: 0,
        }
    }

    pub fn heap_size(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Weight of the element `extract_min` would return next.
    pub fn peek_weight(&self) -> Option<usize> {
        self.elements.first().map(|e| e.weight)
    }

    fn parent(&self, i: usize) -> usize {
        (i - 1) / 2
    }

    fn left(&self, i: usize) -> usize {
        2 * i + 1
    }

    fn right(&self, i: usize) -> usize {
        2 * i + 2
    }

    #[cfg(test)]
    fn valid_min_heap(&self) -> bool {
        (1..self.heap_size()).all(|i| self.elements[self.parent(i)] <= self.elements[i])
    }

    fn min_heapify(&mut self, mut i: usize) {
        loop {
            let l = self.left(i);
            let r = self.right(i);
            let mut smallest = i;

            if l < self.heap_size() && self.elements[l] < self.elements[smallest] {
                smallest = l;
            }
            if r < self.heap_size() && self.elements[r] < self.elements[smallest] {
                smallest = r;
            }
            if smallest == i {
                return;
            }
            self.elements.swap(i, smallest);
            i = smallest;
        }
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let p = self.parent(i);
            if self.elements[p] <= self.elements[i] {
                break;
            }
            self.elements.swap(i, p);
            i = p;
        }
    }

    pub fn insert(&mut self, weight: usize, item: T) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.elements.push(Entry { weight, seq, item });
        let last = self.heap_size() - 1;
        self.sift_up(last);
    }

    pub fn extract_min(&mut self) -> Result<T, HeapErr> {
        if self.is_empty() {
            return Err(HeapErr::HeapUnderflow);
        }
        let n = self.heap_size() - 1;
        self.elements.swap(0, n);
        let result = self.elements.remove(n);
        self.min_heapify(0);
        Ok(result.item)
    }
}

impl<T> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}
