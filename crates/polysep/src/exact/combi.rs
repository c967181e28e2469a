//! Subset and permutation enumeration for the exhaustive validator.
//!
//! Both enumerators are explicit iterator state machines: `Combinations`
//! advances a lexicographic index vector, `HeapPermutations` runs the
//! iterative form of Heap's algorithm.

use crate::geom::PointId;

/// Lexicographic k-element subsets of an id list.
pub struct Combinations {
    ids: Vec<PointId>,
    k: usize,
    indexes: Vec<usize>,
    done: bool,
}

impl Combinations {
    pub fn new(ids: Vec<PointId>, k: usize) -> Self {
        let done = k > ids.len();
        Self {
            indexes: (0..k).collect(),
            ids,
            k,
            done,
        }
    }
}

impl Iterator for Combinations {
    type Item = Vec<PointId>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let out: Vec<PointId> = self.indexes.iter().map(|&i| self.ids[i]).collect();

        // Advance: bump the rightmost index not yet at its final position,
        // then reset everything to its right.
        let n = self.ids.len();
        let mut at = None;
        for i in (0..self.k).rev() {
            if self.indexes[i] != i + n - self.k {
                at = Some(i);
                break;
            }
        }
        match at {
            Some(i) => {
                self.indexes[i] += 1;
                for j in (i + 1)..self.k {
                    self.indexes[j] = self.indexes[j - 1] + 1;
                }
            }
            None => self.done = true,
        }
        Some(out)
    }
}

/// All orderings of an id list via the iterative Heap's algorithm.
pub struct HeapPermutations {
    items: Vec<PointId>,
    counters: Vec<usize>,
    k: usize,
    started: bool,
    done: bool,
}

impl HeapPermutations {
    pub fn new(items: Vec<PointId>) -> Self {
        Self {
            counters: vec![0; items.len()],
            items,
            k: 0,
            started: false,
            done: false,
        }
    }
}

impl Iterator for HeapPermutations {
    type Item = Vec<PointId>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(self.items.clone());
        }
        let n = self.items.len();
        while self.k < n {
            if self.counters[self.k] < self.k {
                if self.k % 2 == 0 {
                    self.items.swap(0, self.k);
                } else {
                    let c = self.counters[self.k];
                    self.items.swap(c, self.k);
                }
                self.counters[self.k] += 1;
                self.k = 0;
                return Some(self.items.clone());
            }
            self.counters[self.k] = 0;
            self.k += 1;
        }
        self.done = true;
        None
    }
}
