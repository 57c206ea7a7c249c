//! Search algorithms over a directory slice.
//!
//! Each algorithm is a pure function of the slice and the query; the
//! caller decides what slice to hand in. The hash-table strategy narrows
//! the slice to one bucket, everything else searches the whole
//! collection.

use crate::Entry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchAlgorithm {
    /// In-order scan matching on substring containment of the query
    /// within the entry name. Intentionally permissive. O(n).
    Linear,
    /// Block-hopping search over a name-sorted slice, block size
    /// floor(sqrt(n)). Exact match only. O(sqrt(n)).
    Jump,
    /// Recursive halving over a name-sorted slice. Exact match only.
    /// O(log n).
    Binary,
}

impl SearchAlgorithm {
    pub fn name(&self) -> &'static str {
        match self {
            SearchAlgorithm::Linear => "linear search",
            SearchAlgorithm::Jump => "jump search",
            SearchAlgorithm::Binary => "binary search",
        }
    }

    pub fn find(&self, entries: &[Entry], query: &str) -> bool {
        match self {
            SearchAlgorithm::Linear => linear_search(entries, query),
            SearchAlgorithm::Jump => jump_search(entries, query),
            SearchAlgorithm::Binary => binary_search(entries, query),
        }
    }
}

fn linear_search(entries: &[Entry], query: &str) -> bool {
    entries.iter().any(|entry| entry.name.contains(query))
}

fn jump_search(entries: &[Entry], query: &str) -> bool {
    if entries.is_empty() {
        return false;
    }
    let block_size = (entries.len() as f64).sqrt().floor() as usize;
    let last = entries.len() - 1;
    let mut current = 0;
    loop {
        let name = entries[current].name.as_str();
        if name == query {
            return true;
        }
        if name < query {
            if current == last {
                // Ran off the end while still below the target.
                return false;
            }
            current = (current + block_size).min(last);
        } else {
            if current == 0 {
                return false;
            }
            // Overshot: scan backward through the current block. The
            // block start is clamped to the head of the slice.
            let block_start = current.saturating_sub(block_size - 1);
            for i in (block_start..current).rev() {
                if entries[i].name == query {
                    return true;
                }
            }
            return false;
        }
    }
}

fn binary_search(entries: &[Entry], query: &str) -> bool {
    if entries.is_empty() {
        return false;
    }
    binary_step(entries, 0, entries.len() - 1, query)
}

fn binary_step(entries: &[Entry], left: usize, right: usize, query: &str) -> bool {
    let middle = (left + right) / 2;
    let name = entries[middle].name.as_str();
    if name == query {
        return true;
    }
    if left == middle {
        // Interval degenerated to a single element.
        return false;
    }
    if name > query {
        binary_step(entries, left, middle, query)
    } else {
        binary_step(entries, middle, right, query)
    }
}
