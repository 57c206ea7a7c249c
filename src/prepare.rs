//! Preparation strategies: sorts and the hash-bucket index.
//!
//! A preparator never mutates the input collection; it produces a new
//! owned form. Only bubble sort observes the time budget, polling it
//! between outer passes so the in-flight pass always completes before
//! an abort.

use std::collections::HashMap;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::timing::PrepareBudget;
use crate::{Entry, PrepareTimedOut};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preparator {
    /// Returns the collection unchanged; the baseline and fallback
    /// preparator. Always succeeds.
    Keep,
    /// Adjacent-pair swap sort by ascending name, O(n^2). Budget-aware.
    BubbleSort,
    /// Pivot-partition sort by ascending name. Entries fully equal to
    /// the pivot collapse to one copy per recursion level.
    QuickSort,
    /// Groups entries into buckets keyed by a hash of the name.
    HashBuild,
}

/// The output of a preparation phase: either a reordered collection or
/// a bucket index for per-query candidate narrowing.
#[derive(Debug, Clone)]
pub enum Prepared {
    Entries(Vec<Entry>),
    Indexed(HashIndex),
}

impl Preparator {
    pub fn name(&self) -> &'static str {
        match self {
            Preparator::Keep => "linear scan",
            Preparator::BubbleSort => "bubble sort",
            Preparator::QuickSort => "quick sort",
            Preparator::HashBuild => "hash table",
        }
    }

    /// Label for the preparation line of the report; `None` when the
    /// preparation is a no-op and no breakdown is printed.
    pub fn phase_label(&self) -> Option<&'static str> {
        match self {
            Preparator::Keep => None,
            Preparator::BubbleSort | Preparator::QuickSort => Some("Sorting"),
            Preparator::HashBuild => Some("Creating"),
        }
    }

    pub fn prepare(
        &self,
        entries: &[Entry],
        budget: Option<&PrepareBudget>,
    ) -> Result<Prepared, PrepareTimedOut> {
        match self {
            Preparator::Keep => Ok(Prepared::Entries(entries.to_vec())),
            Preparator::BubbleSort => bubble_sort(entries, budget).map(Prepared::Entries),
            Preparator::QuickSort => Ok(Prepared::Entries(quick_sort(entries))),
            Preparator::HashBuild => Ok(Prepared::Indexed(HashIndex::build(entries))),
        }
    }
}

fn bubble_sort(
    entries: &[Entry],
    budget: Option<&PrepareBudget>,
) -> Result<Vec<Entry>, PrepareTimedOut> {
    let mut sorted = entries.to_vec();
    let len = sorted.len();
    let mut pass = 0;
    while pass + 1 < len {
        if let Some(budget) = budget {
            budget.check()?;
        }
        let last = len - pass - 1;
        for i in 0..last {
            if sorted[i].name > sorted[i + 1].name {
                sorted.swap(i, i + 1);
            }
        }
        pass += 1;
    }
    Ok(sorted)
}

fn quick_sort(entries: &[Entry]) -> Vec<Entry> {
    if entries.len() < 2 {
        return entries.to_vec();
    }
    let pivot = &entries[entries.len() - 1];
    let mut smaller = Vec::new();
    let mut greater = Vec::new();
    for entry in entries {
        if entry == pivot {
            // All copies of the pivot are dropped here; exactly one is
            // reinserted below.
            continue;
        }
        if entry.name < pivot.name {
            smaller.push(entry.clone());
        } else {
            greater.push(entry.clone());
        }
    }
    let mut sorted = quick_sort(&smaller);
    sorted.push(pivot.clone());
    sorted.extend(quick_sort(&greater));
    sorted
}

/// Bucket index mapping a 64-bit hash of the entry name to the entries
/// sharing it. Used to narrow a linear search to one bucket per query.
#[derive(Debug, Clone, Default)]
pub struct HashIndex {
    buckets: HashMap<u64, Vec<Entry>>,
}

impl HashIndex {
    pub fn build(entries: &[Entry]) -> Self {
        let mut buckets: HashMap<u64, Vec<Entry>> = HashMap::new();
        for entry in entries {
            buckets
                .entry(Self::hash_name(&entry.name))
                .or_default()
                .push(entry.clone());
        }
        Self { buckets }
    }

    fn hash_name(name: &str) -> u64 {
        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        hasher.finish()
    }

    /// Candidate entries for a query: the bucket with the query's hash,
    /// or an empty slice when no entry hashed there.
    pub fn bucket(&self, name: &str) -> &[Entry] {
        self.buckets
            .get(&Self::hash_name(name))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn num_buckets(&self) -> usize {
        self.buckets.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timing::Timer;
    use std::time::Duration;

    fn shuffled() -> Vec<Entry> {
        vec![
            Entry::new("1", "Bob"),
            Entry::new("2", "Al"),
            Entry::new("3", "Cy"),
        ]
    }

    fn is_sorted_by_name(entries: &[Entry]) -> bool {
        entries.windows(2).all(|w| w[0].name <= w[1].name)
    }

    fn entries_of(prepared: Prepared) -> Vec<Entry> {
        match prepared {
            Prepared::Entries(entries) => entries,
            Prepared::Indexed(_) => panic!("expected an entry collection"),
        }
    }

    #[test]
    fn keep_returns_input_unchanged() {
        let input = shuffled();
        let prepared = entries_of(Preparator::Keep.prepare(&input, None).unwrap());
        assert_eq!(prepared, input);
    }

    #[test]
    fn bubble_sort_orders_and_preserves_all_entries() {
        let mut input = shuffled();
        input.push(Entry::new("4", "Al"));
        let sorted = entries_of(Preparator::BubbleSort.prepare(&input, None).unwrap());
        assert!(is_sorted_by_name(&sorted));
        assert_eq!(sorted.len(), input.len());
        // Exact permutation: every input entry survives, duplicates
        // included.
        for entry in &input {
            let in_input = input.iter().filter(|e| *e == entry).count();
            let in_sorted = sorted.iter().filter(|e| *e == entry).count();
            assert_eq!(in_input, in_sorted);
        }
    }

    #[test]
    fn quick_sort_orders_entries() {
        let sorted = entries_of(Preparator::QuickSort.prepare(&shuffled(), None).unwrap());
        assert!(is_sorted_by_name(&sorted));
        assert_eq!(sorted.len(), 3);
        assert_eq!(sorted[0].name, "Al");
        assert_eq!(sorted[2].name, "Cy");
    }

    #[test]
    fn quick_sort_collapses_equal_duplicates_but_bubble_keeps_them() {
        let mut input = shuffled();
        input.push(Entry::new("1", "Bob"));
        input.push(Entry::new("1", "Bob"));

        let quick = entries_of(Preparator::QuickSort.prepare(&input, None).unwrap());
        let bubble = entries_of(Preparator::BubbleSort.prepare(&input, None).unwrap());

        let quick_bobs = quick.iter().filter(|e| e.name == "Bob").count();
        let bubble_bobs = bubble.iter().filter(|e| e.name == "Bob").count();
        assert_eq!(quick_bobs, 1);
        assert_eq!(bubble_bobs, 3);
    }

    #[test]
    fn quick_sort_keeps_same_name_different_phone() {
        // Only full-value duplicates collapse; same name with another
        // phone number survives.
        let input = vec![Entry::new("1", "Bob"), Entry::new("2", "Bob")];
        let sorted = quick_sort(&input);
        assert_eq!(sorted.len(), 2);
    }

    #[test]
    fn sorting_a_sorted_collection_is_idempotent() {
        let input = vec![
            Entry::new("2", "Al"),
            Entry::new("1", "Bob"),
            Entry::new("3", "Cy"),
        ];
        let bubble = entries_of(Preparator::BubbleSort.prepare(&input, None).unwrap());
        assert_eq!(bubble, input);
        let quick = entries_of(Preparator::QuickSort.prepare(&input, None).unwrap());
        assert_eq!(quick, input);
    }

    #[test]
    fn bubble_sort_aborts_on_exhausted_budget() {
        let mut timer = Timer::new();
        timer.start();
        let budget = PrepareBudget::new(&timer, Duration::ZERO);
        std::thread::sleep(Duration::from_millis(1));
        let result = bubble_sort(&shuffled(), Some(&budget));
        assert_eq!(result, Err(PrepareTimedOut));
    }

    #[test]
    fn bubble_sort_completes_within_generous_budget() {
        let mut timer = Timer::new();
        timer.start();
        let budget = PrepareBudget::new(&timer, Duration::from_secs(3600));
        let sorted = bubble_sort(&shuffled(), Some(&budget)).unwrap();
        assert!(is_sorted_by_name(&sorted));
    }

    #[test]
    fn hash_index_groups_by_name_and_narrows_lookup() {
        let input = vec![
            Entry::new("1", "Al"),
            Entry::new("2", "Bob"),
            Entry::new("3", "Al"),
        ];
        let index = match Preparator::HashBuild.prepare(&input, None).unwrap() {
            Prepared::Indexed(index) => index,
            Prepared::Entries(_) => panic!("expected an index"),
        };
        // Equal names share a hash, so they land in one bucket.
        let bucket = index.bucket("Al");
        assert_eq!(bucket.len(), 2);
        assert!(bucket.iter().all(|e| e.name == "Al"));
        assert_eq!(index.bucket("Bob").len(), 1);
        assert!(index.bucket("Dan").is_empty());
    }

    #[test]
    fn empty_collection_prepares_to_empty() {
        let empty: Vec<Entry> = vec![];
        assert!(entries_of(Preparator::BubbleSort.prepare(&empty, None).unwrap()).is_empty());
        assert!(entries_of(Preparator::QuickSort.prepare(&empty, None).unwrap()).is_empty());
        match Preparator::HashBuild.prepare(&empty, None).unwrap() {
            Prepared::Indexed(index) => assert_eq!(index.num_buckets(), 0),
            Prepared::Entries(_) => panic!("expected an index"),
        }
    }
}
