mod engine;

use std::cmp::Ordering;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PivotStrategy {
    /// Pivot is the first element of the range.
    First,
    /// Pivot is the median of the first, middle, and last elements,
    /// swapped to the front before partitioning.
    MedianOfThree,
}

/// Tunables selecting one of the two quicksort variants. Ranges of
/// `insertion_cutoff` elements or fewer are finished by insertion sort
/// instead of further partitioning.
#[derive(Clone, Copy, Debug)]
pub struct SortConfig {
    pub pivot_strategy: PivotStrategy,
    pub insertion_cutoff: usize,
}

/// Textbook quicksort: first-element pivot, no cutoff. O(n^2) comparisons
/// on sorted or reverse-sorted input is a documented property of this
/// variant, not a defect.
pub const BASIC_QUICK_SORT: SortConfig = SortConfig {
    pivot_strategy: PivotStrategy::First,
    insertion_cutoff: 0,
};

/// Quicksort with median-of-three pivot selection and cutoff to insertion
/// sort for ranges of at most 8 elements.
pub const QUICK_BARS: SortConfig = SortConfig {
    pivot_strategy: PivotStrategy::MedianOfThree,
    insertion_cutoff: 8,
};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SortAlgorithm {
    BasicQuickSort,
    QuickBars,
}

pub const ALL_ALGORITHMS: [SortAlgorithm; 2] =
    [SortAlgorithm::BasicQuickSort, SortAlgorithm::QuickBars];

pub fn all_algorithms() -> &'static [SortAlgorithm] {
    &ALL_ALGORITHMS
}

pub fn algorithm_name(algo: SortAlgorithm) -> &'static str {
    match algo {
        SortAlgorithm::BasicQuickSort => "basic_quick_sort",
        SortAlgorithm::QuickBars => "quick_bars",
    }
}

pub fn algorithm_config(algo: SortAlgorithm) -> SortConfig {
    match algo {
        SortAlgorithm::BasicQuickSort => BASIC_QUICK_SORT,
        SortAlgorithm::QuickBars => QUICK_BARS,
    }
}

/// Sorts `data` in place with the selected variant.
pub fn sort<T: Ord>(algo: SortAlgorithm, data: &mut [T]) {
    sort_by_with_config(data, T::cmp, &algorithm_config(algo));
}

pub fn quick_sort<T: Ord>(data: &mut [T]) {
    sort_by_with_config(data, T::cmp, &BASIC_QUICK_SORT);
}

pub fn quick_sort_by<T, F>(data: &mut [T], compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    sort_by_with_config(data, compare, &BASIC_QUICK_SORT);
}

pub fn quick_bars<T: Ord>(data: &mut [T]) {
    sort_by_with_config(data, T::cmp, &QUICK_BARS);
}

pub fn quick_bars_by<T, F>(data: &mut [T], compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    sort_by_with_config(data, compare, &QUICK_BARS);
}

/// `f64` is not `Ord`; this orders by `f64::total_cmp`, which agrees with
/// `<`/`>` on NaN-free data.
pub fn quick_bars_f64(data: &mut [f64]) {
    sort_by_with_config(data, f64::total_cmp, &QUICK_BARS);
}

pub fn sort_with_config<T: Ord>(data: &mut [T], config: &SortConfig) {
    sort_by_with_config(data, T::cmp, config);
}

pub fn sort_by_with_config<T, F>(data: &mut [T], mut compare: F, config: &SortConfig)
where
    F: FnMut(&T, &T) -> Ordering,
{
    engine::quick_sort(data, &mut compare, config);
}
