use std::cmp::Ordering;

use crate::{PivotStrategy, SortConfig};

/// Recursive driver shared by both variants. Recurses into the smaller
/// partition and loops on the larger one, so stack depth stays O(log n)
/// even when the partition degenerates.
pub(crate) fn quick_sort<T, F>(mut data: &mut [T], compare: &mut F, config: &SortConfig)
where
    F: FnMut(&T, &T) -> Ordering,
{
    loop {
        let len = data.len();
        if len < 2 || len <= config.insertion_cutoff {
            insertion_sort(data, compare);
            return;
        }

        if config.pivot_strategy == PivotStrategy::MedianOfThree {
            let m = median3_index(data, compare, 0, len / 2, len - 1);
            data.swap(0, m);
        }

        let j = partition(data, compare);

        let (left, rest) = data.split_at_mut(j);
        let right = &mut rest[1..];

        if left.len() < right.len() {
            quick_sort(left, compare, config);
            data = right;
        } else {
            quick_sort(right, compare, config);
            data = left;
        }
    }
}

/// Hoare partition around the first element. Returns the pivot's final
/// position `j`; afterwards everything left of `j` compares <= pivot and
/// everything right of it compares >= pivot.
fn partition<T, F>(data: &mut [T], compare: &mut F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    debug_assert!(data.len() >= 2);

    let hi = data.len() - 1;
    let mut i = 0usize;
    let mut j = hi + 1;

    loop {
        // Scan right past elements strictly below the pivot, clamped at hi.
        i += 1;
        while compare(&data[i], &data[0]) == Ordering::Less && i != hi {
            i += 1;
        }

        // Scan left past elements strictly above the pivot, clamped at lo.
        j -= 1;
        while compare(&data[j], &data[0]) == Ordering::Greater && j != 0 {
            j -= 1;
        }

        if i >= j {
            break;
        }

        data.swap(i, j);
    }

    data.swap(0, j);
    j
}

/// Adjacent-exchange insertion sort: each element is swapped leftward past
/// any strictly greater predecessor.
fn insertion_sort<T, F>(data: &mut [T], compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for i in 1..data.len() {
        let mut j = i;
        while j > 0 && compare(&data[j], &data[j - 1]) == Ordering::Less {
            data.swap(j, j - 1);
            j -= 1;
        }
    }
}

/// Index of the median of `data[i]`, `data[j]`, `data[k]`, resolved with
/// three pairwise comparisons. Ties may return any of the tied indices;
/// the value at the returned index is always a true median.
fn median3_index<T, F>(data: &[T], compare: &mut F, i: usize, j: usize, k: usize) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    if compare(&data[i], &data[j]) == Ordering::Less {
        if compare(&data[j], &data[k]) == Ordering::Less {
            j
        } else if compare(&data[i], &data[k]) == Ordering::Less {
            k
        } else {
            i
        }
    } else if compare(&data[k], &data[j]) == Ordering::Less {
        j
    } else if compare(&data[k], &data[i]) == Ordering::Less {
        k
    } else {
        i
    }
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use super::{insertion_sort, median3_index, partition};

    fn cmp_u64(a: &u64, b: &u64) -> Ordering {
        a.cmp(b)
    }

    #[test]
    fn partition_places_pivot() {
        let cases = [
            vec![5_u64, 3, 8, 1, 9, 2],
            vec![2, 1],
            vec![1, 2],
            vec![7, 7, 7, 7],
            vec![4, 9, 9, 1, 0, 4, 4],
        ];

        for case in cases {
            let mut data = case.clone();
            let pivot = data[0];
            let j = {
                let mut compare = cmp_u64;
                partition(&mut data, &mut compare)
            };

            assert_eq!(data[j], pivot, "input={case:?}");
            assert!(data[..j].iter().all(|&x| x <= pivot), "input={case:?}");
            assert!(data[j + 1..].iter().all(|&x| x >= pivot), "input={case:?}");

            let mut sorted_case = case.clone();
            sorted_case.sort_unstable();
            data.sort_unstable();
            assert_eq!(data, sorted_case, "partition must permute, not rewrite");
        }
    }

    #[test]
    fn insertion_sort_small_ranges() {
        let cases = [
            vec![],
            vec![1_u64],
            vec![2, 1],
            vec![8, 7, 6, 5, 4, 3, 2, 1],
            vec![3, 3, 1, 1, 2, 2],
        ];

        for case in cases {
            let mut actual = case.clone();
            let mut compare = cmp_u64;
            insertion_sort(&mut actual, &mut compare);

            let mut expected = case;
            expected.sort_unstable();
            assert_eq!(actual, expected);
        }
    }

    #[test]
    fn median3_all_orderings() {
        // All six strict orderings of {1, 2, 3}: the chosen index must hold 2.
        let orderings = [
            [1_u64, 2, 3],
            [1, 3, 2],
            [2, 1, 3],
            [2, 3, 1],
            [3, 1, 2],
            [3, 2, 1],
        ];

        for data in orderings {
            let mut compare = cmp_u64;
            let m = median3_index(&data, &mut compare, 0, 1, 2);
            assert_eq!(data[m], 2, "input={data:?}");
        }
    }

    #[test]
    fn median3_ties() {
        // With ties, the value at the chosen index must equal the true
        // median of the multiset.
        let cases = [
            ([1_u64, 1, 1], 1_u64),
            ([1, 1, 2], 1),
            ([1, 2, 1], 1),
            ([2, 1, 1], 1),
            ([2, 2, 1], 2),
            ([2, 1, 2], 2),
            ([1, 2, 2], 2),
        ];

        for (data, median) in cases {
            let mut compare = cmp_u64;
            let m = median3_index(&data, &mut compare, 0, 1, 2);
            assert_eq!(data[m], median, "input={data:?}");
        }
    }

    #[test]
    fn median3_spec_sample() {
        // Spread sample positions, not just adjacent ones.
        let data = [9_u64, 0, 5, 0, 1, 0, 7];
        let mut compare = cmp_u64;
        let m = median3_index(&data, &mut compare, 0, 4, 6);
        assert_eq!(data[m], 7);
    }
}
