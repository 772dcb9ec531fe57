use crate::combinations::Combinations;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::TARGET_SUM;

    const ENTRIES: [i64; 6] = [1721, 979, 366, 299, 675, 1456];

    #[test]
    fn pair_summing_to_the_target() {
        assert_eq!(find_product(&ENTRIES, 2, TARGET_SUM), Some(514579));
    }

    #[test]
    fn triple_summing_to_the_target() {
        assert_eq!(find_product(&ENTRIES, 3, TARGET_SUM), Some(241861950));
    }

    #[test]
    fn no_qualifying_pair() {
        assert_eq!(find_product(&[1000, 900, 30], 2, TARGET_SUM), None);
    }

    #[test]
    fn fewer_entries_than_the_subset_size() {
        assert_eq!(find_product(&[2020, 0], 3, TARGET_SUM), None);
    }

    #[test]
    fn zero_valued_entry_gives_a_zero_product() {
        // A zero product is a found result, not a missing one
        assert_eq!(find_product(&[2020, 0], 2, TARGET_SUM), Some(0));
    }

    #[test]
    fn negative_entries_participate_in_sums() {
        assert_eq!(find_product(&[-10, 2030], 2, TARGET_SUM), Some(-20300));
    }

    #[test]
    fn first_match_in_index_order_wins() {
        // Indices (0, 1) and (2, 3) both sum to the target; enumeration
        // order selects the former
        let entries = [10, 2010, 1010, 1010];
        assert_eq!(find_product(&entries, 2, TARGET_SUM), Some(20100));
    }

    #[test]
    fn repeated_searches_agree() {
        let entries = vec![1721, 979, 366, 299, 675, 1456];
        let first = find_product(&entries, 2, TARGET_SUM);
        let second = find_product(&entries, 2, TARGET_SUM);
        assert_eq!(first, second);
        assert_eq!(entries, vec![1721, 979, 366, 299, 675, 1456]);
    }

    #[test]
    fn empty_product_is_the_identity() {
        assert_eq!(product(&[]), 1);
    }
}

/// Product of a combination's elements: left-to-right reduction seeded with
/// the multiplicative identity, so an empty combination yields 1.
fn product(combination: &[i64]) -> i64 {
    combination.iter().fold(1, |acc, x| acc * x)
}

/// Search the k-element combinations of `entries` in lexicographic index
/// order and return the product of the first one whose elements sum to
/// exactly `target`.
///
/// Returns `None` when the enumeration is exhausted without a match,
/// including when `entries` has fewer than `k` elements. Never returns a
/// default in place of a missing result.
pub fn find_product(entries: &[i64], k: usize, target: i64) -> Option<i64> {
    for combination in Combinations::new(entries, k) {
        if combination.iter().sum::<i64>() == target {
            return Some(product(&combination));
        }
    }

    None
}
