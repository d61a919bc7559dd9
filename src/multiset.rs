//! Operations on press multisets: filtering against a sorted set and parity reduction.

/// Returns the elements of the multiset `a` that are contained in the set `b`.
///
/// `a` has to be sorted ascending and may contain repeated values, `b` has to be sorted ascending
/// without repetitions. Every occurrence of a value of `a` is kept if the value is in `b`, so the
/// result is again sorted ascending. Runs in `O(|a| + |b|)`.
pub fn submultiset(a: &[usize], b: &[usize]) -> Vec<usize> {
    let mut res = Vec::new();
    let (mut ai, mut bi) = (0, 0);
    while ai < a.len() && bi < b.len() {
        if a[ai] == b[bi] {
            res.push(a[ai]);
            ai += 1;
        } else if a[ai] > b[bi] {
            bi += 1;
        } else {
            ai += 1;
        }
    }
    res
}

/// Returns, in ascending order, the nodes of `0..n` that occur an odd number of times in
/// `presses`. Pressing each of them once has the same effect as the whole sequence.
///
/// Panics if `presses` holds a node `>= n`.
pub fn parity_reduce(presses: &[usize], n: usize) -> Vec<usize> {
    let mut odd = vec![false; n];
    for press in presses {
        odd[*press] ^= true;
    }
    odd.iter()
        .enumerate()
        .filter_map(|(node, is_odd)| if *is_odd { Some(node) } else { None })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submultiset_test() {
        assert_eq!(submultiset(&[1, 1, 2, 3, 3, 3, 7], &[1, 3, 5]), vec![1, 1, 3, 3, 3]);
        assert_eq!(submultiset(&[0, 4, 4, 9], &[2, 4, 9, 10]), vec![4, 4, 9]);
        assert_eq!(submultiset(&[5, 6], &[1, 2]), Vec::<usize>::new());
    }

    #[test]
    fn submultiset_empty_test() {
        assert!(submultiset(&[], &[1, 2]).is_empty());
        assert!(submultiset(&[1, 2], &[]).is_empty());
    }

    #[test]
    fn parity_reduce_test() {
        assert_eq!(parity_reduce(&[0, 1, 2, 3, 2, 1], 4), vec![0, 3]);
        assert_eq!(parity_reduce(&[3, 3], 4), Vec::<usize>::new());
        assert_eq!(parity_reduce(&[], 0), Vec::<usize>::new());
    }

    #[test]
    fn parity_reduce_idempotent_test() {
        let raw = vec![5, 1, 5, 2, 2, 2, 0, 1, 4];
        let once = parity_reduce(&raw, 6);
        assert_eq!(once, parity_reduce(&raw, 6));
        assert_eq!(once, vec![0, 2, 4]);
        assert_eq!(parity_reduce(&once, 6), once);
    }

}
