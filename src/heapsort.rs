//! In-place heapsort over a mutable slice.
//!
//! Two phases: build a binary max-heap over the entire slice in linear
//! time, then repeatedly swap the root with the last in-heap element and
//! repair the shrunk heap. O(N log N) comparisons, O(1) extra space;
//! sift-down is a plain loop so there is no call-stack growth either.
//!
//! Not a stable sort. The comparator has to be a total order for the
//! output to be sorted; an inconsistent comparator still only permutes
//! the slice.

use std::cmp::Ordering;
use std::fmt;

/// Sorts the slice ascending by `Ord`.
pub fn sort<T: Ord>(v: &mut [T]) {
    sort_by(v, T::cmp);
}

/// Sorts the slice so that `cmp(&v[i], &v[i + 1]) != Ordering::Greater`
/// for every adjacent pair. Passing a reversed comparator gives a
/// descending result.
pub fn sort_by<T, F>(v: &mut [T], cmp: F)
    where F: FnMut(&T, &T) -> Ordering
{
    sort_by_with_observer(v, cmp, |_: &T, _: &T| ());
}

/// Like `sort_by`, but `observer` is called before every swap done by
/// heap repair, with the element moving up first and the element moving
/// down second. Purely diagnostic; the result is the same as `sort_by`.
pub fn sort_by_with_observer<T, F, O>(v: &mut [T], mut cmp: F, mut observer: O)
    where F: FnMut(&T, &T) -> Ordering,
          O: FnMut(&T, &T),
{
    // This binary heap respects the invariant `parent >= child`.
    // A child has to be strictly greater to displace its parent,
    // so equal elements never cause a swap.
    let mut sift_down = |v: &mut [T], mut node: usize| {
        loop {
            // Children of `node`:
            let left = node.wrapping_mul(2).wrapping_add(1);
            let right = node.wrapping_mul(2).wrapping_add(2);

            let mut largest = node;
            if left < v.len() && cmp(&v[left], &v[largest]) == Ordering::Greater {
                largest = left;
            }
            if right < v.len() && cmp(&v[right], &v[largest]) == Ordering::Greater {
                largest = right;
            }

            // Stop if the invariant holds at `node`.
            if largest == node {
                break;
            }

            observer(&v[largest], &v[node]);
            v.swap(node, largest);
            node = largest;
        }
    };

    // Build the heap in linear time. Leaves are already heaps, so the
    // last parent, at `len / 2 - 1`, is the first index that needs work.
    for i in (0 .. v.len() / 2).rev() {
        sift_down(v, i);
    }

    // Pop maximal elements from the heap.
    for i in (1 .. v.len()).rev() {
        v.swap(0, i);
        sift_down(&mut v[..i], 0);
    }
}

/// Ready-made observer forwarding swaps to `log::trace!`.
pub fn trace_swaps<T: fmt::Debug>(a: &T, b: &T) {
    trace!("Swapping {:?} and {:?}", a, b);
}

#[test]
fn test_small_sizes() {
    // The build loop bound `len / 2` has to behave at sizes where
    // it rounds to nothing.
    let mut empty: [u32; 0] = [];
    sort(&mut empty);
    assert_eq!(empty, []);
    let mut one = [7];
    sort(&mut one);
    assert_eq!(one, [7]);
    let mut two = [9, 2];
    sort(&mut two);
    assert_eq!(two, [2, 9]);
    let mut three = [2, 3, 1];
    sort(&mut three);
    assert_eq!(three, [1, 2, 3]);
}

#[test]
fn test_all_three_element_orders() {
    for perm in &[[1, 2, 3], [1, 3, 2], [2, 1, 3], [2, 3, 1], [3, 1, 2], [3, 2, 1]] {
        let mut v = *perm;
        sort(&mut v);
        assert_eq!(v, [1, 2, 3], "input {:?}", perm);
    }
}
