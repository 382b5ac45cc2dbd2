use crate::Range;

use super::le_i64;
use super::merge::merge_by;

#[derive(Clone, Copy, Debug)]
enum Frame {
    Split(Range),
    Merge(Range),
}

/// Same traversal as [`decompose`](super::decompose::decompose), driven by an
/// explicit frame stack instead of the call stack.
///
/// Merges are issued in exactly the recursive post-order, so the result and
/// its stability are identical.
pub fn decompose_with_stack(data: &mut [i64], range: Range) {
    decompose_with_stack_by(data, range, &le_i64);
}

pub(crate) fn decompose_with_stack_by<T, F>(data: &mut [T], range: Range, le: &F)
where
    T: Copy,
    F: Fn(&T, &T) -> bool,
{
    if range.is_trivial() {
        return;
    }

    let depth = usize::BITS as usize - range.len().leading_zeros() as usize;
    let mut stack = Vec::with_capacity(2 * depth + 2);
    stack.push(Frame::Split(range));

    while let Some(frame) = stack.pop() {
        match frame {
            Frame::Split(range) => {
                if range.is_trivial() {
                    continue;
                }
                let (lo, hi) = range.split();
                // Pushed in reverse: left half, then right half, then merge.
                stack.push(Frame::Merge(range));
                stack.push(Frame::Split(hi));
                stack.push(Frame::Split(lo));
            }
            Frame::Merge(range) => merge_by(data, range.start, range.mid(), range.end, le),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::decompose_with_stack_by;
    use crate::Range;
    use crate::algorithms::decompose::decompose_by;

    fn merge_trace(len: usize, explicit: bool) -> Vec<(i64, i64)> {
        let calls = RefCell::new(Vec::new());
        let le = |a: &i64, b: &i64| {
            calls.borrow_mut().push((*a, *b));
            a <= b
        };

        let mut data = (0..len as i64).rev().collect::<Vec<_>>();
        let range = Range::new(0, len - 1);
        if explicit {
            decompose_with_stack_by(&mut data, range, &le);
        } else {
            decompose_by(&mut data, range, &le);
        }
        assert_eq!(data, (0..len as i64).collect::<Vec<_>>());
        calls.into_inner()
    }

    #[test]
    fn comparisons_match_recursive_order() {
        for len in [2_usize, 3, 5, 8, 13, 64, 100] {
            assert_eq!(merge_trace(len, true), merge_trace(len, false), "len={len}");
        }
    }

    #[test]
    fn sorts_sub_range_only() {
        let mut data = vec![9, 8, 7, 6, 5, 4, 3];
        super::decompose_with_stack(&mut data, Range::new(1, 4));
        assert_eq!(data, vec![9, 5, 6, 7, 8, 4, 3]);
    }
}
