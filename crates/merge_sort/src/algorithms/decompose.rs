use crate::Range;

use super::le_i64;
use super::merge::merge_by;

/// Sorts `data[range.start..=range.end]` by halving the range until each part
/// holds at most one element, then merging the halves on the way back up.
pub fn decompose(data: &mut [i64], range: Range) {
    decompose_by(data, range, &le_i64);
}

pub(crate) fn decompose_by<T, F>(data: &mut [T], range: Range, le: &F)
where
    T: Copy,
    F: Fn(&T, &T) -> bool,
{
    if range.is_trivial() {
        return;
    }

    let (lo, hi) = range.split();
    decompose_by(data, lo, le);
    decompose_by(data, hi, le);
    merge_by(data, range.start, lo.end, range.end, le);
}
