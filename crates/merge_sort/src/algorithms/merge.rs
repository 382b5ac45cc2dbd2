use tracing::trace;

use super::le_i64;

/// Merges the ascending runs `[left, mid]` and `[mid + 1, right]` of `data`
/// into a single ascending run over `[left, right]`.
///
/// Requires `left <= mid < right < data.len()`. Equal keys are taken from the
/// left run first, so the merge is stable.
pub fn merge(data: &mut [i64], left: usize, mid: usize, right: usize) {
    merge_by(data, left, mid, right, &le_i64);
}

pub(crate) fn merge_by<T, F>(data: &mut [T], left: usize, mid: usize, right: usize, le: &F)
where
    T: Copy,
    F: Fn(&T, &T) -> bool,
{
    debug_assert!(left <= mid && mid < right && right < data.len());
    trace!(left, mid, right, "merge");

    let mut temp = Vec::with_capacity(right - left + 1);
    let mut i = left;
    let mut j = mid + 1;

    while i <= mid && j <= right {
        if le(&data[i], &data[j]) {
            temp.push(data[i]);
            i += 1;
        } else {
            temp.push(data[j]);
            j += 1;
        }
    }

    // At most one of these is non-empty.
    temp.extend_from_slice(&data[i..=mid]);
    temp.extend_from_slice(&data[j..=right]);

    debug_assert_eq!(temp.len(), right - left + 1);
    data[left..=right].copy_from_slice(&temp);
}
