pub(crate) mod decompose;
pub(crate) mod explicit_stack;
pub(crate) mod merge;

#[inline]
pub(crate) fn le_i64(a: &i64, b: &i64) -> bool {
    a <= b
}
