/// Inclusive index range `[start, end]` into a sequence.
///
/// `start >= end` covers at most one element and is already sorted;
/// `start > end` is empty.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Range {
    pub start: usize,
    pub end: usize,
}

impl Range {
    #[inline]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// `[0, len - 1]`, or `None` for an empty sequence.
    #[inline]
    pub fn full(len: usize) -> Option<Self> {
        len.checked_sub(1).map(|end| Self::new(0, end))
    }

    #[inline]
    pub fn len(&self) -> usize {
        if self.start > self.end {
            0
        } else {
            self.end - self.start + 1
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    #[inline]
    pub fn is_trivial(&self) -> bool {
        self.start >= self.end
    }

    /// `floor((start + end) / 2)` without overflowing.
    #[inline]
    pub fn mid(&self) -> usize {
        debug_assert!(self.start <= self.end);
        self.start + ((self.end - self.start) >> 1)
    }

    #[inline]
    pub fn split(&self) -> (Self, Self) {
        debug_assert!(!self.is_trivial());
        let mid = self.mid();
        (Self::new(self.start, mid), Self::new(mid + 1, self.end))
    }
}
