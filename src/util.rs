//! Bounds checks shared by the constructors.

use std::ops::Range;


pub(crate) trait RangeExt: PartialOrd + Sized {

    /// Whether the value lies in the half-open range.
    fn is_within(&self, range: Range<Self>) -> bool {
        range.contains(self)
    }
}

impl<T: PartialOrd> RangeExt for T {}


#[cfg(test)]
mod test {
    use super::RangeExt;

    #[test]
    fn half_open() {
        assert!(0.is_within(0..24));
        assert!(23.is_within(0..24));
        assert!(!24.is_within(0..24));
        assert!(!(-1).is_within(0..24));
    }
}
