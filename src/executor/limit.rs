//! Result limiting

use std::iter::FusedIterator;

/// Caps a stream at a maximum number of items
///
/// Never pulls the item after the last one it yields.
#[derive(Debug, Clone)]
pub struct Limit<I> {
    inner: I,
    remaining: Option<usize>,
}

/// Wraps `iter` so that it yields at most `n` items.
///
/// `None` and `Some(0)` both mean "no limit".
pub fn limit<I: IntoIterator>(iter: I, n: Option<usize>) -> Limit<I::IntoIter> {
    Limit {
        inner: iter.into_iter(),
        remaining: n.filter(|&n| n > 0),
    }
}

impl<I> Limit<I> {
    /// True if this limiter caps its stream
    pub fn is_bounded(&self) -> bool {
        self.remaining.is_some()
    }
}

impl<I: Iterator> Iterator for Limit<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        match self.remaining {
            None => self.inner.next(),
            Some(0) => None,
            Some(ref mut left) => {
                *left -= 1;
                self.inner.next()
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (low, high) = self.inner.size_hint();
        match self.remaining {
            None => (low, high),
            Some(left) => (
                low.min(left),
                Some(high.map_or(left, |high| high.min(left))),
            ),
        }
    }
}

impl<I: FusedIterator> FusedIterator for Limit<I> {}
