// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Position Spans as Iterators
//!
//! Bridges a pair of positions `[first, last)` into the standard iterator
//! protocol. `Span<'a, P>` yields `ReferenceOf<'a, P>` for every position from
//! `first` up to, but excluding, `last`.
//!
//! ## Highlights
//!
//! - Implements `Iterator` for every [`Readable`] position.
//! - Supports `DoubleEndedIterator` when the position is bidirectional, which
//!   walks `last` backwards.
//! - Implements `FusedIterator`: once `first == last` it stays that way.
//! - Reports an exact `size_hint` and implements `ExactSizeIterator` for
//!   random-access positions; other categories only know whether the span
//!   is empty. The choice is made by [`SizeHintStrategy`] on the tag.
//! - Clonable only when the yielded references are `Copy`. A span over
//!   `*mut T` hands out `&mut T`, and two copies of it would alias them:
//!
//! ```rust,compile_fail
//! use stepwise::utils::iter::Span;
//!
//! let mut data = [1, 2, 3];
//! let first = data.as_mut_ptr();
//! // SAFETY: `[first, first + 3)` covers `data`.
//! let span = unsafe { Span::new(first, first.wrapping_add(3)) };
//! let copy = span.clone();
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use stepwise::reverse::ReversePosition;
//! use stepwise::utils::iter::Span;
//!
//! let data = [1, 2, 3];
//! let first = data.as_ptr();
//! let last = first.wrapping_add(data.len());
//!
//! // SAFETY: `[first, last)` covers `data`, which outlives the span.
//! let forward = unsafe { Span::new(first, last) };
//! assert_eq!(forward.copied().collect::<Vec<_>>(), vec![1, 2, 3]);
//!
//! // SAFETY: as above, traversed in reverse.
//! let backward = unsafe { Span::new(ReversePosition::new(last), ReversePosition::new(first)) };
//! assert_eq!(backward.copied().collect::<Vec<_>>(), vec![3, 2, 1]);
//! ```

use crate::category::{BidirectionalTag, Category, ForwardTag, InputTag, RandomAccessTag};
use crate::position::{
    BidirectionalPosition, CategoryOf, DifferenceOf, Position, RandomAccessPosition, Readable,
    ReferenceOf, TraitRecord,
};
use num_traits::ToPrimitive;
use std::iter::FusedIterator;

/// A capability tag's way of bounding the number of positions left in
/// `[first, last)`.
pub trait SizeHintStrategy<P: Position>: Category {
    /// Returns the `(lower, upper)` bounds of the remaining length.
    fn size_hint(self, first: &P, last: &P) -> (usize, Option<usize>);
}

macro_rules! impl_stepwise_size_hint {
    ($($tag:ty),* $(,)?) => {
        $(
            impl<P: Position> SizeHintStrategy<P> for $tag {
                #[inline]
                fn size_hint(self, first: &P, last: &P) -> (usize, Option<usize>) {
                    if first == last { (0, Some(0)) } else { (1, None) }
                }
            }
        )*
    };
}

impl_stepwise_size_hint!(InputTag, ForwardTag, BidirectionalTag);

impl<P: RandomAccessPosition> SizeHintStrategy<P> for RandomAccessTag {
    #[inline]
    fn size_hint(self, first: &P, last: &P) -> (usize, Option<usize>) {
        let remaining = <DifferenceOf<P> as ToPrimitive>::to_usize(&last.distance_from(first))
            .unwrap_or(0);
        (remaining, Some(remaining))
    }
}

/// The positions `[first, last)` as an iterator over their elements.
pub struct Span<'a, P> {
    first: P,
    last: P,
    _marker: std::marker::PhantomData<&'a ()>,
}

impl<'a, P> Span<'a, P> {
    /// Creates a span from `first` up to, but excluding, `last`.
    ///
    /// # Safety
    ///
    /// `last` must be reachable from `first` by forward steps, every position
    /// in `[first, last)` must denote a live element for the whole of `'a`,
    /// and, for positions that dereference to mutable references, no other
    /// reference to those elements may be used while the span's items are.
    #[inline]
    pub const unsafe fn new(first: P, last: P) -> Self {
        Self {
            first,
            last,
            _marker: std::marker::PhantomData,
        }
    }

    /// Returns the remaining bounds `(first, last)`.
    #[inline]
    pub fn bounds(&self) -> (&P, &P) {
        (&self.first, &self.last)
    }

    /// Consumes the span, returning the remaining bounds.
    #[inline]
    pub fn into_bounds(self) -> (P, P) {
        (self.first, self.last)
    }
}

impl<'a, P: PartialEq> Span<'a, P> {
    /// Returns `true` if no elements remain.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.first == self.last
    }
}

/// Cloning duplicates the remaining range, so both copies yield the same
/// elements. Restricted to `Copy` items, which excludes `&mut T`.
impl<'a, P> Clone for Span<'a, P>
where
    P: Readable + 'a,
    ReferenceOf<'a, P>: Copy,
{
    #[inline]
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            last: self.last.clone(),
            _marker: std::marker::PhantomData,
        }
    }
}

impl<'a, P> Iterator for Span<'a, P>
where
    P: Readable + 'a,
    CategoryOf<P>: SizeHintStrategy<P>,
{
    type Item = ReferenceOf<'a, P>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.first == self.last {
            return None;
        }
        // SAFETY: `first` lies in `[first, last)`, so by the contract of
        // `Span::new` it denotes an element that is live for `'a`.
        let item = unsafe { self.first.get() };
        self.first.increment();
        Some(item)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        <CategoryOf<P> as SizeHintStrategy<P>>::size_hint(
            Default::default(),
            &self.first,
            &self.last,
        )
    }
}

impl<'a, P> DoubleEndedIterator for Span<'a, P>
where
    P: Readable + BidirectionalPosition + 'a,
    CategoryOf<P>: SizeHintStrategy<P>,
{
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.first == self.last {
            return None;
        }
        self.last.decrement();
        // SAFETY: after the decrement `last` lies in `[first, last)`.
        Some(unsafe { self.last.get() })
    }
}

impl<'a, P> ExactSizeIterator for Span<'a, P>
where
    P: Readable + RandomAccessPosition + 'a,
    P::Traits: TraitRecord<Category = RandomAccessTag>,
    CategoryOf<P>: SizeHintStrategy<P>,
{
}

impl<'a, P> FusedIterator for Span<'a, P>
where
    P: Readable + 'a,
    CategoryOf<P>: SizeHintStrategy<P>,
{
}

impl<'a, P> std::fmt::Debug for Span<'a, P>
where
    P: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Span")
            .field("first", &self.first)
            .field("last", &self.last)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::SliceCursor;
    use crate::position::restricted::Restricted;

    fn span_of(data: &[i32]) -> Span<'_, *const i32> {
        let first = data.as_ptr();
        // SAFETY: `[first, first + len)` covers `data`.
        unsafe { Span::new(first, first.wrapping_add(data.len())) }
    }

    #[test]
    fn test_span_forward() {
        let data = [10, 20, 30];
        let mut span = span_of(&data);
        assert_eq!(span.next(), Some(&10));
        assert_eq!(span.next(), Some(&20));
        assert_eq!(span.next(), Some(&30));
        assert_eq!(span.next(), None);
    }

    #[test]
    fn test_span_empty() {
        let data: [i32; 0] = [];
        let mut span = span_of(&data);
        assert!(span.is_empty());
        assert_eq!(span.next(), None);
        assert_eq!(span.next_back(), None);
    }

    #[test]
    fn test_span_from_both_ends() {
        let data = [1, 2, 3, 4];
        let mut span = span_of(&data);
        assert_eq!(span.next(), Some(&1));
        assert_eq!(span.next_back(), Some(&4));
        assert_eq!(span.next_back(), Some(&3));
        assert_eq!(span.next(), Some(&2));
        assert_eq!(span.next(), None);
        assert_eq!(span.next_back(), None);
    }

    #[test]
    fn test_fused_iterator() {
        let data = [1];
        let mut span = span_of(&data);

        assert_eq!(span.next(), Some(&1));
        assert_eq!(span.next(), None);
        assert_eq!(span.next(), None);

        fn assert_fused<I: FusedIterator>(_: I) {}
        assert_fused(span);
    }

    #[test]
    fn test_clone() {
        let data = [1, 2, 3];
        let span = span_of(&data);
        let mut cloned = span.clone();
        assert_eq!(cloned.next(), Some(&1));
        assert_eq!(span.count(), 3);
        assert_eq!(cloned.count(), 2);
    }

    #[test]
    fn test_clone_over_cursors_shares_elements() {
        let data = [7u8, 8];
        let span = Span::from_slice(&data);
        let cloned = span.clone();
        let a: Vec<&u8> = span.collect();
        let b: Vec<&u8> = cloned.collect();
        assert_eq!(a, b);
        assert!(std::ptr::eq(a[0], b[0]));
    }

    #[test]
    fn test_exact_size_for_random_access() {
        let data = [1, 2, 3, 4];
        let mut span = span_of(&data);
        assert_eq!(span.size_hint(), (4, Some(4)));
        assert_eq!(span.len(), 4);
        span.next();
        span.next_back();
        assert_eq!(span.len(), 2);
        span.next();
        span.next();
        assert_eq!(span.size_hint(), (0, Some(0)));

        let cursors = Span::from_slice(&data[1..]);
        assert_eq!(cursors.len(), 3);
    }

    #[test]
    fn test_exact_size_for_reversed_span() {
        use crate::reverse::ReversePosition;

        let data = [1, 2, 3];
        let first = data.as_ptr();
        let last = first.wrapping_add(3);
        // SAFETY: the reversed range covers `data`.
        let mut span = unsafe { Span::new(ReversePosition::new(last), ReversePosition::new(first)) };
        assert_eq!(span.len(), 3);
        assert_eq!(span.next(), Some(&3));
        assert_eq!(span.len(), 2);
    }

    #[test]
    fn test_stepwise_size_hint_only_knows_emptiness() {
        let data = [1, 2, 3];
        let first = Restricted::<ForwardTag, _>::new(data.as_ptr());
        let last = Restricted::<ForwardTag, _>::new(data.as_ptr().wrapping_add(3));
        // SAFETY: `[first, last)` covers `data`.
        let mut span = unsafe { Span::new(first, last) };
        assert_eq!(span.size_hint(), (1, None));
        span.by_ref().for_each(drop);
        assert_eq!(span.size_hint(), (0, Some(0)));
    }

    #[test]
    fn test_mutable_span() {
        let mut data = [1, 2, 3];
        let first = data.as_mut_ptr();
        let last = first.wrapping_add(3);
        // SAFETY: `[first, last)` covers `data`; `data` is not touched while
        // the span is in use.
        let span = unsafe { Span::new(first, last) };
        for value in span {
            *value *= 10;
        }
        assert_eq!(data, [10, 20, 30]);
    }

    #[test]
    fn test_span_over_restricted_positions() {
        let data = [5, 6, 7];
        let first = Restricted::<InputTag, _>::new(data.as_ptr());
        let last = Restricted::<InputTag, _>::new(data.as_ptr().wrapping_add(3));
        // SAFETY: `[first, last)` covers `data`.
        let span = unsafe { Span::new(first, last) };
        assert_eq!(span.copied().sum::<i32>(), 18);

        // A forward-only span cannot be reversed, but still iterates.
        let data = [1u8, 2];
        let first = Restricted::<ForwardTag, _>::new(SliceCursor::begin(&data));
        let last = Restricted::<ForwardTag, _>::new(SliceCursor::end(&data));
        // SAFETY: `[first, last)` covers `data`.
        let span = unsafe { Span::new(first, last) };
        assert_eq!(span.into_bounds().0.inner().index(), 0);
    }

    #[test]
    fn test_composition() {
        let data = [1, 2, 3];
        let result: Vec<i32> = span_of(&data).map(|x| x * 2).collect();
        assert_eq!(result, [2, 4, 6]);
    }
}
