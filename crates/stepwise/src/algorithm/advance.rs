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

//! # Moving Positions
//!
//! `advance(&mut position, n)` moves a position by `n` steps. The
//! implementation is chosen by the capability tag of the position type:
//!
//! - `InputTag`, `ForwardTag`: `n` single steps forward; `n` must not be
//!   negative.
//! - `BidirectionalTag`: `n` single steps forward, or `|n|` single steps
//!   backward for negative `n`.
//! - `RandomAccessTag`: one jump by `n`.

use crate::category::{BidirectionalTag, Category, ForwardTag, InputTag, RandomAccessTag};
use crate::num::constants::{PlusOne, Zero};
use crate::position::{
    BidirectionalPosition, CategoryOf, DifferenceOf, Position, RandomAccessPosition, category,
};

/// A capability tag's way of moving a position by a number of steps.
///
/// Implemented by every readable tag. `OutputTag` has no implementation.
pub trait AdvanceStrategy<P: Position>: Category {
    /// Moves `position` by `n` steps.
    fn advance(self, position: &mut P, n: DifferenceOf<P>);
}

macro_rules! impl_forward_only_advance {
    ($($tag:ty),* $(,)?) => {
        $(
            impl<P: Position> AdvanceStrategy<P> for $tag {
                #[inline]
                fn advance(self, position: &mut P, mut n: DifferenceOf<P>) {
                    debug_assert!(
                        n >= <DifferenceOf<P> as Zero>::ZERO,
                        "called `advance` with a negative count on a position that cannot step backwards"
                    );
                    while n > <DifferenceOf<P> as Zero>::ZERO {
                        position.increment();
                        n = n - <DifferenceOf<P> as PlusOne>::PLUS_ONE;
                    }
                }
            }
        )*
    };
}

impl_forward_only_advance!(InputTag, ForwardTag);

impl<P: BidirectionalPosition> AdvanceStrategy<P> for BidirectionalTag {
    #[inline]
    fn advance(self, position: &mut P, mut n: DifferenceOf<P>) {
        let zero = <DifferenceOf<P> as Zero>::ZERO;
        let one = <DifferenceOf<P> as PlusOne>::PLUS_ONE;
        if n >= zero {
            while n > zero {
                position.increment();
                n = n - one;
            }
        } else {
            while n < zero {
                position.decrement();
                n = n + one;
            }
        }
    }
}

impl<P: RandomAccessPosition> AdvanceStrategy<P> for RandomAccessTag {
    #[inline(always)]
    fn advance(self, position: &mut P, n: DifferenceOf<P>) {
        position.jump_by(n);
    }
}

/// Moves `position` by `n` steps.
///
/// Negative `n` moves backwards and requires a bidirectional or random-access
/// position. For input and forward positions a negative `n` trips a debug
/// assertion and otherwise leaves the position unchanged.
///
/// # Examples
///
/// ```rust
/// # use stepwise::algorithm::advance;
/// # use stepwise::position::Readable;
/// let data = [10, 20, 30, 40];
/// let mut p = data.as_ptr();
///
/// advance(&mut p, 2);
/// // SAFETY: `p` points at `data[2]`.
/// assert_eq!(unsafe { *p.get() }, 30);
///
/// advance(&mut p, -1);
/// // SAFETY: `p` points at `data[1]`.
/// assert_eq!(unsafe { *p.get() }, 20);
/// ```
#[inline]
pub fn advance<P>(position: &mut P, n: DifferenceOf<P>)
where
    P: Position,
    CategoryOf<P>: AdvanceStrategy<P>,
{
    category(position).advance(position, n);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::SliceCursor;
    use crate::position::restricted::Restricted;

    #[test]
    fn test_advance_matches_manual_increments() {
        let data = [0u16; 12];
        for n in 0..=12isize {
            let mut manual = data.as_ptr();
            for _ in 0..n {
                manual.increment();
            }

            let mut fast = data.as_ptr();
            advance(&mut fast, n);
            assert_eq!(fast, manual);

            let mut slow = Restricted::<InputTag, _>::new(data.as_ptr());
            advance(&mut slow, n);
            assert_eq!(slow.into_inner(), manual);
        }
    }

    #[test]
    fn test_advance_zero_is_identity() {
        let data = [1, 2];
        let mut p = SliceCursor::begin(&data);
        advance(&mut p, 0);
        assert_eq!(p, SliceCursor::begin(&data));

        let mut f = Restricted::<ForwardTag, _>::new(p);
        advance(&mut f, 0);
        assert_eq!(f.into_inner(), p);
    }

    #[test]
    fn test_bidirectional_advance_both_ways() {
        let data = [0u8; 10];
        let start = Restricted::<BidirectionalTag, _>::new(SliceCursor::new(&data, 5));

        let mut p = start;
        advance(&mut p, 3);
        assert_eq!(p.inner().index(), 8);
        advance(&mut p, -7);
        assert_eq!(p.inner().index(), 1);
        advance(&mut p, 4);
        assert_eq!(p, start);
    }

    #[test]
    fn test_random_access_round_trip() {
        let data = [0u32; 20];
        let start = SliceCursor::new(&data, 10);
        for n in -10..=10isize {
            let mut p = start;
            advance(&mut p, n);
            assert_eq!(p.index() as isize, 10 + n);
            advance(&mut p, -n);
            assert_eq!(p, start);
        }
    }

    #[test]
    fn test_strategies_agree_for_non_negative_counts() {
        let data = [0i64; 8];
        for n in 0..8isize {
            let mut a = data.as_ptr();
            let mut b = data.as_ptr();
            let mut c = data.as_ptr();
            RandomAccessTag.advance(&mut a, n);
            BidirectionalTag.advance(&mut b, n);
            ForwardTag.advance(&mut c, n);
            assert_eq!(a, b);
            assert_eq!(b, c);
        }
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "negative count")]
    fn test_forward_only_advance_rejects_negative_counts() {
        let data = [1, 2, 3];
        let mut p = Restricted::<ForwardTag, _>::new(data.as_ptr().wrapping_add(2));
        advance(&mut p, -1);
    }
}
