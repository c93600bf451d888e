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

//! # Counting Steps
//!
//! `distance(first, last)` counts the forward steps from `first` to `last`.
//! The implementation is chosen by the capability tag of the position type:
//! readable tags below random access walk the range one step at a time,
//! `RandomAccessTag` subtracts.

use crate::category::{BidirectionalTag, Category, ForwardTag, InputTag, RandomAccessTag};
use crate::num::constants::{PlusOne, Zero};
use crate::position::{CategoryOf, DifferenceOf, Position, RandomAccessPosition, category};

/// A capability tag's way of counting the steps between two positions.
///
/// Implemented by every readable tag. `OutputTag` has no implementation, so
/// output positions cannot be measured.
pub trait DistanceStrategy<P: Position>: Category {
    /// Adds the number of forward steps from `first` to `last` to `n`.
    fn distance_into(self, first: P, last: P, n: &mut DifferenceOf<P>);

    /// Returns the number of forward steps from `first` to `last`.
    #[inline]
    fn distance(self, first: P, last: P) -> DifferenceOf<P> {
        let mut n = <DifferenceOf<P> as Zero>::ZERO;
        self.distance_into(first, last, &mut n);
        n
    }
}

macro_rules! impl_stepwise_distance {
    ($($tag:ty),* $(,)?) => {
        $(
            impl<P: Position> DistanceStrategy<P> for $tag {
                #[inline]
                fn distance_into(self, mut first: P, last: P, n: &mut DifferenceOf<P>) {
                    while first != last {
                        first.increment();
                        *n = *n + <DifferenceOf<P> as PlusOne>::PLUS_ONE;
                    }
                }
            }
        )*
    };
}

impl_stepwise_distance!(InputTag, ForwardTag, BidirectionalTag);

impl<P: RandomAccessPosition> DistanceStrategy<P> for RandomAccessTag {
    #[inline(always)]
    fn distance_into(self, first: P, last: P, n: &mut DifferenceOf<P>) {
        *n = *n + last.distance_from(&first);
    }
}

/// Returns the number of forward steps from `first` to `last`.
///
/// Random-access positions compute the result in constant time, and it may be
/// negative when `last` precedes `first`. All other readable positions step
/// `first` until it equals `last`. For them `last` must be reachable from
/// `first`; otherwise the call does not terminate.
///
/// # Examples
///
/// ```rust
/// # use stepwise::algorithm::distance;
/// let data = [10, 20, 30, 40];
/// let first = data.as_ptr();
/// assert_eq!(distance(first, first.wrapping_add(3)), 3);
/// assert_eq!(distance(first.wrapping_add(3), first), -3);
/// ```
#[inline]
pub fn distance<P>(first: P, last: P) -> DifferenceOf<P>
where
    P: Position,
    CategoryOf<P>: DistanceStrategy<P>,
{
    category(&first).distance(first, last)
}

/// Adds the number of forward steps from `first` to `last` to `n`.
///
/// Same dispatch and preconditions as [`distance`]. Useful for keeping a
/// running total across several segments.
///
/// # Examples
///
/// ```rust
/// # use stepwise::algorithm::distance_into;
/// let data = [0u8; 10];
/// let p = data.as_ptr();
///
/// let mut total = 0isize;
/// distance_into(p, p.wrapping_add(4), &mut total);
/// distance_into(p.wrapping_add(6), p.wrapping_add(10), &mut total);
/// assert_eq!(total, 8);
/// ```
#[inline]
pub fn distance_into<P>(first: P, last: P, n: &mut DifferenceOf<P>)
where
    P: Position,
    CategoryOf<P>: DistanceStrategy<P>,
{
    category(&first).distance_into(first, last, n);
}
