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

//! # Reversed Traversal
//!
//! [`ReversePosition<I>`] walks an underlying bidirectional position `I` the
//! other way round. It stores one underlying position, `current`, and always
//! denotes the element *immediately before* `current` in the underlying
//! order:
//!
//! ```text
//! underlying:   [ a | b | c | d ]  end
//!                               ^   ^
//!                               |   current
//!                               element denoted by ReversePosition::new(end)
//! ```
//!
//! Stepping the reversed position forward steps `current` backward and vice
//! versa, so `[ReversePosition::new(last), ReversePosition::new(first))`
//! visits `[first, last)` from back to front. Dereferencing works on a copy
//! of `current` and never moves the stored position.
//!
//! The reversed position reports the trait record of `I` unchanged and
//! implements the same position traits as `I` (bidirectional at least), so it
//! composes with [`crate::algorithm`] and with itself.
//!
//! ```rust
//! use stepwise::position::Readable;
//! use stepwise::reverse::ReversePosition;
//!
//! let data = [10, 20, 30, 40];
//! let mut r = ReversePosition::new(data.as_ptr().wrapping_add(4));
//!
//! // SAFETY: `r` denotes `data[3]`.
//! assert_eq!(unsafe { *r.get() }, 40);
//! r.pre_increment();
//! // SAFETY: `r` denotes `data[2]`.
//! assert_eq!(unsafe { *r.get() }, 30);
//! ```
//!
//! ## Rejected at compile time
//!
//! Positions that cannot step backwards cannot be reversed, and offsets need a
//! random-access underlying position:
//!
//! ```rust,compile_fail
//! use stepwise::category::ForwardTag;
//! use stepwise::position::Position;
//! use stepwise::position::restricted::Restricted;
//! use stepwise::reverse::ReversePosition;
//!
//! fn step<P: Position>(mut p: P) -> P {
//!     p.increment();
//!     p
//! }
//!
//! let data = [1, 2, 3];
//! let r = ReversePosition::new(Restricted::<ForwardTag, _>::new(data.as_ptr()));
//! let _ = step(r);
//! ```
//!
//! ```rust,compile_fail
//! use stepwise::category::BidirectionalTag;
//! use stepwise::position::restricted::Restricted;
//! use stepwise::reverse::ReversePosition;
//!
//! let data = [1, 2, 3];
//! let r = ReversePosition::new(Restricted::<BidirectionalTag, _>::new(data.as_ptr()));
//! let _ = r.offset(1);
//! ```
//!
//! ```rust,compile_fail
//! use stepwise::category::BidirectionalTag;
//! use stepwise::position::restricted::Restricted;
//! use stepwise::reverse::ReversePosition;
//!
//! let data = [1, 2, 3];
//! let r = ReversePosition::new(Restricted::<BidirectionalTag, _>::new(data.as_ptr()));
//! let _ = r + 1;
//! ```

use crate::position::{
    BidirectionalPosition, DifferenceOf, PointerOf, Position, RandomAccessPosition, Readable,
    ReferenceOf,
};

/// A position that traverses its underlying position in reverse.
#[derive(Clone, Copy, Default, Hash)]
pub struct ReversePosition<I> {
    current: I,
}

impl<I> ReversePosition<I> {
    /// Creates a reversed position denoting the element just before `base`.
    #[inline(always)]
    pub const fn new(base: I) -> Self {
        Self { current: base }
    }

    /// Returns the stored underlying position.
    ///
    /// This is one step ahead, in underlying order, of the element the
    /// reversed position denotes.
    #[inline]
    pub fn base(&self) -> I
    where
        I: Clone,
    {
        self.current.clone()
    }

    /// Consumes the reversed position, returning the underlying one.
    #[inline(always)]
    pub fn into_base(self) -> I {
        self.current
    }
}

impl<I: BidirectionalPosition> ReversePosition<I> {
    /// Moves one step forward, that is, one step backward in the underlying
    /// order. Returns `self` for chaining.
    #[inline]
    pub fn pre_increment(&mut self) -> &mut Self {
        self.current.decrement();
        self
    }

    /// Moves one step forward and returns the position as it was before.
    #[inline]
    pub fn post_increment(&mut self) -> Self {
        let snapshot = self.clone();
        self.current.decrement();
        snapshot
    }

    /// Moves one step backward, that is, one step forward in the underlying
    /// order. Returns `self` for chaining.
    #[inline]
    pub fn pre_decrement(&mut self) -> &mut Self {
        self.current.increment();
        self
    }

    /// Moves one step backward and returns the position as it was before.
    #[inline]
    pub fn post_decrement(&mut self) -> Self {
        let snapshot = self.clone();
        self.current.increment();
        snapshot
    }
}

impl<I: RandomAccessPosition> ReversePosition<I> {
    /// Returns a new position `n` steps ahead. `self` is unchanged.
    #[inline]
    pub fn offset(&self, n: DifferenceOf<I>) -> Self {
        let mut current = self.current.clone();
        current.jump_by(-n);
        Self::new(current)
    }

    /// Returns a new position `n` steps behind. `self` is unchanged.
    #[inline]
    pub fn offset_back(&self, n: DifferenceOf<I>) -> Self {
        let mut current = self.current.clone();
        current.jump_by(n);
        Self::new(current)
    }

    /// Moves `n` steps ahead in place. Returns `self` for chaining.
    #[inline]
    pub fn offset_in_place(&mut self, n: DifferenceOf<I>) -> &mut Self {
        self.current.jump_by(-n);
        self
    }

    /// Moves `n` steps behind in place. Returns `self` for chaining.
    #[inline]
    pub fn offset_back_in_place(&mut self, n: DifferenceOf<I>) -> &mut Self {
        self.current.jump_by(n);
        self
    }

    /// Dereferences the position `n` steps ahead, `*(self + n)`.
    ///
    /// # Safety
    ///
    /// Same contract as [`Readable::get`] for the position `self.offset(n)`.
    #[inline]
    pub unsafe fn at<'a>(&self, n: DifferenceOf<I>) -> ReferenceOf<'a, I>
    where
        I: Readable + 'a,
    {
        // SAFETY: forwarded to the caller.
        unsafe { self.offset(n).get() }
    }
}

impl<I> From<I> for ReversePosition<I> {
    #[inline(always)]
    fn from(base: I) -> Self {
        Self::new(base)
    }
}

impl<I: PartialEq> PartialEq for ReversePosition<I> {
    #[inline(always)]
    fn eq(&self, other: &Self) -> bool {
        self.current == other.current
    }
}

impl<I: Eq> Eq for ReversePosition<I> {}

/// Orders reversed positions by their traversal order, which is the opposite
/// of the order of their underlying positions.
impl<I: PartialOrd> PartialOrd for ReversePosition<I> {
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        other.current.partial_cmp(&self.current)
    }
}

impl<I: Ord> Ord for ReversePosition<I> {
    #[inline(always)]
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other.current.cmp(&self.current)
    }
}

impl<I: BidirectionalPosition> Position for ReversePosition<I> {
    type Traits = I::Traits;

    #[inline(always)]
    fn increment(&mut self) {
        self.current.decrement();
    }
}

impl<I: BidirectionalPosition> BidirectionalPosition for ReversePosition<I> {
    #[inline(always)]
    fn decrement(&mut self) {
        self.current.increment();
    }
}

impl<I: RandomAccessPosition> RandomAccessPosition for ReversePosition<I> {
    #[inline(always)]
    fn jump_by(&mut self, n: DifferenceOf<Self>) {
        self.current.jump_by(-n);
    }

    #[inline(always)]
    fn distance_from(&self, origin: &Self) -> DifferenceOf<Self> {
        origin.current.distance_from(&self.current)
    }
}

impl<I> Readable for ReversePosition<I>
where
    I: BidirectionalPosition + Readable,
{
    /// Dereferences the element just before the stored position.
    ///
    /// # Safety
    ///
    /// The stored position must have a predecessor that satisfies the
    /// contract of [`Readable::get`] for `I`.
    #[inline]
    unsafe fn get<'a>(&self) -> ReferenceOf<'a, Self>
    where
        Self: 'a,
    {
        let mut previous = self.current.clone();
        previous.decrement();
        // SAFETY: `previous` is the element this position denotes; the
        // caller guarantees it is live.
        unsafe { previous.get() }
    }

    #[inline]
    fn address(&self) -> PointerOf<Self> {
        let mut previous = self.current.clone();
        previous.decrement();
        previous.address()
    }
}

impl<I: RandomAccessPosition> std::ops::Add<DifferenceOf<I>> for ReversePosition<I> {
    type Output = Self;

    #[inline(always)]
    fn add(self, n: DifferenceOf<I>) -> Self {
        self.offset(n)
    }
}

impl<I: RandomAccessPosition> std::ops::Sub<DifferenceOf<I>> for ReversePosition<I> {
    type Output = Self;

    #[inline(always)]
    fn sub(self, n: DifferenceOf<I>) -> Self {
        self.offset_back(n)
    }
}

impl<I: RandomAccessPosition> std::ops::AddAssign<DifferenceOf<I>> for ReversePosition<I> {
    #[inline(always)]
    fn add_assign(&mut self, n: DifferenceOf<I>) {
        self.offset_in_place(n);
    }
}

impl<I: RandomAccessPosition> std::ops::SubAssign<DifferenceOf<I>> for ReversePosition<I> {
    #[inline(always)]
    fn sub_assign(&mut self, n: DifferenceOf<I>) {
        self.offset_back_in_place(n);
    }
}

impl<I: std::fmt::Debug> std::fmt::Debug for ReversePosition<I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ReversePosition({:?})", self.current)
    }
}

impl<I: std::fmt::Display> std::fmt::Display for ReversePosition<I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "rev({})", self.current)
    }
}
