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

//! # Restricted Views
//!
//! [`Restricted<C, P>`] presents a position `P` under a coarser capability tag
//! `C`. Everything else in the trait record is inherited from `P`. Operations
//! beyond what `C` promises are not exposed, so a random-access address viewed
//! as a forward position really is handled by the forward code paths.
//!
//! ```rust
//! use stepwise::algorithm::distance;
//! use stepwise::category::ForwardTag;
//! use stepwise::position::restricted::Restricted;
//!
//! let data = [1, 2, 3, 4, 5];
//! let first = data.as_ptr();
//! let last = first.wrapping_add(data.len());
//!
//! // Counted one step at a time instead of by subtraction.
//! let n = distance(
//!     Restricted::<ForwardTag, _>::new(first),
//!     Restricted::<ForwardTag, _>::new(last),
//! );
//! assert_eq!(n, 5);
//! ```

use super::{
    BidirectionalPosition, DifferenceOf, PointerOf, Position, RandomAccessPosition, Readable,
    ReferenceOf, TraitRecord,
};
use crate::category::{BidirectionalCategory, Category, RandomAccessCategory};

/// Trait record of `R` with its category replaced by `C`.
///
/// The type is never instantiated.
pub struct Retagged<C, R>(std::marker::PhantomData<fn() -> (C, R)>);

impl<C, R> TraitRecord for Retagged<C, R>
where
    C: Category,
    R: TraitRecord,
{
    type Category = C;
    type Value = R::Value;
    type Difference = R::Difference;
    type Pointer = R::Pointer;
    type Reference<'a>
        = R::Reference<'a>
    where
        Self: 'a;
}

/// A position viewed under capability tag `C`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Restricted<C, P> {
    inner: P,
    _tag: std::marker::PhantomData<C>,
}

impl<C, P> Restricted<C, P> {
    /// Wraps `inner`.
    #[inline(always)]
    pub const fn new(inner: P) -> Self {
        Self {
            inner,
            _tag: std::marker::PhantomData,
        }
    }

    /// Returns a reference to the wrapped position.
    #[inline(always)]
    pub const fn inner(&self) -> &P {
        &self.inner
    }

    /// Unwraps the position.
    #[inline(always)]
    pub fn into_inner(self) -> P {
        self.inner
    }
}

impl<C, P> Position for Restricted<C, P>
where
    C: Category,
    P: Position,
{
    type Traits = Retagged<C, P::Traits>;

    #[inline(always)]
    fn increment(&mut self) {
        self.inner.increment();
    }
}

impl<C, P> Readable for Restricted<C, P>
where
    C: Category,
    P: Readable,
{
    #[inline(always)]
    unsafe fn get<'a>(&self) -> ReferenceOf<'a, Self>
    where
        Self: 'a,
    {
        // SAFETY: forwarded; the caller upholds `P::get`'s contract.
        unsafe { self.inner.get() }
    }

    #[inline(always)]
    fn address(&self) -> PointerOf<Self> {
        self.inner.address()
    }
}

impl<C, P> BidirectionalPosition for Restricted<C, P>
where
    C: BidirectionalCategory,
    P: BidirectionalPosition,
{
    #[inline(always)]
    fn decrement(&mut self) {
        self.inner.decrement();
    }
}

impl<C, P> RandomAccessPosition for Restricted<C, P>
where
    C: RandomAccessCategory,
    P: RandomAccessPosition,
{
    #[inline(always)]
    fn jump_by(&mut self, n: DifferenceOf<Self>) {
        self.inner.jump_by(n);
    }

    #[inline(always)]
    fn distance_from(&self, origin: &Self) -> DifferenceOf<Self> {
        self.inner.distance_from(&origin.inner)
    }
}

impl<C, P> std::fmt::Debug for Restricted<C, P>
where
    C: Category,
    P: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Restricted<{}>({:?})", C::NAME, self.inner)
    }
}
