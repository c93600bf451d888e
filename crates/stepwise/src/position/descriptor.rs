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

//! # Position Descriptors
//!
//! Ready-made trait records for hand-built positions. A position type names
//! one of these as its [`Position::Traits`](super::Position::Traits) instead
//! of writing out a record of its own.
//!
//! [`Descriptor`] binds all five associated types explicitly. The aliases
//! cover the common shapes: an element type `T`, a difference type that
//! defaults to `isize`, `*const T` as pointer and `&'a T` as reference.
//!
//! ```rust
//! use stepwise::category::ForwardTag;
//! use stepwise::position::descriptor::ForwardDescriptor;
//! use stepwise::position::{CategoryOf, Position, ValueOf};
//!
//! /// Walks a chain of boxed nodes.
//! #[derive(Clone, PartialEq)]
//! struct Link<'a>(Option<&'a Node>);
//!
//! struct Node {
//!     value: u32,
//!     next: Option<Box<Node>>,
//! }
//!
//! impl PartialEq for Node {
//!     fn eq(&self, other: &Self) -> bool {
//!         std::ptr::eq(self, other)
//!     }
//! }
//!
//! impl<'a> Position for Link<'a> {
//!     type Traits = ForwardDescriptor<'a, u32>;
//!
//!     fn increment(&mut self) {
//!         self.0 = self.0.and_then(|node| node.next.as_deref());
//!     }
//! }
//!
//! fn tag_of<P: Position>() -> CategoryOf<P> {
//!     Default::default()
//! }
//!
//! assert_eq!(tag_of::<Link<'static>>(), ForwardTag);
//! let _: Option<ValueOf<Link<'static>>> = Some(7u32);
//! ```

use super::TraitRecord;
use crate::{
    category::{BidirectionalTag, Category, ForwardTag, InputTag, OutputTag, RandomAccessTag},
    num::Difference,
};

/// A trait record with every associated type given explicitly.
///
/// - `C`: capability tag.
/// - `T`: element type.
/// - `D`: difference type.
/// - `P`: pointer type.
/// - `R`: reference type. It does not depend on the lifetime requested from
///   [`TraitRecord::Reference`]; positions that borrow their sequence carry
///   that lifetime in `R` itself (for example `&'s T`).
///
/// The type is never instantiated.
pub struct Descriptor<C, T: ?Sized, D, P, R>(std::marker::PhantomData<fn() -> (C, D, P, R, *const T)>);

impl<C, T, D, P, R> TraitRecord for Descriptor<C, T, D, P, R>
where
    C: Category,
    T: ?Sized,
    D: Difference,
{
    type Category = C;
    type Value = T;
    type Difference = D;
    type Pointer = P;
    type Reference<'a>
        = R
    where
        Self: 'a;
}

/// Record of a single-pass, read-only position.
pub type InputDescriptor<'a, T, D = isize> = Descriptor<InputTag, T, D, *const T, &'a T>;

/// Record of a multi-pass, forward-only position.
pub type ForwardDescriptor<'a, T, D = isize> = Descriptor<ForwardTag, T, D, *const T, &'a T>;

/// Record of a position that steps in both directions.
pub type BidirectionalDescriptor<'a, T, D = isize> =
    Descriptor<BidirectionalTag, T, D, *const T, &'a T>;

/// Record of a position with constant-time jumps.
pub type RandomAccessDescriptor<'a, T, D = isize> =
    Descriptor<RandomAccessTag, T, D, *const T, &'a T>;

/// Record of a write-only position.
///
/// Output positions have no readable element, so value, pointer and
/// reference are `()`. They still count steps with `isize`.
pub type OutputDescriptor = Descriptor<OutputTag, (), isize, (), ()>;
