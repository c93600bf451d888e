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

//! # Positions and Their Trait Records
//!
//! A *position* denotes a location within a conceptual sequence. This module
//! describes, at the type level, what a position is able to do.
//!
//! ## Trait records
//!
//! Every position resolves to a [`TraitRecord`], the quintuple of associated
//! types algorithms are written against:
//!
//! - `Category`: the capability tag (see [`crate::category`]).
//! - `Value`: the element type.
//! - `Difference`: the signed step count (see [`crate::num::Difference`]).
//! - `Pointer`: the address of an element.
//! - `Reference<'a>`: what dereferencing yields.
//!
//! A position names its record through [`Position::Traits`]. Hand-built
//! positions usually point at one of the [`descriptor`] templates; raw
//! addresses (`*const T`, `*mut T`) resolve to the record in [`pointer`]
//! without any help from the caller.
//!
//! ## Operations
//!
//! Operations are split by capability so that a position can only be used
//! where its operations exist:
//!
//! - [`Position`]: equality and single-step [`increment`](Position::increment).
//! - [`Readable`]: dereference and member access.
//! - [`BidirectionalPosition`]: single-step [`decrement`](BidirectionalPosition::decrement).
//! - [`RandomAccessPosition`]: constant-time jumps and distances.
//!
//! ## Probes
//!
//! [`category`], [`value_type`] and [`difference_type`] take a position by
//! reference and return a zero-sized value whose *type* carries the requested
//! piece of the record, letting algorithms be written as ordinary functions
//! whose dispatch is inferred from their arguments.
//!
//! ```rust
//! use stepwise::category::RandomAccessTag;
//! use stepwise::position::{category, difference_type};
//!
//! let data = [1u8, 2, 3];
//! let p = data.as_ptr();
//!
//! assert_eq!(category(&p), RandomAccessTag);
//! assert!(difference_type(&p).is::<isize>());
//! ```

pub mod descriptor;
pub mod pointer;
pub mod restricted;

use crate::{category::Category, num::Difference, utils::marker::TypeTag};

/// The resolved associated types of a position.
pub trait TraitRecord {
    /// The capability tag.
    type Category: Category;

    /// The element type.
    type Value: ?Sized;

    /// The signed step count between two positions.
    type Difference: Difference;

    /// The address of an element.
    type Pointer;

    /// The result of dereferencing, valid for `'a`.
    type Reference<'a>
    where
        Self: 'a;
}

/// A location within a sequence.
///
/// Every position can be compared for equality and stepped forward. Richer
/// capabilities are added by [`BidirectionalPosition`] and
/// [`RandomAccessPosition`]; what a position *claims* is stated by the
/// category of its trait record.
pub trait Position: Clone + PartialEq {
    /// The trait record this position resolves to.
    type Traits: TraitRecord;

    /// Moves one step forward.
    fn increment(&mut self);
}

/// A position that can be dereferenced for reading.
pub trait Readable: Position {
    /// Dereferences the position.
    ///
    /// # Safety
    ///
    /// The position must denote a live element of its sequence, and the
    /// returned reference must not outlive that element. For references that
    /// permit mutation, the caller must also ensure no other reference to the
    /// same element is alive while the returned one is used.
    unsafe fn get<'a>(&self) -> ReferenceOf<'a, Self>
    where
        Self: 'a;

    /// Returns the address of the element the position denotes.
    ///
    /// Computing the address is always safe; dereferencing it is subject to
    /// the same rules as [`Readable::get`].
    fn address(&self) -> PointerOf<Self>;
}

/// A position that can also step backwards.
pub trait BidirectionalPosition: Position {
    /// Moves one step backward.
    fn decrement(&mut self);
}

/// A position that jumps by an offset and measures distances in constant time.
pub trait RandomAccessPosition: BidirectionalPosition {
    /// Moves `n` steps at once; negative `n` moves backwards.
    fn jump_by(&mut self, n: DifferenceOf<Self>);

    /// Returns the number of steps from `origin` to `self`, negative when
    /// `self` lies before `origin`.
    fn distance_from(&self, origin: &Self) -> DifferenceOf<Self>;
}

/// The trait record of `P`.
pub type TraitsOf<P> = <P as Position>::Traits;

/// The capability tag of `P`.
pub type CategoryOf<P> = <TraitsOf<P> as TraitRecord>::Category;

/// The element type of `P`.
pub type ValueOf<P> = <TraitsOf<P> as TraitRecord>::Value;

/// The difference type of `P`.
pub type DifferenceOf<P> = <TraitsOf<P> as TraitRecord>::Difference;

/// The pointer type of `P`.
pub type PointerOf<P> = <TraitsOf<P> as TraitRecord>::Pointer;

/// The reference type of `P`, valid for `'a`.
pub type ReferenceOf<'a, P> = <TraitsOf<P> as TraitRecord>::Reference<'a>;

/// Returns the capability tag of `position`.
///
/// The returned tag carries no data; its type selects an implementation when
/// passed to a tag-dispatched function.
#[inline(always)]
pub fn category<P: Position>(_position: &P) -> CategoryOf<P> {
    Default::default()
}

/// Returns a zero-sized value carrying the element type of `position`.
#[inline(always)]
pub fn value_type<P: Position>(_position: &P) -> TypeTag<ValueOf<P>> {
    TypeTag::new()
}

/// Returns a zero-sized value carrying the difference type of `position`.
#[inline(always)]
pub fn difference_type<P: Position>(_position: &P) -> TypeTag<DifferenceOf<P>> {
    TypeTag::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::{BidirectionalTag, CategoryKind, RandomAccessTag};
    use crate::cursor::SliceCursor;
    use crate::position::restricted::Restricted;

    #[test]
    fn test_category_probe_on_pointers() {
        let data = [1i32, 2, 3];
        let p = data.as_ptr();
        assert_eq!(category(&p), RandomAccessTag);
        assert_eq!(
            <CategoryOf<*mut i32> as Category>::KIND,
            CategoryKind::RandomAccess
        );
    }

    #[test]
    fn test_value_and_difference_probes() {
        let data = [1u16, 2, 3];
        let p = data.as_ptr();
        assert!(value_type(&p).is::<u16>());
        assert!(difference_type(&p).is::<isize>());

        let cursor = SliceCursor::begin(&data);
        assert!(value_type(&cursor).is::<u16>());
        assert!(difference_type(&cursor).is::<isize>());
    }

    #[test]
    fn test_probes_are_zero_sized() {
        let data = [0u8; 4];
        let p = data.as_ptr();
        assert_eq!(std::mem::size_of_val(&category(&p)), 0);
        assert_eq!(std::mem::size_of_val(&value_type(&p)), 0);
        assert_eq!(std::mem::size_of_val(&difference_type(&p)), 0);
    }

    #[test]
    fn test_category_probe_follows_restriction() {
        let data = [1u8, 2];
        let p = Restricted::<BidirectionalTag, _>::new(data.as_ptr());
        assert_eq!(category(&p), BidirectionalTag);
        // The record apart from the tag is the underlying one.
        assert!(value_type(&p).is::<u8>());
    }
}
