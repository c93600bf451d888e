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

//! # Raw Addresses as Positions
//!
//! `*const T` and `*mut T` are random-access positions out of the box. Their
//! trait record is [`PointerTraits`], parameterised by a [`Mutability`]
//! marker: immutable addresses dereference to `&'a T`, mutable ones to
//! `&'a mut T`. In both cases the element type is `T` and the difference type
//! is `isize`.
//!
//! Stepping, jumping and measuring use wrapping address arithmetic and are
//! therefore safe on their own; only [`Readable::get`] requires the address to
//! denote a live element.
//!
//! Zero-sized element types never move their address: every position over a
//! sequence of zero-sized values compares equal to every other.
//!
//! ```rust
//! use stepwise::algorithm::{advance, distance};
//! use stepwise::position::Readable;
//!
//! let mut values = [10, 20, 30, 40];
//! let first = values.as_mut_ptr();
//! let mut p = first;
//!
//! advance(&mut p, 2);
//! assert_eq!(distance(first, p), 2);
//!
//! // SAFETY: `p` points at `values[2]` and no other reference is alive.
//! unsafe { *p.get() += 3 };
//! assert_eq!(values, [10, 20, 33, 40]);
//! ```

use super::{BidirectionalPosition, Position, RandomAccessPosition, Readable, TraitRecord};
use crate::category::RandomAccessTag;

mod sealed {
    pub trait Sealed {}
}

/// Marks whether an address permits mutation of its element.
pub trait Mutability: sealed::Sealed {}

/// An immutable address (`*const T`).
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd, Hash)]
pub struct Const;

/// A mutable address (`*mut T`).
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd, Hash)]
pub struct Mut;

impl sealed::Sealed for Const {}
impl sealed::Sealed for Mut {}

impl Mutability for Const {}
impl Mutability for Mut {}

/// Trait record of raw addresses to `T` with mutability `M`.
///
/// The type is never instantiated.
pub struct PointerTraits<T, M: Mutability>(std::marker::PhantomData<fn() -> (*const T, M)>);

impl<T> TraitRecord for PointerTraits<T, Const> {
    type Category = RandomAccessTag;
    type Value = T;
    type Difference = isize;
    type Pointer = *const T;
    type Reference<'a>
        = &'a T
    where
        Self: 'a;
}

impl<T> TraitRecord for PointerTraits<T, Mut> {
    type Category = RandomAccessTag;
    type Value = T;
    type Difference = isize;
    type Pointer = *mut T;
    type Reference<'a>
        = &'a mut T
    where
        Self: 'a;
}

/// Number of `T`-sized steps between two addresses.
#[inline(always)]
fn element_offset<T>(to: usize, from: usize) -> isize {
    let bytes = (to as isize).wrapping_sub(from as isize);
    bytes / std::mem::size_of::<T>().max(1) as isize
}

macro_rules! impl_pointer_position {
    ($ptr:ty, $mutability:ty) => {
        impl<T> Position for $ptr {
            type Traits = PointerTraits<T, $mutability>;

            #[inline(always)]
            fn increment(&mut self) {
                *self = self.wrapping_add(1);
            }
        }

        impl<T> BidirectionalPosition for $ptr {
            #[inline(always)]
            fn decrement(&mut self) {
                *self = self.wrapping_sub(1);
            }
        }

        impl<T> RandomAccessPosition for $ptr {
            #[inline(always)]
            fn jump_by(&mut self, n: isize) {
                *self = self.wrapping_offset(n);
            }

            #[inline(always)]
            fn distance_from(&self, origin: &Self) -> isize {
                element_offset::<T>(self.addr(), origin.addr())
            }
        }
    };
}

impl_pointer_position!(*const T, Const);
impl_pointer_position!(*mut T, Mut);

impl<T> Readable for *const T {
    #[inline(always)]
    unsafe fn get<'a>(&self) -> &'a T
    where
        Self: 'a,
    {
        // SAFETY: the caller guarantees that `self` points at a live `T`
        // that outlives `'a`.
        unsafe { &**self }
    }

    #[inline(always)]
    fn address(&self) -> *const T {
        *self
    }
}

impl<T> Readable for *mut T {
    #[inline(always)]
    unsafe fn get<'a>(&self) -> &'a mut T
    where
        Self: 'a,
    {
        // SAFETY: the caller guarantees that `self` points at a live `T`
        // that outlives `'a` and is not otherwise borrowed.
        unsafe { &mut **self }
    }

    #[inline(always)]
    fn address(&self) -> *mut T {
        *self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::{Category, CategoryKind};
    use crate::position::{CategoryOf, DifferenceOf, PointerOf, ReferenceOf, ValueOf};
    use std::any::TypeId;

    fn same<A: ?Sized + 'static, B: ?Sized + 'static>() -> bool {
        TypeId::of::<A>() == TypeId::of::<B>()
    }

    #[test]
    fn test_mutable_address_record() {
        assert_eq!(<CategoryOf<*mut i32> as Category>::KIND, CategoryKind::RandomAccess);
        assert!(same::<ValueOf<*mut i32>, i32>());
        assert!(same::<DifferenceOf<*mut i32>, isize>());
        assert!(same::<PointerOf<*mut i32>, *mut i32>());
        assert!(same::<ReferenceOf<'static, *mut i32>, &'static mut i32>());
    }

    #[test]
    fn test_immutable_address_record() {
        assert_eq!(<CategoryOf<*const i32> as Category>::KIND, CategoryKind::RandomAccess);
        assert!(same::<ValueOf<*const i32>, i32>());
        assert!(same::<DifferenceOf<*const i32>, isize>());
        assert!(same::<PointerOf<*const i32>, *const i32>());
        assert!(same::<ReferenceOf<'static, *const i32>, &'static i32>());
        assert!(!same::<ReferenceOf<'static, *const i32>, &'static mut i32>());
    }

    #[test]
    fn test_mutation_through_mutable_address() {
        let mut data = [1, 2, 3];
        let mut p = data.as_mut_ptr();
        p.increment();
        // SAFETY: `p` points at `data[1]`; no other borrow of `data` is alive.
        unsafe {
            *p.get() = 20;
        }
        assert_eq!(data, [1, 20, 3]);
    }

    #[test]
    fn test_read_through_immutable_address() {
        let data = [4u64, 5, 6];
        let mut p = data.as_ptr();
        p.jump_by(2);
        // SAFETY: `p` points at `data[2]`.
        let value: &u64 = unsafe { p.get() };
        assert_eq!(*value, 6);
        assert_eq!(p.address(), &data[2] as *const u64);
    }

    #[test]
    fn test_stepping_and_distance() {
        let data = [0u32; 8];
        let first = data.as_ptr();
        let mut p = first;

        p.increment();
        p.increment();
        p.decrement();
        assert_eq!(p.distance_from(&first), 1);

        p.jump_by(6);
        assert_eq!(p.distance_from(&first), 7);
        assert_eq!(first.distance_from(&p), -7);

        p.jump_by(-7);
        assert_eq!(p, first);
    }

    #[test]
    fn test_distance_of_wide_elements() {
        let data = [[0u8; 24]; 5];
        let first = data.as_ptr();
        let last = first.wrapping_add(5);
        assert_eq!(last.distance_from(&first), 5);
    }

    #[test]
    fn test_zero_sized_elements_do_not_move() {
        let data = [(); 3];
        let first = data.as_ptr();
        let mut p = first;
        p.increment();
        assert_eq!(p, first);
        assert_eq!(p.distance_from(&first), 0);
    }
}
