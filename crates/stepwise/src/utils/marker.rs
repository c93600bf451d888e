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

use std::any::TypeId;

/// A zero-sized value that carries a type.
///
/// The value and difference probes in [`crate::position`] return a
/// `TypeTag` so that the type of a position can drive type inference at a
/// call site without producing a meaningless runtime value.
///
/// # Examples
///
/// ```rust
/// # use stepwise::utils::marker::TypeTag;
/// let tag = TypeTag::<i64>::new();
/// assert!(tag.is::<i64>());
/// assert!(!tag.is::<u64>());
/// assert_eq!(std::mem::size_of_val(&tag), 0);
/// ```
#[repr(transparent)]
pub struct TypeTag<T: ?Sized>(std::marker::PhantomData<fn() -> *const T>);

impl<T: ?Sized> TypeTag<T> {
    /// Creates a new `TypeTag` instance.
    #[inline(always)]
    pub const fn new() -> Self {
        Self(std::marker::PhantomData)
    }

    /// Returns the name of the carried type, as reported by
    /// [`std::any::type_name`].
    #[inline]
    pub fn type_name(self) -> &'static str {
        std::any::type_name::<T>()
    }

    /// Returns `true` if the carried type is `U`.
    #[inline]
    pub fn is<U: ?Sized + 'static>(self) -> bool
    where
        T: 'static,
    {
        TypeId::of::<T>() == TypeId::of::<U>()
    }
}

impl<T: ?Sized> Clone for TypeTag<T> {
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for TypeTag<T> {}

impl<T: ?Sized> Default for TypeTag<T> {
    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> PartialEq for TypeTag<T> {
    #[inline(always)]
    fn eq(&self, _: &Self) -> bool {
        true
    }
}

impl<T: ?Sized> Eq for TypeTag<T> {}

impl<T: ?Sized> std::fmt::Debug for TypeTag<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TypeTag<{}>", self.type_name())
    }
}

impl<T: ?Sized> std::fmt::Display for TypeTag<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.type_name())
    }
}
