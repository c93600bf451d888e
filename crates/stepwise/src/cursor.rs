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

//! # Slice Cursors
//!
//! [`SliceCursor`] is a random-access position over a borrowed slice: the
//! slice plus an index in `0..=len`. It is the borrow-checked counterpart of a
//! raw address. Dereferencing is bounds-checked, and the reference it yields
//! carries the lifetime of the slice, not of the cursor.
//!
//! ```rust
//! use stepwise::algorithm::{advance, distance};
//! use stepwise::cursor::SliceCursor;
//!
//! let data = ['a', 'b', 'c', 'd'];
//! let mut c = SliceCursor::begin(&data);
//!
//! advance(&mut c, 3);
//! assert_eq!(c.value(), Some(&'d'));
//! assert_eq!(distance(SliceCursor::begin(&data), SliceCursor::end(&data)), 4);
//! ```

use crate::position::{
    BidirectionalPosition, Position, RandomAccessPosition, Readable,
    descriptor::RandomAccessDescriptor,
};
use crate::utils::iter::Span;

/// A random-access position within a slice.
pub struct SliceCursor<'s, T> {
    slice: &'s [T],
    index: usize,
}

impl<'s, T> SliceCursor<'s, T> {
    /// Creates a cursor at `index`. Indices past the end are allowed; such a
    /// cursor simply has no element.
    #[inline(always)]
    pub const fn new(slice: &'s [T], index: usize) -> Self {
        Self { slice, index }
    }

    /// Cursor at the first element.
    #[inline(always)]
    pub const fn begin(slice: &'s [T]) -> Self {
        Self::new(slice, 0)
    }

    /// Cursor one past the last element.
    #[inline(always)]
    pub const fn end(slice: &'s [T]) -> Self {
        Self::new(slice, slice.len())
    }

    /// Returns the index the cursor denotes.
    #[inline(always)]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Returns the slice the cursor walks over.
    #[inline(always)]
    pub const fn slice(&self) -> &'s [T] {
        self.slice
    }

    /// Returns the element at the cursor, or `None` when the cursor is
    /// outside the slice.
    #[inline]
    pub fn value(&self) -> Option<&'s T> {
        self.slice.get(self.index)
    }

    /// Returns `true` if the cursor is one past the last element.
    #[inline(always)]
    pub const fn is_end(&self) -> bool {
        self.index == self.slice.len()
    }
}

impl<'s, T> Clone for SliceCursor<'s, T> {
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}

impl<'s, T> Copy for SliceCursor<'s, T> {}

/// A cursor over an empty slice. It is both the beginning and the end.
impl<'s, T> Default for SliceCursor<'s, T> {
    #[inline(always)]
    fn default() -> Self {
        Self::new(&[], 0)
    }
}

impl<'s, T> PartialEq for SliceCursor<'s, T> {
    #[inline(always)]
    fn eq(&self, other: &Self) -> bool {
        debug_assert!(
            std::ptr::eq(self.slice, other.slice),
            "compared cursors over different slices"
        );
        self.index == other.index
    }
}

impl<'s, T> Eq for SliceCursor<'s, T> {}

impl<'s, T> PartialOrd for SliceCursor<'s, T> {
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<'s, T> Ord for SliceCursor<'s, T> {
    #[inline(always)]
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.index.cmp(&other.index)
    }
}

impl<'s, T> Position for SliceCursor<'s, T> {
    type Traits = RandomAccessDescriptor<'s, T>;

    #[inline(always)]
    fn increment(&mut self) {
        self.index = self.index.wrapping_add(1);
    }
}

impl<'s, T> BidirectionalPosition for SliceCursor<'s, T> {
    #[inline(always)]
    fn decrement(&mut self) {
        self.index = self.index.wrapping_sub(1);
    }
}

impl<'s, T> RandomAccessPosition for SliceCursor<'s, T> {
    #[inline(always)]
    fn jump_by(&mut self, n: isize) {
        self.index = self.index.wrapping_add_signed(n);
    }

    #[inline(always)]
    fn distance_from(&self, origin: &Self) -> isize {
        debug_assert!(
            std::ptr::eq(self.slice, origin.slice),
            "measured the distance between cursors over different slices"
        );
        (self.index as isize).wrapping_sub(origin.index as isize)
    }
}

impl<'s, T> Readable for SliceCursor<'s, T> {
    /// Returns the element at the cursor.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is outside the slice.
    #[inline(always)]
    unsafe fn get<'a>(&self) -> &'s T
    where
        Self: 'a,
    {
        &self.slice[self.index]
    }

    #[inline(always)]
    fn address(&self) -> *const T {
        self.slice.as_ptr().wrapping_add(self.index)
    }
}

impl<'s, T> Span<'s, SliceCursor<'s, T>> {
    /// Creates a span over every element of `slice`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stepwise::utils::iter::Span;
    /// let span = Span::from_slice(&[1, 2, 3]);
    /// assert_eq!(span.copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    /// ```
    #[inline]
    pub fn from_slice(slice: &'s [T]) -> Self {
        // SAFETY: every cursor in `[begin, end)` denotes an element of
        // `slice`, which is borrowed for `'s`.
        unsafe { Span::new(SliceCursor::begin(slice), SliceCursor::end(slice)) }
    }
}

impl<'s, T> std::fmt::Debug for SliceCursor<'s, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SliceCursor({}/{})", self.index, self.slice.len())
    }
}

impl<'s, T> std::fmt::Display for SliceCursor<'s, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.index, self.slice.len())
    }
}
