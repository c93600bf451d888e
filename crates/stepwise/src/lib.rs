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

//! # Stepwise
//!
//! Position abstractions and category-dispatched traversal algorithms. A
//! *position* denotes a place in a sequence, can step forward, and is
//! classified by a zero-sized category tag. Generic algorithms such as
//! [`algorithm::distance`] and [`algorithm::advance`] pick their strategy
//! from that tag at compile time: constant time for random-access positions,
//! a step-by-step walk for everything else.
//!
//! ## Modules
//!
//! - `category`: The five category tags (`InputTag`, `OutputTag`,
//!   `ForwardTag`, `BidirectionalTag`, `RandomAccessTag`), their refinement
//!   traits, and the runtime `CategoryKind` mirror with parsing.
//! - `position`: The position traits, the five-field trait record
//!   (`TraitRecord`) with its type aliases and probes, descriptors for custom
//!   positions, the raw-pointer implementations, and `Restricted<C, P>` for
//!   reporting a weaker category.
//! - `algorithm`: Tag-dispatched `distance`, `distance_into`, and `advance`.
//! - `reverse`: `ReversePosition<I>`, which traverses a bidirectional position
//!   back to front.
//! - `cursor`: `SliceCursor<'s, T>`, a bounds-checked random-access position
//!   over a borrowed slice.
//! - `num`: The signed integer bound used for difference types.
//! - `utils`: Zero-sized type tags (`TypeTag<T>`) and the `Span<'a, P>`
//!   adaptor that turns a pair of positions into an `Iterator`.
//!
//! ## Example
//!
//! ```rust
//! use stepwise::algorithm::{advance, distance};
//! use stepwise::category::ForwardTag;
//! use stepwise::position::restricted::Restricted;
//!
//! let data = [1u8, 2, 3, 4, 5];
//! let first = data.as_ptr();
//! let last = first.wrapping_add(data.len());
//!
//! // Raw pointers are random access: constant-time distance.
//! assert_eq!(distance(first, last), 5);
//!
//! // The same pointers reported as forward-only are walked step by step.
//! let slow = Restricted::<ForwardTag, _>::new(first);
//! let mut p = slow;
//! advance(&mut p, 3);
//! assert_eq!(distance(slow, p), 3);
//! ```

pub mod algorithm;
pub mod category;
pub mod cursor;
pub mod num;
pub mod position;
pub mod reverse;
pub mod utils;
