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

//! # Tag-Dispatched Algorithms
//!
//! Generic traversal algorithms whose implementation is selected at compile
//! time by the capability tag of the position type.
//!
//! ## Submodules
//!
//! - `distance`: [`distance`] and the accumulating [`distance_into`], backed
//!   by [`DistanceStrategy`].
//! - `advance`: [`advance`], backed by [`AdvanceStrategy`].
//!
//! ## Dispatch
//!
//! Each readable capability tag implements the strategy traits for the
//! positions it can serve. The public functions obtain the tag of their
//! argument with [`crate::position::category`] and call the strategy on it,
//! so the choice costs nothing at run time and a position whose tag promises
//! more than the position implements fails to compile:
//!
//! | Tag                | `distance`         | `advance`            |
//! |--------------------|--------------------|----------------------|
//! | `InputTag`         | step until equal   | `n` increments       |
//! | `ForwardTag`       | step until equal   | `n` increments       |
//! | `BidirectionalTag` | step until equal   | increments or decrements |
//! | `RandomAccessTag`  | `last - first`     | one jump             |
//! | `OutputTag`        | not available      | not available        |
//!
//! Strategies can also be invoked on a tag directly, which is how the stepwise
//! and constant-time paths are compared on the same positions:
//!
//! ```rust
//! use stepwise::algorithm::DistanceStrategy;
//! use stepwise::category::{ForwardTag, RandomAccessTag};
//!
//! let data = [0u8; 5];
//! let (first, last) = (data.as_ptr(), data.as_ptr().wrapping_add(5));
//! assert_eq!(ForwardTag.distance(first, last), RandomAccessTag.distance(first, last));
//! ```
//!
//! ## Rejected at compile time
//!
//! Output positions have no strategy at all, so neither algorithm accepts
//! them:
//!
//! ```rust,compile_fail
//! use stepwise::algorithm::distance;
//! use stepwise::position::Position;
//! use stepwise::position::descriptor::OutputDescriptor;
//!
//! #[derive(Clone, PartialEq)]
//! struct Sink;
//!
//! impl Position for Sink {
//!     type Traits = OutputDescriptor;
//!
//!     fn increment(&mut self) {}
//! }
//!
//! let _ = distance(Sink, Sink);
//! ```
//!
//! ```rust,compile_fail
//! use stepwise::algorithm::advance;
//! use stepwise::position::Position;
//! use stepwise::position::descriptor::OutputDescriptor;
//!
//! #[derive(Clone, PartialEq)]
//! struct Sink;
//!
//! impl Position for Sink {
//!     type Traits = OutputDescriptor;
//!
//!     fn increment(&mut self) {}
//! }
//!
//! let mut sink = Sink;
//! advance(&mut sink, 1);
//! ```
//!
//! A forward-only position cannot step backwards. `advance` with a negative
//! count only trips a debug assertion for it, but the backward strategy and
//! `decrement` itself are unavailable:
//!
//! ```rust,compile_fail
//! use stepwise::algorithm::AdvanceStrategy;
//! use stepwise::category::{BidirectionalTag, ForwardTag};
//! use stepwise::position::restricted::Restricted;
//!
//! let data = [1, 2, 3];
//! let mut p = Restricted::<ForwardTag, _>::new(data.as_ptr().wrapping_add(2));
//! BidirectionalTag.advance(&mut p, -1);
//! ```
//!
//! ```rust,compile_fail
//! use stepwise::category::ForwardTag;
//! use stepwise::position::BidirectionalPosition;
//! use stepwise::position::restricted::Restricted;
//!
//! let data = [1, 2, 3];
//! let mut p = Restricted::<ForwardTag, _>::new(data.as_ptr().wrapping_add(2));
//! p.decrement();
//! ```

pub mod advance;
pub mod distance;

pub use advance::{AdvanceStrategy, advance};
pub use distance::{DistanceStrategy, distance, distance_into};
