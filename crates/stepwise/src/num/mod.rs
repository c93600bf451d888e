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

//! # Step Counts
//!
//! Positions measure the gap between each other with a signed integer, the
//! *difference type* of their trait record. This module names the bound such
//! a type has to satisfy and the constants the traversal algorithms need.
//!
//! ## Submodules
//!
//! - `constants`: Associated-constant traits (`MinusOne`, `Zero`, `PlusOne`)
//!   implemented for the signed integer types.
//!
//! ## Usage
//!
//! ```rust
//! use stepwise::num::Difference;
//!
//! fn count<D: Difference>(steps: usize) -> D {
//!     let mut n = D::ZERO;
//!     for _ in 0..steps {
//!         n = n + D::PLUS_ONE;
//!     }
//!     n
//! }
//!
//! assert_eq!(count::<i16>(4), 4);
//! ```

pub mod constants;

use self::constants::{MinusOne, PlusOne, Zero};
use num_traits::{PrimInt, Signed};

/// A signed integer able to count steps between two positions.
///
/// Blanket-implemented for every type that is a primitive signed integer
/// and carries the step constants, so `i8` through `i128` and `isize`
/// qualify. Raw addresses use `isize`.
pub trait Difference:
    PrimInt + Signed + Zero + PlusOne + MinusOne + std::fmt::Debug + std::fmt::Display
{
}

impl<T> Difference for T where
    T: PrimInt + Signed + Zero + PlusOne + MinusOne + std::fmt::Debug + std::fmt::Display
{
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step_back<D: Difference>(n: D) -> D {
        n + D::MINUS_ONE
    }

    #[test]
    fn test_difference_is_implemented_for_signed_integers() {
        assert_eq!(step_back(0i8), -1);
        assert_eq!(step_back(10i64), 9);
        assert_eq!(step_back(1isize), 0);
    }

    #[test]
    fn test_difference_supports_sign_queries() {
        fn is_backward<D: Difference>(n: D) -> bool {
            n.is_negative()
        }
        assert!(is_backward(-3i32));
        assert!(!is_backward(0i32));
    }
}
