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

//! # Step-Count Constants
//!
//! Associated-constant traits for the signed integers that count steps
//! between positions. The counting loops in `algorithm` start from `ZERO`
//! and move by `PLUS_ONE` / `MINUS_ONE` without going through conversions.

/// A trait for signed integer types that have a constant representing -1.
pub trait MinusOne {
    /// The constant representing -1 for the implementing type.
    const MINUS_ONE: Self;
}

/// A trait for signed integer types that have a constant representing +1.
pub trait PlusOne {
    /// The constant representing +1 for the implementing type.
    const PLUS_ONE: Self;
}

/// A trait for signed integer types that have a constant representing 0.
pub trait Zero {
    /// The constant representing 0 for the implementing type.
    const ZERO: Self;
}

macro_rules! impl_step_constants_for {
    ($($t:ty),* $(,)?) => {
        $(
            impl MinusOne for $t {
                const MINUS_ONE: Self = -1;
            }

            impl PlusOne for $t {
                const PLUS_ONE: Self = 1;
            }

            impl Zero for $t {
                const ZERO: Self = 0;
            }
        )*
    };
}

impl_step_constants_for!(i8, i16, i32, i64, i128, isize);

#[cfg(test)]
mod tests {
    use super::*;

    fn constants<T: MinusOne + PlusOne + Zero>() -> (T, T, T) {
        (T::MINUS_ONE, T::ZERO, T::PLUS_ONE)
    }

    #[test]
    fn test_constants_for_every_signed_width() {
        assert_eq!(constants::<i8>(), (-1, 0, 1));
        assert_eq!(constants::<i16>(), (-1, 0, 1));
        assert_eq!(constants::<i32>(), (-1, 0, 1));
        assert_eq!(constants::<i64>(), (-1, 0, 1));
        assert_eq!(constants::<i128>(), (-1, 0, 1));
        assert_eq!(constants::<isize>(), (-1, 0, 1));
    }

    #[test]
    fn test_constants_are_consistent() {
        assert_eq!(i32::MINUS_ONE + i32::PLUS_ONE, i32::ZERO);
        assert_eq!(-isize::PLUS_ONE, isize::MINUS_ONE);
    }
}
