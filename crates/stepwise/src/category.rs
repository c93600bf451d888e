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

//! # Capability Tags
//!
//! Zero-sized marker types describing which traversal operations a position
//! supports. Tags carry no data; algorithms select an implementation by the
//! *type* of the tag a position reports, so the choice is made entirely at
//! compile time.
//!
//! ## Refinement
//!
//! The four readable tags form a chain, each one promising everything the
//! previous one does:
//!
//! ```text
//! InputTag  <  ForwardTag  <  BidirectionalTag  <  RandomAccessTag
//! ```
//!
//! `OutputTag` stands apart from the chain. The chain is expressed through
//! supertraits: a bound `C: InputCategory` accepts all four readable tags,
//! while `C: RandomAccessCategory` accepts `RandomAccessTag` only.
//!
//! ```rust
//! use stepwise::category::{ForwardCategory, ForwardTag, RandomAccessTag};
//!
//! fn needs_multi_pass<C: ForwardCategory>(_: C) -> &'static str {
//!     C::NAME
//! }
//!
//! assert_eq!(needs_multi_pass(ForwardTag), "Forward");
//! assert_eq!(needs_multi_pass(RandomAccessTag), "RandomAccess");
//! ```
//!
//! `CategoryKind` mirrors the tags as a plain enum for the few places that
//! need to talk about a category at run time (display, parsing, reporting).

use std::{fmt, str::FromStr};

mod sealed {
    pub trait Sealed {}
}

/// Common supertrait of the five capability tags.
///
/// The set of tags is closed; the trait is sealed.
pub trait Category:
    sealed::Sealed + Copy + Default + Eq + std::hash::Hash + fmt::Debug + fmt::Display + 'static
{
    /// Human-readable name of the tag.
    const NAME: &'static str;

    /// Runtime mirror of the tag.
    const KIND: CategoryKind;
}

/// Single-pass, read-only traversal: equality and increment.
pub trait InputCategory: Category {}

/// Single-pass, write-only traversal. Not part of the readable chain.
pub trait OutputCategory: Category {}

/// Multi-pass traversal. Refines [`InputCategory`].
pub trait ForwardCategory: InputCategory {}

/// Multi-pass traversal in both directions. Refines [`ForwardCategory`].
pub trait BidirectionalCategory: ForwardCategory {}

/// Constant-time jumps and distances. Refines [`BidirectionalCategory`].
pub trait RandomAccessCategory: BidirectionalCategory {}

macro_rules! define_tag {
    ($(#[$meta:meta])* $name:ident, $kind:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name;

        impl sealed::Sealed for $name {}

        impl Category for $name {
            const NAME: &'static str = $label;
            const KIND: CategoryKind = CategoryKind::$kind;
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}Tag", Self::NAME)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(Self::NAME)
            }
        }
    };
}

define_tag!(
    /// Tag of single-pass, read-only positions.
    InputTag,
    Input,
    "Input"
);
define_tag!(
    /// Tag of single-pass, write-only positions.
    OutputTag,
    Output,
    "Output"
);
define_tag!(
    /// Tag of multi-pass, forward-only positions.
    ForwardTag,
    Forward,
    "Forward"
);
define_tag!(
    /// Tag of positions that can also step backwards.
    BidirectionalTag,
    Bidirectional,
    "Bidirectional"
);
define_tag!(
    /// Tag of positions that jump by an offset and subtract in constant time.
    /// Raw addresses report this tag.
    RandomAccessTag,
    RandomAccess,
    "RandomAccess"
);

impl InputCategory for InputTag {}
impl InputCategory for ForwardTag {}
impl InputCategory for BidirectionalTag {}
impl InputCategory for RandomAccessTag {}

impl OutputCategory for OutputTag {}

impl ForwardCategory for ForwardTag {}
impl ForwardCategory for BidirectionalTag {}
impl ForwardCategory for RandomAccessTag {}

impl BidirectionalCategory for BidirectionalTag {}
impl BidirectionalCategory for RandomAccessTag {}

impl RandomAccessCategory for RandomAccessTag {}

/// Runtime mirror of the capability tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryKind {
    Input,
    Output,
    Forward,
    Bidirectional,
    RandomAccess,
}

impl CategoryKind {
    /// Every category, readable chain first (coarsest to finest), then output.
    pub const ALL: [CategoryKind; 5] = [
        CategoryKind::Input,
        CategoryKind::Forward,
        CategoryKind::Bidirectional,
        CategoryKind::RandomAccess,
        CategoryKind::Output,
    ];

    /// Returns the name of the matching tag.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            CategoryKind::Input => InputTag::NAME,
            CategoryKind::Output => OutputTag::NAME,
            CategoryKind::Forward => ForwardTag::NAME,
            CategoryKind::Bidirectional => BidirectionalTag::NAME,
            CategoryKind::RandomAccess => RandomAccessTag::NAME,
        }
    }

    /// Position of the category in the readable chain, `None` for output.
    #[inline]
    const fn rank(self) -> Option<u8> {
        match self {
            CategoryKind::Input => Some(0),
            CategoryKind::Forward => Some(1),
            CategoryKind::Bidirectional => Some(2),
            CategoryKind::RandomAccess => Some(3),
            CategoryKind::Output => None,
        }
    }

    /// Returns `true` if a position of category `self` satisfies every
    /// contract of category `other`.
    ///
    /// The relation is reflexive; output is related to output only.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stepwise::category::CategoryKind;
    /// assert!(CategoryKind::RandomAccess.refines(CategoryKind::Input));
    /// assert!(!CategoryKind::Forward.refines(CategoryKind::Bidirectional));
    /// assert!(!CategoryKind::Output.refines(CategoryKind::Input));
    /// ```
    #[inline]
    pub const fn refines(self, other: CategoryKind) -> bool {
        match (self.rank(), other.rank()) {
            (Some(a), Some(b)) => a >= b,
            (None, None) => true,
            _ => false,
        }
    }

    /// Returns `true` for the categories that can be dereferenced for reading.
    #[inline]
    pub const fn is_readable(self) -> bool {
        self.rank().is_some()
    }
}

impl fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The error returned when a string does not name a category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCategoryError {
    /// The string that failed to parse.
    pub input: String,
}

impl fmt::Display for ParseCategoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "'{}' is not a category (expected one of input, output, forward, bidirectional, random_access)",
            self.input
        )
    }
}

impl std::error::Error for ParseCategoryError {}

impl FromStr for CategoryKind {
    type Err = ParseCategoryError;

    /// Parses a category name. Case, `_` and `-` are ignored, so
    /// `"RandomAccess"`, `"random_access"` and `"random-access"` are equal.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match normalized.as_str() {
            "input" => Ok(CategoryKind::Input),
            "output" => Ok(CategoryKind::Output),
            "forward" => Ok(CategoryKind::Forward),
            "bidirectional" => Ok(CategoryKind::Bidirectional),
            "randomaccess" => Ok(CategoryKind::RandomAccess),
            _ => Err(ParseCategoryError {
                input: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input_name<C: InputCategory>(_: C) -> &'static str {
        C::NAME
    }

    fn random_access_name<C: RandomAccessCategory>(_: C) -> &'static str {
        C::NAME
    }

    #[test]
    fn test_input_bound_accepts_refined_tags() {
        assert_eq!(input_name(InputTag), "Input");
        assert_eq!(input_name(ForwardTag), "Forward");
        assert_eq!(input_name(BidirectionalTag), "Bidirectional");
        assert_eq!(input_name(RandomAccessTag), "RandomAccess");
    }

    #[test]
    fn test_random_access_bound_accepts_exact_tag() {
        assert_eq!(random_access_name(RandomAccessTag), "RandomAccess");
    }

    #[test]
    fn test_tags_are_zero_sized() {
        assert_eq!(std::mem::size_of::<InputTag>(), 0);
        assert_eq!(std::mem::size_of::<OutputTag>(), 0);
        assert_eq!(std::mem::size_of::<ForwardTag>(), 0);
        assert_eq!(std::mem::size_of::<BidirectionalTag>(), 0);
        assert_eq!(std::mem::size_of::<RandomAccessTag>(), 0);
    }

    #[test]
    fn test_tag_kind_matches() {
        assert_eq!(InputTag::KIND, CategoryKind::Input);
        assert_eq!(OutputTag::KIND, CategoryKind::Output);
        assert_eq!(ForwardTag::KIND, CategoryKind::Forward);
        assert_eq!(BidirectionalTag::KIND, CategoryKind::Bidirectional);
        assert_eq!(RandomAccessTag::KIND, CategoryKind::RandomAccess);
    }

    #[test]
    fn test_tag_display_and_debug() {
        assert_eq!(format!("{}", BidirectionalTag), "Bidirectional");
        assert_eq!(format!("{:?}", RandomAccessTag), "RandomAccessTag");
        assert_eq!(format!("{}", CategoryKind::Output), "Output");
    }

    #[test]
    fn test_refinement_is_a_partial_order() {
        for a in CategoryKind::ALL {
            assert!(a.refines(a), "{a} must refine itself");
            for b in CategoryKind::ALL {
                if a != b && a.refines(b) {
                    assert!(!b.refines(a), "{a} and {b} refine each other");
                }
                for c in CategoryKind::ALL {
                    if a.refines(b) && b.refines(c) {
                        assert!(a.refines(c), "{a} < {b} < {c} is not transitive");
                    }
                }
            }
        }
    }

    #[test]
    fn test_output_is_unrelated_to_readable_chain() {
        for kind in [
            CategoryKind::Input,
            CategoryKind::Forward,
            CategoryKind::Bidirectional,
            CategoryKind::RandomAccess,
        ] {
            assert!(!kind.refines(CategoryKind::Output));
            assert!(!CategoryKind::Output.refines(kind));
            assert!(kind.is_readable());
        }
        assert!(!CategoryKind::Output.is_readable());
    }

    #[test]
    fn test_parse_accepts_spellings() {
        assert_eq!("input".parse::<CategoryKind>(), Ok(CategoryKind::Input));
        assert_eq!("Forward".parse::<CategoryKind>(), Ok(CategoryKind::Forward));
        assert_eq!("BIDIRECTIONAL".parse::<CategoryKind>(), Ok(CategoryKind::Bidirectional));
        assert_eq!("random_access".parse::<CategoryKind>(), Ok(CategoryKind::RandomAccess));
        assert_eq!("random-access".parse::<CategoryKind>(), Ok(CategoryKind::RandomAccess));
        assert_eq!(" RandomAccess ".parse::<CategoryKind>(), Ok(CategoryKind::RandomAccess));
        assert_eq!("output".parse::<CategoryKind>(), Ok(CategoryKind::Output));
    }

    #[test]
    fn test_parse_rejects_unknown_names() {
        let err = "contiguous".parse::<CategoryKind>().unwrap_err();
        assert_eq!(err.input, "contiguous");
        assert!(err.to_string().contains("'contiguous' is not a category"));
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for kind in CategoryKind::ALL {
            assert_eq!(kind.to_string().parse::<CategoryKind>(), Ok(kind));
        }
    }
}
