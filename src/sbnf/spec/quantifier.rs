//! Repetition bounds
//!
//! Every quantifier spelling resolves to a `(min, max)` pair, `max` being
//! `None` when the repetition is unbounded:
//!
//!     ?       (0, 1)
//!     *       (0, unbounded)
//!     +       (1, unbounded)
//!     {m}     (m, m)
//!     {m..}   (m, unbounded)
//!     {m..n}  (m, n), only when n >= m

use serde::Serialize;
use std::fmt;

/// A validated `(min, max)` bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Quantifier {
    min: u32,
    max: Option<u32>,
}

impl Quantifier {
    pub const OPTIONAL: Quantifier = Quantifier {
        min: 0,
        max: Some(1),
    };
    pub const ZERO_OR_MORE: Quantifier = Quantifier { min: 0, max: None };
    pub const ONE_OR_MORE: Quantifier = Quantifier { min: 1, max: None };

    pub fn exactly(count: u32) -> Self {
        Self {
            min: count,
            max: Some(count),
        }
    }

    pub fn at_least(min: u32) -> Self {
        Self { min, max: None }
    }

    /// `None` when `max < min`.
    pub fn between(min: u32, max: u32) -> Option<Self> {
        (max >= min).then_some(Self {
            min,
            max: Some(max),
        })
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> Option<u32> {
        self.max
    }

    pub fn is_optional(&self) -> bool {
        *self == Self::OPTIONAL
    }

    pub fn is_unbounded(&self) -> bool {
        self.max.is_none()
    }
}

impl fmt::Display for Quantifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.min, self.max) {
            (0, Some(1)) => f.write_str("?"),
            (0, None) => f.write_str("*"),
            (1, None) => f.write_str("+"),
            (min, None) => write!(f, "{{{}..}}", min),
            (min, Some(max)) if min == max => write!(f, "{{{}}}", min),
            (min, Some(max)) => write!(f, "{{{}..{}}}", min, max),
        }
    }
}
