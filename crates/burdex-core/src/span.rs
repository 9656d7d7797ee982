//! # Inclusive Spans — Validated Year and Age Ranges
//!
//! Defines `YearSpan` and `AgeSpan`, inclusive integer ranges with validated
//! constructors. A span whose start exceeds its end cannot be constructed,
//! and deserialization routes through the same check.
//!
//! Two distinct types rather than one generic span: a year span and an age
//! span are different axes of the expectation grid and must not be swapped
//! at a call site.

use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;

/// An inclusive span of calendar years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawSpan")]
pub struct YearSpan {
    start: i32,
    end: i32,
}

/// An inclusive span of ages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawSpan")]
pub struct AgeSpan {
    start: i32,
    end: i32,
}

/// Unvalidated mirror used for deserialization.
#[derive(Deserialize)]
struct RawSpan {
    start: i32,
    end: i32,
}

macro_rules! impl_span {
    ($name:ident, $field:literal) => {
        impl $name {
            /// Build a span, rejecting `start > end`.
            ///
            /// # Errors
            ///
            /// Returns [`ConfigurationError::InvertedSpan`] if the span is
            /// inverted. A single-point span (`start == end`) is valid.
            pub fn new(start: i32, end: i32) -> Result<Self, ConfigurationError> {
                if start > end {
                    return Err(ConfigurationError::InvertedSpan {
                        field: $field,
                        start,
                        end,
                    });
                }
                Ok(Self { start, end })
            }

            /// First value of the span.
            pub fn start(&self) -> i32 {
                self.start
            }

            /// Last value of the span (inclusive).
            pub fn end(&self) -> i32 {
                self.end
            }

            /// Number of values covered.
            pub fn len(&self) -> usize {
                (self.end as i64 - self.start as i64) as usize + 1
            }

            /// A validated span is never empty.
            pub fn is_empty(&self) -> bool {
                false
            }

            /// Whether a value falls inside the span.
            pub fn contains(&self, value: i32) -> bool {
                value >= self.start && value <= self.end
            }

            /// Ascending iterator over the covered values.
            pub fn iter(&self) -> impl Iterator<Item = i32> {
                self.start..=self.end
            }
        }

        impl TryFrom<RawSpan> for $name {
            type Error = ConfigurationError;

            fn try_from(raw: RawSpan) -> Result<Self, Self::Error> {
                Self::new(raw.start, raw.end)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}..={}", self.start, self.end)
            }
        }
    };
}

impl_span!(YearSpan, "years");
impl_span!(AgeSpan, "ages");
