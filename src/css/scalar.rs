//! CSS scalar values: Scalar, Unit (px, fr, %, auto, min-content, max-content).

use std::fmt;

/// A CSS unit type for grid track sizes and gaps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Unit {
    /// Absolute length. Bare numbers are read as this unit.
    Px,
    /// Fraction of the leftover space (CSS `fr`).
    Fr,
    /// Percentage of the container dimension.
    Percent,
    /// Auto-size (content-based).
    Auto,
    /// Smallest size the content can take.
    MinContent,
    /// Largest size the content wants.
    MaxContent,
}

/// A scalar value with a unit, e.g. `10px`, `1fr`, `50%`, `auto`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scalar {
    pub value: f32,
    pub unit: Unit,
}

impl Scalar {
    /// Create a scalar in px units.
    pub fn px(value: f32) -> Self {
        Self {
            value,
            unit: Unit::Px,
        }
    }

    /// Create a scalar in fraction units.
    pub fn fr(value: f32) -> Self {
        Self {
            value,
            unit: Unit::Fr,
        }
    }

    /// Create a scalar as a percentage.
    pub fn percent(value: f32) -> Self {
        Self {
            value,
            unit: Unit::Percent,
        }
    }

    /// Create an auto scalar.
    pub fn auto() -> Self {
        Self::keyword(Unit::Auto)
    }

    /// Create a `min-content` scalar.
    pub fn min_content() -> Self {
        Self::keyword(Unit::MinContent)
    }

    /// Create a `max-content` scalar.
    pub fn max_content() -> Self {
        Self::keyword(Unit::MaxContent)
    }

    fn keyword(unit: Unit) -> Self {
        Self { value: 0.0, unit }
    }

    /// Returns `true` if this scalar is auto-sized.
    pub fn is_auto(&self) -> bool {
        self.unit == Unit::Auto
    }

    /// Returns `true` for `fr` values, which are only valid as a track maximum.
    pub fn is_flexible(&self) -> bool {
        self.unit == Unit::Fr
    }

    /// Returns `true` for px and percent values.
    pub fn is_length(&self) -> bool {
        matches!(self.unit, Unit::Px | Unit::Percent)
    }
}

/// Write a number without a trailing `.0` for whole values.
fn write_number(f: &mut fmt::Formatter<'_>, value: f32, suffix: &str) -> fmt::Result {
    if value.fract() == 0.0 {
        write!(f, "{}{}", value as i64, suffix)
    } else {
        write!(f, "{}{}", value, suffix)
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unit {
            Unit::Auto => write!(f, "auto"),
            Unit::MinContent => write!(f, "min-content"),
            Unit::MaxContent => write!(f, "max-content"),
            Unit::Px => write_number(f, self.value, "px"),
            Unit::Fr => write_number(f, self.value, "fr"),
            Unit::Percent => write_number(f, self.value, "%"),
        }
    }
}
