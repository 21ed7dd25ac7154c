//! Strongly-typed numeric primitives for roomplan (zero-cost newtypes).
//!
//! Design goals:
//! - No raw `f64` in domain logic
//! - Conversions to output units only via [`Scaler`]

use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

/// Error type for invalid numeric values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericError {
    /// Value is NaN
    NaN,
    /// Value is infinite
    Infinite,
    /// Value is zero when non-zero required
    Zero,
    /// Value is negative or zero when strictly positive required
    NotPositive,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NaN => write!(f, "value is NaN"),
            NumericError::Infinite => write!(f, "value is infinite"),
            NumericError::Zero => write!(f, "value is zero"),
            NumericError::NotPositive => write!(f, "value is not positive"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Length in inches (the canonical measurement unit)
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Inches(pub f64);

impl Inches {
    pub const ZERO: Inches = Inches(0.0);

    /// Create a strictly positive length with validation.
    /// Segment lengths must be finite and greater than zero.
    #[inline]
    pub fn try_positive(val: f64) -> Result<Inches, NumericError> {
        if val.is_nan() {
            Err(NumericError::NaN)
        } else if val.is_infinite() {
            Err(NumericError::Infinite)
        } else if val <= 0.0 {
            Err(NumericError::NotPositive)
        } else {
            Ok(Inches(val))
        }
    }

    /// Get the raw value (use sparingly, prefer typed operations)
    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }

    /// Checked ratio of two lengths, `None` if the divisor is zero.
    #[inline]
    pub fn checked_ratio(self, rhs: Inches) -> Option<f64> {
        if rhs.0 == 0.0 { None } else { Some(self.0 / rhs.0) }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }

    /// Format as feet-and-inches, e.g. `87.0 → 7'3"`, `11.0 → 11"`.
    /// Fractional inches keep two decimals with trailing zeros trimmed.
    pub fn feet_inches(self) -> String {
        let feet = (self.0 / 12.0).floor() as i64;
        let rem = self.0 - (feet as f64) * 12.0;
        let rem_s = {
            let s = format!("{:.2}", rem);
            s.trim_end_matches('0').trim_end_matches('.').to_string()
        };
        if feet == 0 {
            format!("{rem_s}\"")
        } else if rem == 0.0 {
            format!("{feet}'")
        } else {
            format!("{feet}'{rem_s}\"")
        }
    }
}

impl Add for Inches {
    type Output = Inches;
    fn add(self, rhs: Inches) -> Inches {
        Inches(self.0 + rhs.0)
    }
}
impl Sub for Inches {
    type Output = Inches;
    fn sub(self, rhs: Inches) -> Inches {
        Inches(self.0 - rhs.0)
    }
}
impl Mul<f64> for Inches {
    type Output = Inches;
    fn mul(self, rhs: f64) -> Inches {
        Inches(self.0 * rhs)
    }
}
impl Div<f64> for Inches {
    type Output = Inches;
    fn div(self, rhs: f64) -> Inches {
        Inches(self.0 / rhs)
    }
}
impl Neg for Inches {
    type Output = Inches;
    fn neg(self) -> Inches {
        Inches(-self.0)
    }
}
impl AddAssign for Inches {
    fn add_assign(&mut self, rhs: Inches) {
        self.0 += rhs.0;
    }
}
impl SubAssign for Inches {
    fn sub_assign(&mut self, rhs: Inches) {
        self.0 -= rhs.0;
    }
}

impl fmt::Display for Inches {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\"", self.0)
    }
}

/// Pixels after applying a scale factor (SVG output keeps fractional precision)
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Px(pub f64);

impl Px {
    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Px {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Discrete character cells (ASCII output unit)
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
#[repr(transparent)]
pub struct Cells(pub usize);

impl Cells {
    #[inline]
    pub fn raw(self) -> usize {
        self.0
    }
}

impl Add for Cells {
    type Output = Cells;
    fn add(self, rhs: Cells) -> Cells {
        Cells(self.0 + rhs.0)
    }
}
impl AddAssign for Cells {
    fn add_assign(&mut self, rhs: Cells) {
        self.0 += rhs.0;
    }
}

impl fmt::Display for Cells {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Convert inches → output units with a given scale (units per inch).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scaler {
    pub units_per_inch: f64,
}

impl Scaler {
    /// Create a Scaler with validation (rejects NaN, infinite, zero, negative)
    pub fn try_new(units_per_inch: f64) -> Result<Self, NumericError> {
        if units_per_inch.is_nan() {
            Err(NumericError::NaN)
        } else if units_per_inch.is_infinite() {
            Err(NumericError::Infinite)
        } else if units_per_inch == 0.0 {
            Err(NumericError::Zero)
        } else if units_per_inch < 0.0 {
            Err(NumericError::NotPositive)
        } else {
            Ok(Scaler { units_per_inch })
        }
    }

    /// Convert a length in inches to fractional pixels.
    #[inline]
    pub fn px(&self, l: Inches) -> Px {
        Px(l.0 * self.units_per_inch)
    }

    /// Exact (unrounded) span in output units. The discrete rounding policy
    /// lives in [`crate::scale::ScaleContext`], not here.
    #[inline]
    pub fn span(&self, l: Inches) -> f64 {
        l.0 * self.units_per_inch
    }
}
