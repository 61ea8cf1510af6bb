//! # Money Module
//!
//! Monetary values and the GST rate type.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                     │
//! │                                                                 │
//! │  In floating point:                                             │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                   │
//! │                                                                 │
//! │  OUR SOLUTION: Integer Paise                                    │
//! │    ₹40.00 is 4000 paise. Sums, line totals and GST are all      │
//! │    integer arithmetic; only display converts to rupees.         │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every amount in the system - menu prices, line totals, bill totals,
//! daily totals - flows through [`Money`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

// =============================================================================
// Money
// =============================================================================

/// A monetary value in paise (the smallest currency unit).
///
/// ## Design Decisions
/// - **i64 (signed)**: room for corrections and future refunds
/// - **Single-field tuple struct**: zero-cost abstraction over i64
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from paise.
    ///
    /// ## Example
    /// ```rust
    /// use zweeti_core::Money;
    ///
    /// let price = Money::from_paise(4000); // ₹40.00
    /// assert_eq!(price.paise(), 4000);
    /// ```
    #[inline]
    pub const fn from_paise(paise: i64) -> Self {
        Money(paise)
    }

    /// Creates a Money value from whole rupees.
    ///
    /// Menu prices are whole rupees, so this is the common constructor
    /// for catalog entries.
    #[inline]
    pub const fn from_rupees(rupees: i64) -> Self {
        Money(rupees * 100)
    }

    /// Returns the value in paise.
    #[inline]
    pub const fn paise(&self) -> i64 {
        self.0
    }

    /// Returns the whole-rupee portion.
    #[inline]
    pub const fn rupees(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the paise portion (always 0-99).
    #[inline]
    pub const fn paise_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Multiplies a unit price by a quantity to get a line total.
    ///
    /// ## Example
    /// ```rust
    /// use zweeti_core::Money;
    ///
    /// let unit_price = Money::from_rupees(40);
    /// assert_eq!(unit_price.multiply_quantity(2).paise(), 8000); // ₹80.00
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// Calculates tax on this amount, rounding half away from zero.
    ///
    /// ## Implementation
    /// Integer math in i128: `(amount × bps + 5000) / 10000`. The +5000
    /// rounds the half-paise case up, which keeps 5% of round subtotals
    /// exact (₹140.00 → ₹7.00) and never drifts more than half a paisa.
    ///
    /// ## Example
    /// ```rust
    /// use zweeti_core::{Money, TaxRate};
    ///
    /// let subtotal = Money::from_paise(14000); // ₹140.00
    /// let gst = subtotal.calculate_tax(TaxRate::from_bps(500)); // 5%
    /// assert_eq!(gst.paise(), 700); // ₹7.00
    /// ```
    pub fn calculate_tax(&self, rate: TaxRate) -> Money {
        let tax_paise = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        Money::from_paise(tax_paise as i64)
    }
}

/// Display shows money as `₹<rupees>.<paise>` for receipts and the terminal.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}₹{}.{:02}", sign, self.rupees().abs(), self.paise_part())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate in basis points (bps).
///
/// 1 basis point = 0.01% = 1/10000, so 500 bps = 5% GST.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate(crate::DEFAULT_TAX_RATE_BPS)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_paise() {
        let money = Money::from_paise(4050);
        assert_eq!(money.paise(), 4050);
        assert_eq!(money.rupees(), 40);
        assert_eq!(money.paise_part(), 50);
    }

    #[test]
    fn test_from_rupees() {
        assert_eq!(Money::from_rupees(40).paise(), 4000);
        assert_eq!(Money::from_rupees(0).paise(), 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_paise(4000)), "₹40.00");
        assert_eq!(format!("{}", Money::from_paise(705)), "₹7.05");
        assert_eq!(format!("{}", Money::from_paise(-550)), "-₹5.50");
        assert_eq!(format!("{}", Money::zero()), "₹0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_paise(1000);
        let b = Money::from_paise(500);

        assert_eq!((a + b).paise(), 1500);
        assert_eq!((a - b).paise(), 500);

        let mut acc = Money::zero();
        acc += a;
        acc += b;
        assert_eq!(acc.paise(), 1500);
    }

    #[test]
    fn test_multiply_quantity() {
        let unit_price = Money::from_rupees(40);
        assert_eq!(unit_price.multiply_quantity(2).paise(), 8000);
    }

    #[test]
    fn test_gst_on_round_subtotal_is_exact() {
        // ₹140.00 at 5% = ₹7.00, no rounding involved
        let subtotal = Money::from_paise(14000);
        let gst = subtotal.calculate_tax(TaxRate::from_bps(500));
        assert_eq!(gst.paise(), 700);
    }

    #[test]
    fn test_gst_rounds_half_up() {
        // ₹0.30 at 5% = 1.5 paise → 2 paise
        let amount = Money::from_paise(30);
        let gst = amount.calculate_tax(TaxRate::from_bps(500));
        assert_eq!(gst.paise(), 2);
    }

    #[test]
    fn test_zero_rate_is_zero_tax() {
        let amount = Money::from_paise(99999);
        assert_eq!(amount.calculate_tax(TaxRate::zero()).paise(), 0);
    }

    #[test]
    fn test_default_rate_is_five_percent() {
        let rate = TaxRate::default();
        assert_eq!(rate.bps(), 500);
        assert!((rate.percentage() - 5.0).abs() < f64::EPSILON);
    }
}
