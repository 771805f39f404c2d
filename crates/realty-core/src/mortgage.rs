//! Mortgage payment estimate shown on listing detail pages.
//!
//! Standard amortization: `M = P·r(1+r)^n / ((1+r)^n − 1)` where `r` is the
//! monthly rate and `n` the number of monthly payments.

use serde::Serialize;

use crate::errors::CoreError;

/// Share of the price financed by default (20% down).
pub const DEFAULT_LOAN_RATIO: f64 = 0.8;
/// Annual interest rate in percent used when none is given.
pub const DEFAULT_RATE_PCT: f64 = 4.5;
pub const DEFAULT_TERM_YEARS: u32 = 30;
/// The loan may never exceed this share of the price (10% minimum down payment).
pub const MAX_LOAN_RATIO: f64 = 0.9;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MortgageTerms {
    pub property_price: f64,
    pub loan_amount: f64,
    pub annual_rate_pct: f64,
    pub term_years: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MortgageEstimate {
    pub monthly_payment: f64,
    pub down_payment: f64,
    pub down_payment_pct: f64,
    pub loan_amount: f64,
}

impl MortgageTerms {
    /// Default terms for a property: 80% financed at 4.5% over 30 years.
    #[must_use]
    pub fn for_price(property_price: f64) -> Self {
        Self {
            property_price,
            loan_amount: property_price * DEFAULT_LOAN_RATIO,
            annual_rate_pct: DEFAULT_RATE_PCT,
            term_years: DEFAULT_TERM_YEARS,
        }
    }

    /// Replace the loan amount, rejecting values outside `0..=90%` of the price.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if the amount is negative, not finite,
    /// or above the maximum loan ratio.
    pub fn with_loan_amount(mut self, loan_amount: f64) -> Result<Self, CoreError> {
        let max = self.property_price * MAX_LOAN_RATIO;
        if !loan_amount.is_finite() || loan_amount < 0.0 || loan_amount > max {
            return Err(CoreError::Validation(format!(
                "loan amount must be between 0 and {max:.0}"
            )));
        }
        self.loan_amount = loan_amount;
        Ok(self)
    }

    #[must_use]
    pub const fn with_rate(mut self, annual_rate_pct: f64) -> Self {
        self.annual_rate_pct = annual_rate_pct;
        self
    }

    #[must_use]
    pub const fn with_term(mut self, term_years: u32) -> Self {
        self.term_years = term_years;
        self
    }

    /// Monthly payment; `0.0` when the inputs do not produce a finite value.
    #[must_use]
    pub fn monthly_payment(&self) -> f64 {
        let principal = self.loan_amount;
        let monthly_rate = self.annual_rate_pct / 100.0 / 12.0;
        let payments = f64::from(self.term_years) * 12.0;

        let payment = if monthly_rate == 0.0 {
            principal / payments
        } else {
            let growth = (1.0 + monthly_rate).powf(payments);
            principal * monthly_rate * growth / (growth - 1.0)
        };

        if payment.is_finite() { payment } else { 0.0 }
    }

    #[must_use]
    pub fn down_payment(&self) -> f64 {
        self.property_price - self.loan_amount
    }

    #[must_use]
    pub fn down_payment_pct(&self) -> f64 {
        if self.property_price == 0.0 {
            return 0.0;
        }
        self.down_payment() / self.property_price * 100.0
    }

    #[must_use]
    pub fn estimate(&self) -> MortgageEstimate {
        MortgageEstimate {
            monthly_payment: self.monthly_payment(),
            down_payment: self.down_payment(),
            down_payment_pct: self.down_payment_pct(),
            loan_amount: self.loan_amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 0.01
    }

    #[test]
    fn defaults_finance_eighty_percent() {
        let terms = MortgageTerms::for_price(500_000.0);
        assert!(close(terms.loan_amount, 400_000.0));
        assert!(close(terms.down_payment(), 100_000.0));
        assert!(close(terms.down_payment_pct(), 20.0));
    }

    #[test]
    fn standard_amortization() {
        // 400k at 4.5% over 30 years.
        let terms = MortgageTerms::for_price(500_000.0);
        assert!(close(terms.monthly_payment(), 2026.74));
    }

    #[test]
    fn zero_rate_divides_evenly() {
        let terms = MortgageTerms::for_price(360_000.0)
            .with_loan_amount(300_000.0)
            .unwrap()
            .with_rate(0.0)
            .with_term(25);
        assert!(close(terms.monthly_payment(), 1000.0));
    }

    #[test]
    fn zero_term_yields_zero_payment() {
        let terms = MortgageTerms::for_price(100_000.0).with_term(0);
        assert!(close(terms.monthly_payment(), 0.0));
    }

    #[test]
    fn huge_term_does_not_overflow() {
        let payment = MortgageTerms::for_price(500_000.0)
            .with_term(400_000_000)
            .monthly_payment();
        // The growth factor is infinite, so the result falls back to zero.
        assert!(close(payment, 0.0));

        let zero_rate = MortgageTerms::for_price(500_000.0)
            .with_rate(0.0)
            .with_term(u32::MAX)
            .monthly_payment();
        assert!(zero_rate.is_finite() && zero_rate > 0.0);
    }

    #[test]
    fn loan_above_ninety_percent_is_rejected() {
        let result = MortgageTerms::for_price(100_000.0).with_loan_amount(95_000.0);
        assert!(matches!(result, Err(CoreError::Validation(_))));
        assert!(
            MortgageTerms::for_price(100_000.0)
                .with_loan_amount(-1.0)
                .is_err()
        );
    }
}
