//! Write-time enforcement of the fixed-point digit budgets.
//!
//! The schema declares NUMERIC(precision, scale) columns, but neither backend
//! rejects oversized values the way the application needs: Postgres rounds
//! incoming values to the column scale, SQLite stores anything. Every write
//! path therefore checks each decimal against its budget first and refuses
//! values that would lose digits.

use rust_decimal::Decimal;

use crate::error::BudgetError;

/// A NUMERIC(max_digits, scale) digit budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecimalBudget {
    pub max_digits: u32,
    pub scale: u32,
}

/// Budget of `income_monthly`, `total_investment` and `transactions.amount`.
pub const MONEY: DecimalBudget = DecimalBudget {
    max_digits: 12,
    scale: 2,
};

/// Budget of `percentage_save`.
pub const SAVE_RATE: DecimalBudget = DecimalBudget {
    max_digits: 5,
    scale: 2,
};

impl DecimalBudget {
    /// Checks that `value` is exactly representable within the budget.
    pub fn check(&self, field: &'static str, value: Decimal) -> Result<(), BudgetError> {
        // normalize() drops trailing zeros, so 1.100 passes a scale-2 budget
        // while 1.101 does not
        let normalized = value.normalize();
        if normalized.scale() > self.scale {
            return Err(BudgetError::ScaleExceeded {
                field,
                scale: self.scale,
            });
        }
        let limit = Decimal::from_i128_with_scale(10_i128.pow(self.max_digits - self.scale), 0);
        if normalized.abs() >= limit {
            return Err(BudgetError::PrecisionExceeded {
                field,
                max_digits: self.max_digits,
                scale: self.scale,
            });
        }
        Ok(())
    }
}

/// Budget check plus the [0, 100] range a saving rate lives in.
pub fn check_save_rate(field: &'static str, value: Decimal) -> Result<(), BudgetError> {
    SAVE_RATE.check(field, value)?;
    if value < Decimal::ZERO || value > Decimal::ONE_HUNDRED {
        return Err(BudgetError::OutOfRange {
            field,
            min: Decimal::ZERO,
            max: Decimal::ONE_HUNDRED,
        });
    }
    Ok(())
}
