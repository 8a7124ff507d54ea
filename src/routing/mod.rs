//! Intent routing for the tax-deadline bot

use std::fmt;
use std::str::FromStr;

use crate::errors::DialogError;

/// Intents this bot knows how to answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SupportedIntent {
    /// "When is my balance due?" keyed by the `BalanceType` slot
    CheckBalanceDueDate,
    /// Follow-up asking which kind of income tax, keyed by `IncomeType`
    IncomeTaxChoice,
}

impl SupportedIntent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::CheckBalanceDueDate => "CheckBalanceDueDate",
            Self::IncomeTaxChoice => "IncomeTaxChoice",
        }
    }

    /// Slot whose value selects the answer
    pub fn category_slot(&self) -> &'static str {
        match self {
            Self::CheckBalanceDueDate => "BalanceType",
            Self::IncomeTaxChoice => "IncomeType",
        }
    }
}

impl FromStr for SupportedIntent {
    type Err = DialogError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "CheckBalanceDueDate" => Ok(Self::CheckBalanceDueDate),
            "IncomeTaxChoice" => Ok(Self::IncomeTaxChoice),
            other => Err(DialogError::UnsupportedIntent(other.to_string())),
        }
    }
}

impl fmt::Display for SupportedIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Balance types that need a follow-up question instead of an answer
const INCOME_TAX_CATEGORIES: &[&str] = &["income tax", "income"];

/// Whether a normalized balance type should be redirected to [`SupportedIntent::IncomeTaxChoice`]
pub fn is_income_tax(category: &str) -> bool {
    INCOME_TAX_CATEGORIES.contains(&category)
}
