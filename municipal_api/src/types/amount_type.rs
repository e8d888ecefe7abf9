//! Accounting basis of a figure in the income and expenditure cube.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which kind of amount a figure represents.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AmountType {
    /// Audited actual.
    #[default]
    #[serde(rename = "AUDA")]
    AuditedActual,

    /// Actual (unaudited).
    #[serde(rename = "ACT")]
    Actual,

    /// Original budget.
    #[serde(rename = "ORGB")]
    OriginalBudget,

    /// Adjusted budget.
    #[serde(rename = "ADJB")]
    AdjustedBudget,
}

impl AmountType {
    /// Every amount type, in the order the backend documents them.
    pub const ALL: [AmountType; 4] = [
        AmountType::AuditedActual,
        AmountType::Actual,
        AmountType::OriginalBudget,
        AmountType::AdjustedBudget,
    ];

    /// The wire code sent as `amount_type`.
    pub fn code(&self) -> &'static str {
        match self {
            AmountType::AuditedActual => "AUDA",
            AmountType::Actual => "ACT",
            AmountType::OriginalBudget => "ORGB",
            AmountType::AdjustedBudget => "ADJB",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            AmountType::AuditedActual => "Audited Actual",
            AmountType::Actual => "Actual",
            AmountType::OriginalBudget => "Original Budget",
            AmountType::AdjustedBudget => "Adjusted Budget",
        }
    }
}

impl std::fmt::Display for AmountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())?;
        Ok(())
    }
}

impl FromStr for AmountType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AUDA" => Ok(AmountType::AuditedActual),
            "ACT" => Ok(AmountType::Actual),
            "ORGB" => Ok(AmountType::OriginalBudget),
            "ADJB" => Ok(AmountType::AdjustedBudget),
            _ => Err(()),
        }
    }
}
