//! Outcome types returned by salary system operations.
//!
//! None of these are errors: an unknown id on removal or an increment on a
//! non-salaried employee are ordinary results that callers branch on.

use std::fmt;

use serde::Serialize;

use crate::error::PayrollError;

/// The result of removing an employee from the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RemovalOutcome {
    /// The employee existed and was removed.
    Removed {
        /// Name of the removed employee.
        name: String,
    },
    /// No employee had the requested id.
    NotFound {
        /// The id that was requested.
        id: String,
    },
}

impl RemovalOutcome {
    /// Returns true if an employee was removed.
    pub fn is_removed(&self) -> bool {
        matches!(self, RemovalOutcome::Removed { .. })
    }
}

impl fmt::Display for RemovalOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemovalOutcome::Removed { name } => write!(f, "Employee {} removed", name),
            RemovalOutcome::NotFound { id } => write!(f, "Employee {} not found", id),
        }
    }
}

/// The result of requesting an annual increment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum IncrementOutcome {
    /// The increment was applied to a salaried employee.
    Applied {
        /// Name of the employee.
        name: String,
    },
    /// The id is unknown or does not belong to a salaried employee.
    NotApplicable,
}

impl fmt::Display for IncrementOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IncrementOutcome::Applied { name } => write!(f, "Increment applied to {}", name),
            IncrementOutcome::NotApplicable => {
                f.write_str("Increment only applicable to salaried employees")
            }
        }
    }
}

/// An employee whose bulk adjustment was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdjustmentFailure {
    /// The employee id.
    pub id: String,
    /// Human-readable rejection reason.
    pub reason: String,
    /// The rejection itself.
    #[serde(skip)]
    pub error: PayrollError,
}

impl AdjustmentFailure {
    pub(crate) fn new(id: impl Into<String>, error: PayrollError) -> Self {
        Self {
            id: id.into(),
            reason: error.to_string(),
            error,
        }
    }
}

/// Summary of a bulk salary adjustment.
///
/// Every matching employee is attempted; a rejection for one employee never
/// stops the others. Rejected employees may still carry the deltas that were
/// applied before the failing field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BulkAdjustment {
    /// Number of employees of the requested type.
    pub matched: usize,
    /// Number of employees whose three deltas were all applied.
    pub adjusted: usize,
    /// Employees where at least one delta was rejected.
    pub failures: Vec<AdjustmentFailure>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removal_messages() {
        let removed = RemovalOutcome::Removed {
            name: "Asha Rao".to_string(),
        };
        let missing = RemovalOutcome::NotFound {
            id: "X999".to_string(),
        };

        assert_eq!(removed.to_string(), "Employee Asha Rao removed");
        assert_eq!(missing.to_string(), "Employee X999 not found");
        assert!(removed.is_removed());
        assert!(!missing.is_removed());
    }

    #[test]
    fn test_increment_messages() {
        let applied = IncrementOutcome::Applied {
            name: "Asha Rao".to_string(),
        };

        assert_eq!(applied.to_string(), "Increment applied to Asha Rao");
        assert_eq!(
            IncrementOutcome::NotApplicable.to_string(),
            "Increment only applicable to salaried employees"
        );
    }

    #[test]
    fn test_failure_keeps_error_and_reason() {
        let failure = AdjustmentFailure::new(
            "C001",
            PayrollError::validation("bonus", "Bonus cannot be negative"),
        );

        assert_eq!(failure.id, "C001");
        assert_eq!(
            failure.reason,
            "Validation failed for 'bonus': Bonus cannot be negative"
        );
        assert!(matches!(failure.error, PayrollError::Validation { .. }));
    }

    #[test]
    fn test_outcome_serialization_tags() {
        let json = serde_json::to_value(RemovalOutcome::NotFound {
            id: "X1".to_string(),
        })
        .unwrap();
        assert_eq!(json["outcome"], "not_found");
        assert_eq!(json["id"], "X1");
    }
}
