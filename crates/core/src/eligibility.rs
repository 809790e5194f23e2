//! Drive eligibility evaluated against a student's academic record.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::{drive::EligibilityCriteria, student::StudentRecord};

/// One failed eligibility rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum IneligibilityReason {
    CgpaBelowMinimum { required: f32, actual: f32 },
    BranchNotAllowed { branch: String },
    YearNotAllowed { year: u16 },
    TooManyBacklogs { allowed: u32, actual: u32 },
}

impl fmt::Display for IneligibilityReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CgpaBelowMinimum { required, actual } => {
                write!(f, "CGPA {} is below the required {}", actual, required)
            }
            Self::BranchNotAllowed { branch } => write!(f, "branch {} is not eligible", branch),
            Self::YearNotAllowed { year } => write!(f, "graduation year {} is not eligible", year),
            Self::TooManyBacklogs { allowed, actual } => write!(
                f,
                "{} active backlogs exceed the allowed {}",
                actual, allowed
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EligibilityVerdict {
    pub eligible: bool,
    pub reasons: Vec<IneligibilityReason>,
}

impl EligibilityVerdict {
    pub fn from_reasons(reasons: Vec<IneligibilityReason>) -> Self {
        Self {
            eligible: reasons.is_empty(),
            reasons,
        }
    }

    /// Failed rules joined into one sentence, empty when eligible.
    pub fn summary(&self) -> String {
        self.reasons
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ")
    }
}

pub trait EligibilityPolicy: Send + Sync {
    fn evaluate(&self, criteria: &EligibilityCriteria, student: &StudentRecord)
    -> EligibilityVerdict;
}

/// Applies every criterion a drive publishes and reports all failures.
#[derive(Debug, Default, Clone, Copy)]
pub struct CriteriaPolicy;

impl EligibilityPolicy for CriteriaPolicy {
    fn evaluate(
        &self,
        criteria: &EligibilityCriteria,
        student: &StudentRecord,
    ) -> EligibilityVerdict {
        let mut reasons = Vec::new();

        if student.cgpa < criteria.min_cgpa {
            reasons.push(IneligibilityReason::CgpaBelowMinimum {
                required: criteria.min_cgpa,
                actual: student.cgpa,
            });
        }

        if !criteria.allowed_branches.is_empty()
            && !criteria
                .allowed_branches
                .iter()
                .any(|b| b.eq_ignore_ascii_case(&student.branch))
        {
            reasons.push(IneligibilityReason::BranchNotAllowed {
                branch: student.branch.clone(),
            });
        }

        if !criteria.allowed_years.is_empty()
            && !criteria.allowed_years.contains(&student.graduation_year)
        {
            reasons.push(IneligibilityReason::YearNotAllowed {
                year: student.graduation_year,
            });
        }

        if student.active_backlogs > criteria.max_backlogs {
            reasons.push(IneligibilityReason::TooManyBacklogs {
                allowed: criteria.max_backlogs,
                actual: student.active_backlogs,
            });
        }

        EligibilityVerdict::from_reasons(reasons)
    }
}
