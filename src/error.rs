//! Planning error types.

use thiserror::Error;

use crate::models::RepairKind;

/// Errors raised when road data, workforce settings, or policy values would
/// make the planning arithmetic undefined.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    /// Road width or length is zero, negative, or non-finite.
    #[error("invalid road dimensions: width={width}, length={length}")]
    InvalidDimension {
        /// Offending width.
        width: f64,
        /// Offending length.
        length: f64,
    },

    #[error("worker count must be positive, got {0}")]
    InvalidWorkerCount(u32),

    #[error("available money must be a non-negative number, got {0}")]
    InvalidBudget(f64),

    /// A cost rate is negative or non-finite.
    #[error("invalid {kind} cost rate: {rate}")]
    InvalidRate {
        /// Repair type the rate belongs to.
        kind: RepairKind,
        /// Offending rate.
        rate: f64,
    },

    #[error("invalid density thresholds: patching={patching}, resurfacing={resurfacing}")]
    InvalidThresholds { patching: f64, resurfacing: f64 },
}

pub type PlanResult<T> = Result<T, PlanError>;
