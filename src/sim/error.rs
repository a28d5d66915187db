//! Shot errors

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a shot could not be launched
///
/// Every variant is recoverable: the ball and lifecycle are left as they were.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ShotError {
    /// No hoop to aim at
    #[error("invalid configuration: no hoops to aim at")]
    InvalidConfiguration,
    /// Ball sits directly under the rim centre, so there is no horizontal direction
    #[error("numeric instability: ball and hoop share the same X/Z position")]
    NumericInstability,
    /// A shot is already in the air
    #[error("a shot is already in flight")]
    ShotInProgress,
}
