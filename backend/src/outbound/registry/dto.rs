//! Wire DTOs for the registry transport.

use serde::Deserialize;

use crate::domain::ports::InvokeError;

/// Fault document returned by the registry when it rejects an operation.
///
/// Any failure body that does not carry both fields is treated as a plain
/// transport failure, never guessed into a fault.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct FaultDto {
    fault_code: String,
    fault_reason: String,
}

impl FaultDto {
    pub(super) fn into_invoke_error(self) -> InvokeError {
        InvokeError::Fault {
            code: self.fault_code,
            reason: self.fault_reason,
        }
    }
}
