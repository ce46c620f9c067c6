//! Error types for editor operations.

use thiserror::Error;

use crate::platform::SurfaceError;
use crate::types::BlockId;

/// Contract violations reported by the store and the editor session.
///
/// None of these can be triggered by valid user input. Operations that return
/// one of them leave all state untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EditorError {
    /// Index does not address a block in the current list.
    #[error("block index {index} out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// Replacement block does not carry the id of the block it replaces.
    #[error("block at index {index} has id {expected}, replacement has id {found}")]
    IdMismatch {
        index: usize,
        expected: BlockId,
        found: BlockId,
    },

    /// No block with this id exists in the store.
    #[error("unknown block {0}")]
    UnknownBlock(BlockId),

    /// The editing surface rejected an operation.
    #[error("surface error: {0}")]
    Surface(#[from] SurfaceError),
}

impl EditorError {
    /// Whether this error means the caller broke the store's contract, as
    /// opposed to the surface failing.
    pub fn is_contract_violation(&self) -> bool {
        !matches!(self, Self::Surface(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contract_violations() {
        assert!(EditorError::IndexOutOfRange { index: 3, len: 1 }.is_contract_violation());
        assert!(EditorError::UnknownBlock(BlockId::from_seq(9)).is_contract_violation());
        let surface = EditorError::from(SurfaceError::from("execCommand(bold) failed"));
        assert!(!surface.is_contract_violation());
    }

    #[test]
    fn test_messages() {
        let err = EditorError::IndexOutOfRange { index: 3, len: 1 };
        assert_eq!(err.to_string(), "block index 3 out of range (len 1)");
    }
}
