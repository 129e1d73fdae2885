use thiserror::Error;

/// Errors raised by catalog queries and the form calculator.
///
/// These indicate that the catalog and the data it is queried with are
/// mutually inconsistent. Callers are not expected to catch and continue;
/// the surrounding layer should surface a generic failure rather than
/// attempt partial results.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PrivilegeError {
    /// The feature id is not part of the catalog.
    #[error("unknown feature {feature_id:?}")]
    UnknownFeature {
        /// The requested feature id.
        feature_id: String,
    },

    /// The privilege id is not a sub-feature privilege of the feature.
    #[error("feature {feature_id:?} has no sub-feature privilege {privilege_id:?}")]
    UnknownSubFeaturePrivilege {
        /// The feature queried.
        feature_id: String,
        /// The requested sub-feature privilege id.
        privilege_id: String,
    },

    /// The chosen privilege id is not a member of the given group.
    #[error("privilege {privilege_id:?} is not a member of the group")]
    UnknownGroupMember {
        /// The requested privilege id.
        privilege_id: String,
    },

    /// The role has no entry at the requested index.
    #[error("role entry index {index} is out of bounds (role has {len} entries)")]
    EntryIndexOutOfBounds {
        /// The requested index.
        index: usize,
        /// Number of entries in the role.
        len: usize,
    },
}

/// Result type for privilege operations.
pub type PrivilegeResult<T> = Result<T, PrivilegeError>;
