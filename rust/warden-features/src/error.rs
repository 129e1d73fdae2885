use thiserror::Error;

/// Errors raised by the feature registry.
///
/// Both variants are configuration errors: they indicate a mistake in the
/// registering code and should abort startup rather than be retried.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FeatureRegistryError {
    /// A feature with this id has already been registered.
    #[error("feature {feature_id:?} is already registered")]
    DuplicateFeature {
        /// The offending feature id.
        feature_id: String,
    },

    /// The registry has been read and no longer accepts registrations.
    #[error("feature registry is locked; register features before the first read")]
    Locked,
}
