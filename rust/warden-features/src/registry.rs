use crate::{Feature, FeatureRegistryError};

/// Lifecycle of a [`FeatureRegistry`].
///
/// The registry only ever transitions from `Open` to `Locked`, never back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum RegistryState {
    /// Accepting registrations.
    #[default]
    Open,
    /// Read at least once; registrations are rejected.
    Locked,
}

/// Registration-ordered collection of features.
///
/// The registry starts open and locks on the first read. Once privileges
/// have been derived from the registered features, later registrations must
/// fail loudly rather than silently changing the shape of already-issued
/// authorization decisions, so [`FeatureRegistry::register`] returns
/// [`FeatureRegistryError::Locked`] after that point.
#[derive(Debug, Default)]
pub struct FeatureRegistry {
    features: Vec<Feature>,
    state: RegistryState,
}

impl FeatureRegistry {
    /// Create an empty, open registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a feature.
    ///
    /// Fails if a feature with the same id is already registered, or if the
    /// registry has been locked by a prior read.
    pub fn register(&mut self, feature: Feature) -> Result<(), FeatureRegistryError> {
        if self.state == RegistryState::Locked {
            return Err(FeatureRegistryError::Locked);
        }

        if self.features.iter().any(|known| known.id == feature.id) {
            return Err(FeatureRegistryError::DuplicateFeature {
                feature_id: feature.id,
            });
        }

        self.features.push(feature);
        Ok(())
    }

    /// All registered features in registration order.
    ///
    /// The first call locks the registry.
    pub fn get_all(&mut self) -> &[Feature] {
        self.state = RegistryState::Locked;
        &self.features
    }

    /// Whether the registry has been locked by a read.
    pub fn is_locked(&self) -> bool {
        self.state == RegistryState::Locked
    }
}
