use std::fmt;

use serde::{Deserialize, Serialize};

/// Canonical string identifier for one capability grant.
///
/// Actions are opaque once minted: consumers compare them by equality and
/// never parse them back apart. The `kind:qualifier` structure only matters
/// to [`Actions`], the one place actions are created.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Action(String);

impl Action {
    /// The canonical string form.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Action {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The action vocabulary.
///
/// One total constructor per capability kind. Because every kind has its own
/// constructor there is no runtime "unknown kind" condition; requesting a
/// kind that does not exist fails to compile.
#[derive(Debug, Clone, Copy, Default)]
pub struct Actions;

impl Actions {
    /// Granted to every principal allowed into a space at all.
    pub fn login() -> Action {
        Action("login:".into())
    }

    /// Access to an API operation tag.
    pub fn api(operation: &str) -> Action {
        Action(format!("api:{operation}"))
    }

    /// Access to an application.
    pub fn app(app_id: &str) -> Action {
        Action(format!("app:{app_id}"))
    }

    /// A space-level management operation.
    pub fn space(operation: &str) -> Action {
        Action(format!("space:{operation}"))
    }

    /// One operation over one saved-object type.
    pub fn saved_object(type_id: &str, operation: &str) -> Action {
        Action(format!("saved_object:{type_id}/{operation}"))
    }

    /// Visibility of one UI capability of a feature.
    pub fn ui(feature_id: &str, capability: &str) -> Action {
        Action(format!("ui:{feature_id}/{capability}"))
    }
}
