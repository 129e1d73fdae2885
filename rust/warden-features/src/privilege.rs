use serde::{Deserialize, Serialize};

/// Saved-object access declared by a privilege: types it may write (`all`)
/// and types it may only read (`read`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedObjectAccess {
    /// Saved-object types with full access.
    #[serde(default)]
    pub all: Vec<String>,
    /// Saved-object types with read-only access.
    #[serde(default)]
    pub read: Vec<String>,
}

/// Declaration of one feature privilege: a primary like `all`/`read`, or a
/// sub-feature privilege.
///
/// The qualifiers here are abstract. The privilege builder expands them into
/// canonical action strings (`saved_object:{type}/{operation}` and so on).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrivilegeDeclaration {
    /// Privilege id, unique within its feature (e.g. `all`, `create_alert`).
    pub id: String,
    /// Human readable name.
    pub name: String,
    /// Saved-object access granted by this privilege.
    #[serde(default)]
    pub saved_object: SavedObjectAccess,
    /// UI capabilities granted by this privilege.
    #[serde(default)]
    pub ui: Vec<String>,
    /// API operation tags granted by this privilege.
    #[serde(default)]
    pub api: Vec<String>,
    /// Applications this privilege grants access to.
    #[serde(default)]
    pub app: Vec<String>,
}

impl PrivilegeDeclaration {
    /// Create a declaration with the given id and name and no grants.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_deserializes_with_defaulted_qualifiers() {
        let declaration: PrivilegeDeclaration =
            serde_json::from_str(r#"{ "id": "read", "name": "Read" }"#).unwrap();

        assert_eq!(declaration.id, "read");
        assert!(declaration.saved_object.all.is_empty());
        assert!(declaration.saved_object.read.is_empty());
        assert!(declaration.ui.is_empty());
        assert!(declaration.api.is_empty());
        assert!(declaration.app.is_empty());
    }
}
