use serde::{Deserialize, Serialize};

use crate::{PrivilegeDeclaration, SubFeature, SubFeaturePrivilegeDeclaration};

/// A registrable feature: primary privileges plus optional sub-features.
///
/// Primary privileges are ordered, and the order is load-bearing: it is the
/// precedence used when resolving which primary privilege explains an
/// effective grant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    /// Unique feature id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Applications backing this feature.
    #[serde(default)]
    pub app: Vec<String>,
    /// Primary privileges in precedence order (conventionally `all`, `read`).
    pub privileges: Vec<PrivilegeDeclaration>,
    /// Sub-features in declaration order.
    #[serde(default)]
    pub sub_features: Vec<SubFeature>,
}

impl Feature {
    /// All sub-feature privilege declarations, in depth-first order: each
    /// sub-feature, then each of its groups, then the group members.
    pub fn sub_feature_privileges(
        &self,
    ) -> impl Iterator<Item = &SubFeaturePrivilegeDeclaration> {
        self.sub_features
            .iter()
            .flat_map(|sub_feature| sub_feature.groups.iter())
            .flat_map(|group| group.privileges.iter())
    }
}
