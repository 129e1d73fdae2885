use serde::{Deserialize, Serialize};

use crate::PrivilegeDeclaration;

/// How members of a sub-feature privilege group may be combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubFeatureGroupType {
    /// Members may be granted in any combination.
    Independent,
    /// At most one member may be granted at a time.
    MutuallyExclusive,
}

/// Which composed primary privileges imply a sub-feature privilege by
/// default.
///
/// The `minimal_` variants of the primaries never imply sub-features; that
/// is what makes them minimal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncludeIn {
    /// Implied by the `all` primary only.
    #[default]
    All,
    /// Implied by both the `read` and `all` primaries.
    Read,
    /// Never implied; must be granted explicitly.
    None,
}

/// Declaration of one sub-feature privilege together with the primaries
/// that imply it by default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubFeaturePrivilegeDeclaration {
    /// The privilege itself.
    #[serde(flatten)]
    pub declaration: PrivilegeDeclaration,
    /// Which composed primaries include this privilege.
    #[serde(default)]
    pub include_in: IncludeIn,
}

/// Group of sub-feature privileges sharing a combination rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubFeatureGroup {
    /// Combination rule for the group members.
    pub group_type: SubFeatureGroupType,
    /// The privileges, in declaration order.
    pub privileges: Vec<SubFeaturePrivilegeDeclaration>,
}

/// A named cluster of privilege groups nested under a feature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubFeature {
    /// Display name.
    pub name: String,
    /// Privilege groups, in declaration order.
    pub groups: Vec<SubFeatureGroup>,
}
