use crate::{Coverage, Privilege};

/// Aggregate of resolved privileges, usually spanning one or more role
/// entries.
///
/// Collections are derived on demand by the catalog and live for the
/// duration of one calculation; they are never persisted.
#[derive(Debug, Clone, Default)]
pub struct PrivilegeCollection {
    privileges: Vec<Privilege>,
}

impl PrivilegeCollection {
    /// Create a collection over the given privileges.
    pub fn new(privileges: Vec<Privilege>) -> Self {
        Self { privileges }
    }

    /// The member privileges.
    pub fn privileges(&self) -> &[Privilege] {
        &self.privileges
    }

    /// Whether the collection has no members.
    pub fn is_empty(&self) -> bool {
        self.privileges.is_empty()
    }

    /// Aggregate covering test: does the union of actions across all
    /// members contain every action of `privilege`?
    pub fn grants_privilege(&self, privilege: &Privilege) -> Coverage {
        Coverage::compute(privilege.actions(), |action| {
            self.privileges
                .iter()
                .any(|member| member.actions().contains(action))
        })
    }

    /// The members that individually cover `privilege`, used to explain why
    /// something is granted.
    pub fn privileges_granting(&self, privilege: &Privilege) -> Vec<&Privilege> {
        self.privileges
            .iter()
            .filter(|member| member.grants_privilege(privilege).has_all_requested)
            .collect()
    }

    /// A new collection excluding the named privileges, matched by
    /// `(kind, id)`.
    ///
    /// This is the counterfactual query behind "can this privilege be
    /// unassigned without losing required access": test what the collection
    /// would grant without it, leaving the original untouched.
    pub fn without<'p>(&self, excluded: impl IntoIterator<Item = &'p Privilege>) -> Self {
        let excluded: Vec<&Privilege> = excluded.into_iter().collect();
        Self {
            privileges: self
                .privileges
                .iter()
                .filter(|member| !excluded.iter().any(|privilege| *privilege == *member))
                .cloned()
                .collect(),
        }
    }
}
