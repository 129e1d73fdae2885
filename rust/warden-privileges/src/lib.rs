//! Role privilege evaluation engine.
//!
//! This crate computes, for a role and the set of assignable privileges
//! (global, per-space, per-feature, per-sub-feature), which privileges are
//! effectively granted and which may legally be assigned. It is consumed by
//! the role-editing UI (to decide what can be toggled and what must be
//! displayed as inherited) and by server-side authorization (which checks
//! flattened action lists).
//!
//! # Core Concepts
//!
//! ## Actions
//!
//! An [`Action`] is a canonical string identifier for one capability grant,
//! such as `saved_object:search/create` or `ui:discover/show`. Actions are
//! minted exclusively by the [`Actions`] vocabulary and compared by
//! equality.
//!
//! ## Privileges
//!
//! A [`Privilege`] is a named bundle of actions. Privileges relate to each
//! other through a covering test rather than equality: privilege `A` grants
//! privilege `B` when `A`'s action set contains every action of `B`. See
//! [`Privilege::grants_privilege`] and the aggregate form on
//! [`PrivilegeCollection`].
//!
//! ## Catalog
//!
//! The [`PrivilegeCatalog`] holds every declared privilege: the global and
//! space base privileges plus a [`SecuredFeature`] per feature (primary
//! privileges, their `minimal_` variants, and sub-feature privilege
//! groups). Action lists come from [`RawPrivileges`], which
//! [`build_raw_privileges`] derives from feature definitions.
//!
//! ## Roles
//!
//! A [`Role`] is an ordered list of [`RoleEntry`] values, each assigning
//! base and feature privilege ids to a scope. An entry whose `spaces` list
//! is empty or `["*"]` is the global entry; at most one such entry is
//! expected per role, and its grants apply to every space.
//!
//! ## Form calculator
//!
//! [`PrivilegeFormCalculator`] is a pure query layer over `(catalog, role)`.
//! Given the index of the entry being edited it answers what the effective
//! primary privilege of a feature is (explicit selection or base-privilege
//! coverage, primaries preferred over their `minimal_` variants), whether
//! sub-feature customization is in effect, and whether a space entry is
//! about to be saved with less access than the global entry already grants.
//!
//! # Failure semantics
//!
//! Queries for unknown feature ids, unknown sub-feature privilege ids, or
//! out-of-range entry indices are programmer errors and return a typed
//! [`PrivilegeError`]. Stale privilege ids inside persisted role entries
//! are the opposite case: they are tolerated and silently dropped during
//! resolution, so roles referencing privileges removed in a later release
//! degrade gracefully instead of failing to load.

mod error;
pub use error::*;

mod action;
pub use action::*;

mod privilege;
pub use privilege::*;

mod collection;
pub use collection::*;

mod role;
pub use role::*;

mod builder;
pub use builder::*;

mod secured;
pub use secured::*;

mod catalog;
pub use catalog::*;

mod calculator;
pub use calculator::*;

mod selection;
pub use selection::*;
