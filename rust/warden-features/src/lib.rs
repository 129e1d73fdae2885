//! Feature declarations for the warden privilege engine.
//!
//! A [`Feature`] describes one unit of application functionality together
//! with the privileges that can be assigned over it: an ordered list of
//! primary privileges (conventionally `all` and `read`) and any number of
//! sub-features whose privileges are organized into independent or
//! mutually-exclusive groups.
//!
//! Features are collected in a [`FeatureRegistry`]. The registry is open for
//! registration until the first read, at which point it locks permanently:
//! privilege shapes must not change once authorization decisions have been
//! derived from them. Registering a duplicate feature id, or registering
//! after the lock, fails with a [`FeatureRegistryError`].
//!
//! Declarations are plain data. They carry abstract qualifiers (saved-object
//! types, UI capabilities, API tags) rather than concrete actions; turning a
//! declaration into canonical action strings is the job of the privilege
//! builder in `warden-privileges`.

mod error;
pub use error::*;

mod privilege;
pub use privilege::*;

mod sub_feature;
pub use sub_feature::*;

mod feature;
pub use feature::*;

mod registry;
pub use registry::*;
