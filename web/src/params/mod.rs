//! Typed parameters for endpoint inputs.
//!
//! Query strings and request bodies that are not plain entity models are
//! described here, so that malformed input is rejected by type before it
//! reaches the domain layer. Index parameters implement `IntoQueryFilterMap`
//! and `QuerySort` so they can be handed straight to the domain `find_by`
//! functions.

pub(crate) mod application;
pub(crate) mod contact_submission;
pub(crate) mod event;
pub(crate) mod mentor;
pub(crate) mod program;
pub(crate) mod sort;
pub(crate) mod startup;
pub(crate) mod user;
