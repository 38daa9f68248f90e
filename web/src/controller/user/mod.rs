//! Self-service endpoints under `/users/{user_id}`: each acts on the signed-in
//! user's own records.
pub(crate) mod application_controller;
pub(crate) mod mentor_profile_controller;
pub(crate) mod startup_controller;
