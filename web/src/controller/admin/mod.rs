//! Admin console endpoints under `/admin`. Every route here sits behind the
//! `require_admin` gate.
pub(crate) mod application_controller;
pub(crate) mod contact_submission_controller;
pub(crate) mod dashboard_controller;
pub(crate) mod event_controller;
pub(crate) mod hero_banner_controller;
pub(crate) mod media_asset_controller;
pub(crate) mod mentor_controller;
pub(crate) mod program_controller;
pub(crate) mod startup_controller;
pub(crate) mod user_controller;
