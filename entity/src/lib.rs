use uuid::Uuid;

pub mod prelude;

// Site content
pub mod event_registrations;
pub mod events;
pub mod hero_banners;
pub mod media_assets;
pub mod mentors;
pub mod programs;
pub mod startups;

// Submissions
pub mod applications;
pub mod contact_submissions;

// Accounts
pub mod roles;
pub mod user_roles;
pub mod users;

// Postgres enums
pub mod application_status;
pub mod contact_status;
pub mod event_type;
pub mod program_category;
pub mod startup_status;

/// A type alias that represents any Entity's internal id field data type.
/// Aliased so that it's easy to change the underlying type if necessary.
pub type Id = Uuid;
