pub use super::applications::Entity as Applications;
pub use super::contact_submissions::Entity as ContactSubmissions;
pub use super::event_registrations::Entity as EventRegistrations;
pub use super::events::Entity as Events;
pub use super::hero_banners::Entity as HeroBanners;
pub use super::media_assets::Entity as MediaAssets;
pub use super::mentors::Entity as Mentors;
pub use super::programs::Entity as Programs;
pub use super::startups::Entity as Startups;
pub use super::user_roles::Entity as UserRoles;
pub use super::users::Entity as Users;
