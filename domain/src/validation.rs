//! Input checks run before any write. Each failure names the offending field
//! so the client can point at it.

use crate::error::Error;
use email_address::EmailAddress;
use entity::{
    applications, contact_submissions, event_registrations, events, hero_banners, media_assets,
    mentors, programs, startups, users,
};
use url::Url;

pub const MAX_NAME_LEN: usize = 200;
pub const MAX_SUBJECT_LEN: usize = 300;
pub const MAX_TEXT_LEN: usize = 5000;
pub const MAX_EXPERTISE_ITEMS: usize = 20;
pub const MIN_PASSWORD_LEN: usize = 8;

pub trait Validate {
    fn validate(&self) -> Result<(), Error>;
}

/// Non-blank after trimming and at most `max_len` characters.
pub fn required(field: &str, value: &str, max_len: usize) -> Result<(), Error> {
    if value.trim().is_empty() {
        return Err(Error::validation(format!("{field} must not be blank")));
    }
    max_length(field, value, max_len)
}

/// Leaves something to build a public URL slug from.
pub fn sluggable(field: &str, value: &str) -> Result<(), Error> {
    if entity_api::slug::from_name(value).is_none() {
        return Err(Error::validation(format!(
            "{field} must contain at least one letter or digit"
        )));
    }
    Ok(())
}

pub fn max_length(field: &str, value: &str, max_len: usize) -> Result<(), Error> {
    if value.chars().count() > max_len {
        return Err(Error::validation(format!(
            "{field} must be at most {max_len} characters"
        )));
    }
    Ok(())
}

pub fn optional_text(field: &str, value: Option<&str>, max_len: usize) -> Result<(), Error> {
    match value {
        Some(value) => max_length(field, value, max_len),
        None => Ok(()),
    }
}

pub fn email(field: &str, value: &str) -> Result<(), Error> {
    if !EmailAddress::is_valid(value.trim()) {
        return Err(Error::validation(format!(
            "{field} must be a valid email address"
        )));
    }
    Ok(())
}

fn is_web_url(value: &str) -> bool {
    match Url::parse(value) {
        Ok(url) => matches!(url.scheme(), "http" | "https") && url.host().is_some(),
        Err(_) => false,
    }
}

/// An absolute `http` or `https` URL.
pub fn url(field: &str, value: &str) -> Result<(), Error> {
    if !is_web_url(value) {
        return Err(Error::validation(format!(
            "{field} must be an absolute http(s) URL"
        )));
    }
    Ok(())
}

pub fn optional_url(field: &str, value: Option<&str>) -> Result<(), Error> {
    match value {
        Some(value) => url(field, value),
        None => Ok(()),
    }
}

/// A site-local path such as `/programs`. Protocol-relative `//host` paths
/// point off-site and are rejected.
pub fn is_local_path(value: &str) -> bool {
    value.starts_with('/') && !value.starts_with("//") && !value.contains('\\')
}

/// A link target that is either a local path or an absolute http(s) URL.
pub fn optional_link(field: &str, value: Option<&str>) -> Result<(), Error> {
    match value {
        Some(value) if is_local_path(value) || is_web_url(value) => Ok(()),
        Some(_) => Err(Error::validation(format!(
            "{field} must be a local path or an absolute http(s) URL"
        ))),
        None => Ok(()),
    }
}

pub fn password(value: &str) -> Result<(), Error> {
    if value.chars().count() < MIN_PASSWORD_LEN {
        return Err(Error::validation(format!(
            "password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }
    Ok(())
}

impl Validate for programs::Model {
    fn validate(&self) -> Result<(), Error> {
        required("name", &self.name, MAX_NAME_LEN)?;
        sluggable("name", &self.name)?;
        required("description", &self.description, MAX_TEXT_LEN)?;
        required("duration", &self.duration, MAX_NAME_LEN)?;
        optional_url("application_url", self.application_url.as_deref())?;
        optional_url("image_url", self.image_url.as_deref())
    }
}

impl Validate for events::Model {
    fn validate(&self) -> Result<(), Error> {
        required("title", &self.title, MAX_NAME_LEN)?;
        required("description", &self.description, MAX_TEXT_LEN)?;
        optional_text("location", self.location.as_deref(), MAX_NAME_LEN)?;
        optional_url("online_url", self.online_url.as_deref())?;
        optional_url("banner_url", self.banner_url.as_deref())
    }
}

impl Validate for event_registrations::Model {
    fn validate(&self) -> Result<(), Error> {
        required("full_name", &self.full_name, MAX_NAME_LEN)?;
        email("email", &self.email)
    }
}

impl Validate for mentors::Model {
    fn validate(&self) -> Result<(), Error> {
        required("name", &self.name, MAX_NAME_LEN)?;
        required("role", &self.role, MAX_NAME_LEN)?;
        required("bio", &self.bio, MAX_TEXT_LEN)?;
        if self.expertise.len() > MAX_EXPERTISE_ITEMS {
            return Err(Error::validation(format!(
                "expertise must have at most {MAX_EXPERTISE_ITEMS} items"
            )));
        }
        for item in &self.expertise {
            required("expertise", item, MAX_NAME_LEN)?;
        }
        optional_text("companies", self.companies.as_deref(), MAX_TEXT_LEN)?;
        optional_url("linkedin_url", self.linkedin_url.as_deref())?;
        optional_url("photo_url", self.photo_url.as_deref())
    }
}

impl Validate for startups::Model {
    fn validate(&self) -> Result<(), Error> {
        required("name", &self.name, MAX_NAME_LEN)?;
        sluggable("name", &self.name)?;
        required("sector", &self.sector, MAX_NAME_LEN)?;
        required("stage", &self.stage, MAX_NAME_LEN)?;
        required("description", &self.description, MAX_TEXT_LEN)?;
        if matches!(self.team_size, Some(size) if size < 1) {
            return Err(Error::validation("team_size must be at least 1"));
        }
        optional_text("traction", self.traction.as_deref(), MAX_TEXT_LEN)
    }
}

impl Validate for applications::Model {
    fn validate(&self) -> Result<(), Error> {
        required("startup_name", &self.startup_name, MAX_NAME_LEN)?;
        if !self.answers.is_object() {
            return Err(Error::validation("answers must be a JSON object"));
        }
        Ok(())
    }
}

impl Validate for hero_banners::Model {
    fn validate(&self) -> Result<(), Error> {
        required("title", &self.title, MAX_NAME_LEN)?;
        optional_text("subtitle", self.subtitle.as_deref(), MAX_SUBJECT_LEN)?;
        optional_text("cta_label", self.cta_label.as_deref(), MAX_NAME_LEN)?;
        optional_link("cta_href", self.cta_href.as_deref())?;
        optional_url("image_url", self.image_url.as_deref())?;
        if self.sort_order < 0 {
            return Err(Error::validation("sort_order must not be negative"));
        }
        Ok(())
    }
}

impl Validate for contact_submissions::Model {
    fn validate(&self) -> Result<(), Error> {
        required("full_name", &self.full_name, MAX_NAME_LEN)?;
        email("email", &self.email)?;
        required("subject", &self.subject, MAX_SUBJECT_LEN)?;
        required("message", &self.message, MAX_TEXT_LEN)
    }
}

impl Validate for media_assets::Model {
    fn validate(&self) -> Result<(), Error> {
        required("file_name", &self.file_name, MAX_NAME_LEN)?;
        url("url", &self.url)?;
        required("content_type", &self.content_type, MAX_NAME_LEN)?;
        if matches!(self.size_bytes, Some(size) if size < 0) {
            return Err(Error::validation("size_bytes must not be negative"));
        }
        optional_text("alt_text", self.alt_text.as_deref(), MAX_SUBJECT_LEN)
    }
}

/// Sign-up: the account's name, email and chosen password.
impl Validate for users::Model {
    fn validate(&self) -> Result<(), Error> {
        required("full_name", &self.full_name, MAX_NAME_LEN)?;
        email("email", &self.email)?;
        password(&self.password)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{DomainErrorKind, InternalErrorKind};
    use chrono::Utc;
    use entity::Id;

    fn message(result: Result<(), Error>) -> String {
        match result.unwrap_err().error_kind {
            DomainErrorKind::Internal(InternalErrorKind::Validation(message)) => message,
            other => panic!("expected a validation error, got {other:?}"),
        }
    }

    fn banner() -> hero_banners::Model {
        let now = Utc::now();
        hero_banners::Model {
            id: Id::new_v4(),
            title: "Apply now".to_owned(),
            subtitle: None,
            cta_label: Some("Apply".to_owned()),
            cta_href: Some("/programs".to_owned()),
            image_url: None,
            sort_order: 0,
            is_active: true,
            created_at: now.into(),
            updated_at: now.into(),
        }
    }

    #[test]
    fn punctuation_only_names_are_rejected() {
        assert_eq!(
            message(sluggable("name", "!!!")),
            "name must contain at least one letter or digit"
        );
        assert!(required("name", "!!!", MAX_NAME_LEN).is_ok());
        assert!(sluggable("name", "C++ Bootcamp").is_ok());
    }

    #[test]
    fn blank_required_fields_are_rejected() {
        assert_eq!(
            message(required("name", "   ", MAX_NAME_LEN)),
            "name must not be blank"
        );
        assert!(required("name", "Core Incubation", MAX_NAME_LEN).is_ok());
    }

    #[test]
    fn length_is_counted_in_characters() {
        let name = "é".repeat(MAX_NAME_LEN);
        assert!(required("name", &name, MAX_NAME_LEN).is_ok());
        let too_long = "x".repeat(MAX_NAME_LEN + 1);
        assert_eq!(
            message(required("name", &too_long, MAX_NAME_LEN)),
            "name must be at most 200 characters"
        );
    }

    #[test]
    fn urls_must_be_absolute_http() {
        assert!(url("image_url", "https://cdn.example.com/a.png").is_ok());
        assert!(url("image_url", "http://example.com").is_ok());
        assert!(url("image_url", "/images/a.png").is_err());
        assert!(url("image_url", "ftp://example.com/a.png").is_err());
        assert!(url("image_url", "javascript:alert(1)").is_err());
    }

    #[test]
    fn emails_are_checked() {
        assert!(email("email", "ada@example.com").is_ok());
        assert_eq!(
            message(email("email", "not-an-email")),
            "email must be a valid email address"
        );
    }

    #[test]
    fn local_paths_exclude_protocol_relative_urls() {
        assert!(is_local_path("/admin/programs"));
        assert!(!is_local_path("//evil.example.com"));
        assert!(!is_local_path("https://evil.example.com"));
        assert!(!is_local_path("admin"));
    }

    #[test]
    fn banner_cta_accepts_local_paths_and_urls() {
        let mut model = banner();
        assert!(model.validate().is_ok());

        model.cta_href = Some("https://example.com/apply".to_owned());
        assert!(model.validate().is_ok());

        model.cta_href = Some("apply".to_owned());
        assert!(model.validate().is_err());
    }

    #[test]
    fn banner_sort_order_must_not_be_negative() {
        let mut model = banner();
        model.sort_order = -1;
        assert_eq!(message(model.validate()), "sort_order must not be negative");
    }

    #[test]
    fn short_passwords_are_rejected() {
        assert!(password("1234567").is_err());
        assert!(password("12345678").is_ok());
    }
}
