//! Public URL slugs derived from display names.

use crate::error::{EntityApiErrorKind, Error};
use sea_orm::{ColumnTrait, Condition};
use slugify::slugify;

/// The slug for `name`, or `None` when nothing of the name survives.
pub fn from_name(name: &str) -> Option<String> {
    let slug = slugify!(name);
    (!slug.is_empty()).then_some(slug)
}

pub(crate) fn base_for(name: &str) -> Result<String, Error> {
    from_name(name).ok_or(Error {
        source: None,
        error_kind: EntityApiErrorKind::ValidationError,
    })
}

/// Matches `base` itself and every `base-N` that may already be in use.
pub(crate) fn taken_by(column: impl ColumnTrait, base: &str) -> Condition {
    Condition::any()
        .add(column.eq(base))
        .add(column.starts_with(format!("{base}-")))
}

/// `base` when it is free, otherwise the first of `base-2`, `base-3`, ...
/// not in `taken`.
pub(crate) fn first_free(base: &str, taken: &[String]) -> String {
    if !taken.iter().any(|slug| slug == base) {
        return base.to_owned();
    }
    let mut suffix = 2;
    loop {
        let candidate = format!("{base}-{suffix}");
        if !taken.contains(&candidate) {
            return candidate;
        }
        suffix += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_without_letters_or_digits_have_no_slug() {
        assert_eq!(from_name("!!!"), None);
        assert_eq!(from_name("   "), None);
        assert_eq!(
            base_for("!!!").unwrap_err().error_kind,
            EntityApiErrorKind::ValidationError
        );
    }

    #[test]
    fn punctuation_only_differences_collapse_to_one_slug() {
        assert_eq!(from_name("C++ Bootcamp"), from_name("C Bootcamp"));
        assert_eq!(from_name("C Bootcamp").as_deref(), Some("c-bootcamp"));
    }

    #[test]
    fn first_free_keeps_an_unused_base() {
        assert_eq!(first_free("c-bootcamp", &[]), "c-bootcamp");
        assert_eq!(
            first_free("c-bootcamp", &["c-bootcamp-2".to_owned()]),
            "c-bootcamp"
        );
    }

    #[test]
    fn first_free_skips_suffixes_already_taken() {
        let taken = vec![
            "c-bootcamp".to_owned(),
            "c-bootcamp-2".to_owned(),
            "c-bootcamp-4".to_owned(),
        ];
        assert_eq!(first_free("c-bootcamp", &taken), "c-bootcamp-3");
    }
}
