use crate::error::Error;
use crate::validation::{self, Validate, MAX_NAME_LEN};
use crate::{users, Id};
use entity::roles::Role;
use log::*;
use sea_orm::DatabaseConnection;

pub use entity_api::user::{find_all, find_by_email, find_by_id, AuthSession, Backend, Credentials};

/// Creates a self-registered account. New accounts are founders: they get
/// the `startup` role and nothing else.
pub async fn sign_up(db: &DatabaseConnection, user_model: users::Model) -> Result<users::Model, Error> {
    user_model.validate()?;

    let email = user_model.email.trim().to_lowercase();
    if find_by_email(db, &email).await?.is_some() {
        return Err(Error::conflict());
    }

    let user = entity_api::user::create_with_role(
        db,
        users::Model {
            email,
            ..user_model
        },
        Role::Startup,
    )
    .await?;
    info!("New account created: {}", user.id);
    Ok(user)
}

/// Lets a user change their own name and email.
pub async fn update_profile(
    db: &DatabaseConnection,
    user_id: Id,
    full_name: String,
    email: String,
) -> Result<users::Model, Error> {
    validation::required("full_name", &full_name, MAX_NAME_LEN)?;
    validation::email("email", &email)?;
    let email = email.trim().to_lowercase();

    if let Some(other) = find_by_email(db, &email).await? {
        if other.id != user_id {
            return Err(Error::conflict());
        }
    }

    Ok(entity_api::user::update_profile(db, user_id, full_name.trim().to_owned(), email).await?)
}

/// Replaces `user_id`'s role set on behalf of `acting_user`. An admin may not
/// take the admin role away from themselves.
pub async fn replace_roles(
    db: &DatabaseConnection,
    acting_user: &users::Model,
    user_id: Id,
    roles: Vec<Role>,
) -> Result<users::Model, Error> {
    if acting_user.id == user_id && !roles.contains(&Role::Admin) {
        return Err(Error::validation(
            "roles: you cannot remove your own admin role",
        ));
    }

    // 404 for an unknown user before touching the roles table
    let mut user = find_by_id(db, user_id).await?;
    user.roles = entity_api::user_role::replace_roles(db, user_id, &roles).await?;
    info!("User {} set roles of User {user_id} to {roles:?}", acting_user.id);
    Ok(user)
}

/// Deletes an account on behalf of `acting_user`, who may not delete
/// themselves.
pub async fn delete(db: &DatabaseConnection, acting_user: &users::Model, user_id: Id) -> Result<(), Error> {
    if acting_user.id == user_id {
        return Err(Error::validation("id: you cannot delete your own account"));
    }
    entity_api::user::delete(db, user_id).await?;
    info!("User {} deleted User {user_id}", acting_user.id);
    Ok(())
}

/// Disables or re-enables `user_id` on behalf of `acting_user`, who may not
/// disable their own account.
pub async fn set_disabled(
    db: &DatabaseConnection,
    acting_user: &users::Model,
    user_id: Id,
    disabled: bool,
) -> Result<users::Model, Error> {
    if acting_user.id == user_id && disabled {
        return Err(Error::validation(
            "disabled: you cannot disable your own account",
        ));
    }
    let user = entity_api::user::set_disabled(db, user_id, disabled).await?;
    info!(
        "User {} set disabled={disabled} on User {user_id}",
        acting_user.id
    );
    Ok(user)
}

/// The post-login redirect target, kept only if it stays on this site.
pub fn local_redirect(next: Option<&str>) -> Option<String> {
    next.filter(|path| validation::is_local_path(path))
        .map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_redirect_keeps_site_paths_only() {
        assert_eq!(
            local_redirect(Some("/admin/programs")),
            Some("/admin/programs".to_string())
        );
        assert_eq!(local_redirect(Some("//evil.example.com")), None);
        assert_eq!(local_redirect(Some("https://evil.example.com")), None);
        assert_eq!(local_redirect(None), None);
    }

    #[cfg(feature = "mock")]
    mod db {
        use super::*;
        use crate::error::{DomainErrorKind, InternalErrorKind};
        use chrono::Utc;
        use sea_orm::{DatabaseBackend, MockDatabase};

        fn admin() -> users::Model {
            let now = Utc::now();
            users::Model {
                id: Id::new_v4(),
                email: "admin@incubator.local".to_owned(),
                full_name: "Site Admin".to_owned(),
                password: String::new(),
                disabled: false,
                created_at: now.into(),
                updated_at: now.into(),
                roles: vec![],
            }
        }

        fn is_validation(err: &Error) -> bool {
            matches!(
                err.error_kind,
                DomainErrorKind::Internal(InternalErrorKind::Validation(_))
            )
        }

        #[tokio::test]
        async fn an_admin_cannot_drop_their_own_admin_role() {
            let admin = admin();
            let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

            let result = replace_roles(&db, &admin, admin.id, vec![Role::Mentor]).await;

            assert!(is_validation(&result.unwrap_err()));
            assert!(db.into_transaction_log().is_empty());
        }

        #[tokio::test]
        async fn an_admin_cannot_delete_themselves() {
            let admin = admin();
            let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

            let result = delete(&db, &admin, admin.id).await;

            assert!(is_validation(&result.unwrap_err()));
            assert!(db.into_transaction_log().is_empty());
        }

        #[tokio::test]
        async fn an_admin_cannot_disable_themselves() {
            let admin = admin();
            let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

            let result = set_disabled(&db, &admin, admin.id, true).await;

            assert!(is_validation(&result.unwrap_err()));
            assert!(db.into_transaction_log().is_empty());
        }

        #[tokio::test]
        async fn an_admin_can_disable_another_account() -> Result<(), Error> {
            let admin = admin();
            let member = users::Model {
                id: Id::new_v4(),
                email: "founder@soilsense.io".to_owned(),
                ..admin.clone()
            };
            let db = MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[(member.clone(), None::<crate::user_roles::Model>)]])
                .append_query_results([[users::Model {
                    disabled: true,
                    ..member.clone()
                }]])
                .into_connection();

            let updated = set_disabled(&db, &admin, member.id, true).await?;

            assert!(updated.disabled);
            assert_eq!(db.into_transaction_log().len(), 2);
            Ok(())
        }

        #[tokio::test]
        async fn sign_up_racing_an_existing_email_is_a_conflict() {
            let mut user = admin();
            user.password = "long-enough-secret".to_owned();
            let db = MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<(users::Model, Option<crate::user_roles::Model>)>::new()])
                .append_query_errors([entity_api::db_errors::unique_violation()])
                .into_connection();

            let result = sign_up(&db, user).await;

            assert_eq!(result.unwrap_err().error_kind, Error::conflict().error_kind);
        }

        #[tokio::test]
        async fn sign_up_rejects_short_passwords_before_any_query() {
            let mut user = admin();
            user.password = "short".to_owned();
            let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

            let result = sign_up(&db, user).await;

            assert!(is_validation(&result.unwrap_err()));
            assert!(db.into_transaction_log().is_empty());
        }
    }
}
