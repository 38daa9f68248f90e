use super::error::{EntityApiErrorKind, Error};
use async_trait::async_trait;
use axum_login::{AuthnBackend, UserId};
use chrono::Utc;

use entity::roles::Role;
use entity::users::{ActiveModel, Column, Entity, Model};
use entity::{user_roles, Id};
use log::*;
use sea_orm::{
    entity::prelude::*,
    ActiveValue::{Set, Unchanged},
    ConnectionTrait, DatabaseConnection, QueryOrder, TransactionTrait,
};
use serde::Deserialize;
use std::sync::Arc;
use utoipa::{IntoParams, ToSchema};

pub async fn create(db: &impl ConnectionTrait, user_model: Model) -> Result<Model, Error> {
    debug!("New User Model to be inserted: {}", user_model.email);

    let now = Utc::now();
    let user_active_model: ActiveModel = ActiveModel {
        email: Set(user_model.email),
        full_name: Set(user_model.full_name),
        password: Set(generate_hash(user_model.password)),
        disabled: Set(false),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
        ..Default::default()
    };

    let mut created_user = user_active_model.insert(db).await?;

    // Newly created users will not have roles at this point so we will add an empty vec manually
    created_user.roles = Vec::new();
    Ok(created_user)
}

/// Creates a user and grants it `role` in one transaction, so an account never
/// exists without a role.
pub async fn create_with_role(
    db: &impl TransactionTrait,
    user_model: Model,
    role: Role,
) -> Result<Model, Error> {
    let txn = db.begin().await?;

    let mut user = create(&txn, user_model).await?;
    let now = Utc::now();

    let default_user_role = user_roles::ActiveModel {
        user_id: Set(user.id),
        role: Set(role),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
        ..Default::default()
    };

    let role = default_user_role.insert(&txn).await?;

    user.roles = vec![role];

    txn.commit().await?;

    Ok(user)
}

/// Updates the profile fields a user may change on their own account.
pub async fn update_profile(
    db: &DatabaseConnection,
    id: Id,
    full_name: String,
    email: String,
) -> Result<Model, Error> {
    let user = find_by_id(db, id).await?;
    let roles = user.roles.clone();

    let active_model: ActiveModel = ActiveModel {
        id: Unchanged(user.id),
        email: Set(email),
        full_name: Set(full_name),
        password: Unchanged(user.password),
        disabled: Unchanged(user.disabled),
        created_at: Unchanged(user.created_at),
        updated_at: Set(Utc::now().into()),
    };

    let mut updated = active_model.update(db).await?;
    updated.roles = roles;
    Ok(updated)
}

/// Disables or re-enables an account. The user's roles are kept either way.
pub async fn set_disabled(db: &DatabaseConnection, id: Id, disabled: bool) -> Result<Model, Error> {
    let user = find_by_id(db, id).await?;
    let roles = user.roles.clone();

    let active_model: ActiveModel = ActiveModel {
        id: Unchanged(user.id),
        disabled: Set(disabled),
        updated_at: Set(Utc::now().into()),
        ..Default::default()
    };

    let mut updated = active_model.update(db).await?;
    updated.roles = roles;
    Ok(updated)
}

pub async fn find_by_email(db: &impl ConnectionTrait, email: &str) -> Result<Option<Model>, Error> {
    let results = Entity::find()
        .filter(Column::Email.eq(email))
        .find_with_related(user_roles::Entity)
        .all(db)
        .await?;
    match results.into_iter().next() {
        Some((mut user, roles)) => {
            user.roles = roles;
            Ok(Some(user))
        }
        None => Ok(None),
    }
}

pub async fn find_by_id(db: &impl ConnectionTrait, id: Id) -> Result<Model, Error> {
    let results = Entity::find_by_id(id)
        .find_with_related(user_roles::Entity)
        .all(db)
        .await?;

    match results.into_iter().next() {
        Some((mut user, roles)) => {
            user.roles = roles;
            Ok(user)
        }
        None => Err(Error {
            source: None,
            error_kind: EntityApiErrorKind::RecordNotFound,
        }),
    }
}

/// Every user with their roles, newest account first.
pub async fn find_all(db: &impl ConnectionTrait) -> Result<Vec<Model>, Error> {
    let results = Entity::find()
        .order_by_desc(Column::CreatedAt)
        .find_with_related(user_roles::Entity)
        .all(db)
        .await?;

    Ok(results
        .into_iter()
        .map(|(mut user, roles)| {
            user.roles = roles;
            user
        })
        .collect())
}

pub async fn delete(db: &impl ConnectionTrait, user_id: Id) -> Result<(), Error> {
    let result = Entity::delete_by_id(user_id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(Error::not_found());
    }
    Ok(())
}

pub fn generate_hash(password: String) -> String {
    password_auth::generate_hash(password)
}

async fn authenticate_user(creds: Credentials, user: Model) -> Result<Option<Model>, Error> {
    if user.disabled {
        warn!("Sign-in refused for disabled account {}", user.id);
        return Ok(None);
    }
    match password_auth::verify_password(creds.password, &user.password) {
        Ok(_) => Ok(Some(user)),
        Err(_) => Err(Error {
            source: None,
            error_kind: EntityApiErrorKind::RecordUnauthenticated,
        }),
    }
}

#[derive(Debug, Clone)]
pub struct Backend {
    db: Arc<DatabaseConnection>,
}

#[derive(Debug, Clone, ToSchema, IntoParams, Deserialize)]
#[schema(as = entity_api::user::Credentials)] // OpenAPI schema
pub struct Credentials {
    pub email: String,
    pub password: String,
    /// Where to send the browser after a successful login
    pub next: Option<String>,
}

impl Backend {
    pub fn new(db: &Arc<DatabaseConnection>) -> Self {
        Self {
            // Arc is cloned, but the source DatabaseConnection refers to the same instance
            // as the one passed in to new() (see the Arc documentation for more info)
            db: Arc::clone(db),
        }
    }
}

#[async_trait]
impl AuthnBackend for Backend {
    type User = Model;
    type Credentials = Credentials;
    type Error = Error;

    async fn authenticate(
        &self,
        creds: Self::Credentials,
    ) -> Result<Option<Self::User>, Self::Error> {
        match find_by_email(self.db.as_ref(), &creds.email).await? {
            Some(user) => authenticate_user(creds, user).await,
            None => Err(Error {
                source: None,
                error_kind: EntityApiErrorKind::RecordUnauthenticated,
            }),
        }
    }

    // Runs on every authenticated request, so role changes made in the admin
    // console apply on the user's next request.
    async fn get_user(&self, user_id: &UserId<Self>) -> Result<Option<Self::User>, Self::Error> {
        match find_by_id(self.db.as_ref(), *user_id).await {
            // Disabling an account ends its open sessions
            Ok(user) if user.disabled => Ok(None),
            Ok(user) => Ok(Some(user)),
            Err(Error {
                error_kind: EntityApiErrorKind::RecordNotFound,
                ..
            }) => Ok(None),
            Err(e) => Err(e),
        }
    }
}

pub type AuthSession = axum_login::AuthSession<Backend>;

#[cfg(test)]
// We need to gate seaORM's mock feature behind conditional compilation because
// the feature removes the Clone trait implementation from seaORM's DatabaseConnection.
// see https://github.com/SeaQL/sea-orm/issues/830
#[cfg(feature = "mock")]
mod test {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, Transaction};

    fn user_model(id: Id) -> Model {
        let now = Utc::now();
        Model {
            id,
            email: "founder@soilsense.io".to_owned(),
            full_name: "Ada Founder".to_owned(),
            password: "correct horse battery".to_owned(),
            disabled: false,
            created_at: now.into(),
            updated_at: now.into(),
            roles: vec![],
        }
    }

    #[tokio::test]
    async fn find_by_email_loads_roles_in_one_query() -> Result<(), Error> {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

        let user_email = "test@test.com";
        let _ = find_by_email(&db, user_email).await;

        assert_eq!(
            db.into_transaction_log(),
            [Transaction::from_sql_and_values(
                DatabaseBackend::Postgres,
                r#"SELECT "users"."id" AS "A_id", "users"."email" AS "A_email", "users"."full_name" AS "A_full_name", "users"."password" AS "A_password", "users"."disabled" AS "A_disabled", "users"."created_at" AS "A_created_at", "users"."updated_at" AS "A_updated_at", "user_roles"."id" AS "B_id", CAST("user_roles"."role" AS "text") AS "B_role", "user_roles"."user_id" AS "B_user_id", "user_roles"."created_at" AS "B_created_at", "user_roles"."updated_at" AS "B_updated_at" FROM "incubator_platform"."users" LEFT JOIN "incubator_platform"."user_roles" ON "users"."id" = "user_roles"."user_id" WHERE "users"."email" = $1 ORDER BY "users"."id" ASC"#,
                [user_email.into()]
            )]
        );

        Ok(())
    }

    #[tokio::test]
    async fn create_with_role_returns_the_user_with_its_role() -> Result<(), Error> {
        let user_id = Id::new_v4();
        let user = user_model(user_id);
        let now = Utc::now();

        let user_role_model = user_roles::Model {
            id: Id::new_v4(),
            user_id,
            role: Role::Startup,
            created_at: now.into(),
            updated_at: now.into(),
        };

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[user.clone()]])
            .append_query_results([[user_role_model.clone()]])
            .into_connection();

        let created = create_with_role(&db, user.clone(), Role::Startup).await?;

        assert_eq!(created.id, user_id);
        assert_eq!(created.roles.len(), 1);
        assert_eq!(created.roles[0].role, Role::Startup);

        Ok(())
    }

    #[tokio::test]
    async fn create_with_role_does_not_store_the_plain_password() -> Result<(), Error> {
        let user = user_model(Id::new_v4());
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[user.clone()]])
            .append_query_results([[user_roles::Model {
                id: Id::new_v4(),
                user_id: user.id,
                role: Role::Startup,
                created_at: user.created_at,
                updated_at: user.updated_at,
            }]])
            .into_connection();

        create_with_role(&db, user.clone(), Role::Startup).await?;

        let log = format!("{:?}", db.into_transaction_log());
        assert!(!log.contains("correct horse battery"));
        assert!(log.contains("argon2"));

        Ok(())
    }

    #[tokio::test]
    async fn create_with_role_reports_a_duplicate_email_as_already_existing() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([crate::db_errors::unique_violation()])
            .into_connection();

        let result = create_with_role(&db, user_model(Id::new_v4()), Role::Startup).await;

        assert_eq!(
            result.unwrap_err().error_kind,
            EntityApiErrorKind::RecordAlreadyExists
        );
    }

    #[tokio::test]
    async fn delete_deletes_a_user() -> Result<(), Error> {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let user_id = Id::new_v4();
        delete(&db, user_id).await?;

        assert_eq!(
            db.into_transaction_log(),
            [Transaction::from_sql_and_values(
                DatabaseBackend::Postgres,
                r#"DELETE FROM "incubator_platform"."users" WHERE "users"."id" = $1"#,
                [user_id.into()]
            )]
        );

        Ok(())
    }

    #[tokio::test]
    async fn delete_of_a_missing_user_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let result = delete(&db, Id::new_v4()).await;

        assert_eq!(
            result.unwrap_err().error_kind,
            EntityApiErrorKind::RecordNotFound
        );
    }

    fn disabled_user() -> Model {
        Model {
            disabled: true,
            ..user_model(Id::new_v4())
        }
    }

    #[tokio::test]
    async fn authenticate_refuses_a_disabled_account() -> Result<(), Error> {
        let user = disabled_user();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[(user.clone(), None::<user_roles::Model>)]])
            .into_connection();
        let backend = Backend::new(&Arc::new(db));

        let authenticated = backend
            .authenticate(Credentials {
                email: user.email.clone(),
                password: "correct horse battery".to_owned(),
                next: None,
            })
            .await?;

        assert!(authenticated.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn get_user_drops_the_session_of_a_disabled_account() -> Result<(), Error> {
        let user = disabled_user();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[(user.clone(), None::<user_roles::Model>)]])
            .into_connection();
        let backend = Backend::new(&Arc::new(db));

        assert!(backend.get_user(&user.id).await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn set_disabled_writes_only_the_flag_and_keeps_roles() -> Result<(), Error> {
        let user = user_model(Id::new_v4());
        let role = user_roles::Model {
            id: Id::new_v4(),
            user_id: user.id,
            role: Role::Investor,
            created_at: user.created_at,
            updated_at: user.updated_at,
        };
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[(user.clone(), Some(role))]])
            .append_query_results([[Model {
                disabled: true,
                ..user.clone()
            }]])
            .into_connection();

        let updated = set_disabled(&db, user.id, true).await?;

        assert!(updated.disabled);
        assert_eq!(updated.role_set(), vec![Role::Investor]);
        let update = format!("{:?}", db.into_transaction_log()[1]);
        assert!(update.contains(r#"SET \"disabled\" = $1"#));
        assert!(update.contains("Bool(Some(true))"));
        assert!(!update.contains(r#"\"email\" = "#));
        Ok(())
    }

    #[tokio::test]
    async fn find_all_lists_the_newest_accounts_first() -> Result<(), Error> {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<(Model, Option<user_roles::Model>)>::new()])
            .into_connection();

        find_all(&db).await?;

        let sql = format!("{:?}", db.into_transaction_log()[0]);
        assert!(sql.contains(r#"ORDER BY \"users\".\"created_at\" DESC"#));
        Ok(())
    }
}
