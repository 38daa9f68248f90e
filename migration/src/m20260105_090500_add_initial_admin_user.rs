use chrono::Utc;
use password_auth::generate_hash;
use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::{ConnectionTrait, DbBackend, Statement, Value};
use uuid::Uuid;

#[derive(DeriveMigrationName)]
pub struct Migration;

const ADMIN_EMAIL: &str = "admin@incubator.local";

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        insert_initial_admin_user(manager).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        delete_initial_admin_user(manager).await
    }
}

// NOTE: raw SQL keeps this migration independent of later entity changes.
async fn insert_initial_admin_user(manager: &SchemaManager<'_>) -> Result<(), DbErr> {
    let db = manager.get_connection();
    let now = Utc::now();

    let password_hash = generate_hash("password");

    let user_sql = r#"
        INSERT INTO incubator_platform.users (
            email, full_name, password, created_at, updated_at
        ) VALUES ($1, $2, $3, $4, $5)
        ON CONFLICT (email) DO UPDATE SET updated_at = EXCLUDED.updated_at
        RETURNING id
    "#;
    let user_row = db
        .query_one(Statement::from_sql_and_values(
            DbBackend::Postgres,
            user_sql,
            vec![
                Value::String(Some(Box::new(ADMIN_EMAIL.to_owned()))),
                Value::String(Some(Box::new("Site Admin".to_owned()))),
                Value::String(Some(Box::new(password_hash))),
                Value::ChronoDateTimeUtc(Some(Box::new(now))),
                Value::ChronoDateTimeUtc(Some(Box::new(now))),
            ],
        ))
        .await?
        .ok_or_else(|| DbErr::RecordNotInserted)?;
    let admin_user_id: Uuid = user_row.try_get("", "id")?;

    let role_sql = r#"
        INSERT INTO incubator_platform.user_roles (
            user_id, role, created_at, updated_at
        ) VALUES ($1, 'admin', $2, $3)
        ON CONFLICT (user_id, role) DO NOTHING
    "#;
    db.execute(Statement::from_sql_and_values(
        DbBackend::Postgres,
        role_sql,
        vec![
            Value::Uuid(Some(Box::new(admin_user_id))),
            Value::ChronoDateTimeUtc(Some(Box::new(now))),
            Value::ChronoDateTimeUtc(Some(Box::new(now))),
        ],
    ))
    .await?;

    Ok(())
}

async fn delete_initial_admin_user(manager: &SchemaManager<'_>) -> Result<(), DbErr> {
    let db = manager.get_connection();

    // user_roles rows cascade
    db.execute(Statement::from_sql_and_values(
        DbBackend::Postgres,
        "DELETE FROM incubator_platform.users WHERE email = $1",
        vec![Value::String(Some(Box::new(ADMIN_EMAIL.to_owned())))],
    ))
    .await?;

    Ok(())
}
