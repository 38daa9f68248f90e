use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let create_users_sql = r#"
            CREATE TABLE IF NOT EXISTS incubator_platform.users (
                id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
                email VARCHAR(255) NOT NULL,
                full_name VARCHAR(255) NOT NULL DEFAULT '',
                password TEXT NOT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
            )
        "#;

        manager
            .get_connection()
            .execute_unprepared(create_users_sql)
            .await?;

        // Emails are stored lowercased, so a plain unique index is enough
        manager
            .get_connection()
            .execute_unprepared(
                "CREATE UNIQUE INDEX IF NOT EXISTS users_email_unique
                 ON incubator_platform.users(email)",
            )
            .await?;

        let create_user_roles_sql = r#"
            CREATE TABLE IF NOT EXISTS incubator_platform.user_roles (
                id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
                role incubator_platform.role NOT NULL,
                user_id UUID NOT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                CONSTRAINT fk_user_roles_user
                    FOREIGN KEY (user_id)
                    REFERENCES incubator_platform.users(id)
                    ON DELETE CASCADE
                    ON UPDATE CASCADE,
                UNIQUE(user_id, role)
            )
        "#;

        manager
            .get_connection()
            .execute_unprepared(create_user_roles_sql)
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP TABLE IF EXISTS incubator_platform.user_roles")
            .await?;

        manager
            .get_connection()
            .execute_unprepared("DROP TABLE IF EXISTS incubator_platform.users")
            .await?;

        Ok(())
    }
}
