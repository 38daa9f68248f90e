use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Applications outlive their program so the admin history stays intact
        let create_applications_sql = r#"
            CREATE TABLE IF NOT EXISTS incubator_platform.applications (
                id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
                user_id UUID NOT NULL REFERENCES incubator_platform.users(id) ON DELETE CASCADE,
                program_id UUID NOT NULL REFERENCES incubator_platform.programs(id) ON DELETE RESTRICT,
                startup_name VARCHAR(255) NOT NULL,
                program_type incubator_platform.program_category NOT NULL,
                answers JSONB NOT NULL DEFAULT '{}'::jsonb,
                status incubator_platform.application_status NOT NULL DEFAULT 'pending',
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
            )
        "#;

        manager
            .get_connection()
            .execute_unprepared(create_applications_sql)
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                "CREATE INDEX IF NOT EXISTS idx_applications_status_created
                 ON incubator_platform.applications(status, created_at DESC)",
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                "CREATE INDEX IF NOT EXISTS idx_applications_user
                 ON incubator_platform.applications(user_id)",
            )
            .await?;

        let create_contact_submissions_sql = r#"
            CREATE TABLE IF NOT EXISTS incubator_platform.contact_submissions (
                id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
                full_name VARCHAR(255) NOT NULL,
                email VARCHAR(255) NOT NULL,
                subject VARCHAR(300) NOT NULL,
                message TEXT NOT NULL,
                status incubator_platform.contact_status NOT NULL DEFAULT 'new',
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
            )
        "#;

        manager
            .get_connection()
            .execute_unprepared(create_contact_submissions_sql)
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                "CREATE INDEX IF NOT EXISTS idx_contact_submissions_status_created
                 ON incubator_platform.contact_submissions(status, created_at DESC)",
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP TABLE IF EXISTS incubator_platform.contact_submissions")
            .await?;

        manager
            .get_connection()
            .execute_unprepared("DROP TABLE IF EXISTS incubator_platform.applications")
            .await?;

        Ok(())
    }
}
