use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("CREATE SCHEMA IF NOT EXISTS incubator_platform;")
            .await?;

        manager
            .get_connection()
            .execute_unprepared("SET search_path TO incubator_platform, public;")
            .await?;

        // The application connects as `incubator`; it owns everything in the schema.
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DO $$ BEGIN
                    GRANT ALL PRIVILEGES ON DATABASE incubator TO incubator;
                    GRANT ALL ON SCHEMA incubator_platform TO incubator;

                    ALTER DEFAULT PRIVILEGES IN SCHEMA incubator_platform GRANT ALL ON TABLES TO incubator;
                    ALTER DEFAULT PRIVILEGES IN SCHEMA incubator_platform GRANT ALL ON SEQUENCES TO incubator;
                    ALTER DEFAULT PRIVILEGES IN SCHEMA incubator_platform GRANT ALL ON FUNCTIONS TO incubator;
                END $$;
            "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DO $$ BEGIN
                    ALTER DEFAULT PRIVILEGES IN SCHEMA incubator_platform REVOKE ALL ON FUNCTIONS FROM incubator;
                    ALTER DEFAULT PRIVILEGES IN SCHEMA incubator_platform REVOKE ALL ON SEQUENCES FROM incubator;
                    ALTER DEFAULT PRIVILEGES IN SCHEMA incubator_platform REVOKE ALL ON TABLES FROM incubator;
                    REVOKE ALL ON SCHEMA incubator_platform FROM incubator;
                    REVOKE ALL PRIVILEGES ON DATABASE incubator FROM incubator;
                END $$;
            "#,
            )
            .await?;

        // CASCADE removes every table, type and index in the schema
        manager
            .get_connection()
            .execute_unprepared("DROP SCHEMA IF EXISTS incubator_platform CASCADE;")
            .await?;

        Ok(())
    }
}
