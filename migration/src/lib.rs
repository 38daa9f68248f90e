pub use sea_orm_migration::prelude::*;

mod m20260105_090000_create_schema_and_base_db_setup;
mod m20260105_090100_create_enum_types;
mod m20260105_090200_create_account_tables;
mod m20260105_090300_create_content_tables;
mod m20260105_090400_create_submission_tables;
mod m20260105_090500_add_initial_admin_user;
mod m20260105_090600_add_disabled_to_users;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_090000_create_schema_and_base_db_setup::Migration),
            Box::new(m20260105_090100_create_enum_types::Migration),
            Box::new(m20260105_090200_create_account_tables::Migration),
            Box::new(m20260105_090300_create_content_tables::Migration),
            Box::new(m20260105_090400_create_submission_tables::Migration),
            Box::new(m20260105_090500_add_initial_admin_user::Migration),
            Box::new(m20260105_090600_add_disabled_to_users::Migration),
        ]
    }
}
