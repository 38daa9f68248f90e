use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

const ENUM_TYPES: &[(&str, &[&str])] = &[
    ("role", &["admin", "startup", "mentor", "investor"]),
    (
        "program_category",
        &["pre_incubation", "incubation", "accelerator"],
    ),
    (
        "event_type",
        &[
            "workshop",
            "webinar",
            "networking",
            "demo_day",
            "hackathon",
            "other",
        ],
    ),
    ("startup_status", &["active", "graduated", "inactive"]),
    (
        "application_status",
        &["pending", "under_review", "approved", "rejected"],
    ),
    ("contact_status", &["new", "read", "archived"]),
];

fn create_type_sql(name: &str, variants: &[&str]) -> String {
    let values = variants
        .iter()
        .map(|variant| format!("'{variant}'"))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "DO $$ BEGIN
            CREATE TYPE incubator_platform.{name} AS ENUM ({values});
        EXCEPTION
            WHEN duplicate_object THEN null;
        END $$;"
    )
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for (name, variants) in ENUM_TYPES {
            manager
                .get_connection()
                .execute_unprepared(&create_type_sql(name, variants))
                .await?;
        }
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for (name, _) in ENUM_TYPES.iter().rev() {
            manager
                .get_connection()
                .execute_unprepared(&format!(
                    "DROP TYPE IF EXISTS incubator_platform.{name};"
                ))
                .await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_type_sql_quotes_each_variant() {
        let sql = create_type_sql("contact_status", &["new", "read", "archived"]);
        assert!(sql.contains(
            "CREATE TYPE incubator_platform.contact_status AS ENUM ('new', 'read', 'archived');"
        ));
        assert!(sql.contains("duplicate_object"));
    }
}
