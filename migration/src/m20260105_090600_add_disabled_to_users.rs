use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Disabled accounts keep their data but can no longer sign in
        manager
            .alter_table(
                Table::alter()
                    .table((Alias::new("incubator_platform"), Alias::new("users")))
                    .add_column(
                        ColumnDef::new(Alias::new("disabled"))
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table((Alias::new("incubator_platform"), Alias::new("users")))
                    .drop_column(Alias::new("disabled"))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}
