use super::error::{EntityApiErrorKind, Error};
use super::slug;
use chrono::Utc;
use entity::program_category::ProgramCategory;
use entity::programs::{ActiveModel, Column, Entity, Model};
use entity::Id;
use sea_orm::{
    entity::prelude::*,
    ActiveValue::{Set, Unchanged},
    ConnectionTrait, DatabaseConnection, QueryOrder, QuerySelect, TryIntoModel,
};

use log::*;

/// Inserts a program under a slug derived from its name. A slug already in use
/// gets the first free numeric suffix, e.g. `c-bootcamp-2`.
pub async fn create(db: &DatabaseConnection, program_model: Model) -> Result<Model, Error> {
    debug!("New Program Model to be inserted: {program_model:?}");

    let now = Utc::now();
    let slug = unique_slug(db, &program_model.name).await?;

    let program_active_model: ActiveModel = ActiveModel {
        slug: Set(slug),
        name: Set(program_model.name),
        description: Set(program_model.description),
        duration: Set(program_model.duration),
        category: Set(program_model.category),
        application_url: Set(program_model.application_url),
        image_url: Set(program_model.image_url),
        is_active: Set(program_model.is_active),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
        ..Default::default()
    };

    Ok(program_active_model.insert(db).await?)
}

async fn unique_slug(db: &impl ConnectionTrait, name: &str) -> Result<String, Error> {
    let base = slug::base_for(name)?;
    let taken: Vec<String> = Entity::find()
        .filter(slug::taken_by(Column::Slug, &base))
        .all(db)
        .await?
        .into_iter()
        .map(|program| program.slug)
        .collect();
    Ok(slug::first_free(&base, &taken))
}

/// Replaces every editable field of a program. The slug stays fixed so that
/// public links keep working after a rename.
pub async fn update(db: &DatabaseConnection, id: Id, model: Model) -> Result<Model, Error> {
    let program = find_by_id(db, id).await?;
    debug!("Existing Program model to be Updated: {program:?}");

    let active_model: ActiveModel = ActiveModel {
        id: Unchanged(program.id),
        name: Set(model.name),
        slug: Unchanged(program.slug),
        description: Set(model.description),
        duration: Set(model.duration),
        category: Set(model.category),
        application_url: Set(model.application_url),
        image_url: Set(model.image_url),
        is_active: Set(model.is_active),
        created_at: Unchanged(program.created_at),
        updated_at: Set(Utc::now().into()),
    };

    Ok(active_model.update(db).await?.try_into_model()?)
}

pub async fn delete_by_id(db: &DatabaseConnection, id: Id) -> Result<(), Error> {
    let program = find_by_id(db, id).await?;
    program.delete(db).await?;
    Ok(())
}

pub async fn find_by_id(db: &DatabaseConnection, id: Id) -> Result<Model, Error> {
    Entity::find_by_id(id).one(db).await?.ok_or_else(|| Error {
        source: None,
        error_kind: EntityApiErrorKind::RecordNotFound,
    })
}

/// Finds an active program by its public slug. Inactive programs are treated
/// as missing.
pub async fn find_active_by_slug(db: &DatabaseConnection, slug: &str) -> Result<Model, Error> {
    Entity::find()
        .filter(Column::Slug.eq(slug))
        .filter(Column::IsActive.eq(true))
        .one(db)
        .await?
        .ok_or_else(Error::not_found)
}

/// Active programs ordered by name, optionally narrowed to one category.
pub async fn find_active(
    db: &DatabaseConnection,
    category: Option<ProgramCategory>,
) -> Result<Vec<Model>, Error> {
    let mut query = Entity::find().filter(Column::IsActive.eq(true));
    if let Some(category) = category {
        query = query.filter(Column::Category.eq(category));
    }
    Ok(query.order_by_asc(Column::Name).all(db).await?)
}

/// The `limit` most recently created active programs, newest first.
pub async fn find_latest_active(db: &DatabaseConnection, limit: u64) -> Result<Vec<Model>, Error> {
    Ok(Entity::find()
        .filter(Column::IsActive.eq(true))
        .order_by_desc(Column::CreatedAt)
        .limit(limit)
        .all(db)
        .await?)
}

#[cfg(test)]
// We need to gate seaORM's mock feature behind conditional compilation because
// the feature removes the Clone trait implementation from seaORM's DatabaseConnection.
// see https://github.com/SeaQL/sea-orm/issues/830
#[cfg(feature = "mock")]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn program(name: &str, is_active: bool) -> Model {
        let now = Utc::now();
        Model {
            id: Id::new_v4(),
            name: name.to_owned(),
            slug: slug::from_name(name).unwrap_or_default(),
            description: "Twelve weeks of hands-on support".to_owned(),
            duration: "12 weeks".to_owned(),
            category: ProgramCategory::Accelerator,
            application_url: None,
            image_url: None,
            is_active,
            created_at: now.into(),
            updated_at: now.into(),
        }
    }

    #[tokio::test]
    async fn create_derives_the_slug_from_the_name() -> Result<(), Error> {
        let expected = program("Seed Accelerator 2026", true);
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<Model>::new()])
            .append_query_results([[expected.clone()]])
            .into_connection();

        let mut input = expected.clone();
        input.slug = String::new();
        let created = create(&db, input).await?;

        assert_eq!(created.slug, "seed-accelerator-2026");
        let log = db.into_transaction_log();
        assert_eq!(log.len(), 2);
        let lookup = format!("{:?}", log[0]);
        assert!(lookup.contains(r#"LIKE"#));
        let insert = format!("{:?}", log[1]);
        assert!(insert.contains("seed-accelerator-2026"));

        Ok(())
    }

    #[tokio::test]
    async fn create_suffixes_a_slug_that_is_already_taken() -> Result<(), Error> {
        let existing = program("C Bootcamp", true);
        let mut stored = program("C++ Bootcamp", true);
        stored.slug = "c-bootcamp-2".to_owned();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[existing.clone()]])
            .append_query_results([[stored.clone()]])
            .into_connection();

        let mut input = stored.clone();
        input.slug = String::new();
        let created = create(&db, input).await?;

        assert_eq!(created.slug, "c-bootcamp-2");
        let insert = format!("{:?}", db.into_transaction_log()[1]);
        assert!(insert.contains(r#""c-bootcamp-2""#));

        Ok(())
    }

    #[tokio::test]
    async fn create_rejects_a_name_without_a_slug() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

        let result = create(&db, program("!!!", true)).await;

        assert_eq!(
            result.unwrap_err().error_kind,
            EntityApiErrorKind::ValidationError
        );
        assert!(db.into_transaction_log().is_empty());
    }

    #[tokio::test]
    async fn update_keeps_the_original_slug() -> Result<(), Error> {
        let existing = program("Pre-Incubation Bootcamp", true);
        let mut renamed = existing.clone();
        renamed.name = "Founders Bootcamp".to_owned();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[existing.clone()]])
            .append_query_results([[renamed.clone()]])
            .into_connection();

        let updated = update(&db, existing.id, renamed).await?;

        assert_eq!(updated.name, "Founders Bootcamp");
        assert_eq!(updated.slug, existing.slug);

        Ok(())
    }

    #[tokio::test]
    async fn find_active_filters_on_is_active_and_category() -> Result<(), Error> {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<Model>::new()])
            .into_connection();

        let _ = find_active(&db, Some(ProgramCategory::Incubation)).await?;

        let log = db.into_transaction_log();
        assert_eq!(log.len(), 1);
        let statement = format!("{:?}", log[0]);
        assert!(statement.contains("is_active"));
        assert!(statement.contains("category"));
        assert!(statement.contains("ORDER BY"));
        assert!(statement.contains("incubation"));

        Ok(())
    }

    #[tokio::test]
    async fn find_active_by_slug_returns_not_found_for_missing_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<Model>::new()])
            .into_connection();

        let result = find_active_by_slug(&db, "retired-program").await;

        assert_eq!(
            result.unwrap_err().error_kind,
            EntityApiErrorKind::RecordNotFound
        );
    }

    #[tokio::test]
    async fn delete_by_id_removes_an_existing_program() -> Result<(), Error> {
        let existing = program("Incubation Track", false);
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[existing.clone()]])
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        delete_by_id(&db, existing.id).await?;

        Ok(())
    }
}
