use super::error::Error;
use super::slug;
use chrono::Utc;
use entity::startup_status::StartupStatus;
use entity::startups::{ActiveModel, Column, Entity, Model};
use entity::Id;
use sea_orm::{
    entity::prelude::*,
    ActiveValue::{Set, Unchanged},
    sea_query::{Expr, Func},
    ConnectionTrait, DatabaseConnection, QueryOrder, QuerySelect, TryIntoModel,
};

use log::*;

pub async fn create(
    db: &impl ConnectionTrait,
    startup_model: Model,
    owner_id: Option<Id>,
) -> Result<Model, Error> {
    debug!("New Startup Model to be inserted: {startup_model:?}");

    let now = Utc::now();
    let slug = unique_slug(db, &startup_model.name).await?;

    let startup_active_model: ActiveModel = ActiveModel {
        owner_id: Set(owner_id),
        slug: Set(slug),
        name: Set(startup_model.name),
        sector: Set(startup_model.sector),
        stage: Set(startup_model.stage),
        description: Set(startup_model.description),
        team_size: Set(startup_model.team_size),
        traction: Set(startup_model.traction),
        is_public: Set(startup_model.is_public),
        is_featured: Set(startup_model.is_featured),
        status: Set(startup_model.status),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
        ..Default::default()
    };

    Ok(startup_active_model.insert(db).await?)
}

async fn unique_slug(db: &impl ConnectionTrait, name: &str) -> Result<String, Error> {
    let base = slug::base_for(name)?;
    let taken: Vec<String> = Entity::find()
        .filter(slug::taken_by(Column::Slug, &base))
        .all(db)
        .await?
        .into_iter()
        .map(|startup| startup.slug)
        .collect();
    Ok(slug::first_free(&base, &taken))
}

/// Creates or updates the startup owned by `owner_id`. The owner never
/// controls visibility, featuring or status; a new startup starts private.
pub async fn upsert_for_owner(
    db: &DatabaseConnection,
    owner_id: Id,
    startup_model: Model,
) -> Result<Model, Error> {
    match find_by_owner_id(db, owner_id).await? {
        Some(existing) => {
            debug!("Existing Startup model to be Updated: {existing:?}");

            let active_model: ActiveModel = ActiveModel {
                id: Unchanged(existing.id),
                owner_id: Unchanged(existing.owner_id),
                name: Set(startup_model.name),
                slug: Unchanged(existing.slug),
                sector: Set(startup_model.sector),
                stage: Set(startup_model.stage),
                description: Set(startup_model.description),
                team_size: Set(startup_model.team_size),
                traction: Set(startup_model.traction),
                is_public: Unchanged(existing.is_public),
                is_featured: Unchanged(existing.is_featured),
                status: Unchanged(existing.status),
                created_at: Unchanged(existing.created_at),
                updated_at: Set(Utc::now().into()),
            };

            Ok(active_model.update(db).await?.try_into_model()?)
        }
        None => {
            let startup_model = Model {
                is_public: false,
                is_featured: false,
                status: StartupStatus::Active,
                ..startup_model
            };
            create(db, startup_model, Some(owner_id)).await
        }
    }
}

pub async fn update_status(
    db: &DatabaseConnection,
    id: Id,
    status: StartupStatus,
) -> Result<Model, Error> {
    let startup = find_by_id(db, id).await?;
    debug!("Changing status of Startup {id} from {} to {status}", startup.status);

    let mut active_model: ActiveModel = startup.into();
    active_model.status = Set(status);
    active_model.updated_at = Set(Utc::now().into());

    Ok(active_model.update(db).await?.try_into_model()?)
}

pub async fn find_by_id(db: &DatabaseConnection, id: Id) -> Result<Model, Error> {
    Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(Error::not_found)
}

pub async fn find_by_owner_id(
    db: &DatabaseConnection,
    owner_id: Id,
) -> Result<Option<Model>, Error> {
    Ok(Entity::find()
        .filter(Column::OwnerId.eq(owner_id))
        .one(db)
        .await?)
}

/// Finds a public startup by slug. Private startups are treated as missing.
pub async fn find_public_by_slug(db: &DatabaseConnection, slug: &str) -> Result<Model, Error> {
    Entity::find()
        .filter(Column::Slug.eq(slug))
        .filter(Column::IsPublic.eq(true))
        .one(db)
        .await?
        .ok_or_else(Error::not_found)
}

pub async fn find_all(db: &DatabaseConnection) -> Result<Vec<Model>, Error> {
    Ok(Entity::find().order_by_asc(Column::Name).all(db).await?)
}

/// Public startups ordered by name, optionally narrowed by sector and stage
/// (case-insensitive exact match).
pub async fn find_public(
    db: &DatabaseConnection,
    sector: Option<&str>,
    stage: Option<&str>,
) -> Result<Vec<Model>, Error> {
    let mut query = Entity::find().filter(Column::IsPublic.eq(true));
    if let Some(sector) = sector {
        query = query.filter(
            Expr::expr(Func::lower(Expr::col(Column::Sector))).eq(sector.to_lowercase()),
        );
    }
    if let Some(stage) = stage {
        query = query
            .filter(Expr::expr(Func::lower(Expr::col(Column::Stage))).eq(stage.to_lowercase()));
    }
    Ok(query.order_by_asc(Column::Name).all(db).await?)
}

/// Startups that are both public and featured, for the home page.
pub async fn find_featured(db: &DatabaseConnection, limit: u64) -> Result<Vec<Model>, Error> {
    Ok(Entity::find()
        .filter(Column::IsPublic.eq(true))
        .filter(Column::IsFeatured.eq(true))
        .order_by_asc(Column::Name)
        .limit(limit)
        .all(db)
        .await?)
}
