use crate::controller::ApiResponse;
use crate::extractors::compare_api_version::CompareApiVersion;
use crate::{AppState, Error};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use domain::hero_banner as HeroBannerApi;
use domain::{hero_banners::Model, Id};
use service::config::ApiVersion;

use log::*;

/// GET every Hero Banner, including inactive ones
#[utoipa::path(
    get,
    path = "/admin/hero_banners",
    params(ApiVersion),
    responses(
        (status = 200, description = "Successfully retrieved all Hero Banners", body = [domain::hero_banners::Model]),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 503, description = "Service temporarily unavailable")
    ),
    security(
        ("cookie_auth" = [])
    )
)]
pub async fn index(
    CompareApiVersion(_v): CompareApiVersion,
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    debug!("GET all Hero Banners");

    let banners = HeroBannerApi::find_all(app_state.db_conn_ref()).await?;

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), banners)))
}

#[utoipa::path(
    post,
    path = "/admin/hero_banners",
    params(ApiVersion),
    request_body = domain::hero_banners::Model,
    responses(
        (status = 201, description = "Successfully Created a New Hero Banner", body = domain::hero_banners::Model),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 422, description = "Unprocessable Entity"),
        (status = 503, description = "Service temporarily unavailable")
    ),
    security(
        ("cookie_auth" = [])
    )
)]
pub async fn create(
    CompareApiVersion(_v): CompareApiVersion,
    State(app_state): State<AppState>,
    Json(banner_model): Json<Model>,
) -> Result<impl IntoResponse, Error> {
    debug!("POST Create a New Hero Banner from: {banner_model:?}");

    let banner = HeroBannerApi::create(app_state.db_conn_ref(), banner_model).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(StatusCode::CREATED.into(), banner)),
    ))
}

#[utoipa::path(
    put,
    path = "/admin/hero_banners/{id}",
    params(
        ApiVersion,
        ("id" = Uuid, Path, description = "Id of the Hero Banner to update"),
    ),
    request_body = domain::hero_banners::Model,
    responses(
        (status = 200, description = "Successfully Updated Hero Banner", body = domain::hero_banners::Model),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Hero Banner not found"),
        (status = 422, description = "Unprocessable Entity"),
        (status = 503, description = "Service temporarily unavailable")
    ),
    security(
        ("cookie_auth" = [])
    )
)]
pub async fn update(
    CompareApiVersion(_v): CompareApiVersion,
    State(app_state): State<AppState>,
    Path(id): Path<Id>,
    Json(banner_model): Json<Model>,
) -> Result<impl IntoResponse, Error> {
    debug!("PUT Update Hero Banner with id: {id}");

    let banner = HeroBannerApi::update(app_state.db_conn_ref(), id, banner_model).await?;

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), banner)))
}

#[utoipa::path(
    delete,
    path = "/admin/hero_banners/{id}",
    params(
        ApiVersion,
        ("id" = Uuid, Path, description = "Id of the Hero Banner to delete"),
    ),
    responses(
        (status = 200, description = "Successfully deleted the Hero Banner"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Hero Banner not found"),
        (status = 503, description = "Service temporarily unavailable")
    ),
    security(
        ("cookie_auth" = [])
    )
)]
pub async fn delete(
    CompareApiVersion(_v): CompareApiVersion,
    State(app_state): State<AppState>,
    Path(id): Path<Id>,
) -> Result<impl IntoResponse, Error> {
    info!("DELETE Hero Banner by id: {id}");

    HeroBannerApi::delete_by_id(app_state.db_conn_ref(), id).await?;

    Ok(Json(ApiResponse::<()>::no_content(
        StatusCode::NO_CONTENT.into(),
    )))
}
