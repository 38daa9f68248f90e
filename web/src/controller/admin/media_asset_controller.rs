use crate::controller::ApiResponse;
use crate::extractors::{
    authenticated_user::AuthenticatedUser, compare_api_version::CompareApiVersion,
};
use crate::{AppState, Error};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use domain::media_asset as MediaAssetApi;
use domain::{media_assets::Model, Id};
use service::config::ApiVersion;

use log::*;

#[utoipa::path(
    get,
    path = "/admin/media",
    params(ApiVersion),
    responses(
        (status = 200, description = "Successfully retrieved the media library", body = [domain::media_assets::Model]),
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
    debug!("GET all Media Assets");

    let assets = MediaAssetApi::find_all(app_state.db_conn_ref()).await?;

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), assets)))
}

/// POST the metadata of an uploaded file
#[utoipa::path(
    post,
    path = "/admin/media",
    params(ApiVersion),
    request_body = domain::media_assets::Model,
    responses(
        (status = 201, description = "Successfully recorded a Media Asset", body = domain::media_assets::Model),
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
    AuthenticatedUser(user): AuthenticatedUser,
    State(app_state): State<AppState>,
    Json(asset_model): Json<Model>,
) -> Result<impl IntoResponse, Error> {
    debug!("POST Create a New Media Asset from: {asset_model:?}");

    let asset = MediaAssetApi::create(app_state.db_conn_ref(), &user, asset_model).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(StatusCode::CREATED.into(), asset)),
    ))
}

#[utoipa::path(
    delete,
    path = "/admin/media/{id}",
    params(
        ApiVersion,
        ("id" = Uuid, Path, description = "Id of the Media Asset to delete"),
    ),
    responses(
        (status = 200, description = "Successfully deleted the Media Asset"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Media Asset not found"),
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
    info!("DELETE Media Asset by id: {id}");

    MediaAssetApi::delete_by_id(app_state.db_conn_ref(), id).await?;

    Ok(Json(ApiResponse::<()>::no_content(
        StatusCode::NO_CONTENT.into(),
    )))
}
