use crate::controller::ApiResponse;
use crate::extractors::compare_api_version::CompareApiVersion;
use crate::params::event::IndexParams;
use crate::{AppState, Error};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use domain::event as EventApi;
use domain::event_registration as EventRegistrationApi;
use domain::{events::Model, Id};
use service::config::ApiVersion;

use log::*;

/// GET every Event, past and upcoming
#[utoipa::path(
    get,
    path = "/admin/events",
    params(
        ApiVersion,
        ("sort_by" = Option<crate::params::event::SortField>, Query, description = "Sort by field. Valid values: 'date', 'title', 'created_at'.", example = "date"),
        ("sort_order" = Option<crate::params::sort::SortOrder>, Query, description = "Sort order. Valid values: 'asc' (ascending), 'desc' (descending).", example = "asc")
    ),
    responses(
        (status = 200, description = "Successfully retrieved all Events", body = [domain::events::Model]),
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
    Query(params): Query<IndexParams>,
) -> Result<impl IntoResponse, Error> {
    debug!("GET all Events with {params:?}");

    let events = EventApi::find_by(app_state.db_conn_ref(), params).await?;

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), events)))
}

/// POST create a new Event
#[utoipa::path(
    post,
    path = "/admin/events",
    params(ApiVersion),
    request_body = domain::events::Model,
    responses(
        (status = 201, description = "Successfully Created a New Event", body = domain::events::Model),
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
    Json(event_model): Json<Model>,
) -> Result<impl IntoResponse, Error> {
    debug!("POST Create a New Event from: {event_model:?}");

    let event = EventApi::create(app_state.db_conn_ref(), event_model).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(StatusCode::CREATED.into(), event)),
    ))
}

#[utoipa::path(
    get,
    path = "/admin/events/{id}",
    params(
        ApiVersion,
        ("id" = Uuid, Path, description = "Event id to retrieve")
    ),
    responses(
        (status = 200, description = "Successfully retrieved an Event", body = domain::events::Model),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Event not found"),
        (status = 503, description = "Service temporarily unavailable")
    ),
    security(
        ("cookie_auth" = [])
    )
)]
pub async fn read(
    CompareApiVersion(_v): CompareApiVersion,
    State(app_state): State<AppState>,
    Path(id): Path<Id>,
) -> Result<impl IntoResponse, Error> {
    debug!("GET Event by id: {id}");

    let event = EventApi::find_by_id(app_state.db_conn_ref(), id).await?;

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), event)))
}

#[utoipa::path(
    put,
    path = "/admin/events/{id}",
    params(
        ApiVersion,
        ("id" = Uuid, Path, description = "Id of the Event to update"),
    ),
    request_body = domain::events::Model,
    responses(
        (status = 200, description = "Successfully Updated Event", body = domain::events::Model),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Event not found"),
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
    Json(event_model): Json<Model>,
) -> Result<impl IntoResponse, Error> {
    debug!("PUT Update Event with id: {id}");

    let event = EventApi::update(app_state.db_conn_ref(), id, event_model).await?;

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), event)))
}

/// DELETE an Event along with its registrations
#[utoipa::path(
    delete,
    path = "/admin/events/{id}",
    params(
        ApiVersion,
        ("id" = Uuid, Path, description = "Id of the Event to delete"),
    ),
    responses(
        (status = 200, description = "Successfully deleted the Event"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Event not found"),
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
    info!("DELETE Event by id: {id}");

    EventApi::delete_by_id(app_state.db_conn_ref(), id).await?;

    Ok(Json(ApiResponse::<()>::no_content(
        StatusCode::NO_CONTENT.into(),
    )))
}

/// GET who signed up for an Event
#[utoipa::path(
    get,
    path = "/admin/events/{id}/registrations",
    params(
        ApiVersion,
        ("id" = Uuid, Path, description = "Event id"),
    ),
    responses(
        (status = 200, description = "Successfully retrieved the Event's registrations", body = [domain::event_registrations::Model]),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 503, description = "Service temporarily unavailable")
    ),
    security(
        ("cookie_auth" = [])
    )
)]
pub async fn registrations(
    CompareApiVersion(_v): CompareApiVersion,
    State(app_state): State<AppState>,
    Path(id): Path<Id>,
) -> Result<impl IntoResponse, Error> {
    debug!("GET registrations for Event {id}");

    let registrations = EventRegistrationApi::find_by_event_id(app_state.db_conn_ref(), id).await?;

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), registrations)))
}
