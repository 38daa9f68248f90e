use crate::controller::ApiResponse;
use crate::extractors::{
    authenticated_user::AuthenticatedUser, compare_api_version::CompareApiVersion,
};
use crate::params::event::PublicParams;
use crate::{AppState, Error};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use domain::event as EventApi;
use domain::event_registration as EventRegistrationApi;
use domain::{event_registrations::Model, Id};
use service::config::ApiVersion;

use log::*;

/// GET the event calendar, soonest first
#[utoipa::path(
    get,
    path = "/events",
    params(
        ApiVersion,
        ("upcoming" = Option<bool>, Query, description = "Only events dated today or later")
    ),
    responses(
        (status = 200, description = "Successfully retrieved Events", body = [domain::events::Model]),
        (status = 400, description = "Missing or unsupported API version"),
        (status = 503, description = "Service temporarily unavailable")
    )
)]
pub async fn index(
    CompareApiVersion(_v): CompareApiVersion,
    State(app_state): State<AppState>,
    Query(params): Query<PublicParams>,
) -> Result<impl IntoResponse, Error> {
    debug!("GET Events with {params:?}");

    let events = EventApi::find_public(app_state.db_conn_ref(), params.upcoming).await?;

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), events)))
}

/// GET a particular Event specified by its id.
#[utoipa::path(
    get,
    path = "/events/{id}",
    params(
        ApiVersion,
        ("id" = Uuid, Path, description = "Event id to retrieve")
    ),
    responses(
        (status = 200, description = "Successfully retrieved an Event", body = domain::events::Model),
        (status = 404, description = "Event not found"),
        (status = 503, description = "Service temporarily unavailable")
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

/// POST sign the current user up for an Event
#[utoipa::path(
    post,
    path = "/events/{id}/registrations",
    params(
        ApiVersion,
        ("id" = Uuid, Path, description = "Event to register for")
    ),
    request_body = domain::event_registrations::Model,
    responses(
        (status = 201, description = "Successfully registered", body = domain::event_registrations::Model),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Event not found"),
        (status = 409, description = "Already registered for this Event"),
        (status = 422, description = "Unprocessable Entity"),
        (status = 503, description = "Service temporarily unavailable")
    ),
    security(
        ("cookie_auth" = [])
    )
)]
pub async fn register(
    CompareApiVersion(_v): CompareApiVersion,
    AuthenticatedUser(user): AuthenticatedUser,
    State(app_state): State<AppState>,
    Path(id): Path<Id>,
    Json(registration_model): Json<Model>,
) -> Result<impl IntoResponse, Error> {
    debug!("POST Register User {} for Event {id}", user.id);

    let registration =
        EventRegistrationApi::register(app_state.db_conn_ref(), id, &user, registration_model)
            .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(StatusCode::CREATED.into(), registration)),
    ))
}

/// DELETE the current user's registration for an Event
#[utoipa::path(
    delete,
    path = "/events/{id}/registrations",
    params(
        ApiVersion,
        ("id" = Uuid, Path, description = "Event to cancel the registration for")
    ),
    responses(
        (status = 200, description = "Successfully cancelled the registration"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "No registration for this Event"),
        (status = 503, description = "Service temporarily unavailable")
    ),
    security(
        ("cookie_auth" = [])
    )
)]
pub async fn cancel(
    CompareApiVersion(_v): CompareApiVersion,
    AuthenticatedUser(user): AuthenticatedUser,
    State(app_state): State<AppState>,
    Path(id): Path<Id>,
) -> Result<impl IntoResponse, Error> {
    debug!("DELETE Registration of User {} for Event {id}", user.id);

    EventRegistrationApi::cancel(app_state.db_conn_ref(), id, user.id).await?;

    Ok(Json(ApiResponse::<()>::no_content(
        StatusCode::NO_CONTENT.into(),
    )))
}
