//! Client HTTP handlers, including trip registrations.
//!
//! ```text
//! POST   /clients
//! DELETE /clients/{id}
//! GET    /clients/{id}/trips
//! POST   /clients/{id}/trips
//! DELETE /clients/{id}/trips/{tripId}
//! ```

use actix_web::http::header;
use actix_web::{HttpResponse, delete, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{ClientId, Error, NewClientDraft, TripId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ProblemSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::trips::ClientTripResponse;
use crate::inbound::http::validation::{FieldName, require};

/// Request payload for creating a client.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateClientRequest {
    #[schema(example = "Ada")]
    pub first_name: Option<String>,
    #[schema(example = "Lovelace")]
    pub last_name: Option<String>,
    #[schema(example = "ada@example.com")]
    pub email: Option<String>,
    /// Also accepted as `telephone`.
    #[serde(alias = "telephone")]
    pub phone: Option<String>,
    /// Also accepted as `pesel`.
    #[serde(alias = "pesel")]
    pub national_id: Option<String>,
}

/// Identifier of a newly created client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateClientResponse {
    pub id_client: i32,
}

/// Request payload for registering a client on a trip.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EnrollRequest {
    pub trip_id: Option<i32>,
}

/// Path of a single registration.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationPath {
    pub id: i32,
    pub trip_id: i32,
}

fn parse_client_draft(payload: CreateClientRequest) -> Result<NewClientDraft, Error> {
    Ok(NewClientDraft {
        first_name: require(payload.first_name, FieldName::new("firstName"))?,
        last_name: require(payload.last_name, FieldName::new("lastName"))?,
        email: require(payload.email, FieldName::new("email"))?,
        phone: payload.phone,
        national_id: payload.national_id,
    })
}

/// Create a client.
///
/// # Examples
/// ```no_run
/// use actix_web::{HttpResponse, web};
/// use travel_agency::inbound::http::clients::{CreateClientRequest, create_client};
/// use travel_agency::inbound::http::{ApiResult, state::HttpState};
///
/// async fn call_handler(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
///     let payload = web::Json(CreateClientRequest {
///         first_name: Some("Ada".to_owned()),
///         last_name: Some("Lovelace".to_owned()),
///         email: Some("ada@example.com".to_owned()),
///         ..CreateClientRequest::default()
///     });
///     create_client(state, payload).await
/// }
/// ```
#[utoipa::path(
    post,
    path = "/clients",
    request_body = CreateClientRequest,
    responses(
        (status = 201, description = "Client created", body = CreateClientResponse,
            headers(("Location" = String, description = "URL of the client's trips"))),
        (status = 400, description = "Invalid request", body = ProblemSchema,
            content_type = "application/problem+json")
    ),
    tags = ["clients"],
    operation_id = "createClient"
)]
#[post("/clients")]
pub async fn create_client(
    state: web::Data<HttpState>,
    payload: web::Json<CreateClientRequest>,
) -> ApiResult<HttpResponse> {
    let draft = parse_client_draft(payload.into_inner())?;
    let client_id = state.clients.create_client(draft).await?;

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/clients/{client_id}/trips")))
        .json(CreateClientResponse {
            id_client: client_id.get(),
        }))
}

/// Delete a client without registrations.
#[utoipa::path(
    delete,
    path = "/clients/{id}",
    params(("id" = i32, Path, description = "Client identifier")),
    responses(
        (status = 204, description = "Client deleted"),
        (status = 404, description = "Client not found", body = ProblemSchema,
            content_type = "application/problem+json"),
        (status = 409, description = "Client still has registrations", body = ProblemSchema,
            content_type = "application/problem+json")
    ),
    tags = ["clients"],
    operation_id = "deleteClient"
)]
#[delete("/clients/{id}")]
pub async fn delete_client(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    state
        .clients
        .delete_client(ClientId::new(path.into_inner()))
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

/// List the trips a client is registered for.
#[utoipa::path(
    get,
    path = "/clients/{id}/trips",
    params(("id" = i32, Path, description = "Client identifier")),
    responses(
        (status = 200, description = "The client's trips", body = [ClientTripResponse]),
        (status = 404, description = "Client not found", body = ProblemSchema,
            content_type = "application/problem+json")
    ),
    tags = ["clients"],
    operation_id = "listClientTrips"
)]
#[get("/clients/{id}/trips")]
pub async fn list_client_trips(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<web::Json<Vec<ClientTripResponse>>> {
    let trips = state
        .trips_query
        .list_client_trips(ClientId::new(path.into_inner()))
        .await?;
    Ok(web::Json(
        trips.into_iter().map(ClientTripResponse::from).collect(),
    ))
}

/// Register a client on a trip.
#[utoipa::path(
    post,
    path = "/clients/{id}/trips",
    params(("id" = i32, Path, description = "Client identifier")),
    request_body = EnrollRequest,
    responses(
        (status = 204, description = "Client registered"),
        (status = 400, description = "Invalid request", body = ProblemSchema,
            content_type = "application/problem+json"),
        (status = 404, description = "Client or trip not found", body = ProblemSchema,
            content_type = "application/problem+json"),
        (status = 409, description = "Trip full or client already registered",
            body = ProblemSchema, content_type = "application/problem+json")
    ),
    tags = ["clients"],
    operation_id = "enrollClient"
)]
#[post("/clients/{id}/trips")]
pub async fn enroll_client(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
    payload: web::Json<EnrollRequest>,
) -> ApiResult<HttpResponse> {
    let trip_id = require(payload.into_inner().trip_id, FieldName::new("tripId"))?;
    state
        .enrollments
        .enroll_client(ClientId::new(path.into_inner()), TripId::new(trip_id))
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Remove a client's registration from a trip.
#[utoipa::path(
    delete,
    path = "/clients/{id}/trips/{tripId}",
    params(
        ("id" = i32, Path, description = "Client identifier"),
        ("tripId" = i32, Path, description = "Trip identifier")
    ),
    responses(
        (status = 204, description = "Registration removed"),
        (status = 404, description = "Client is not registered for the trip",
            body = ProblemSchema, content_type = "application/problem+json")
    ),
    tags = ["clients"],
    operation_id = "unenrollClient"
)]
#[delete("/clients/{id}/trips/{tripId}")]
pub async fn unenroll_client(
    state: web::Data<HttpState>,
    path: web::Path<RegistrationPath>,
) -> ApiResult<HttpResponse> {
    let RegistrationPath { id, trip_id } = path.into_inner();
    state
        .enrollments
        .unenroll_client(ClientId::new(id), TripId::new(trip_id))
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
#[path = "clients_tests.rs"]
mod tests;
