//! Trip HTTP handlers.
//!
//! ```text
//! GET    /trips
//! GET    /trips/{id}
//! POST   /trips
//! DELETE /trips/{id}
//! ```

use actix_web::http::header;
use actix_web::{HttpResponse, delete, get, post, web};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{ClientTrip, Error, NewTripDraft, Trip, TripId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ProblemSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_required_date, require};

/// Request payload for creating a trip.
///
/// Every field is optional at the wire level so a missing value is reported
/// with its field name.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTripRequest {
    #[schema(example = "Paris Weekend")]
    pub name: Option<String>,
    pub description: Option<String>,
    #[schema(format = Date, example = "2026-05-01")]
    pub date_from: Option<String>,
    #[schema(format = Date, example = "2026-05-03")]
    pub date_to: Option<String>,
    #[schema(example = 2)]
    pub max_people: Option<i32>,
    /// Country names in display order; repeats are dropped.
    #[serde(default)]
    pub countries: Vec<String>,
}

/// Trip with its ordered country list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TripResponse {
    pub id_trip: i32,
    pub name: String,
    pub description: Option<String>,
    pub date_from: NaiveDate,
    pub date_to: NaiveDate,
    pub max_people: i32,
    pub countries: Vec<String>,
}

/// Trip as seen through a client's registration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClientTripResponse {
    #[serde(flatten)]
    pub trip: TripResponse,
    pub registered_at: NaiveDate,
    pub payment_date: Option<NaiveDate>,
}

impl From<Trip> for TripResponse {
    fn from(value: Trip) -> Self {
        Self {
            id_trip: value.id.get(),
            name: value.name,
            description: value.description,
            date_from: value.date_from,
            date_to: value.date_to,
            max_people: value.max_people,
            countries: value.countries,
        }
    }
}

impl From<ClientTrip> for ClientTripResponse {
    fn from(value: ClientTrip) -> Self {
        Self {
            trip: TripResponse::from(value.trip),
            registered_at: value.registered_at,
            payment_date: value.payment_date,
        }
    }
}

fn parse_trip_draft(payload: CreateTripRequest) -> Result<NewTripDraft, Error> {
    Ok(NewTripDraft {
        name: require(payload.name, FieldName::new("name"))?,
        description: payload.description,
        date_from: parse_required_date(payload.date_from, FieldName::new("dateFrom"))?,
        date_to: parse_required_date(payload.date_to, FieldName::new("dateTo"))?,
        max_people: require(payload.max_people, FieldName::new("maxPeople"))?,
        countries: payload.countries,
    })
}

/// List every trip with its countries.
#[utoipa::path(
    get,
    path = "/trips",
    responses(
        (status = 200, description = "All trips", body = [TripResponse]),
        (status = 503, description = "Store unavailable", body = ProblemSchema,
            content_type = "application/problem+json")
    ),
    tags = ["trips"],
    operation_id = "listTrips"
)]
#[get("/trips")]
pub async fn list_trips(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<TripResponse>>> {
    let trips = state.trips_query.list_trips().await?;
    Ok(web::Json(trips.into_iter().map(TripResponse::from).collect()))
}

/// Fetch one trip.
#[utoipa::path(
    get,
    path = "/trips/{id}",
    params(("id" = i32, Path, description = "Trip identifier")),
    responses(
        (status = 200, description = "The trip", body = TripResponse),
        (status = 404, description = "Trip not found", body = ProblemSchema,
            content_type = "application/problem+json")
    ),
    tags = ["trips"],
    operation_id = "getTrip"
)]
#[get("/trips/{id}")]
pub async fn get_trip(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<web::Json<TripResponse>> {
    let trip = state
        .trips_query
        .get_trip(TripId::new(path.into_inner()))
        .await?;
    Ok(web::Json(TripResponse::from(trip)))
}

/// Create a trip.
///
/// # Examples
/// ```no_run
/// use actix_web::{HttpResponse, web};
/// use travel_agency::inbound::http::trips::{CreateTripRequest, create_trip};
/// use travel_agency::inbound::http::{ApiResult, state::HttpState};
///
/// async fn call_handler(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
///     let payload = web::Json(CreateTripRequest {
///         name: Some("Paris Weekend".to_owned()),
///         date_from: Some("2026-05-01".to_owned()),
///         date_to: Some("2026-05-03".to_owned()),
///         max_people: Some(2),
///         countries: vec!["France".to_owned()],
///         ..CreateTripRequest::default()
///     });
///     create_trip(state, payload).await
/// }
/// ```
#[utoipa::path(
    post,
    path = "/trips",
    request_body = CreateTripRequest,
    responses(
        (status = 201, description = "Trip created", body = TripResponse,
            headers(("Location" = String, description = "URL of the new trip"))),
        (status = 400, description = "Invalid request", body = ProblemSchema,
            content_type = "application/problem+json")
    ),
    tags = ["trips"],
    operation_id = "createTrip"
)]
#[post("/trips")]
pub async fn create_trip(
    state: web::Data<HttpState>,
    payload: web::Json<CreateTripRequest>,
) -> ApiResult<HttpResponse> {
    let draft = parse_trip_draft(payload.into_inner())?;
    let trip = state.trips.create_trip(draft).await?;
    let location = format!("/trips/{}", trip.id);

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, location))
        .json(TripResponse::from(trip)))
}

/// Delete a trip that nobody is registered for.
#[utoipa::path(
    delete,
    path = "/trips/{id}",
    params(("id" = i32, Path, description = "Trip identifier")),
    responses(
        (status = 204, description = "Trip deleted"),
        (status = 404, description = "Trip not found", body = ProblemSchema,
            content_type = "application/problem+json"),
        (status = 409, description = "Trip still has registrations", body = ProblemSchema,
            content_type = "application/problem+json")
    ),
    tags = ["trips"],
    operation_id = "deleteTrip"
)]
#[delete("/trips/{id}")]
pub async fn delete_trip(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    state
        .trips
        .delete_trip(TripId::new(path.into_inner()))
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
#[path = "trips_tests.rs"]
mod tests;
