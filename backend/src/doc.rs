//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] collects every HTTP handler together with the request, response
//! and problem schemas they reference. Swagger UI serves it in debug builds.

use utoipa::OpenApi;

use crate::inbound::http::clients::{CreateClientRequest, CreateClientResponse, EnrollRequest};
use crate::inbound::http::schemas::{ErrorCodeSchema, ProblemSchema};
use crate::inbound::http::trips::{ClientTripResponse, CreateTripRequest, TripResponse};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Travel agency API",
        description = "Clients, trips and capacity-limited trip registrations."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::clients::create_client,
        crate::inbound::http::clients::delete_client,
        crate::inbound::http::clients::list_client_trips,
        crate::inbound::http::clients::enroll_client,
        crate::inbound::http::clients::unenroll_client,
        crate::inbound::http::trips::list_trips,
        crate::inbound::http::trips::get_trip,
        crate::inbound::http::trips::create_trip,
        crate::inbound::http::trips::delete_trip,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        CreateClientRequest,
        CreateClientResponse,
        EnrollRequest,
        CreateTripRequest,
        TripResponse,
        ClientTripResponse,
        ProblemSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "clients", description = "Client records and their trip registrations"),
        (name = "trips", description = "Trip catalogue"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
