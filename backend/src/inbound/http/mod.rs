//! HTTP inbound adapter exposing the REST endpoints.

use actix_web::web;

pub mod clients;
pub mod error;
pub mod health;
pub mod schemas;
pub mod state;
pub mod trips;
pub mod validation;

pub use error::ApiResult;

/// Register the client and trip handlers together with the extractor
/// configuration that turns malformed input into `400` problem details.
///
/// Callers supply `web::Data<state::HttpState>` on the enclosing app.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(error::json_error_handler))
        .app_data(web::PathConfig::default().error_handler(error::path_error_handler))
        .service(clients::create_client)
        .service(clients::delete_client)
        .service(clients::list_client_trips)
        .service(clients::enroll_client)
        .service(clients::unenroll_client)
        .service(trips::list_trips)
        .service(trips::get_trip)
        .service(trips::create_trip)
        .service(trips::delete_trip);
}
