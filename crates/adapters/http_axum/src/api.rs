//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod thermostats;

use axum::Router;
use axum::routing::get;

use thermohub_app::ports::TemperatureSensor;

use crate::state::AppState;

/// Build the thermostat API routes.
pub fn routes<S>() -> Router<AppState<S>>
where
    S: TemperatureSensor + Send + Sync + 'static,
{
    Router::new()
        .route("/thermostats", get(thermostats::list::<S>))
        .route(
            "/thermostats/{id}",
            get(thermostats::get::<S>).patch(thermostats::patch::<S>),
        )
}
