//! JSON REST handlers for thermostats.

use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use serde_json::{Map, Value};

use thermohub_app::ports::TemperatureSensor;
use thermohub_domain::id::ThermostatId;
use thermohub_domain::patch::ThermostatPatch;

use crate::error::ApiError;
use crate::response::PrettyJson;
use crate::state::AppState;

/// Query parameters accepted by the read endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct FieldsQuery {
    /// Comma-separated attribute names. Absent means every attribute.
    pub fields: Option<String>,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(PrettyJson<Vec<Map<String, Value>>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(PrettyJson<Map<String, Value>>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the patch endpoint.
pub enum PatchResponse {
    /// 200 OK with an empty body.
    Ok,
}

impl IntoResponse for PatchResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok => StatusCode::OK.into_response(),
        }
    }
}

/// Only digit sequences address a thermostat; anything else is treated as if
/// the route did not match.
fn parse_id(raw: &str) -> Result<ThermostatId, ApiError> {
    raw.parse().map_err(|_| ApiError::UnmatchedRoute)
}

/// `GET /thermostats?fields=`
pub async fn list<S>(
    State(state): State<AppState<S>>,
    Query(query): Query<FieldsQuery>,
) -> Result<ListResponse, ApiError>
where
    S: TemperatureSensor + Send + Sync + 'static,
{
    let thermostats = state.thermostat_service.list(query.fields.as_deref())?;
    Ok(ListResponse::Ok(PrettyJson(thermostats)))
}

/// `GET /thermostats/:id?fields=`
pub async fn get<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
    Query(query): Query<FieldsQuery>,
) -> Result<GetResponse, ApiError>
where
    S: TemperatureSensor + Send + Sync + 'static,
{
    let id = parse_id(&id)?;
    let thermostat = state
        .thermostat_service
        .get(id, query.fields.as_deref())?;
    Ok(GetResponse::Ok(PrettyJson(thermostat)))
}

/// `PATCH /thermostats/:id`
///
/// Checks run in this order: thermostat exists (404), body is a JSON object
/// (400), every key is a writable field (422), every value is valid (422).
pub async fn patch<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<PatchResponse, ApiError>
where
    S: TemperatureSensor + Send + Sync + 'static,
{
    let id = parse_id(&id)?;
    state.thermostat_service.ensure_exists(id)?;

    let document: Value = serde_json::from_slice(&body).map_err(|_| ApiError::InvalidJson)?;
    let patch = ThermostatPatch::try_from(document)?;

    state.thermostat_service.patch(id, &patch)?;
    Ok(PatchResponse::Ok)
}

#[cfg(test)]
mod tests {
    use axum::Router;
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode, header};
    use http_body_util::BodyExt;
    use serde_json::json;
    use tower::ServiceExt;

    use thermohub_app::ports::TemperatureSensor;
    use thermohub_app::registry::ThermostatRegistry;
    use thermohub_app::services::thermostat_service::ThermostatService;

    use crate::router;
    use crate::state::AppState;

    struct FixedSensor;

    impl TemperatureSensor for FixedSensor {
        fn read_temperature(&self) -> i64 {
            65
        }
    }

    fn app() -> Router {
        router::build(AppState::new(ThermostatService::new(
            ThermostatRegistry::new(),
            FixedSensor,
        )))
    }

    async fn send(app: &Router, method: Method, uri: &str, body: &str) -> (StatusCode, String) {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::from(body.to_owned()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
        send(app, Method::GET, uri, "").await
    }

    async fn patch(app: &Router, uri: &str, body: &str) -> (StatusCode, String) {
        send(app, Method::PATCH, uri, body).await
    }

    #[tokio::test]
    async fn should_list_seeded_thermostats_with_four_space_indent() {
        let app = app();
        let (status, body) = get(&app, "/thermostats").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.starts_with("[\n    {\n        \"ID\": 1,"));
        let parsed: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), 2);
        assert_eq!(parsed[0]["temperature"], 65);
    }

    #[tokio::test]
    async fn should_answer_list_with_json_content_type() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/thermostats")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json"
        );
    }

    #[tokio::test]
    async fn should_project_list_fields() {
        let app = app();
        let (status, body) = get(&app, "/thermostats?fields=name,fanMode").await;

        assert_eq!(status, StatusCode::OK);
        let parsed: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(
            parsed,
            json!([
                {"name": "thermostat 1", "fanMode": "auto"},
                {"name": "thermostat 2", "fanMode": "auto"}
            ])
        );
    }

    #[tokio::test]
    async fn should_reject_unknown_list_field_with_plain_text() {
        let app = app();
        let (status, body) = get(&app, "/thermostats?fields=bogus").await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body, "invalid field bogus");
    }

    #[tokio::test]
    async fn should_get_single_thermostat() {
        let app = app();
        let (status, body) = get(&app, "/thermostats/2?fields=ID,operatingMode").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "{\n    \"ID\": 2,\n    \"operatingMode\": \"heat\"\n}");
    }

    #[tokio::test]
    async fn should_return_404_for_missing_or_malformed_id() {
        let app = app();
        for uri in ["/thermostats/999", "/thermostats/abc", "/thermostats/-1", "/thermostats/1.5"] {
            let (status, _) = get(&app, uri).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        }
    }

    #[tokio::test]
    async fn should_reject_unknown_field_on_single_get() {
        let app = app();
        let (status, body) = get(&app, "/thermostats/1?fields=ID,nope").await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body, "invalid field nope");
    }

    #[tokio::test]
    async fn should_patch_and_reflect_change() {
        let app = app();
        let (status, body) = patch(&app, "/thermostats/1", r#"{"fanMode":"off","name":"hall"}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.is_empty());

        let (_, body) = get(&app, "/thermostats/1?fields=fanMode,name").await;
        let parsed: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(parsed, json!({"fanMode": "off", "name": "hall"}));
    }

    #[tokio::test]
    async fn should_return_404_when_patching_missing_thermostat_even_with_bad_body() {
        let app = app();
        let (status, _) = patch(&app, "/thermostats/42", "not json").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_reject_unparsable_and_non_object_bodies() {
        let app = app();
        for body in ["not json", "", "[1,2]", "\"name\"", "null"] {
            let (status, text) = patch(&app, "/thermostats/1", body).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
            assert_eq!(text, "invalid JSON");
        }
    }

    #[tokio::test]
    async fn should_reject_forbidden_keys_before_mutating() {
        let app = app();
        for (body, field) in [
            (r#"{"name":"x","temperature":70}"#, "temperature"),
            (r#"{"name":"x","ID":5}"#, "ID"),
            (r#"{"name":"x","color":"red"}"#, "color"),
        ] {
            let (status, text) = patch(&app, "/thermostats/1", body).await;
            assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
            assert_eq!(text, format!("invalid field {field}"));
        }

        let (_, body) = get(&app, "/thermostats/1?fields=name").await;
        assert_eq!(body, "{\n    \"name\": \"thermostat 1\"\n}");
    }

    #[tokio::test]
    async fn should_reject_wrong_type_and_invalid_value() {
        let app = app();

        let (status, text) = patch(&app, "/thermostats/1", r#"{"coolPoint":"warm"}"#).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(text, "invalid type for field coolPoint");

        let (status, text) = patch(&app, "/thermostats/1", r#"{"heatPoint":101}"#).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(text, "invalid value for field heatPoint");

        let (status, text) = patch(&app, "/thermostats/1", r#"{"operatingMode":"auto"}"#).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(text, "invalid value for field operatingMode");
    }

    #[tokio::test]
    async fn should_not_allow_other_methods() {
        let app = app();
        let (status, _) = send(&app, Method::DELETE, "/thermostats/1", "").await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        let (status, _) = send(&app, Method::PATCH, "/thermostats", "{}").await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    }
}
