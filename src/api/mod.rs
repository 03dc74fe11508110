//! HTTP resources: `/players`, `/matches`, the HTML page at `/` and a health check.
//!
//! Every handler is stateless between calls; the only shared value is the [`Store`]
//! handle registered as app data.

mod matches;
mod players;

use crate::models::PlayerId;
use crate::store::{Store, StoreError, RECENT_MATCH_LIMIT};
use crate::view::{render_html, TrackerState};
use actix_web::{
    http::{header, StatusCode},
    web::{self, Data},
    HttpRequest, HttpResponse, ResponseError,
};
use serde::Serialize;
use thiserror::Error;

/// Errors surfaced to API callers as `{ "error": "<message>" }`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or unusable input.
    #[error("{0}")]
    BadRequest(String),

    /// Any store failure. Only `message` reaches the caller.
    #[error("{message}")]
    Store {
        message: &'static str,
        #[source]
        source: StoreError,
    },
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(message.into())
    }

    /// Wrap a store failure, logging the cause since the caller never sees it.
    pub fn store(message: &'static str, source: StoreError) -> Self {
        log::error!("{message}: {source}");
        ApiError::Store { message, source }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .json(serde_json::json!({ "error": self.to_string() }))
    }
}

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

async fn health() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "pingpong-tracker",
    })
}

/// Browsers ask for it on every page load; there is none.
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// Script behind the page's forms, compiled in so the page works from any working directory.
async fn tracker_js() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/javascript; charset=utf-8")
        .body(include_str!("../../static/tracker.js"))
}

/// Server-rendered page: players, leaderboard and recent matches.
async fn index(store: Data<Store>) -> Result<HttpResponse, ApiError> {
    let players = store
        .list_players()
        .await
        .map_err(|e| ApiError::store("Unable to fetch players", e))?;
    let matches = store
        .list_recent_matches(RECENT_MATCH_LIMIT)
        .await
        .map_err(|e| ApiError::store("Unable to fetch matches", e))?;
    let mut state = TrackerState::default();
    state.set_players(players);
    state.set_matches(matches);
    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(render_html(&state)))
}

/// 405 with an `Allow` header naming the methods the resource does support.
fn method_not_allowed(req: &HttpRequest, allow: &'static str) -> HttpResponse {
    HttpResponse::MethodNotAllowed()
        .insert_header((header::ALLOW, allow))
        .body(format!("Method {} Not Allowed", req.method()))
}

/// Malformed or missing JSON bodies are client errors with the usual error shape.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| ApiError::bad_request(format!("Invalid JSON body: {err}")).into())
}

/// Query strings that do not deserialize (e.g. a repeated `id`) get the JSON error shape too.
fn query_config() -> web::QueryConfig {
    web::QueryConfig::default()
        .error_handler(|err, _req| ApiError::bad_request(format!("Invalid query string: {err}")).into())
}

/// An integral id from its decimal text: `"7"`, `" 7 "` and `"7.0"` all give 7.
fn parse_id(text: &str) -> Option<PlayerId> {
    let text = text.trim();
    text.parse::<PlayerId>()
        .ok()
        .or_else(|| text.parse::<f64>().ok().and_then(integral_id))
}

/// `None` for fractions, infinities and values outside the id range.
fn integral_id(value: f64) -> Option<PlayerId> {
    let in_range = value.is_finite() && value.fract() == 0.0 && value.abs() < i64::MAX as f64;
    in_range.then_some(value as PlayerId)
}

/// Mount every route. The store must already be registered with `app_data`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(query_config())
        .route("/", web::get().to(index))
        .route("/tracker.js", web::get().to(tracker_js))
        .route("/api/health", web::get().to(health))
        .route("/favicon.ico", web::get().to(favicon))
        .service(
            web::resource("/players")
                .route(web::get().to(players::list_players))
                .route(web::post().to(players::create_player))
                .route(web::delete().to(players::delete_player))
                .default_service(web::to(players::not_allowed)),
        )
        .service(
            web::resource("/matches")
                .route(web::get().to(matches::list_matches))
                .route(web::post().to(matches::create_match))
                .default_service(web::to(matches::not_allowed)),
        );
}
