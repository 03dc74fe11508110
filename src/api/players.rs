//! `/players`: list, create, delete.

use super::{method_not_allowed, parse_id, ApiError};
use crate::store::Store;
use actix_web::{
    web::{Data, Json, Query},
    HttpRequest, HttpResponse,
};
use serde::Deserialize;

#[derive(Deserialize)]
pub(super) struct CreatePlayerBody {
    name: Option<String>,
}

/// `?id=N`; kept as text so a missing or empty id is a 400 rather than an extractor error.
#[derive(Deserialize)]
pub(super) struct DeletePlayerQuery {
    id: Option<String>,
}

pub(super) async fn list_players(store: Data<Store>) -> Result<HttpResponse, ApiError> {
    let players = store
        .list_players()
        .await
        .map_err(|e| ApiError::store("Unable to fetch players", e))?;
    Ok(HttpResponse::Ok().json(players))
}

pub(super) async fn create_player(
    store: Data<Store>,
    body: Json<CreatePlayerBody>,
) -> Result<HttpResponse, ApiError> {
    let name = match body.name.as_deref() {
        Some(name) if !name.is_empty() => name,
        _ => return Err(ApiError::bad_request("Name is required")),
    };
    let player = store
        .create_player(name)
        .await
        .map_err(|e| ApiError::store("Unable to create player", e))?;
    log::info!("Created player {} ({})", player.id, player.name);
    Ok(HttpResponse::Created().json(player))
}

pub(super) async fn delete_player(
    store: Data<Store>,
    query: Query<DeletePlayerQuery>,
) -> Result<HttpResponse, ApiError> {
    let raw = match query.id.as_deref().map(str::trim) {
        Some(id) if !id.is_empty() => id,
        _ => return Err(ApiError::bad_request("Player ID is required")),
    };
    let id = parse_id(raw).ok_or_else(|| ApiError::bad_request("Player ID must be a number"))?;
    store
        .delete_player(id)
        .await
        .map_err(|e| ApiError::store("Unable to delete player", e))?;
    log::info!("Deleted player {id}");
    Ok(HttpResponse::Ok().json(serde_json::json!({ "message": "Player deleted successfully" })))
}

pub(super) async fn not_allowed(req: HttpRequest) -> HttpResponse {
    method_not_allowed(&req, "GET, POST, DELETE")
}
