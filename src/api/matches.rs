//! `/matches`: list the most recent matches, record a new one.

use super::{integral_id, method_not_allowed, parse_id, ApiError};
use crate::models::PlayerId;
use crate::store::{Store, RECENT_MATCH_LIMIT};
use actix_web::{
    web::{Data, Json},
    HttpRequest, HttpResponse,
};
use serde::Deserialize;
use serde_json::Value;

const IDS_REQUIRED: &str = "winnerId and loserId are required";
const IDS_NOT_NUMERIC: &str = "winnerId and loserId must be numeric";

/// Ids arrive either as JSON numbers or as numeric strings (form values).
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct CreateMatchBody {
    winner_id: Option<Value>,
    loser_id: Option<Value>,
}

enum IdInput {
    Missing,
    Invalid,
    Id(PlayerId),
}

/// Presence check then numeric coercion. `null`, `false`, `0` and `""` count as missing.
/// Numbers and numeric strings share one rule: any integral value is an id.
fn coerce_id(value: Option<&Value>) -> IdInput {
    let id = match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => return IdInput::Missing,
        Some(Value::String(s)) if s.is_empty() => return IdInput::Missing,
        Some(Value::Number(n)) => n.as_i64().or_else(|| n.as_f64().and_then(integral_id)),
        Some(Value::String(s)) => parse_id(s),
        Some(_) => None,
    };
    match (value, id) {
        (Some(Value::Number(_)), Some(0)) => IdInput::Missing,
        (_, Some(id)) => IdInput::Id(id),
        (_, None) => IdInput::Invalid,
    }
}

fn required_ids(body: &CreateMatchBody) -> Result<(PlayerId, PlayerId), ApiError> {
    match (
        coerce_id(body.winner_id.as_ref()),
        coerce_id(body.loser_id.as_ref()),
    ) {
        (IdInput::Id(winner), IdInput::Id(loser)) => Ok((winner, loser)),
        (IdInput::Missing, _) | (_, IdInput::Missing) => Err(ApiError::bad_request(IDS_REQUIRED)),
        _ => Err(ApiError::bad_request(IDS_NOT_NUMERIC)),
    }
}

pub(super) async fn list_matches(store: Data<Store>) -> Result<HttpResponse, ApiError> {
    let matches = store
        .list_recent_matches(RECENT_MATCH_LIMIT)
        .await
        .map_err(|e| ApiError::store("Unable to fetch matches", e))?;
    Ok(HttpResponse::Ok().json(matches))
}

pub(super) async fn create_match(
    store: Data<Store>,
    body: Json<CreateMatchBody>,
) -> Result<HttpResponse, ApiError> {
    let (winner_id, loser_id) = required_ids(&body)?;
    let created = store
        .create_match(winner_id, loser_id)
        .await
        .map_err(|e| ApiError::store("Unable to create match", e))?;
    log::info!(
        "Recorded match {}: {} beat {}",
        created.id,
        created.winner.name,
        created.loser.name
    );
    Ok(HttpResponse::Created().json(created))
}

pub(super) async fn not_allowed(req: HttpRequest) -> HttpResponse {
    method_not_allowed(&req, "GET, POST")
}
