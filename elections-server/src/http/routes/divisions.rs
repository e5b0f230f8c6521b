//! Division endpoints
//!
//! Extractor rejections are not returned as-is: a bad path or body fails
//! with the same error as the operation itself.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use crate::http::server::AppState;
use crate::models::{DivisionView, DivisionWithNominationView, InsertedDivisions};
use crate::service::{collapse, DivisionError, Operation, ServiceError};

/// Unwrap path parameters, collapsing a rejection into `operation`'s error.
fn path_params<T>(
    operation: Operation,
    path: Result<Path<T>, PathRejection>,
) -> Result<T, ServiceError> {
    path.map(|Path(params)| params).map_err(|rejection| {
        collapse(operation, DivisionError::MalformedPath(rejection.body_text()))
    })
}

/// GET /elections/{election_id}/divisions
async fn divisions_by_election(
    State(state): State<Arc<AppState>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Vec<DivisionView>>, ServiceError> {
    let election_id = path_params(Operation::DivisionsByElection, path)?;
    let divisions = state
        .divisions
        .get_divisions_by_election_id(&election_id)
        .await?;
    Ok(Json(divisions))
}

/// GET /elections/{election_id}/teams/{team_id}/divisions
async fn divisions_with_nomination(
    State(state): State<Arc<AppState>>,
    path: Result<Path<(String, String)>, PathRejection>,
) -> Result<Json<Vec<DivisionWithNominationView>>, ServiceError> {
    let (election_id, team_id) = path_params(Operation::DivisionsWithNomination, path)?;
    let divisions = state
        .divisions
        .get_divisions_with_nomination(&election_id, &team_id)
        .await?;
    Ok(Json(divisions))
}

/// POST /modules/{module_id}/divisions
///
/// Takes the raw body so that undecodable input gets the same error as a
/// failed insert instead of axum's JSON rejection.
async fn add_divisions(
    State(state): State<Arc<AppState>>,
    path: Result<Path<String>, PathRejection>,
    body: Bytes,
) -> Result<(StatusCode, Json<InsertedDivisions>), ServiceError> {
    let module_id = path_params(Operation::AddDivisionsByModule, path)?;
    let result = state
        .divisions
        .add_divisions_from_json(&module_id, &body)
        .await?;
    Ok((StatusCode::CREATED, Json(result)))
}

/// Division routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/elections/{election_id}/divisions", get(divisions_by_election))
        .route(
            "/elections/{election_id}/teams/{team_id}/divisions",
            get(divisions_with_nomination),
        )
        .route("/modules/{module_id}/divisions", post(add_divisions))
}
