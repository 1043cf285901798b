// src/handlers/mapa.rs

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    handlers::ordens::FiltroQuery,
    models::painel::Marcador,
};

// GET /api/mapa/marcadores
#[utoipa::path(
    get,
    path = "/api/mapa/marcadores",
    tag = "Mapa",
    params(FiltroQuery),
    responses(
        (status = 200, description = "Marcadores das ordens com coordenadas resolvidas", body = Vec<Marcador>)
    )
)]
pub async fn marcadores(
    State(app_state): State<AppState>,
    Query(query): Query<FiltroQuery>,
) -> Result<impl IntoResponse, AppError> {
    query.validate()?;

    let marcadores = app_state.mapa_service.marcadores(&query.criterios()).await?;
    Ok((StatusCode::OK, Json(marcadores)))
}
