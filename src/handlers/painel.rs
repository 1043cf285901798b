// src/handlers/painel.rs

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
    models::painel::{Contagem, ResumoPainel},
};

// GET /api/painel/resumo
#[utoipa::path(
    get,
    path = "/api/painel/resumo",
    tag = "Painel",
    params(FiltroQuery),
    responses(
        (status = 200, description = "Cards de resumo do painel", body = ResumoPainel)
    )
)]
pub async fn resumo(
    State(app_state): State<AppState>,
    Query(query): Query<FiltroQuery>,
) -> Result<impl IntoResponse, AppError> {
    query.validate()?;

    let resumo = app_state.painel_service.resumo(&query.criterios()).await?;
    Ok((StatusCode::OK, Json(resumo)))
}

// GET /api/painel/por-cidade
#[utoipa::path(
    get,
    path = "/api/painel/por-cidade",
    tag = "Painel",
    params(FiltroQuery),
    responses(
        (status = 200, description = "Total de O.S. por cidade", body = Vec<Contagem>)
    )
)]
pub async fn por_cidade(
    State(app_state): State<AppState>,
    Query(query): Query<FiltroQuery>,
) -> Result<impl IntoResponse, AppError> {
    query.validate()?;

    let serie = app_state
        .painel_service
        .por_cidade(&query.criterios())
        .await?;
    Ok((StatusCode::OK, Json(serie)))
}

// GET /api/painel/por-tecnico
#[utoipa::path(
    get,
    path = "/api/painel/por-tecnico",
    tag = "Painel",
    params(FiltroQuery),
    responses(
        (status = 200, description = "Total de O.S. por técnico de campo", body = Vec<Contagem>)
    )
)]
pub async fn por_tecnico(
    State(app_state): State<AppState>,
    Query(query): Query<FiltroQuery>,
) -> Result<impl IntoResponse, AppError> {
    query.validate()?;

    let serie = app_state
        .painel_service
        .por_tecnico(&query.criterios())
        .await?;
    Ok((StatusCode::OK, Json(serie)))
}

// GET /api/painel/por-bairro
#[utoipa::path(
    get,
    path = "/api/painel/por-bairro",
    tag = "Painel",
    params(FiltroQuery),
    responses(
        (status = 200, description = "Total de O.S. por bairro", body = Vec<Contagem>)
    )
)]
pub async fn por_bairro(
    State(app_state): State<AppState>,
    Query(query): Query<FiltroQuery>,
) -> Result<impl IntoResponse, AppError> {
    query.validate()?;

    let serie = app_state
        .painel_service
        .por_bairro(&query.criterios())
        .await?;
    Ok((StatusCode::OK, Json(serie)))
}

// GET /api/painel/por-data
#[utoipa::path(
    get,
    path = "/api/painel/por-data",
    tag = "Painel",
    params(FiltroQuery),
    responses(
        (status = 200, description = "Evolução diária de O.S., em ordem cronológica", body = Vec<Contagem>)
    )
)]
pub async fn por_data(
    State(app_state): State<AppState>,
    Query(query): Query<FiltroQuery>,
) -> Result<impl IntoResponse, AppError> {
    query.validate()?;

    let serie = app_state.painel_service.por_data(&query.criterios()).await?;
    Ok((StatusCode::OK, Json(serie)))
}
