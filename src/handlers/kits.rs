// src/handlers/kits.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    db::kit_repo::NovoComponente,
    models::kit::{Fornecedor, Kit, KitDetalhe},
};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListarKitsQuery {
    #[param(example = "disponivel")]
    pub status: Option<String>,
    pub fornecedor_id: Option<i32>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ComponentePayload {
    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "ANTENA")]
    pub tipo: String,
    pub numero_serie: Option<String>,
    pub quantidade_metros: Option<f64>,
    #[validate(length(min = 1, message = "required"))]
    pub status: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CriarKitPayload {
    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "ELS-00912874")]
    pub numero_serie: String,
    #[validate(length(min = 1, message = "required"))]
    pub modelo: String,
    pub fornecedor_id: i32,
    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "disponivel")]
    pub status: String,
    #[serde(default)]
    #[validate(nested)]
    pub componentes: Vec<ComponentePayload>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CriarFornecedorPayload {
    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "Elsys")]
    pub nome: String,
    #[validate(length(min = 1, message = "required"))]
    pub tipo: String,
}

// GET /api/kits
#[utoipa::path(
    get,
    path = "/api/kits",
    tag = "Kits",
    params(ListarKitsQuery),
    responses(
        (status = 200, description = "Lista de kits", body = Vec<Kit>)
    )
)]
pub async fn listar_kits(
    State(app_state): State<AppState>,
    Query(query): Query<ListarKitsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let kits = app_state
        .kit_service
        .listar(query.status.as_deref(), query.fornecedor_id)
        .await?;
    Ok((StatusCode::OK, Json(kits)))
}

// GET /api/kits/{id}
#[utoipa::path(
    get,
    path = "/api/kits/{id}",
    tag = "Kits",
    params(("id" = i32, Path, description = "ID do kit")),
    responses(
        (status = 200, description = "Kit com componentes", body = KitDetalhe),
        (status = 404, description = "Kit não encontrado")
    )
)]
pub async fn obter_kit(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let detalhe = app_state.kit_service.detalhe(id).await?;
    Ok((StatusCode::OK, Json(detalhe)))
}

// POST /api/kits
#[utoipa::path(
    post,
    path = "/api/kits",
    tag = "Kits",
    request_body = CriarKitPayload,
    responses(
        (status = 201, description = "Kit criado", body = KitDetalhe),
        (status = 400, description = "Dados inválidos")
    )
)]
pub async fn criar_kit(
    State(app_state): State<AppState>,
    Json(payload): Json<CriarKitPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let componentes: Vec<NovoComponente> = payload
        .componentes
        .into_iter()
        .map(|c| NovoComponente {
            tipo: c.tipo,
            numero_serie: c.numero_serie,
            quantidade_metros: c.quantidade_metros,
            status: c.status,
        })
        .collect();

    let detalhe = app_state
        .kit_service
        .criar(
            &payload.numero_serie,
            &payload.modelo,
            payload.fornecedor_id,
            &payload.status,
            componentes,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(detalhe)))
}

// GET /api/kits/fornecedores
#[utoipa::path(
    get,
    path = "/api/kits/fornecedores",
    tag = "Kits",
    responses(
        (status = 200, description = "Lista de fornecedores", body = Vec<Fornecedor>)
    )
)]
pub async fn listar_fornecedores(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let fornecedores = app_state.kit_service.listar_fornecedores().await?;
    Ok((StatusCode::OK, Json(fornecedores)))
}

// POST /api/kits/fornecedores
#[utoipa::path(
    post,
    path = "/api/kits/fornecedores",
    tag = "Kits",
    request_body = CriarFornecedorPayload,
    responses(
        (status = 201, description = "Fornecedor criado", body = Fornecedor)
    )
)]
pub async fn criar_fornecedor(
    State(app_state): State<AppState>,
    Json(payload): Json<CriarFornecedorPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let fornecedor = app_state
        .kit_service
        .criar_fornecedor(&payload.nome, &payload.tipo)
        .await?;

    Ok((StatusCode::CREATED, Json(fornecedor)))
}
