// src/handlers/ordens.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::{
    analise::filtro::FiltroOrdens,
    common::error::AppError,
    config::AppState,
    models::{
        ordem_servico::{MetricasOrdens, OrdemResumo, OrdemServico},
        painel::Pagina,
    },
};

/// Critérios de filtro aceitos pelas listagens de O.S. (e reaproveitados
/// pelo painel e pelo mapa). Campo ausente não restringe nada.
#[derive(Debug, Default, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FiltroQuery {
    /// Texto livre sobre nome do cliente, número da O.S. e endereço.
    /// Buscas com menos de 3 caracteres são rejeitadas aqui na borda.
    #[validate(length(min = 3, message = "A busca deve ter no mínimo 3 caracteres"))]
    pub busca: Option<String>,
    pub cidade_id: Option<i32>,
    pub tecnico_id: Option<i32>,
    #[param(example = "PENDENTE")]
    pub status: Option<String>,
    pub data_inicio: Option<NaiveDate>,
    pub data_fim: Option<NaiveDate>,
}

impl FiltroQuery {
    pub fn criterios(&self) -> FiltroOrdens {
        FiltroOrdens {
            busca: self.busca.clone(),
            cidade_id: self.cidade_id,
            tecnico_id: self.tecnico_id,
            status: self.status.clone(),
            data_inicio: self.data_inicio,
            data_fim: self.data_fim,
        }
    }
}

#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListarOrdensQuery {
    #[validate(length(min = 3, message = "A busca deve ter no mínimo 3 caracteres"))]
    pub busca: Option<String>,
    pub cidade_id: Option<i32>,
    pub tecnico_id: Option<i32>,
    pub status: Option<String>,
    pub data_inicio: Option<NaiveDate>,
    pub data_fim: Option<NaiveDate>,
    /// Página 1-based; omitir volta para a primeira.
    pub pagina: Option<u32>,
    pub por_pagina: Option<u32>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CriarOrdemPayload {
    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "OS-2025-0147")]
    pub numero_os: String,
    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "PENDENTE")]
    pub status: String,
    pub data_criacao: DateTime<Utc>,
    pub data_vencimento: DateTime<Utc>,
    pub data_instalacao: Option<DateTime<Utc>>,
    pub cliente_id: i32,
    pub tecnico_campo_id: i32,
    pub tecnico_app_id: Option<i32>,
    pub cidade_id: i32,
    #[serde(default)]
    pub fez_na_rua: bool,
    #[serde(default)]
    pub baixou_no_app: bool,
    pub observacoes: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AtualizarOrdemPayload {
    pub status: Option<String>,
    pub data_vencimento: Option<DateTime<Utc>>,
    pub data_instalacao: Option<DateTime<Utc>>,
    pub tecnico_campo_id: Option<i32>,
    pub tecnico_app_id: Option<i32>,
    pub fez_na_rua: Option<bool>,
    pub baixou_no_app: Option<bool>,
    pub observacoes: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProximasVencimentoQuery {
    /// Janela em dias a partir de hoje (padrão 7).
    pub dias: Option<i64>,
}

// GET /api/ordens
#[utoipa::path(
    get,
    path = "/api/ordens",
    tag = "Ordens",
    params(ListarOrdensQuery),
    responses(
        (status = 200, description = "Página de ordens filtradas", body = Pagina<OrdemResumo>),
        (status = 400, description = "Critérios inválidos")
    )
)]
pub async fn listar_ordens(
    State(app_state): State<AppState>,
    Query(query): Query<ListarOrdensQuery>,
) -> Result<impl IntoResponse, AppError> {
    query.validate()?;

    let criterios = FiltroOrdens {
        busca: query.busca.clone(),
        cidade_id: query.cidade_id,
        tecnico_id: query.tecnico_id,
        status: query.status.clone(),
        data_inicio: query.data_inicio,
        data_fim: query.data_fim,
    };

    let pagina = app_state
        .ordem_service
        .listar(
            &criterios,
            query.pagina.unwrap_or(1),
            query.por_pagina.unwrap_or(10),
        )
        .await?;

    Ok((StatusCode::OK, Json(pagina)))
}

// GET /api/ordens/{id}
#[utoipa::path(
    get,
    path = "/api/ordens/{id}",
    tag = "Ordens",
    params(("id" = i32, Path, description = "ID da ordem de serviço")),
    responses(
        (status = 200, description = "Detalhes da ordem", body = OrdemServico),
        (status = 404, description = "Ordem não encontrada")
    )
)]
pub async fn obter_ordem(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let ordem = app_state.ordem_service.buscar(id).await?;
    Ok((StatusCode::OK, Json(ordem)))
}

// POST /api/ordens
#[utoipa::path(
    post,
    path = "/api/ordens",
    tag = "Ordens",
    request_body = CriarOrdemPayload,
    responses(
        (status = 201, description = "Ordem criada", body = OrdemServico),
        (status = 400, description = "Dados inválidos"),
        (status = 409, description = "Número de O.S. já existe")
    )
)]
pub async fn criar_ordem(
    State(app_state): State<AppState>,
    Json(payload): Json<CriarOrdemPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let ordem = app_state
        .ordem_service
        .criar(
            &payload.numero_os,
            &payload.status,
            payload.data_criacao,
            payload.data_vencimento,
            payload.data_instalacao,
            payload.cliente_id,
            payload.tecnico_campo_id,
            payload.tecnico_app_id,
            payload.cidade_id,
            payload.fez_na_rua,
            payload.baixou_no_app,
            payload.observacoes.as_deref(),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(ordem)))
}

// PUT /api/ordens/{id}
#[utoipa::path(
    put,
    path = "/api/ordens/{id}",
    tag = "Ordens",
    params(("id" = i32, Path, description = "ID da ordem de serviço")),
    request_body = AtualizarOrdemPayload,
    responses(
        (status = 200, description = "Ordem atualizada", body = OrdemServico),
        (status = 404, description = "Ordem não encontrada")
    )
)]
pub async fn atualizar_ordem(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<AtualizarOrdemPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let ordem = app_state
        .ordem_service
        .atualizar(
            id,
            payload.status,
            payload.data_vencimento,
            payload.data_instalacao,
            payload.tecnico_campo_id,
            payload.tecnico_app_id,
            payload.fez_na_rua,
            payload.baixou_no_app,
            payload.observacoes,
        )
        .await?;

    Ok((StatusCode::OK, Json(ordem)))
}

// DELETE /api/ordens/{id}
#[utoipa::path(
    delete,
    path = "/api/ordens/{id}",
    tag = "Ordens",
    params(("id" = i32, Path, description = "ID da ordem de serviço")),
    responses(
        (status = 200, description = "Ordem excluída"),
        (status = 404, description = "Ordem não encontrada")
    )
)]
pub async fn excluir_ordem(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    app_state.ordem_service.excluir(id).await?;
    Ok((
        StatusCode::OK,
        Json(serde_json::json!({ "mensagem": "Ordem de serviço excluída com sucesso" })),
    ))
}

// GET /api/ordens/proximas-vencimento
#[utoipa::path(
    get,
    path = "/api/ordens/proximas-vencimento",
    tag = "Ordens",
    params(ProximasVencimentoQuery),
    responses(
        (status = 200, description = "Ordens não instaladas vencendo na janela", body = Vec<OrdemServico>)
    )
)]
pub async fn proximas_vencimento(
    State(app_state): State<AppState>,
    Query(query): Query<ProximasVencimentoQuery>,
) -> Result<impl IntoResponse, AppError> {
    let ordens = app_state
        .ordem_service
        .proximas_vencimento(query.dias.unwrap_or(7))
        .await?;
    Ok((StatusCode::OK, Json(ordens)))
}

// GET /api/ordens/metricas
#[utoipa::path(
    get,
    path = "/api/ordens/metricas",
    tag = "Ordens",
    responses(
        (status = 200, description = "Métricas globais das ordens", body = MetricasOrdens)
    )
)]
pub async fn metricas_ordens(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let metricas = app_state.ordem_service.metricas().await?;
    Ok((StatusCode::OK, Json(metricas)))
}
