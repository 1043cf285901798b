// src/handlers/cidades.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::{common::error::AppError, config::AppState, models::cidade::Cidade};

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CriarCidadePayload {
    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "Imperatriz")]
    pub nome: String,
    #[validate(length(equal = 2, message = "UF deve ter 2 letras"))]
    #[schema(example = "MA")]
    pub uf: String,
    pub regiao: Option<String>,
    pub codigo_ibge: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AtualizarCidadePayload {
    pub nome: Option<String>,
    #[validate(length(equal = 2, message = "UF deve ter 2 letras"))]
    pub uf: Option<String>,
    pub regiao: Option<String>,
    pub codigo_ibge: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

// GET /api/cidades
#[utoipa::path(
    get,
    path = "/api/cidades",
    tag = "Cidades",
    responses(
        (status = 200, description = "Lista de cidades", body = Vec<Cidade>)
    )
)]
pub async fn listar_cidades(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let cidades = app_state.cidade_service.listar().await?;
    Ok((StatusCode::OK, Json(cidades)))
}

// GET /api/cidades/{id}
#[utoipa::path(
    get,
    path = "/api/cidades/{id}",
    tag = "Cidades",
    params(("id" = i32, Path, description = "ID da cidade")),
    responses(
        (status = 200, description = "Detalhes da cidade", body = Cidade),
        (status = 404, description = "Cidade não encontrada")
    )
)]
pub async fn obter_cidade(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let cidade = app_state.cidade_service.buscar(id).await?;
    Ok((StatusCode::OK, Json(cidade)))
}

// POST /api/cidades
#[utoipa::path(
    post,
    path = "/api/cidades",
    tag = "Cidades",
    request_body = CriarCidadePayload,
    responses(
        (status = 201, description = "Cidade criada", body = Cidade),
        (status = 400, description = "Dados inválidos")
    )
)]
pub async fn criar_cidade(
    State(app_state): State<AppState>,
    Json(payload): Json<CriarCidadePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let cidade = app_state
        .cidade_service
        .criar(
            &payload.nome,
            &payload.uf,
            payload.regiao.as_deref(),
            payload.codigo_ibge.as_deref(),
            payload.latitude,
            payload.longitude,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(cidade)))
}

// PUT /api/cidades/{id}
#[utoipa::path(
    put,
    path = "/api/cidades/{id}",
    tag = "Cidades",
    params(("id" = i32, Path, description = "ID da cidade")),
    request_body = AtualizarCidadePayload,
    responses(
        (status = 200, description = "Cidade atualizada", body = Cidade),
        (status = 404, description = "Cidade não encontrada")
    )
)]
pub async fn atualizar_cidade(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<AtualizarCidadePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let mut cidade = app_state.cidade_service.buscar(id).await?;
    if let Some(nome) = payload.nome {
        cidade.nome = nome;
    }
    if let Some(uf) = payload.uf {
        cidade.uf = uf;
    }
    if let Some(regiao) = payload.regiao {
        cidade.regiao = Some(regiao);
    }
    if let Some(codigo) = payload.codigo_ibge {
        cidade.codigo_ibge = Some(codigo);
    }
    if let Some(latitude) = payload.latitude {
        cidade.latitude = Some(latitude);
    }
    if let Some(longitude) = payload.longitude {
        cidade.longitude = Some(longitude);
    }

    let atualizada = app_state.cidade_service.atualizar(&cidade).await?;
    Ok((StatusCode::OK, Json(atualizada)))
}

// DELETE /api/cidades/{id}
#[utoipa::path(
    delete,
    path = "/api/cidades/{id}",
    tag = "Cidades",
    params(("id" = i32, Path, description = "ID da cidade")),
    responses(
        (status = 200, description = "Cidade excluída"),
        (status = 400, description = "Cidade possui ordens de serviço"),
        (status = 404, description = "Cidade não encontrada")
    )
)]
pub async fn excluir_cidade(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    app_state.cidade_service.excluir(id).await?;
    Ok((
        StatusCode::OK,
        Json(serde_json::json!({ "mensagem": "Cidade excluída com sucesso" })),
    ))
}
