// src/handlers/tecnicos.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    models::{
        contato::ContatoItem,
        tecnico::{DesempenhoTecnico, Tecnico, TecnicoDetalhe},
    },
};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListarTecnicosQuery {
    /// Presente restringe a ativos (true) ou inativos (false).
    pub ativo: Option<bool>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DesempenhoQuery {
    pub data_inicio: Option<NaiveDate>,
    pub data_fim: Option<NaiveDate>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CriarTecnicoPayload {
    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "João Pereira")]
    pub nome: String,
    pub identificacao_campo: Option<String>,
    pub identificacao_app: Option<String>,
    #[serde(default = "ativo_padrao")]
    pub ativo: bool,
    #[serde(default)]
    pub contatos: Vec<ContatoItem>,
}

fn ativo_padrao() -> bool {
    true
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AtualizarTecnicoPayload {
    pub nome: Option<String>,
    pub identificacao_campo: Option<String>,
    pub identificacao_app: Option<String>,
    pub ativo: Option<bool>,
    /// Quando presente, substitui a lista inteira de contatos.
    pub contatos: Option<Vec<ContatoItem>>,
}

// GET /api/tecnicos
#[utoipa::path(
    get,
    path = "/api/tecnicos",
    tag = "Técnicos",
    params(ListarTecnicosQuery),
    responses(
        (status = 200, description = "Lista de técnicos", body = Vec<Tecnico>)
    )
)]
pub async fn listar_tecnicos(
    State(app_state): State<AppState>,
    Query(query): Query<ListarTecnicosQuery>,
) -> Result<impl IntoResponse, AppError> {
    let tecnicos = app_state.tecnico_service.listar(query.ativo).await?;
    Ok((StatusCode::OK, Json(tecnicos)))
}

// GET /api/tecnicos/{id}
#[utoipa::path(
    get,
    path = "/api/tecnicos/{id}",
    tag = "Técnicos",
    params(("id" = i32, Path, description = "ID do técnico")),
    responses(
        (status = 200, description = "Técnico com contatos", body = TecnicoDetalhe),
        (status = 404, description = "Técnico não encontrado")
    )
)]
pub async fn obter_tecnico(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let detalhe = app_state.tecnico_service.detalhe(id).await?;
    Ok((StatusCode::OK, Json(detalhe)))
}

// POST /api/tecnicos
#[utoipa::path(
    post,
    path = "/api/tecnicos",
    tag = "Técnicos",
    request_body = CriarTecnicoPayload,
    responses(
        (status = 201, description = "Técnico criado", body = TecnicoDetalhe),
        (status = 400, description = "Dados inválidos")
    )
)]
pub async fn criar_tecnico(
    State(app_state): State<AppState>,
    Json(payload): Json<CriarTecnicoPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let detalhe = app_state
        .tecnico_service
        .criar(
            &payload.nome,
            payload.identificacao_campo.as_deref(),
            payload.identificacao_app.as_deref(),
            payload.ativo,
            payload.contatos,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(detalhe)))
}

// PUT /api/tecnicos/{id}
#[utoipa::path(
    put,
    path = "/api/tecnicos/{id}",
    tag = "Técnicos",
    params(("id" = i32, Path, description = "ID do técnico")),
    request_body = AtualizarTecnicoPayload,
    responses(
        (status = 200, description = "Técnico atualizado", body = TecnicoDetalhe),
        (status = 404, description = "Técnico não encontrado")
    )
)]
pub async fn atualizar_tecnico(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<AtualizarTecnicoPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let mut tecnico = app_state.tecnico_service.detalhe(id).await?.tecnico;
    if let Some(nome) = payload.nome {
        tecnico.nome = nome;
    }
    if let Some(campo) = payload.identificacao_campo {
        tecnico.identificacao_campo = Some(campo);
    }
    if let Some(app) = payload.identificacao_app {
        tecnico.identificacao_app = Some(app);
    }
    if let Some(ativo) = payload.ativo {
        tecnico.ativo = ativo;
    }

    let detalhe = app_state
        .tecnico_service
        .atualizar(&tecnico, payload.contatos)
        .await?;

    Ok((StatusCode::OK, Json(detalhe)))
}

// PUT /api/tecnicos/{id}/contatos/{indice}/principal
#[utoipa::path(
    put,
    path = "/api/tecnicos/{id}/contatos/{indice}/principal",
    tag = "Técnicos",
    params(
        ("id" = i32, Path, description = "ID do técnico"),
        ("indice" = usize, Path, description = "Posição do contato na lista")
    ),
    responses(
        (status = 200, description = "Contato marcado como principal", body = TecnicoDetalhe),
        (status = 404, description = "Técnico ou contato não encontrado")
    )
)]
pub async fn definir_contato_principal(
    State(app_state): State<AppState>,
    Path((id, indice)): Path<(i32, usize)>,
) -> Result<impl IntoResponse, AppError> {
    let detalhe = app_state
        .tecnico_service
        .definir_contato_principal(id, indice)
        .await?;
    Ok((StatusCode::OK, Json(detalhe)))
}

// DELETE /api/tecnicos/{id}/contatos/{indice}
#[utoipa::path(
    delete,
    path = "/api/tecnicos/{id}/contatos/{indice}",
    tag = "Técnicos",
    params(
        ("id" = i32, Path, description = "ID do técnico"),
        ("indice" = usize, Path, description = "Posição do contato na lista")
    ),
    responses(
        (status = 200, description = "Contato removido", body = TecnicoDetalhe),
        (status = 404, description = "Técnico ou contato não encontrado")
    )
)]
pub async fn remover_contato(
    State(app_state): State<AppState>,
    Path((id, indice)): Path<(i32, usize)>,
) -> Result<impl IntoResponse, AppError> {
    let detalhe = app_state.tecnico_service.remover_contato(id, indice).await?;
    Ok((StatusCode::OK, Json(detalhe)))
}

// DELETE /api/tecnicos/{id}
#[utoipa::path(
    delete,
    path = "/api/tecnicos/{id}",
    tag = "Técnicos",
    params(("id" = i32, Path, description = "ID do técnico")),
    responses(
        (status = 200, description = "Técnico excluído"),
        (status = 400, description = "Técnico possui ordens de serviço"),
        (status = 404, description = "Técnico não encontrado")
    )
)]
pub async fn excluir_tecnico(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    app_state.tecnico_service.excluir(id).await?;
    Ok((
        StatusCode::OK,
        Json(serde_json::json!({ "mensagem": "Técnico excluído com sucesso" })),
    ))
}

// GET /api/tecnicos/{id}/desempenho
#[utoipa::path(
    get,
    path = "/api/tecnicos/{id}/desempenho",
    tag = "Técnicos",
    params(
        ("id" = i32, Path, description = "ID do técnico"),
        DesempenhoQuery
    ),
    responses(
        (status = 200, description = "Métricas do técnico no período", body = DesempenhoTecnico),
        (status = 404, description = "Técnico não encontrado")
    )
)]
pub async fn desempenho_tecnico(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
    Query(query): Query<DesempenhoQuery>,
) -> Result<impl IntoResponse, AppError> {
    let desempenho = app_state
        .tecnico_service
        .desempenho(id, query.data_inicio, query.data_fim)
        .await?;
    Ok((StatusCode::OK, Json(desempenho)))
}
