// src/handlers/clientes.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    models::{
        cliente::{Cliente, ClienteDetalhe},
        contato::ContatoItem,
    },
};

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CriarClientePayload {
    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "Maria da Silva")]
    pub nome_completo: String,
    pub cpf: Option<String>,
    #[validate(length(min = 1, message = "required"))]
    pub endereco: String,
    #[validate(length(min = 1, message = "required"))]
    pub numero: String,
    pub complemento: Option<String>,
    #[validate(length(min = 1, message = "required"))]
    pub bairro: String,
    pub cidade_id: i32,
    pub cep: Option<String>,
    pub ponto_referencia: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    #[serde(default)]
    pub contatos: Vec<ContatoItem>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AtualizarClientePayload {
    pub nome_completo: Option<String>,
    pub cpf: Option<String>,
    pub endereco: Option<String>,
    pub numero: Option<String>,
    pub complemento: Option<String>,
    pub bairro: Option<String>,
    pub cidade_id: Option<i32>,
    pub cep: Option<String>,
    pub ponto_referencia: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Quando presente, substitui a lista inteira de contatos.
    pub contatos: Option<Vec<ContatoItem>>,
}

// GET /api/clientes
#[utoipa::path(
    get,
    path = "/api/clientes",
    tag = "Clientes",
    responses(
        (status = 200, description = "Lista de clientes", body = Vec<Cliente>)
    )
)]
pub async fn listar_clientes(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let clientes = app_state.cliente_service.listar().await?;
    Ok((StatusCode::OK, Json(clientes)))
}

// GET /api/clientes/{id}
#[utoipa::path(
    get,
    path = "/api/clientes/{id}",
    tag = "Clientes",
    params(("id" = i32, Path, description = "ID do cliente")),
    responses(
        (status = 200, description = "Cliente com contatos", body = ClienteDetalhe),
        (status = 404, description = "Cliente não encontrado")
    )
)]
pub async fn obter_cliente(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let detalhe = app_state.cliente_service.detalhe(id).await?;
    Ok((StatusCode::OK, Json(detalhe)))
}

// POST /api/clientes
#[utoipa::path(
    post,
    path = "/api/clientes",
    tag = "Clientes",
    request_body = CriarClientePayload,
    responses(
        (status = 201, description = "Cliente criado", body = ClienteDetalhe),
        (status = 400, description = "Dados inválidos")
    )
)]
pub async fn criar_cliente(
    State(app_state): State<AppState>,
    Json(payload): Json<CriarClientePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let detalhe = app_state
        .cliente_service
        .criar(
            &payload.nome_completo,
            payload.cpf.as_deref(),
            &payload.endereco,
            &payload.numero,
            payload.complemento.as_deref(),
            &payload.bairro,
            payload.cidade_id,
            payload.cep.as_deref(),
            payload.ponto_referencia.as_deref(),
            payload.latitude,
            payload.longitude,
            payload.contatos,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(detalhe)))
}

// PUT /api/clientes/{id}
#[utoipa::path(
    put,
    path = "/api/clientes/{id}",
    tag = "Clientes",
    params(("id" = i32, Path, description = "ID do cliente")),
    request_body = AtualizarClientePayload,
    responses(
        (status = 200, description = "Cliente atualizado", body = ClienteDetalhe),
        (status = 404, description = "Cliente não encontrado")
    )
)]
pub async fn atualizar_cliente(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<AtualizarClientePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    // Atualização parcial: parte do registro atual e aplica só o que veio.
    let mut cliente = app_state.cliente_service.detalhe(id).await?.cliente;
    if let Some(nome) = payload.nome_completo {
        cliente.nome_completo = nome;
    }
    if let Some(cpf) = payload.cpf {
        cliente.cpf = Some(cpf);
    }
    if let Some(endereco) = payload.endereco {
        cliente.endereco = endereco;
    }
    if let Some(numero) = payload.numero {
        cliente.numero = numero;
    }
    if let Some(complemento) = payload.complemento {
        cliente.complemento = Some(complemento);
    }
    if let Some(bairro) = payload.bairro {
        cliente.bairro = bairro;
    }
    if let Some(cidade_id) = payload.cidade_id {
        cliente.cidade_id = cidade_id;
    }
    if let Some(cep) = payload.cep {
        cliente.cep = Some(cep);
    }
    if let Some(referencia) = payload.ponto_referencia {
        cliente.ponto_referencia = Some(referencia);
    }
    if let Some(latitude) = payload.latitude {
        cliente.latitude = Some(latitude);
    }
    if let Some(longitude) = payload.longitude {
        cliente.longitude = Some(longitude);
    }

    let detalhe = app_state
        .cliente_service
        .atualizar(&cliente, payload.contatos)
        .await?;

    Ok((StatusCode::OK, Json(detalhe)))
}

// PUT /api/clientes/{id}/contatos/{indice}/principal
#[utoipa::path(
    put,
    path = "/api/clientes/{id}/contatos/{indice}/principal",
    tag = "Clientes",
    params(
        ("id" = i32, Path, description = "ID do cliente"),
        ("indice" = usize, Path, description = "Posição do contato na lista")
    ),
    responses(
        (status = 200, description = "Contato marcado como principal", body = ClienteDetalhe),
        (status = 404, description = "Cliente ou contato não encontrado")
    )
)]
pub async fn definir_contato_principal(
    State(app_state): State<AppState>,
    Path((id, indice)): Path<(i32, usize)>,
) -> Result<impl IntoResponse, AppError> {
    let detalhe = app_state
        .cliente_service
        .definir_contato_principal(id, indice)
        .await?;
    Ok((StatusCode::OK, Json(detalhe)))
}

// DELETE /api/clientes/{id}/contatos/{indice}
#[utoipa::path(
    delete,
    path = "/api/clientes/{id}/contatos/{indice}",
    tag = "Clientes",
    params(
        ("id" = i32, Path, description = "ID do cliente"),
        ("indice" = usize, Path, description = "Posição do contato na lista")
    ),
    responses(
        (status = 200, description = "Contato removido", body = ClienteDetalhe),
        (status = 404, description = "Cliente ou contato não encontrado")
    )
)]
pub async fn remover_contato(
    State(app_state): State<AppState>,
    Path((id, indice)): Path<(i32, usize)>,
) -> Result<impl IntoResponse, AppError> {
    let detalhe = app_state.cliente_service.remover_contato(id, indice).await?;
    Ok((StatusCode::OK, Json(detalhe)))
}

// DELETE /api/clientes/{id}
#[utoipa::path(
    delete,
    path = "/api/clientes/{id}",
    tag = "Clientes",
    params(("id" = i32, Path, description = "ID do cliente")),
    responses(
        (status = 200, description = "Cliente excluído"),
        (status = 400, description = "Cliente possui ordens de serviço"),
        (status = 404, description = "Cliente não encontrado")
    )
)]
pub async fn excluir_cliente(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    app_state.cliente_service.excluir(id).await?;
    Ok((
        StatusCode::OK,
        Json(serde_json::json!({ "mensagem": "Cliente excluído com sucesso" })),
    ))
}
