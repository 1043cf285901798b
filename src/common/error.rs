use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// Nosso tipo de erro, com `thiserror` para melhor ergonomia.
// O núcleo analítico (src/analise) não produz NENHUMA dessas variantes:
// relações ausentes, chaves vazias e divisores zero são absorvidos lá dentro.
// Tudo aqui é erro da borda (HTTP, banco, validação de payload).
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("{0} não encontrado(a)")]
    NaoEncontrado(&'static str),

    #[error("Número de O.S. já existe")]
    NumeroOsJaExiste,

    #[error("{0}")]
    EmUso(String),

    #[error("Tipo de relatório inválido: {0}")]
    TipoRelatorioInvalido(String),

    #[error("Fonte não encontrada: {0}")]
    FonteNaoEncontrada(String),

    // Variante para erros de banco de dados
    #[error("Erro de banco de dados")]
    DatabaseError(#[from] sqlx::Error),

    // Variante genérica para qualquer outro erro inesperado.
    // `anyhow::Error` é ótimo para capturar o contexto do erro.
    #[error("Erro interno do servidor")]
    InternalServerError(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            // Retorna todos os detalhes da validação, campo a campo.
            AppError::ValidationError(errors) => {
                let mut details = std::collections::HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors
                        .iter()
                        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                        .collect();
                    details.insert(field.to_string(), messages);
                }
                let body = Json(json!({
                    "error": "Um ou mais campos são inválidos.",
                    "details": details,
                }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }
            AppError::NaoEncontrado(entidade) => {
                let body = Json(json!({ "error": format!("{entidade} não encontrado(a).") }));
                return (StatusCode::NOT_FOUND, body).into_response();
            }
            AppError::NumeroOsJaExiste => {
                (StatusCode::CONFLICT, "Este número de O.S. já está em uso.".to_string())
            }
            AppError::EmUso(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::TipoRelatorioInvalido(tipo) => {
                (StatusCode::BAD_REQUEST, format!("Tipo de relatório inválido: {tipo}"))
            }

            // Todos os outros erros (DatabaseError, InternalServerError, fonte ausente)
            // viram 500. O `tracing` loga a mensagem detalhada que `thiserror` nos deu.
            ref e => {
                tracing::error!("Erro Interno do Servidor: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Ocorreu um erro inesperado.".to_string())
            }
        };

        // Resposta padrão para erros simples que só têm uma mensagem.
        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}
