// src/models/tecnico.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::models::contato::ContatoItem;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Tecnico {
    pub id: i32,
    #[schema(example = "João Pereira")]
    pub nome: String,
    // Identificadores independentes: o crachá de campo e o login do
    // aplicativo não precisam coincidir.
    pub identificacao_campo: Option<String>,
    pub identificacao_app: Option<String>,
    pub ativo: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Técnico com a lista de contatos embutida (resposta de detalhe).
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TecnicoDetalhe {
    #[serde(flatten)]
    pub tecnico: Tecnico,
    pub contatos: Vec<ContatoItem>,
}

/// Métricas de desempenho de um técnico em um período.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DesempenhoTecnico {
    pub nome_tecnico: String,
    pub total_ordens: u64,
    pub total_instaladas: u64,
    #[schema(example = 87.5)]
    pub taxa_conclusao: f64,
    pub por_status: std::collections::BTreeMap<String, u64>,
}
