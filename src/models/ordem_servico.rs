// src/models/ordem_servico.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

// Valores conhecidos de status. O campo continua sendo texto livre porque o
// núcleo analítico precisa aceitar valores fora desse conjunto sem quebrar
// (um status desconhecido vira apenas a cor padrão no mapa).
pub const STATUS_PENDENTE: &str = "PENDENTE";
pub const STATUS_INSTALADA: &str = "INSTALADA";
pub const STATUS_CANCELADA: &str = "CANCELADA";

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct OrdemServico {
    pub id: i32,
    #[schema(example = "OS-2025-0147")]
    pub numero_os: String,
    #[schema(example = "PENDENTE")]
    pub status: String,
    pub data_criacao: DateTime<Utc>,
    pub data_vencimento: DateTime<Utc>,
    pub data_instalacao: Option<DateTime<Utc>>,

    // Relacionamentos
    pub cliente_id: i32,
    pub tecnico_campo_id: i32,
    pub tecnico_app_id: Option<i32>,
    pub cidade_id: i32,

    // Campos adicionais
    pub fez_na_rua: bool,
    pub baixou_no_app: bool,
    pub observacoes: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Linha desnormalizada de O.S. para listagem, filtro e exportação: a ordem
/// já cruzada com cliente, cidade e técnico de campo.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct OrdemResumo {
    pub id: i32,
    pub numero_os: String,
    pub status: String,
    pub data_criacao: DateTime<Utc>,
    pub data_vencimento: DateTime<Utc>,
    pub data_instalacao: Option<DateTime<Utc>>,
    #[schema(example = "Maria da Silva")]
    pub nome_cliente: String,
    #[schema(example = "Rua das Flores, 123")]
    pub endereco: String,
    pub bairro: String,
    pub cidade_id: i32,
    #[schema(example = "Imperatriz")]
    pub cidade: String,
    pub uf: String,
    pub tecnico_campo_id: i32,
    pub tecnico_campo: String,
}

/// Métricas globais das ordens de serviço.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MetricasOrdens {
    pub total_geral: u64,
    pub total_instaladas: u64,
    #[schema(example = 72.34)]
    pub taxa_conclusao: f64,
    pub por_status: std::collections::BTreeMap<String, u64>,
}
