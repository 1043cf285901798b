// src/models/kit.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Fornecedor {
    pub id: i32,
    #[schema(example = "Elsys")]
    pub nome: String,
    pub tipo: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Kit {
    pub id: i32,
    #[schema(example = "ELS-00912874")]
    pub numero_serie: String,
    #[schema(example = "Starlink Mini")]
    pub modelo: String,
    pub fornecedor_id: i32,
    // 'disponivel', 'alocado' ou 'instalado'
    #[schema(example = "disponivel")]
    pub status: String,
    pub tecnico_id: Option<i32>,
    pub ordem_servico_id: Option<i32>,
    pub data_alocacao: Option<DateTime<Utc>>,
    pub data_instalacao: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// Um componente ou tem número de série (antena, LNB) ou é medido em metros
// (cabo); nunca os dois.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Componente {
    pub id: i32,
    pub kit_id: i32,
    #[schema(example = "ANTENA")]
    pub tipo: String,
    pub numero_serie: Option<String>,
    pub quantidade_metros: Option<f64>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Kit com os componentes embutidos (resposta de detalhe).
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct KitDetalhe {
    #[serde(flatten)]
    pub kit: Kit,
    pub componentes: Vec<Componente>,
}
