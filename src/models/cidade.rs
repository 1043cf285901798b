// src/models/cidade.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Cidade {
    pub id: i32,
    #[schema(example = "Imperatriz")]
    pub nome: String,
    #[schema(example = "MA")]
    pub uf: String,
    #[schema(example = "Sul do Maranhão")]
    pub regiao: Option<String>,
    pub codigo_ibge: Option<String>,

    // Coordenadas do centro da cidade. Sem elas a cidade não serve de
    // fallback para marcadores no mapa.
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
