// src/models/cliente.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::models::contato::ContatoItem;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Cliente {
    pub id: i32,
    #[schema(example = "Maria da Silva")]
    pub nome_completo: String,
    pub cpf: Option<String>,
    #[schema(example = "Rua das Flores")]
    pub endereco: String,
    #[schema(example = "123")]
    pub numero: String,
    pub complemento: Option<String>,
    #[schema(example = "Centro")]
    pub bairro: String,
    pub cidade_id: i32,
    pub cep: Option<String>,
    pub ponto_referencia: Option<String>,

    // Coordenadas específicas do endereço do cliente. Quando presentes, têm
    // prioridade sobre as da cidade ao montar marcadores.
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Cliente com a lista de contatos embutida (resposta de detalhe).
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ClienteDetalhe {
    #[serde(flatten)]
    pub cliente: Cliente,
    pub contatos: Vec<ContatoItem>,
}
