// src/models/painel.rs
//
// Entidades derivadas: produzidas pelo núcleo analítico a partir das
// coleções cruas, nunca persistidas.

use serde::Serialize;
use utoipa::ToSchema;

use crate::models::{cidade::Cidade, cliente::Cliente, ordem_servico::OrdemServico};

/// Um grupo e seu total, ex.: { chave: "Imperatriz", total: 42 }.
///
/// Numa coleção de contagens as chaves são únicas e a soma dos totais é igual
/// ao número de registros da entrada com chave não-vazia.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Contagem {
    #[schema(example = "Imperatriz")]
    pub chave: String,
    pub total: u64,
}

/// Cards de resumo do painel.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ResumoPainel {
    pub total_os: u64,
    pub cidades_atendidas: u64,
    pub tecnicos_atuantes: u64,
    /// Total ÷ número de dias distintos com O.S., uma casa decimal.
    #[schema(example = 7.3)]
    pub media_diaria: f64,
}

/// Ponto renderizável no mapa, derivado do cruzamento ordem → cliente →
/// cidade. Só existe com um par de coordenadas completo.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Marcador {
    pub ordem_id: i32,
    pub latitude: f64,
    pub longitude: f64,
    #[schema(example = "O.S. OS-2025-0147")]
    pub titulo: String,
    pub descricao: String,
    /// Cor de exibição derivada do status da ordem.
    #[schema(example = "#f59e0b")]
    pub cor: String,
    pub ordem: OrdemServico,
    pub cliente: Cliente,
    pub cidade: Cidade,
}

/// Página de uma listagem já filtrada.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Pagina<T> {
    pub itens: Vec<T>,
    pub pagina: u32,
    pub por_pagina: u32,
    pub total_itens: u64,
    pub total_paginas: u32,
}
