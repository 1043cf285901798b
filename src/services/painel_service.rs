// src/services/painel_service.rs

use crate::{
    analise::{agregador, filtro},
    common::error::AppError,
    db::OrdemRepository,
    models::painel::{Contagem, ResumoPainel},
};

/// Agregados do painel: os cards de resumo e as séries dos gráficos, todos
/// derivados do mesmo snapshot filtrado.
#[derive(Clone)]
pub struct PainelService {
    ordens: OrdemRepository,
}

impl PainelService {
    pub fn new(ordens: OrdemRepository) -> Self {
        Self { ordens }
    }

    pub async fn resumo(
        &self,
        criterios: &filtro::FiltroOrdens,
    ) -> Result<ResumoPainel, AppError> {
        let resumos = self.ordens.listar_resumos().await?;
        let filtradas = filtro::filtrar(&resumos, &criterios.predicados_resumo());
        Ok(agregador::resumo_painel(&filtradas))
    }

    /// Série do gráfico de barras/pizza por cidade, na ordem da primeira
    /// ocorrência.
    pub async fn por_cidade(
        &self,
        criterios: &filtro::FiltroOrdens,
    ) -> Result<Vec<Contagem>, AppError> {
        let resumos = self.ordens.listar_resumos().await?;
        let filtradas = filtro::filtrar(&resumos, &criterios.predicados_resumo());
        Ok(agregador::agrupar_por(&filtradas, |o| Some(o.cidade.clone())))
    }

    /// Série do gráfico por técnico de campo.
    pub async fn por_tecnico(
        &self,
        criterios: &filtro::FiltroOrdens,
    ) -> Result<Vec<Contagem>, AppError> {
        let resumos = self.ordens.listar_resumos().await?;
        let filtradas = filtro::filtrar(&resumos, &criterios.predicados_resumo());
        Ok(agregador::agrupar_por(&filtradas, |o| {
            Some(o.tecnico_campo.clone())
        }))
    }

    /// Série por bairro do cliente.
    pub async fn por_bairro(
        &self,
        criterios: &filtro::FiltroOrdens,
    ) -> Result<Vec<Contagem>, AppError> {
        let resumos = self.ordens.listar_resumos().await?;
        let filtradas = filtro::filtrar(&resumos, &criterios.predicados_resumo());
        Ok(agregador::agrupar_por(&filtradas, |o| Some(o.bairro.clone())))
    }

    /// Série da evolução diária. Aqui o consumidor quer o eixo do tempo em
    /// ordem cronológica, então reordenamos depois de agrupar — a chave
    /// AAAA-MM-DD ordena lexicograficamente na ordem certa.
    pub async fn por_data(
        &self,
        criterios: &filtro::FiltroOrdens,
    ) -> Result<Vec<Contagem>, AppError> {
        let resumos = self.ordens.listar_resumos().await?;
        let filtradas = filtro::filtrar(&resumos, &criterios.predicados_resumo());

        let mut serie = agregador::agrupar_por(&filtradas, |o| {
            Some(o.data_criacao.date_naive().to_string())
        });
        serie.sort_by(|a, b| a.chave.cmp(&b.chave));
        Ok(serie)
    }
}
