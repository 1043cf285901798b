// src/services/ordem_service.rs

use chrono::{DateTime, Duration, Utc};

use crate::{
    analise::{agregador, filtro},
    common::error::AppError,
    db::OrdemRepository,
    models::{
        ordem_servico::{MetricasOrdens, OrdemResumo, OrdemServico, STATUS_INSTALADA},
        painel::Pagina,
    },
};

#[derive(Clone)]
pub struct OrdemService {
    repo: OrdemRepository,
}

impl OrdemService {
    pub fn new(repo: OrdemRepository) -> Self {
        Self { repo }
    }

    /// Listagem com filtros e paginação: snapshot desnormalizado, pipeline de
    /// filtros e recorte da página — tudo em memória, sobre uma foto coerente
    /// dos dados.
    pub async fn listar(
        &self,
        criterios: &filtro::FiltroOrdens,
        pagina: u32,
        por_pagina: u32,
    ) -> Result<Pagina<OrdemResumo>, AppError> {
        let resumos = self.repo.listar_resumos().await?;
        let filtradas = filtro::filtrar(&resumos, &criterios.predicados_resumo());
        Ok(filtro::paginar(&filtradas, pagina, por_pagina))
    }

    pub async fn buscar(&self, id: i32) -> Result<OrdemServico, AppError> {
        self.repo
            .buscar(id)
            .await?
            .ok_or(AppError::NaoEncontrado("Ordem de serviço"))
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn criar(
        &self,
        numero_os: &str,
        status: &str,
        data_criacao: DateTime<Utc>,
        data_vencimento: DateTime<Utc>,
        data_instalacao: Option<DateTime<Utc>>,
        cliente_id: i32,
        tecnico_campo_id: i32,
        tecnico_app_id: Option<i32>,
        cidade_id: i32,
        fez_na_rua: bool,
        baixou_no_app: bool,
        observacoes: Option<&str>,
    ) -> Result<OrdemServico, AppError> {
        self.repo
            .criar(
                numero_os,
                status,
                data_criacao,
                data_vencimento,
                data_instalacao,
                cliente_id,
                tecnico_campo_id,
                tecnico_app_id,
                cidade_id,
                fez_na_rua,
                baixou_no_app,
                observacoes,
            )
            .await
    }

    /// Atualização parcial: campo ausente no payload fica como está.
    #[allow(clippy::too_many_arguments)]
    pub async fn atualizar(
        &self,
        id: i32,
        status: Option<String>,
        data_vencimento: Option<DateTime<Utc>>,
        data_instalacao: Option<DateTime<Utc>>,
        tecnico_campo_id: Option<i32>,
        tecnico_app_id: Option<i32>,
        fez_na_rua: Option<bool>,
        baixou_no_app: Option<bool>,
        observacoes: Option<String>,
    ) -> Result<OrdemServico, AppError> {
        let mut ordem = self.buscar(id).await?;

        if let Some(status) = status {
            ordem.status = status;
        }
        if let Some(vencimento) = data_vencimento {
            ordem.data_vencimento = vencimento;
        }
        if let Some(instalacao) = data_instalacao {
            ordem.data_instalacao = Some(instalacao);
        }
        if let Some(tecnico) = tecnico_campo_id {
            ordem.tecnico_campo_id = tecnico;
        }
        if let Some(tecnico_app) = tecnico_app_id {
            ordem.tecnico_app_id = Some(tecnico_app);
        }
        if let Some(fez) = fez_na_rua {
            ordem.fez_na_rua = fez;
        }
        if let Some(baixou) = baixou_no_app {
            ordem.baixou_no_app = baixou;
        }
        if let Some(obs) = observacoes {
            ordem.observacoes = Some(obs);
        }

        self.repo.atualizar(&ordem).await
    }

    pub async fn excluir(&self, id: i32) -> Result<(), AppError> {
        let excluidas = self.repo.excluir(id).await?;
        if excluidas == 0 {
            return Err(AppError::NaoEncontrado("Ordem de serviço"));
        }
        Ok(())
    }

    /// Ordens não instaladas vencendo nos próximos `dias`.
    pub async fn proximas_vencimento(&self, dias: i64) -> Result<Vec<OrdemServico>, AppError> {
        let limite = Utc::now() + Duration::days(dias);
        self.repo.proximas_vencimento(limite).await
    }

    pub async fn metricas(&self) -> Result<MetricasOrdens, AppError> {
        let ordens = self.repo.listar().await?;

        let por_status = agregador::agrupar_por(&ordens, |o| Some(o.status.clone()));
        let total_geral = ordens.len() as u64;
        let total_instaladas = por_status
            .iter()
            .find(|g| g.chave == STATUS_INSTALADA)
            .map(|g| g.total)
            .unwrap_or(0);

        Ok(MetricasOrdens {
            total_geral,
            total_instaladas,
            taxa_conclusao: agregador::taxa(total_instaladas, total_geral),
            por_status: por_status.into_iter().map(|g| (g.chave, g.total)).collect(),
        })
    }
}
