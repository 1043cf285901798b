// src/handlers/relatorios.rs

use axum::{
    extract::{Query, State},
    http::header,
    response::IntoResponse,
};
use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{common::error::AppError, config::AppState};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RelatorioTecnicosQuery {
    pub tecnico_id: Option<i32>,
    pub cidade_id: Option<i32>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RelatorioAdminQuery {
    /// Tipo do relatório: os, tecnicos ou cidades.
    #[param(example = "os")]
    pub tipo: Option<String>,
    pub data_inicio: Option<NaiveDate>,
    pub data_fim: Option<NaiveDate>,
    /// Substitui nomes reais por pseudônimos na exportação.
    pub anonimizar: Option<bool>,
}

// GET /api/relatorios/tecnicos/pdf
#[utoipa::path(
    get,
    path = "/api/relatorios/tecnicos/pdf",
    tag = "Relatórios",
    params(RelatorioTecnicosQuery),
    responses(
        (status = 200, description = "PDF de ordens pendentes para os técnicos", body = Vec<u8>, content_type = "application/pdf")
    )
)]
pub async fn relatorio_tecnicos_pdf(
    State(app_state): State<AppState>,
    Query(query): Query<RelatorioTecnicosQuery>,
) -> Result<impl IntoResponse, AppError> {
    let (nome_arquivo, pdf) = app_state
        .relatorio_service
        .pdf_tecnicos(query.tecnico_id, query.cidade_id)
        .await?;

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{nome_arquivo}\""),
            ),
        ],
        pdf,
    ))
}

// GET /api/relatorios/admin/csv
#[utoipa::path(
    get,
    path = "/api/relatorios/admin/csv",
    tag = "Relatórios",
    params(RelatorioAdminQuery),
    responses(
        (status = 200, description = "CSV administrativo", body = Vec<u8>, content_type = "text/csv"),
        (status = 400, description = "Tipo de relatório inválido")
    )
)]
pub async fn relatorio_admin_csv(
    State(app_state): State<AppState>,
    Query(query): Query<RelatorioAdminQuery>,
) -> Result<impl IntoResponse, AppError> {
    let tipo = query.tipo.as_deref().unwrap_or("os");

    let (nome_arquivo, csv) = app_state
        .relatorio_service
        .csv_admin(
            tipo,
            query.data_inicio,
            query.data_fim,
            query.anonimizar.unwrap_or(false),
        )
        .await?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{nome_arquivo}\""),
            ),
        ],
        csv,
    ))
}
