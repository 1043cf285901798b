// src/db/ordem_repo.rs

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::{
    common::error::AppError,
    models::ordem_servico::{OrdemResumo, OrdemServico},
};

#[derive(Clone)]
pub struct OrdemRepository {
    pool: PgPool,
}

impl OrdemRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn listar(&self) -> Result<Vec<OrdemServico>, AppError> {
        let ordens = sqlx::query_as::<_, OrdemServico>(
            "SELECT * FROM ordens_servico ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(ordens)
    }

    /// Snapshot desnormalizado para o pipeline de filtros: cada ordem já
    /// cruzada com cliente, cidade e técnico de campo. Ordens com relação
    /// quebrada ficam de fora, pelo mesmo critério de exclusão silenciosa do
    /// resto do núcleo.
    pub async fn listar_resumos(&self) -> Result<Vec<OrdemResumo>, AppError> {
        let resumos = sqlx::query_as::<_, OrdemResumo>(
            r#"
            SELECT
                o.id,
                o.numero_os,
                o.status,
                o.data_criacao,
                o.data_vencimento,
                o.data_instalacao,
                cl.nome_completo AS nome_cliente,
                cl.endereco || ', ' || cl.numero AS endereco,
                cl.bairro,
                ci.id AS cidade_id,
                ci.nome AS cidade,
                ci.uf,
                t.id AS tecnico_campo_id,
                t.nome AS tecnico_campo
            FROM ordens_servico o
            JOIN clientes cl ON cl.id = o.cliente_id
            JOIN cidades ci ON ci.id = o.cidade_id
            JOIN tecnicos t ON t.id = o.tecnico_campo_id
            ORDER BY o.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(resumos)
    }

    pub async fn buscar(&self, id: i32) -> Result<Option<OrdemServico>, AppError> {
        let ordem = sqlx::query_as::<_, OrdemServico>(
            "SELECT * FROM ordens_servico WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(ordem)
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
        let ordem = sqlx::query_as::<_, OrdemServico>(
            r#"
            INSERT INTO ordens_servico (
                numero_os, status, data_criacao, data_vencimento, data_instalacao,
                cliente_id, tecnico_campo_id, tecnico_app_id, cidade_id,
                fez_na_rua, baixou_no_app, observacoes
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING *
            "#,
        )
        .bind(numero_os)
        .bind(status)
        .bind(data_criacao)
        .bind(data_vencimento)
        .bind(data_instalacao)
        .bind(cliente_id)
        .bind(tecnico_campo_id)
        .bind(tecnico_app_id)
        .bind(cidade_id)
        .bind(fez_na_rua)
        .bind(baixou_no_app)
        .bind(observacoes)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            // Número de O.S. repetido vira um 409 amigável em vez de um 500.
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return AppError::NumeroOsJaExiste;
                }
            }
            e.into()
        })?;
        Ok(ordem)
    }

    pub async fn atualizar(&self, ordem: &OrdemServico) -> Result<OrdemServico, AppError> {
        let atualizada = sqlx::query_as::<_, OrdemServico>(
            r#"
            UPDATE ordens_servico
            SET status = $2, data_vencimento = $3, data_instalacao = $4,
                tecnico_campo_id = $5, tecnico_app_id = $6, fez_na_rua = $7,
                baixou_no_app = $8, observacoes = $9, updated_at = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(ordem.id)
        .bind(&ordem.status)
        .bind(ordem.data_vencimento)
        .bind(ordem.data_instalacao)
        .bind(ordem.tecnico_campo_id)
        .bind(ordem.tecnico_app_id)
        .bind(ordem.fez_na_rua)
        .bind(ordem.baixou_no_app)
        .bind(&ordem.observacoes)
        .fetch_one(&self.pool)
        .await?;
        Ok(atualizada)
    }

    pub async fn excluir(&self, id: i32) -> Result<u64, AppError> {
        let resultado = sqlx::query("DELETE FROM ordens_servico WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(resultado.rows_affected())
    }

    /// Ordens não instaladas com vencimento até a data-limite, da mais
    /// urgente para a menos.
    pub async fn proximas_vencimento(
        &self,
        limite: DateTime<Utc>,
    ) -> Result<Vec<OrdemServico>, AppError> {
        let ordens = sqlx::query_as::<_, OrdemServico>(
            r#"
            SELECT * FROM ordens_servico
            WHERE status <> 'INSTALADA' AND data_vencimento <= $1
            ORDER BY data_vencimento
            "#,
        )
        .bind(limite)
        .fetch_all(&self.pool)
        .await?;
        Ok(ordens)
    }

    pub async fn contar_por_tecnico(&self, tecnico_id: i32) -> Result<i64, AppError> {
        let total = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM ordens_servico
            WHERE tecnico_campo_id = $1 OR tecnico_app_id = $1
            "#,
        )
        .bind(tecnico_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(total)
    }

    pub async fn contar_por_cidade(&self, cidade_id: i32) -> Result<i64, AppError> {
        let total = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM ordens_servico WHERE cidade_id = $1",
        )
        .bind(cidade_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(total)
    }

    pub async fn contar_por_cliente(&self, cliente_id: i32) -> Result<i64, AppError> {
        let total = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM ordens_servico WHERE cliente_id = $1",
        )
        .bind(cliente_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(total)
    }
}
