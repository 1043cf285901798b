// src/db/tecnico_repo.rs

use sqlx::PgPool;

use crate::{common::error::AppError, models::tecnico::Tecnico};

#[derive(Clone)]
pub struct TecnicoRepository {
    pool: PgPool,
}

impl TecnicoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Lista técnicos; `ativo` presente restringe ao estado pedido.
    pub async fn listar(&self, ativo: Option<bool>) -> Result<Vec<Tecnico>, AppError> {
        let tecnicos = sqlx::query_as::<_, Tecnico>(
            r#"
            SELECT * FROM tecnicos
            WHERE ($1::boolean IS NULL OR ativo = $1)
            ORDER BY id
            "#,
        )
        .bind(ativo)
        .fetch_all(&self.pool)
        .await?;
        Ok(tecnicos)
    }

    pub async fn buscar(&self, id: i32) -> Result<Option<Tecnico>, AppError> {
        let tecnico = sqlx::query_as::<_, Tecnico>("SELECT * FROM tecnicos WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(tecnico)
    }

    pub async fn criar(
        &self,
        nome: &str,
        identificacao_campo: Option<&str>,
        identificacao_app: Option<&str>,
        ativo: bool,
    ) -> Result<Tecnico, AppError> {
        let tecnico = sqlx::query_as::<_, Tecnico>(
            r#"
            INSERT INTO tecnicos (nome, identificacao_campo, identificacao_app, ativo)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(nome)
        .bind(identificacao_campo)
        .bind(identificacao_app)
        .bind(ativo)
        .fetch_one(&self.pool)
        .await?;
        Ok(tecnico)
    }

    pub async fn atualizar(&self, tecnico: &Tecnico) -> Result<Tecnico, AppError> {
        let atualizado = sqlx::query_as::<_, Tecnico>(
            r#"
            UPDATE tecnicos
            SET nome = $2, identificacao_campo = $3, identificacao_app = $4,
                ativo = $5, updated_at = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(tecnico.id)
        .bind(&tecnico.nome)
        .bind(&tecnico.identificacao_campo)
        .bind(&tecnico.identificacao_app)
        .bind(tecnico.ativo)
        .fetch_one(&self.pool)
        .await?;
        Ok(atualizado)
    }

    pub async fn excluir(&self, id: i32) -> Result<u64, AppError> {
        let resultado = sqlx::query("DELETE FROM tecnicos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(resultado.rows_affected())
    }
}
