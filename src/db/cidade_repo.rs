// src/db/cidade_repo.rs

use sqlx::PgPool;

use crate::{common::error::AppError, models::cidade::Cidade};

#[derive(Clone)]
pub struct CidadeRepository {
    pool: PgPool,
}

impl CidadeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn listar(&self) -> Result<Vec<Cidade>, AppError> {
        let cidades = sqlx::query_as::<_, Cidade>("SELECT * FROM cidades ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(cidades)
    }

    pub async fn buscar(&self, id: i32) -> Result<Option<Cidade>, AppError> {
        let cidade = sqlx::query_as::<_, Cidade>("SELECT * FROM cidades WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(cidade)
    }

    pub async fn criar(
        &self,
        nome: &str,
        uf: &str,
        regiao: Option<&str>,
        codigo_ibge: Option<&str>,
        latitude: Option<f64>,
        longitude: Option<f64>,
    ) -> Result<Cidade, AppError> {
        let cidade = sqlx::query_as::<_, Cidade>(
            r#"
            INSERT INTO cidades (nome, uf, regiao, codigo_ibge, latitude, longitude)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(nome)
        .bind(uf)
        .bind(regiao)
        .bind(codigo_ibge)
        .bind(latitude)
        .bind(longitude)
        .fetch_one(&self.pool)
        .await?;
        Ok(cidade)
    }

    pub async fn atualizar(&self, cidade: &Cidade) -> Result<Cidade, AppError> {
        let atualizada = sqlx::query_as::<_, Cidade>(
            r#"
            UPDATE cidades
            SET nome = $2, uf = $3, regiao = $4, codigo_ibge = $5,
                latitude = $6, longitude = $7, updated_at = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(cidade.id)
        .bind(&cidade.nome)
        .bind(&cidade.uf)
        .bind(&cidade.regiao)
        .bind(&cidade.codigo_ibge)
        .bind(cidade.latitude)
        .bind(cidade.longitude)
        .fetch_one(&self.pool)
        .await?;
        Ok(atualizada)
    }

    pub async fn excluir(&self, id: i32) -> Result<u64, AppError> {
        let resultado = sqlx::query("DELETE FROM cidades WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(resultado.rows_affected())
    }
}
