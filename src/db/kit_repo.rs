// src/db/kit_repo.rs

use sqlx::PgPool;

use crate::{
    common::error::AppError,
    models::kit::{Componente, Fornecedor, Kit},
};

/// Dados de um componente na criação de um kit.
pub struct NovoComponente {
    pub tipo: String,
    pub numero_serie: Option<String>,
    pub quantidade_metros: Option<f64>,
    pub status: String,
}

#[derive(Clone)]
pub struct KitRepository {
    pool: PgPool,
}

impl KitRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn listar(
        &self,
        status: Option<&str>,
        fornecedor_id: Option<i32>,
    ) -> Result<Vec<Kit>, AppError> {
        let kits = sqlx::query_as::<_, Kit>(
            r#"
            SELECT * FROM kits
            WHERE ($1::varchar IS NULL OR status = $1)
              AND ($2::integer IS NULL OR fornecedor_id = $2)
            ORDER BY id
            "#,
        )
        .bind(status)
        .bind(fornecedor_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(kits)
    }

    pub async fn buscar(&self, id: i32) -> Result<Option<Kit>, AppError> {
        let kit = sqlx::query_as::<_, Kit>("SELECT * FROM kits WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(kit)
    }

    pub async fn listar_componentes(&self, kit_id: i32) -> Result<Vec<Componente>, AppError> {
        let componentes = sqlx::query_as::<_, Componente>(
            "SELECT * FROM componentes WHERE kit_id = $1 ORDER BY id",
        )
        .bind(kit_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(componentes)
    }

    /// Cria o kit e seus componentes numa única transação.
    pub async fn criar(
        &self,
        numero_serie: &str,
        modelo: &str,
        fornecedor_id: i32,
        status: &str,
        componentes: &[NovoComponente],
    ) -> Result<Kit, AppError> {
        let mut tx = self.pool.begin().await?;

        let kit = sqlx::query_as::<_, Kit>(
            r#"
            INSERT INTO kits (numero_serie, modelo, fornecedor_id, status)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(numero_serie)
        .bind(modelo)
        .bind(fornecedor_id)
        .bind(status)
        .fetch_one(&mut *tx)
        .await?;

        for componente in componentes {
            sqlx::query(
                r#"
                INSERT INTO componentes (kit_id, tipo, numero_serie, quantidade_metros, status)
                VALUES ($1, $2, $3, $4, $5)
                "#,
            )
            .bind(kit.id)
            .bind(&componente.tipo)
            .bind(&componente.numero_serie)
            .bind(componente.quantidade_metros)
            .bind(&componente.status)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(kit)
    }

    pub async fn listar_fornecedores(&self) -> Result<Vec<Fornecedor>, AppError> {
        let fornecedores =
            sqlx::query_as::<_, Fornecedor>("SELECT * FROM fornecedores ORDER BY id")
                .fetch_all(&self.pool)
                .await?;
        Ok(fornecedores)
    }

    pub async fn criar_fornecedor(&self, nome: &str, tipo: &str) -> Result<Fornecedor, AppError> {
        let fornecedor = sqlx::query_as::<_, Fornecedor>(
            r#"
            INSERT INTO fornecedores (nome, tipo)
            VALUES ($1, $2)
            RETURNING *
            "#,
        )
        .bind(nome)
        .bind(tipo)
        .fetch_one(&self.pool)
        .await?;
        Ok(fornecedor)
    }
}
