// src/db/cliente_repo.rs

use sqlx::PgPool;

use crate::{common::error::AppError, models::cliente::Cliente};

#[derive(Clone)]
pub struct ClienteRepository {
    pool: PgPool,
}

impl ClienteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn listar(&self) -> Result<Vec<Cliente>, AppError> {
        let clientes = sqlx::query_as::<_, Cliente>("SELECT * FROM clientes ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(clientes)
    }

    pub async fn buscar(&self, id: i32) -> Result<Option<Cliente>, AppError> {
        let cliente = sqlx::query_as::<_, Cliente>("SELECT * FROM clientes WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(cliente)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn criar(
        &self,
        nome_completo: &str,
        cpf: Option<&str>,
        endereco: &str,
        numero: &str,
        complemento: Option<&str>,
        bairro: &str,
        cidade_id: i32,
        cep: Option<&str>,
        ponto_referencia: Option<&str>,
        latitude: Option<f64>,
        longitude: Option<f64>,
    ) -> Result<Cliente, AppError> {
        let cliente = sqlx::query_as::<_, Cliente>(
            r#"
            INSERT INTO clientes (
                nome_completo, cpf, endereco, numero, complemento, bairro,
                cidade_id, cep, ponto_referencia, latitude, longitude
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING *
            "#,
        )
        .bind(nome_completo)
        .bind(cpf)
        .bind(endereco)
        .bind(numero)
        .bind(complemento)
        .bind(bairro)
        .bind(cidade_id)
        .bind(cep)
        .bind(ponto_referencia)
        .bind(latitude)
        .bind(longitude)
        .fetch_one(&self.pool)
        .await?;
        Ok(cliente)
    }

    pub async fn atualizar(&self, cliente: &Cliente) -> Result<Cliente, AppError> {
        let atualizado = sqlx::query_as::<_, Cliente>(
            r#"
            UPDATE clientes
            SET nome_completo = $2, cpf = $3, endereco = $4, numero = $5,
                complemento = $6, bairro = $7, cidade_id = $8, cep = $9,
                ponto_referencia = $10, latitude = $11, longitude = $12,
                updated_at = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(cliente.id)
        .bind(&cliente.nome_completo)
        .bind(&cliente.cpf)
        .bind(&cliente.endereco)
        .bind(&cliente.numero)
        .bind(&cliente.complemento)
        .bind(&cliente.bairro)
        .bind(cliente.cidade_id)
        .bind(&cliente.cep)
        .bind(&cliente.ponto_referencia)
        .bind(cliente.latitude)
        .bind(cliente.longitude)
        .fetch_one(&self.pool)
        .await?;
        Ok(atualizado)
    }

    pub async fn excluir(&self, id: i32) -> Result<u64, AppError> {
        let resultado = sqlx::query("DELETE FROM clientes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(resultado.rows_affected())
    }
}
