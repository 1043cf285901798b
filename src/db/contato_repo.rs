// src/db/contato_repo.rs

use sqlx::PgPool;

use crate::{
    common::error::AppError,
    models::contato::{Contato, ContatoItem},
};

// Repositório da tabela polimórfica de contatos, compartilhado por clientes
// e técnicos.
#[derive(Clone)]
pub struct ContatoRepository {
    pool: PgPool,
}

impl ContatoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn listar_por_entidade(
        &self,
        entidade_tipo: &str,
        entidade_id: i32,
    ) -> Result<Vec<ContatoItem>, AppError> {
        let contatos = sqlx::query_as::<_, Contato>(
            r#"
            SELECT * FROM contatos
            WHERE entidade_tipo = $1 AND entidade_id = $2
            ORDER BY id
            "#,
        )
        .bind(entidade_tipo)
        .bind(entidade_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(contatos.into_iter().map(ContatoItem::from).collect())
    }

    /// Todos os contatos de um tipo de dono, para cruzamento em lote nos
    /// relatórios (uma query em vez de uma por dono).
    pub async fn listar_por_tipo(&self, entidade_tipo: &str) -> Result<Vec<Contato>, AppError> {
        let contatos = sqlx::query_as::<_, Contato>(
            "SELECT * FROM contatos WHERE entidade_tipo = $1 ORDER BY id",
        )
        .bind(entidade_tipo)
        .fetch_all(&self.pool)
        .await?;
        Ok(contatos)
    }

    /// Troca a lista inteira de contatos do dono numa transação, como o
    /// formulário envia: apaga os existentes e insere os novos na ordem.
    pub async fn substituir(
        &self,
        entidade_tipo: &str,
        entidade_id: i32,
        contatos: &[ContatoItem],
    ) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM contatos WHERE entidade_tipo = $1 AND entidade_id = $2")
            .bind(entidade_tipo)
            .bind(entidade_id)
            .execute(&mut *tx)
            .await?;

        for contato in contatos {
            sqlx::query(
                r#"
                INSERT INTO contatos (entidade_tipo, entidade_id, tipo, valor, principal)
                VALUES ($1, $2, $3, $4, $5)
                "#,
            )
            .bind(entidade_tipo)
            .bind(entidade_id)
            .bind(&contato.tipo)
            .bind(&contato.valor)
            .bind(contato.principal)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    pub async fn excluir_por_entidade(
        &self,
        entidade_tipo: &str,
        entidade_id: i32,
    ) -> Result<(), AppError> {
        sqlx::query("DELETE FROM contatos WHERE entidade_tipo = $1 AND entidade_id = $2")
            .bind(entidade_tipo)
            .bind(entidade_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
