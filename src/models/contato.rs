// src/models/contato.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

// Contatos são polimórficos: um registro pertence a um cliente, técnico ou
// fornecedor via (entidade_tipo, entidade_id).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Contato {
    pub id: i32,
    #[schema(example = "cliente")]
    pub entidade_tipo: String,
    pub entidade_id: i32,
    #[schema(example = "whatsapp")]
    pub tipo: String,
    #[schema(example = "(99) 98123-4567")]
    pub valor: String,
    pub principal: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Contato exibido/recebido dentro de um cliente ou técnico (sem as colunas
/// polimórficas, que são detalhe de armazenamento).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ContatoItem {
    #[schema(example = "celular")]
    pub tipo: String,
    #[schema(example = "(99) 98123-4567")]
    pub valor: String,
    #[serde(default)]
    pub principal: bool,
}

impl From<Contato> for ContatoItem {
    fn from(c: Contato) -> Self {
        Self {
            tipo: c.tipo,
            valor: c.valor,
            principal: c.principal,
        }
    }
}

// Invariante da lista de contatos de um dono: no máximo UM contato com
// principal = true.

/// Marca `indice` como principal e desmarca todos os outros.
pub fn definir_principal(contatos: &mut [ContatoItem], indice: usize) {
    if indice >= contatos.len() {
        return;
    }
    for (i, contato) in contatos.iter_mut().enumerate() {
        contato.principal = i == indice;
    }
}

/// Remove o contato em `indice`. Se ele era o principal, o primeiro contato
/// restante (se houver) é promovido.
pub fn remover_contato(contatos: &mut Vec<ContatoItem>, indice: usize) {
    if indice >= contatos.len() {
        return;
    }
    let removido = contatos.remove(indice);
    if removido.principal {
        if let Some(primeiro) = contatos.first_mut() {
            primeiro.principal = true;
        }
    }
}

/// Normaliza uma lista vinda do cliente HTTP: se mais de um contato chegar
/// marcado como principal, só o primeiro marcado permanece.
pub fn normalizar_principais(contatos: &mut [ContatoItem]) {
    let mut ja_tem = false;
    for contato in contatos.iter_mut() {
        if contato.principal {
            if ja_tem {
                contato.principal = false;
            }
            ja_tem = true;
        }
    }
}

/// Contato preferencial para exibição: o principal, senão o primeiro.
pub fn contato_principal(contatos: &[ContatoItem]) -> Option<&ContatoItem> {
    contatos
        .iter()
        .find(|c| c.principal)
        .or_else(|| contatos.first())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lista(principais: &[bool]) -> Vec<ContatoItem> {
        principais
            .iter()
            .enumerate()
            .map(|(i, &p)| ContatoItem {
                tipo: "celular".to_string(),
                valor: format!("(99) 98000-000{i}"),
                principal: p,
            })
            .collect()
    }

    #[test]
    fn definir_principal_desmarca_os_demais() {
        let mut contatos = lista(&[true, false]);
        definir_principal(&mut contatos, 1);

        assert!(!contatos[0].principal);
        assert!(contatos[1].principal);
        assert_eq!(contatos.iter().filter(|c| c.principal).count(), 1);
    }

    #[test]
    fn remover_principal_promove_o_primeiro_restante() {
        let mut contatos = lista(&[true, false]);
        remover_contato(&mut contatos, 0);

        assert_eq!(contatos.len(), 1);
        assert!(contatos[0].principal);
    }

    #[test]
    fn remover_nao_principal_preserva_o_principal() {
        let mut contatos = lista(&[true, false, false]);
        remover_contato(&mut contatos, 2);

        assert!(contatos[0].principal);
        assert_eq!(contatos.iter().filter(|c| c.principal).count(), 1);
    }

    #[test]
    fn normalizar_mantem_apenas_o_primeiro_marcado() {
        let mut contatos = lista(&[false, true, true]);
        normalizar_principais(&mut contatos);

        assert!(!contatos[0].principal);
        assert!(contatos[1].principal);
        assert!(!contatos[2].principal);
    }

    #[test]
    fn contato_principal_cai_para_o_primeiro_sem_marcado() {
        let contatos = lista(&[false, false]);
        let principal = contato_principal(&contatos).unwrap();
        assert_eq!(principal.valor, "(99) 98000-0000");

        let vazio: Vec<ContatoItem> = Vec::new();
        assert!(contato_principal(&vazio).is_none());
    }
}
