// src/analise/filtro.rs

use chrono::NaiveDate;

use crate::models::{
    ordem_servico::{OrdemResumo, OrdemServico},
    painel::Pagina,
};

/// Um critério compilado do pipeline de filtros.
pub type Predicado<T> = Box<dyn Fn(&T) -> bool>;

/// Aplica os predicados em conjunção (AND) sobre a coleção, sem mutá-la.
/// A ordem relativa dos registros que passam é preservada; uma lista vazia
/// de predicados devolve a coleção inteira.
pub fn filtrar<T: Clone>(itens: &[T], predicados: &[Predicado<T>]) -> Vec<T> {
    itens
        .iter()
        .filter(|&item| predicados.iter().all(|p| p(item)))
        .cloned()
        .collect()
}

/// Critérios de filtro das páginas de O.S.: cada campo ausente não impõe
/// restrição nenhuma.
///
/// O mínimo de 3 caracteres para `busca` é regra da borda HTTP (validator nos
/// payloads), não daqui: o pipeline aceita qualquer texto.
#[derive(Debug, Clone, Default)]
pub struct FiltroOrdens {
    /// Texto livre: OR entre nome do cliente, número da O.S. e endereço,
    /// sem diferenciar maiúsculas.
    pub busca: Option<String>,
    pub cidade_id: Option<i32>,
    pub tecnico_id: Option<i32>,
    pub status: Option<String>,
    /// Limites inclusivos sobre a data de criação.
    pub data_inicio: Option<NaiveDate>,
    pub data_fim: Option<NaiveDate>,
}

impl FiltroOrdens {
    /// Compila os critérios presentes para linhas desnormalizadas.
    pub fn predicados_resumo(&self) -> Vec<Predicado<OrdemResumo>> {
        let mut predicados: Vec<Predicado<OrdemResumo>> = Vec::new();

        if let Some(busca) = &self.busca {
            let termo = busca.to_lowercase();
            predicados.push(Box::new(move |o: &OrdemResumo| {
                o.nome_cliente.to_lowercase().contains(&termo)
                    || o.numero_os.to_lowercase().contains(&termo)
                    || o.endereco.to_lowercase().contains(&termo)
            }));
        }
        if let Some(cidade_id) = self.cidade_id {
            predicados.push(Box::new(move |o: &OrdemResumo| o.cidade_id == cidade_id));
        }
        if let Some(tecnico_id) = self.tecnico_id {
            predicados.push(Box::new(move |o: &OrdemResumo| {
                o.tecnico_campo_id == tecnico_id
            }));
        }
        if let Some(status) = &self.status {
            let status = status.clone();
            predicados.push(Box::new(move |o: &OrdemResumo| o.status == status));
        }
        if let Some(inicio) = self.data_inicio {
            predicados.push(Box::new(move |o: &OrdemResumo| {
                o.data_criacao.date_naive() >= inicio
            }));
        }
        if let Some(fim) = self.data_fim {
            predicados.push(Box::new(move |o: &OrdemResumo| {
                o.data_criacao.date_naive() <= fim
            }));
        }

        predicados
    }

    /// Compila os critérios presentes para ordens cruas (mapa). `busca` aqui
    /// só alcança o número da O.S., único dos campos de texto livre que
    /// existe antes do cruzamento com cliente e cidade.
    pub fn predicados_ordem(&self) -> Vec<Predicado<OrdemServico>> {
        let mut predicados: Vec<Predicado<OrdemServico>> = Vec::new();

        if let Some(busca) = &self.busca {
            let termo = busca.to_lowercase();
            predicados.push(Box::new(move |o: &OrdemServico| {
                o.numero_os.to_lowercase().contains(&termo)
            }));
        }
        if let Some(cidade_id) = self.cidade_id {
            predicados.push(Box::new(move |o: &OrdemServico| o.cidade_id == cidade_id));
        }
        if let Some(tecnico_id) = self.tecnico_id {
            predicados.push(Box::new(move |o: &OrdemServico| {
                o.tecnico_campo_id == tecnico_id || o.tecnico_app_id == Some(tecnico_id)
            }));
        }
        if let Some(status) = &self.status {
            let status = status.clone();
            predicados.push(Box::new(move |o: &OrdemServico| o.status == status));
        }
        if let Some(inicio) = self.data_inicio {
            predicados.push(Box::new(move |o: &OrdemServico| {
                o.data_criacao.date_naive() >= inicio
            }));
        }
        if let Some(fim) = self.data_fim {
            predicados.push(Box::new(move |o: &OrdemServico| {
                o.data_criacao.date_naive() <= fim
            }));
        }

        predicados
    }
}

/// Recorta uma página (1-based) da coleção já filtrada. `pagina` além do fim
/// devolve uma página vazia com os totais corretos; quem refiltra volta para
/// a página 1 simplesmente omitindo o parâmetro.
pub fn paginar<T: Clone>(itens: &[T], pagina: u32, por_pagina: u32) -> Pagina<T> {
    let por_pagina = por_pagina.max(1);
    let pagina = pagina.max(1);

    let total_itens = itens.len() as u64;
    let total_paginas = total_itens.div_ceil(por_pagina as u64) as u32;

    let inicio = (pagina as usize - 1).saturating_mul(por_pagina as usize);
    let selecionados = itens
        .iter()
        .skip(inicio)
        .take(por_pagina as usize)
        .cloned()
        .collect();

    Pagina {
        itens: selecionados,
        pagina,
        por_pagina,
        total_itens,
        total_paginas,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn resumo(
        id: i32,
        numero_os: &str,
        status: &str,
        nome_cliente: &str,
        endereco: &str,
        cidade_id: i32,
        tecnico_campo_id: i32,
        dia: u32,
    ) -> OrdemResumo {
        let data = Utc.with_ymd_and_hms(2025, 5, dia, 12, 0, 0).unwrap();
        OrdemResumo {
            id,
            numero_os: numero_os.to_string(),
            status: status.to_string(),
            data_criacao: data,
            data_vencimento: data,
            data_instalacao: None,
            nome_cliente: nome_cliente.to_string(),
            endereco: endereco.to_string(),
            bairro: "Centro".to_string(),
            cidade_id,
            cidade: format!("Cidade {cidade_id}"),
            uf: "MA".to_string(),
            tecnico_campo_id,
            tecnico_campo: format!("Técnico {tecnico_campo_id}"),
        }
    }

    fn amostra() -> Vec<OrdemResumo> {
        vec![
            resumo(1, "OS-001", "PENDENTE", "Maria da Silva", "Rua das Flores, 10", 1, 1, 2),
            resumo(2, "OS-002", "INSTALADA", "José Santos", "Av. Central, 200", 2, 1, 5),
            resumo(3, "OS-003", "PENDENTE", "Ana Maria Costa", "Rua do Sol, 33", 1, 2, 9),
            resumo(4, "OS-004", "CANCELADA", "Pedro Lima", "Travessa Norte, 8", 2, 2, 9),
        ]
    }

    #[test]
    fn sem_criterios_devolve_a_colecao_inalterada() {
        let ordens = amostra();
        let filtro = FiltroOrdens::default();
        let resultado = filtrar(&ordens, &filtro.predicados_resumo());

        let ids: Vec<i32> = resultado.iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn busca_e_ou_entre_nome_numero_e_endereco() {
        let ordens = amostra();
        let filtro = FiltroOrdens {
            busca: Some("maria".to_string()),
            ..Default::default()
        };
        let resultado = filtrar(&ordens, &filtro.predicados_resumo());
        // "maria" aparece no nome das ordens 1 e 3.
        let ids: Vec<i32> = resultado.iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![1, 3]);

        let filtro = FiltroOrdens {
            busca: Some("os-002".to_string()),
            ..Default::default()
        };
        assert_eq!(filtrar(&ordens, &filtro.predicados_resumo()).len(), 1);

        let filtro = FiltroOrdens {
            busca: Some("TRAVESSA".to_string()),
            ..Default::default()
        };
        assert_eq!(filtrar(&ordens, &filtro.predicados_resumo())[0].id, 4);
    }

    #[test]
    fn criterios_presentes_combinam_em_and() {
        let ordens = amostra();
        let filtro = FiltroOrdens {
            cidade_id: Some(2),
            tecnico_id: Some(2),
            ..Default::default()
        };
        let resultado = filtrar(&ordens, &filtro.predicados_resumo());
        assert_eq!(resultado.len(), 1);
        assert_eq!(resultado[0].id, 4);
    }

    #[test]
    fn faixa_de_datas_e_inclusiva_nas_duas_pontas() {
        let ordens = amostra();
        let filtro = FiltroOrdens {
            data_inicio: Some(NaiveDate::from_ymd_opt(2025, 5, 5).unwrap()),
            data_fim: Some(NaiveDate::from_ymd_opt(2025, 5, 9).unwrap()),
            ..Default::default()
        };
        let ids: Vec<i32> = filtrar(&ordens, &filtro.predicados_resumo())
            .iter()
            .map(|o| o.id)
            .collect();
        assert_eq!(ids, vec![2, 3, 4]);

        // Só o limite inferior presente.
        let filtro = FiltroOrdens {
            data_inicio: Some(NaiveDate::from_ymd_opt(2025, 5, 9).unwrap()),
            ..Default::default()
        };
        assert_eq!(filtrar(&ordens, &filtro.predicados_resumo()).len(), 2);
    }

    #[test]
    fn filtrar_e_idempotente() {
        let ordens = amostra();
        let filtro = FiltroOrdens {
            status: Some("PENDENTE".to_string()),
            ..Default::default()
        };
        let uma_vez = filtrar(&ordens, &filtro.predicados_resumo());
        let duas_vezes = filtrar(&uma_vez, &filtro.predicados_resumo());

        let a: Vec<i32> = uma_vez.iter().map(|o| o.id).collect();
        let b: Vec<i32> = duas_vezes.iter().map(|o| o.id).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn filtrar_nao_muta_a_entrada() {
        let ordens = amostra();
        let filtro = FiltroOrdens {
            status: Some("INSTALADA".to_string()),
            ..Default::default()
        };
        let _ = filtrar(&ordens, &filtro.predicados_resumo());
        assert_eq!(ordens.len(), 4);
    }

    #[test]
    fn paginar_recorta_e_relata_totais() {
        let ordens = amostra();
        let pagina = paginar(&ordens, 2, 3);

        assert_eq!(pagina.itens.len(), 1);
        assert_eq!(pagina.itens[0].id, 4);
        assert_eq!(pagina.total_itens, 4);
        assert_eq!(pagina.total_paginas, 2);
    }

    #[test]
    fn pagina_alem_do_fim_vem_vazia() {
        let ordens = amostra();
        let pagina = paginar(&ordens, 9, 10);

        assert!(pagina.itens.is_empty());
        assert_eq!(pagina.total_itens, 4);
        assert_eq!(pagina.total_paginas, 1);
    }
}
