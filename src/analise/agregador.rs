// src/analise/agregador.rs

use crate::models::{ordem_servico::OrdemResumo, painel::{Contagem, ResumoPainel}};

/// Agrupa a coleção pela chave extraída e conta os registros de cada grupo.
///
/// Chaves vazias ou ausentes ficam de fora (nenhum grupo espúrio). A lista
/// sai na ordem da primeira ocorrência de cada chave na entrada — quem quiser
/// outra ordem reordena depois. A contagem é uma varredura completa por
/// chave, sem atalho.
pub fn agrupar_por<T, F>(itens: &[T], chave: F) -> Vec<Contagem>
where
    F: Fn(&T) -> Option<String>,
{
    let mut chaves: Vec<String> = Vec::new();
    for item in itens {
        if let Some(k) = chave(item) {
            if !k.is_empty() && !chaves.contains(&k) {
                chaves.push(k);
            }
        }
    }

    chaves
        .into_iter()
        .map(|k| {
            let total = itens
                .iter()
                .filter(|&item| chave(item).as_deref() == Some(k.as_str()))
                .count() as u64;
            Contagem { chave: k, total }
        })
        .collect()
}

/// Média com uma casa decimal; divisor zero vira 0 em vez de NaN/infinito.
pub fn media(total: u64, divisor: u64) -> f64 {
    if divisor == 0 {
        return 0.0;
    }
    ((total as f64 / divisor as f64) * 10.0).round() / 10.0
}

/// Percentual com duas casas decimais; total zero vira 0.
pub fn taxa(parte: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    ((parte as f64 / total as f64) * 100.0 * 100.0).round() / 100.0
}

/// Monta os cards de resumo do painel a partir das linhas já filtradas.
pub fn resumo_painel(resumos: &[OrdemResumo]) -> ResumoPainel {
    let total_os = resumos.len() as u64;
    let cidades = agrupar_por(resumos, |o| Some(o.cidade.clone()));
    let tecnicos = agrupar_por(resumos, |o| Some(o.tecnico_campo.clone()));
    let dias = agrupar_por(resumos, |o| {
        Some(o.data_criacao.date_naive().to_string())
    });

    ResumoPainel {
        total_os,
        cidades_atendidas: cidades.len() as u64,
        tecnicos_atuantes: tecnicos.len() as u64,
        media_diaria: media(total_os, dias.len() as u64),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Registro {
        cidade: &'static str,
    }

    fn registros(cidades: &[&'static str]) -> Vec<Registro> {
        cidades.iter().map(|c| Registro { cidade: c }).collect()
    }

    fn por_cidade(r: &Registro) -> Option<String> {
        Some(r.cidade.to_string())
    }

    #[test]
    fn agrupa_na_ordem_da_primeira_ocorrencia() {
        let itens = registros(&["A", "A", "B"]);
        let grupos = agrupar_por(&itens, por_cidade);

        assert_eq!(
            grupos,
            vec![
                Contagem { chave: "A".to_string(), total: 2 },
                Contagem { chave: "B".to_string(), total: 1 },
            ]
        );
    }

    #[test]
    fn chave_vazia_nao_gera_grupo() {
        let itens = registros(&["A", "", "B", ""]);
        let grupos = agrupar_por(&itens, por_cidade);

        assert_eq!(grupos.len(), 2);
        assert!(grupos.iter().all(|g| !g.chave.is_empty()));
    }

    #[test]
    fn soma_dos_totais_cobre_os_registros_com_chave() {
        let itens = registros(&["A", "B", "", "A", "C", "B", "A"]);
        let grupos = agrupar_por(&itens, por_cidade);

        let soma: u64 = grupos.iter().map(|g| g.total).sum();
        let com_chave = itens.iter().filter(|r| !r.cidade.is_empty()).count() as u64;
        assert_eq!(soma, com_chave);
    }

    #[test]
    fn chaves_sao_unicas_e_existem_na_entrada() {
        let itens = registros(&["B", "A", "B", "A", "B"]);
        let grupos = agrupar_por(&itens, por_cidade);

        let mut vistas = std::collections::HashSet::new();
        for grupo in &grupos {
            assert!(vistas.insert(grupo.chave.clone()), "chave repetida");
            assert!(itens.iter().any(|r| r.cidade == grupo.chave));
        }
    }

    #[test]
    fn chave_ausente_fica_de_fora() {
        struct Opcional {
            cidade: Option<&'static str>,
        }
        let itens = vec![
            Opcional { cidade: Some("A") },
            Opcional { cidade: None },
            Opcional { cidade: Some("A") },
        ];
        let grupos = agrupar_por(&itens, |o| o.cidade.map(str::to_string));

        assert_eq!(grupos.len(), 1);
        assert_eq!(grupos[0].total, 2);
    }

    #[test]
    fn media_arredonda_para_uma_casa() {
        assert_eq!(media(10, 3), 3.3);
        assert_eq!(media(7, 2), 3.5);
    }

    #[test]
    fn media_com_divisor_zero_e_zero() {
        assert_eq!(media(42, 0), 0.0);
    }

    #[test]
    fn taxa_com_total_zero_e_zero() {
        assert_eq!(taxa(5, 0), 0.0);
        assert_eq!(taxa(2, 3), 66.67);
    }
}
