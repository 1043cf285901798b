// src/services/relatorio_service.rs

use std::collections::HashMap;

use chrono::{NaiveDate, Utc};
use genpdf::{elements, style, Element};

use crate::{
    analise::filtro::{self, FiltroOrdens, Predicado},
    common::error::AppError,
    db::{CidadeRepository, ClienteRepository, ContatoRepository, OrdemRepository, TecnicoRepository},
    models::{
        contato::{contato_principal, ContatoItem},
        ordem_servico::{OrdemResumo, OrdemServico, STATUS_INSTALADA},
    },
    services::anonimizador::Anonimizador,
    analise::agregador,
};

// UTF-8 com BOM para o Excel abrir acentuação corretamente.
const BOM_UTF8: [u8; 3] = [0xEF, 0xBB, 0xBF];

const CABECALHO_OS: [&str; 11] = [
    "Número OS",
    "Status",
    "Data Criação",
    "Data Instalação",
    "Data Vencimento",
    "Cliente",
    "Endereço",
    "Bairro",
    "Cidade",
    "UF",
    "Técnico",
];

#[derive(Clone)]
pub struct RelatorioService {
    ordens: OrdemRepository,
    clientes: ClienteRepository,
    cidades: CidadeRepository,
    tecnicos: TecnicoRepository,
    contatos: ContatoRepository,
    // Divisor da estimativa mensal por técnico/cidade (DIAS_ESTIMATIVA_MENSAL).
    dias_estimativa_mensal: u32,
}

impl RelatorioService {
    pub fn new(
        ordens: OrdemRepository,
        clientes: ClienteRepository,
        cidades: CidadeRepository,
        tecnicos: TecnicoRepository,
        contatos: ContatoRepository,
        dias_estimativa_mensal: u32,
    ) -> Self {
        Self {
            ordens,
            clientes,
            cidades,
            tecnicos,
            contatos,
            dias_estimativa_mensal,
        }
    }

    // =========================================================================
    //  PDF PARA TÉCNICOS (ordens pendentes em campo)
    // =========================================================================

    pub async fn pdf_tecnicos(
        &self,
        tecnico_id: Option<i32>,
        cidade_id: Option<i32>,
    ) -> Result<(String, Vec<u8>), AppError> {
        let ordens = self.ordens.listar().await?;
        let clientes = self.clientes.listar().await?;
        let cidades = self.cidades.listar().await?;
        let tecnicos = self.tecnicos.listar(None).await?;
        let contatos_clientes = self.contatos.listar_por_tipo("cliente").await?;

        // Critérios do chamador mais a regra fixa do relatório: só o que
        // ainda não foi instalado, do mais urgente para o menos.
        let criterios = FiltroOrdens {
            tecnico_id,
            cidade_id,
            ..Default::default()
        };
        let mut predicados = criterios.predicados_ordem();
        predicados.push(Box::new(|o: &OrdemServico| o.status != STATUS_INSTALADA)
            as Predicado<OrdemServico>);
        let mut pendentes = filtro::filtrar(&ordens, &predicados);
        pendentes.sort_by_key(|o| o.data_vencimento);

        let clientes_por_id: HashMap<i32, _> = clientes.iter().map(|c| (c.id, c)).collect();
        let cidades_por_id: HashMap<i32, _> = cidades.iter().map(|c| (c.id, c)).collect();
        let tecnicos_por_id: HashMap<i32, _> = tecnicos.iter().map(|t| (t.id, t)).collect();

        let mut contatos_por_cliente: HashMap<i32, Vec<ContatoItem>> = HashMap::new();
        for contato in contatos_clientes {
            contatos_por_cliente
                .entry(contato.entidade_id)
                .or_default()
                .push(ContatoItem::from(contato));
        }

        let titulo = titulo_relatorio(
            tecnico_id.and_then(|id| tecnicos_por_id.get(&id).map(|t| t.nome.as_str())),
            cidade_id.and_then(|id| {
                cidades_por_id
                    .get(&id)
                    .map(|c| format!("{}-{}", c.nome, c.uf))
            })
            .as_deref(),
        );

        // Mesma configuração de documento do restante dos PDFs: fonte da
        // pasta ./fonts e margens simples.
        let font_family = genpdf::fonts::from_files("./fonts", "Roboto", None)
            .map_err(|_| {
                AppError::FonteNaoEncontrada("Fonte não encontrada na pasta ./fonts".to_string())
            })?;

        let mut doc = genpdf::Document::new(font_family);
        doc.set_title(titulo.clone());
        let mut decorator = genpdf::SimplePageDecorator::new();
        decorator.set_margins(10);
        doc.set_page_decorator(decorator);

        doc.push(
            elements::Paragraph::new(titulo)
                .styled(style::Style::new().bold().with_font_size(14)),
        );
        doc.push(elements::Break::new(1.5));

        // Pesos das colunas: O.S. (2), Cliente (3), Contato (2), Endereço (4),
        // Referência (2), Técnico (2), Vencimento (2), Status (2)
        let mut table = elements::TableLayout::new(vec![2, 3, 2, 4, 2, 2, 2, 2]);
        table.set_cell_decorator(elements::FrameCellDecorator::new(true, true, false));

        let style_bold = style::Style::new().bold();
        table
            .row()
            .element(elements::Paragraph::new("O.S.").styled(style_bold))
            .element(elements::Paragraph::new("Cliente").styled(style_bold))
            .element(elements::Paragraph::new("Contato").styled(style_bold))
            .element(elements::Paragraph::new("Endereço").styled(style_bold))
            .element(elements::Paragraph::new("Referência").styled(style_bold))
            .element(elements::Paragraph::new("Técnico").styled(style_bold))
            .element(elements::Paragraph::new("Vencimento").styled(style_bold))
            .element(elements::Paragraph::new("Status").styled(style_bold))
            .push()
            .map_err(|e| AppError::InternalServerError(anyhow::Error::msg(e.to_string())))?;

        for ordem in &pendentes {
            // Relação quebrada não derruba o relatório: a linha fica de fora.
            let Some(cliente) = clientes_por_id.get(&ordem.cliente_id) else {
                continue;
            };
            let Some(cidade) = cidades_por_id.get(&ordem.cidade_id) else {
                continue;
            };
            let tecnico_nome = tecnicos_por_id
                .get(&ordem.tecnico_campo_id)
                .map(|t| t.nome.clone())
                .unwrap_or_default();

            let contato = contatos_por_cliente
                .get(&cliente.id)
                .and_then(|lista| contato_principal(lista))
                .map(|c| c.valor.clone())
                .unwrap_or_else(|| "Sem contato".to_string());

            let endereco = format!(
                "{}, {}, {}, {}-{}",
                cliente.endereco, cliente.numero, cliente.bairro, cidade.nome, cidade.uf
            );
            let referencia = cliente
                .ponto_referencia
                .clone()
                .unwrap_or_else(|| "Sem referência".to_string());

            table
                .row()
                .element(elements::Paragraph::new(ordem.numero_os.clone()))
                .element(elements::Paragraph::new(cliente.nome_completo.clone()))
                .element(elements::Paragraph::new(contato))
                .element(elements::Paragraph::new(endereco))
                .element(elements::Paragraph::new(referencia))
                .element(elements::Paragraph::new(tecnico_nome))
                .element(elements::Paragraph::new(
                    ordem.data_vencimento.format("%d/%m/%Y").to_string(),
                ))
                .element(elements::Paragraph::new(ordem.status.clone()))
                .push()
                .map_err(|e| AppError::InternalServerError(anyhow::Error::msg(e.to_string())))?;
        }

        doc.push(table);
        doc.push(elements::Break::new(2));
        doc.push(
            elements::Paragraph::new(format!(
                "Relatório gerado em {}",
                Utc::now().format("%d/%m/%Y %H:%M:%S")
            ))
            .styled(style::Style::new().italic().with_font_size(8)),
        );

        let mut buffer = Vec::new();
        doc.render(&mut buffer)
            .map_err(|e| AppError::InternalServerError(anyhow::Error::msg(e.to_string())))?;

        let nome_arquivo = format!(
            "relatorio_os_pendentes_{}.pdf",
            Utc::now().format("%Y%m%d_%H%M%S")
        );
        Ok((nome_arquivo, buffer))
    }

    // =========================================================================
    //  CSV ADMINISTRATIVO (os | tecnicos | cidades)
    // =========================================================================

    pub async fn csv_admin(
        &self,
        tipo: &str,
        data_inicio: Option<NaiveDate>,
        data_fim: Option<NaiveDate>,
        anonimizar: bool,
    ) -> Result<(String, Vec<u8>), AppError> {
        let resumos = self.ordens.listar_resumos().await?;
        let criterios = FiltroOrdens {
            data_inicio,
            data_fim,
            ..Default::default()
        };
        let filtradas = filtro::filtrar(&resumos, &criterios.predicados_resumo());

        // Uma sessão de anonimização por exportação, descartada no fim.
        let mut anon = anonimizar.then(Anonimizador::new);

        let (prefixo, cabecalho, linhas) = match tipo {
            "os" => (
                "relatorio_ordens_servico",
                CABECALHO_OS.to_vec(),
                linhas_os(&filtradas, anon.as_mut()),
            ),
            "tecnicos" => {
                let tecnicos = self.tecnicos.listar(None).await?;
                let identificacoes: HashMap<&str, (&str, &str)> = tecnicos
                    .iter()
                    .map(|t| {
                        (
                            t.nome.as_str(),
                            (
                                t.identificacao_campo.as_deref().unwrap_or(""),
                                t.identificacao_app.as_deref().unwrap_or(""),
                            ),
                        )
                    })
                    .collect();

                let mut linhas = Vec::new();
                for grupo in agregador::agrupar_por(&filtradas, |o| Some(o.tecnico_campo.clone())) {
                    let instaladas = filtradas
                        .iter()
                        .filter(|o| o.tecnico_campo == grupo.chave && o.status == STATUS_INSTALADA)
                        .count() as u64;
                    let (campo, app) = identificacoes
                        .get(grupo.chave.as_str())
                        .copied()
                        .unwrap_or(("", ""));

                    let (nome, campo, app) = match anon.as_mut() {
                        Some(anon) => (anon.tecnico(&grupo.chave), String::new(), String::new()),
                        None => (grupo.chave.clone(), campo.to_string(), app.to_string()),
                    };

                    linhas.push(vec![
                        nome,
                        campo,
                        app,
                        grupo.total.to_string(),
                        instaladas.to_string(),
                        format!("{:.2}", agregador::taxa(instaladas, grupo.total)),
                        format!(
                            "{:.1}",
                            agregador::media(grupo.total, self.dias_estimativa_mensal as u64)
                        ),
                    ]);
                }

                (
                    "relatorio_desempenho_tecnicos",
                    vec![
                        "Nome",
                        "Identificação Campo",
                        "Identificação App",
                        "Total OS",
                        "Total Instaladas",
                        "Taxa Conclusão (%)",
                        "Média Mensal",
                    ],
                    linhas,
                )
            }
            "cidades" => {
                let cidades = self.cidades.listar().await?;
                let regioes: HashMap<&str, (&str, &str)> = cidades
                    .iter()
                    .map(|c| {
                        (
                            c.nome.as_str(),
                            (c.uf.as_str(), c.regiao.as_deref().unwrap_or("")),
                        )
                    })
                    .collect();

                let mut linhas = Vec::new();
                for grupo in agregador::agrupar_por(&filtradas, |o| Some(o.cidade.clone())) {
                    let instaladas = filtradas
                        .iter()
                        .filter(|o| o.cidade == grupo.chave && o.status == STATUS_INSTALADA)
                        .count() as u64;
                    let (uf, regiao) = regioes
                        .get(grupo.chave.as_str())
                        .copied()
                        .unwrap_or(("", ""));

                    let nome = match anon.as_mut() {
                        Some(anon) => anon.cidade(&grupo.chave),
                        None => grupo.chave.clone(),
                    };

                    linhas.push(vec![
                        nome,
                        uf.to_string(),
                        regiao.to_string(),
                        grupo.total.to_string(),
                        instaladas.to_string(),
                        format!("{:.2}", agregador::taxa(instaladas, grupo.total)),
                        format!(
                            "{:.1}",
                            agregador::media(grupo.total, self.dias_estimativa_mensal as u64)
                        ),
                    ]);
                }

                (
                    "relatorio_desempenho_cidades",
                    vec![
                        "Cidade",
                        "UF",
                        "Região",
                        "Total OS",
                        "Total Instaladas",
                        "Taxa Conclusão (%)",
                        "Média Mensal",
                    ],
                    linhas,
                )
            }
            outro => return Err(AppError::TipoRelatorioInvalido(outro.to_string())),
        };

        let csv = montar_csv(&cabecalho, &linhas)?;
        let nome_arquivo = format!("{prefixo}_{}.csv", Utc::now().format("%Y%m%d_%H%M%S"));
        Ok((nome_arquivo, csv))
    }
}

fn titulo_relatorio(tecnico: Option<&str>, cidade: Option<&str>) -> String {
    let mut titulo = "Relatório de Ordens de Serviço Pendentes".to_string();
    if let Some(tecnico) = tecnico {
        titulo.push_str(&format!(" - Técnico: {tecnico}"));
    }
    if let Some(cidade) = cidade {
        titulo.push_str(&format!(" - Cidade: {cidade}"));
    }
    titulo
}

/// Linhas do relatório de O.S., opcionalmente anonimizadas.
fn linhas_os(resumos: &[OrdemResumo], mut anon: Option<&mut Anonimizador>) -> Vec<Vec<String>> {
    resumos
        .iter()
        .map(|o| {
            let (cliente, endereco, cidade, tecnico) = match anon.as_deref_mut() {
                Some(anon) => (
                    anon.cliente(&o.nome_cliente),
                    anon.endereco(&o.nome_cliente),
                    anon.cidade(&o.cidade),
                    anon.tecnico(&o.tecnico_campo),
                ),
                None => (
                    o.nome_cliente.clone(),
                    o.endereco.clone(),
                    o.cidade.clone(),
                    o.tecnico_campo.clone(),
                ),
            };

            vec![
                o.numero_os.clone(),
                o.status.clone(),
                o.data_criacao.format("%d/%m/%Y").to_string(),
                o.data_instalacao
                    .map(|d| d.format("%d/%m/%Y").to_string())
                    .unwrap_or_default(),
                o.data_vencimento.format("%d/%m/%Y").to_string(),
                cliente,
                endereco,
                o.bairro.clone(),
                cidade,
                o.uf.clone(),
                tecnico,
            ]
        })
        .collect()
}

/// Serializa cabeçalho e linhas com separador ';' e BOM UTF-8 na frente.
fn montar_csv(cabecalho: &[&str], linhas: &[Vec<String>]) -> Result<Vec<u8>, AppError> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_writer(Vec::new());

    writer
        .write_record(cabecalho)
        .map_err(|e| AppError::InternalServerError(anyhow::Error::msg(e.to_string())))?;
    for linha in linhas {
        writer
            .write_record(linha)
            .map_err(|e| AppError::InternalServerError(anyhow::Error::msg(e.to_string())))?;
    }

    let conteudo = writer
        .into_inner()
        .map_err(|e| AppError::InternalServerError(anyhow::Error::msg(e.to_string())))?;

    let mut saida = BOM_UTF8.to_vec();
    saida.extend(conteudo);
    Ok(saida)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn resumo(numero: &str, cliente: &str, tecnico: &str, cidade: &str, status: &str) -> OrdemResumo {
        let data = Utc.with_ymd_and_hms(2025, 5, 10, 12, 0, 0).unwrap();
        OrdemResumo {
            id: 1,
            numero_os: numero.to_string(),
            status: status.to_string(),
            data_criacao: data,
            data_vencimento: data,
            data_instalacao: None,
            nome_cliente: cliente.to_string(),
            endereco: "Rua Real, 1".to_string(),
            bairro: "Centro".to_string(),
            cidade_id: 1,
            cidade: cidade.to_string(),
            uf: "MA".to_string(),
            tecnico_campo_id: 1,
            tecnico_campo: tecnico.to_string(),
        }
    }

    #[test]
    fn csv_sai_com_bom_e_ponto_e_virgula() {
        let linhas = vec![vec!["a".to_string(), "b,c".to_string()]];
        let bytes = montar_csv(&["Coluna 1", "Coluna 2"], &linhas).unwrap();

        assert_eq!(&bytes[..3], &BOM_UTF8);
        let texto = String::from_utf8(bytes[3..].to_vec()).unwrap();
        assert!(texto.starts_with("Coluna 1;Coluna 2"));
        assert!(texto.contains("a;b,c"));
    }

    #[test]
    fn linhas_os_formatam_datas_no_padrao_brasileiro() {
        let resumos = vec![resumo("OS-001", "Maria", "José", "Imperatriz", "PENDENTE")];
        let linhas = linhas_os(&resumos, None);

        assert_eq!(linhas[0][0], "OS-001");
        assert_eq!(linhas[0][2], "10/05/2025");
        // Sem data de instalação a célula fica vazia.
        assert_eq!(linhas[0][3], "");
    }

    #[test]
    fn linhas_os_anonimizadas_trocam_nomes_de_forma_deterministica() {
        let resumos = vec![
            resumo("OS-001", "Maria", "José", "Imperatriz", "PENDENTE"),
            resumo("OS-002", "Ana", "José", "Açailândia", "INSTALADA"),
            resumo("OS-003", "Maria", "Carlos", "Imperatriz", "PENDENTE"),
        ];

        let mut anon = Anonimizador::new();
        let linhas = linhas_os(&resumos, Some(&mut anon));

        assert_eq!(linhas[0][5], "Cliente 001");
        assert_eq!(linhas[1][5], "Cliente 002");
        // Mesmo cliente, mesmo pseudônimo.
        assert_eq!(linhas[2][5], "Cliente 001");
        assert_eq!(linhas[0][10], "Técnico A");
        assert_eq!(linhas[2][10], "Técnico B");
        assert_eq!(linhas[0][8], linhas[2][8]);
        // Nenhum nome real sobra na saída.
        for linha in &linhas {
            assert!(!linha.contains(&"Maria".to_string()));
            assert!(!linha.contains(&"Rua Real, 1".to_string()));
        }
    }

    #[test]
    fn titulo_ganha_sufixos_quando_filtrado() {
        assert_eq!(
            titulo_relatorio(None, None),
            "Relatório de Ordens de Serviço Pendentes"
        );
        assert_eq!(
            titulo_relatorio(Some("José"), Some("Imperatriz-MA")),
            "Relatório de Ordens de Serviço Pendentes - Técnico: José - Cidade: Imperatriz-MA"
        );
    }
}
