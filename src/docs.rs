// src/docs.rs

use utoipa::OpenApi;

use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Ordens ---
        handlers::ordens::listar_ordens,
        handlers::ordens::obter_ordem,
        handlers::ordens::criar_ordem,
        handlers::ordens::atualizar_ordem,
        handlers::ordens::excluir_ordem,
        handlers::ordens::proximas_vencimento,
        handlers::ordens::metricas_ordens,

        // --- Clientes ---
        handlers::clientes::listar_clientes,
        handlers::clientes::obter_cliente,
        handlers::clientes::criar_cliente,
        handlers::clientes::atualizar_cliente,
        handlers::clientes::definir_contato_principal,
        handlers::clientes::remover_contato,
        handlers::clientes::excluir_cliente,

        // --- Técnicos ---
        handlers::tecnicos::listar_tecnicos,
        handlers::tecnicos::obter_tecnico,
        handlers::tecnicos::criar_tecnico,
        handlers::tecnicos::atualizar_tecnico,
        handlers::tecnicos::definir_contato_principal,
        handlers::tecnicos::remover_contato,
        handlers::tecnicos::excluir_tecnico,
        handlers::tecnicos::desempenho_tecnico,

        // --- Cidades ---
        handlers::cidades::listar_cidades,
        handlers::cidades::obter_cidade,
        handlers::cidades::criar_cidade,
        handlers::cidades::atualizar_cidade,
        handlers::cidades::excluir_cidade,

        // --- Kits ---
        handlers::kits::listar_kits,
        handlers::kits::obter_kit,
        handlers::kits::criar_kit,
        handlers::kits::listar_fornecedores,
        handlers::kits::criar_fornecedor,

        // --- Painel ---
        handlers::painel::resumo,
        handlers::painel::por_cidade,
        handlers::painel::por_tecnico,
        handlers::painel::por_bairro,
        handlers::painel::por_data,

        // --- Mapa ---
        handlers::mapa::marcadores,

        // --- Relatórios ---
        handlers::relatorios::relatorio_tecnicos_pdf,
        handlers::relatorios::relatorio_admin_csv,
    ),
    components(
        schemas(
            models::ordem_servico::OrdemServico,
            models::ordem_servico::OrdemResumo,
            models::ordem_servico::MetricasOrdens,
            models::cliente::Cliente,
            models::cliente::ClienteDetalhe,
            models::tecnico::Tecnico,
            models::tecnico::TecnicoDetalhe,
            models::tecnico::DesempenhoTecnico,
            models::cidade::Cidade,
            models::contato::Contato,
            models::contato::ContatoItem,
            models::kit::Fornecedor,
            models::kit::Kit,
            models::kit::Componente,
            models::kit::KitDetalhe,
            models::painel::Pagina<models::ordem_servico::OrdemResumo>,
            models::painel::Contagem,
            models::painel::ResumoPainel,
            models::painel::Marcador,
            handlers::ordens::CriarOrdemPayload,
            handlers::ordens::AtualizarOrdemPayload,
            handlers::clientes::CriarClientePayload,
            handlers::clientes::AtualizarClientePayload,
            handlers::tecnicos::CriarTecnicoPayload,
            handlers::tecnicos::AtualizarTecnicoPayload,
            handlers::cidades::CriarCidadePayload,
            handlers::cidades::AtualizarCidadePayload,
            handlers::kits::CriarKitPayload,
            handlers::kits::ComponentePayload,
            handlers::kits::CriarFornecedorPayload,
        )
    ),
    tags(
        (name = "Ordens", description = "CRUD e métricas de ordens de serviço"),
        (name = "Clientes", description = "Cadastro de clientes e contatos"),
        (name = "Técnicos", description = "Cadastro e desempenho de técnicos"),
        (name = "Cidades", description = "Cadastro de cidades atendidas"),
        (name = "Kits", description = "Kits de instalação e componentes"),
        (name = "Painel", description = "Agregados do painel de gráficos"),
        (name = "Mapa", description = "Marcadores georreferenciados"),
        (name = "Relatórios", description = "Exportações em PDF e CSV"),
    )
)]
pub struct ApiDoc;
