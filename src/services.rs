pub mod anonimizador;
pub use anonimizador::Anonimizador;
pub mod cadastro_service;
pub use cadastro_service::{CidadeService, ClienteService, KitService, TecnicoService};
pub mod mapa_service;
pub use mapa_service::MapaService;
pub mod ordem_service;
pub use ordem_service::OrdemService;
pub mod painel_service;
pub use painel_service::PainelService;
pub mod relatorio_service;
pub use relatorio_service::RelatorioService;
