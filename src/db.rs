pub mod cidade_repo;
pub use cidade_repo::CidadeRepository;
pub mod cliente_repo;
pub use cliente_repo::ClienteRepository;
pub mod contato_repo;
pub use contato_repo::ContatoRepository;
pub mod kit_repo;
pub use kit_repo::KitRepository;
pub mod ordem_repo;
pub use ordem_repo::OrdemRepository;
pub mod tecnico_repo;
pub use tecnico_repo::TecnicoRepository;
