pub mod cidades;
pub mod clientes;
pub mod kits;
pub mod mapa;
pub mod ordens;
pub mod painel;
pub mod relatorios;
pub mod tecnicos;
