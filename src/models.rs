pub mod cidade;
pub mod cliente;
pub mod contato;
pub mod kit;
pub mod ordem_servico;
pub mod painel;
pub mod tecnico;
