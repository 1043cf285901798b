// src/analise.rs
//
// Núcleo analítico do painel: funções puras e síncronas sobre coleções já
// carregadas. Nada aqui faz I/O, guarda estado ou falha — dados degenerados
// (relação ausente, chave vazia, divisor zero, status desconhecido) são
// absorvidos com o fallback documentado em cada função. Para uma mesma
// entrada a saída é sempre idêntica e preserva a ordem dos registros.

pub mod agregador;
pub mod filtro;
pub mod marcadores;
