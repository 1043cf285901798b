// src/services/mapa_service.rs

use crate::{
    analise::{filtro, marcadores},
    common::error::AppError,
    db::{CidadeRepository, ClienteRepository, OrdemRepository},
    models::painel::Marcador,
};

/// Monta os marcadores do mapa de endereços: ordens filtradas cruzadas com
/// clientes e cidades.
#[derive(Clone)]
pub struct MapaService {
    ordens: OrdemRepository,
    clientes: ClienteRepository,
    cidades: CidadeRepository,
}

impl MapaService {
    pub fn new(
        ordens: OrdemRepository,
        clientes: ClienteRepository,
        cidades: CidadeRepository,
    ) -> Self {
        Self {
            ordens,
            clientes,
            cidades,
        }
    }

    pub async fn marcadores(
        &self,
        criterios: &filtro::FiltroOrdens,
    ) -> Result<Vec<Marcador>, AppError> {
        let ordens = self.ordens.listar().await?;
        let clientes = self.clientes.listar().await?;
        let cidades = self.cidades.listar().await?;

        let filtradas = filtro::filtrar(&ordens, &criterios.predicados_ordem());
        Ok(marcadores::montar_marcadores(&filtradas, &clientes, &cidades))
    }
}
