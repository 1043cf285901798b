// src/config.rs

use sqlx::{postgres::PgPoolOptions, PgPool};
use std::{env, time::Duration};

use crate::{
    db::{
        CidadeRepository, ClienteRepository, ContatoRepository, KitRepository, OrdemRepository,
        TecnicoRepository,
    },
    services::{
        CidadeService, ClienteService, KitService, MapaService, OrdemService, PainelService,
        RelatorioService, TecnicoService,
    },
};

// Divisor padrão da estimativa mensal por técnico/cidade. O valor veio da
// planilha original e pode ser trocado via DIAS_ESTIMATIVA_MENSAL sem mexer
// no código.
const DIAS_ESTIMATIVA_MENSAL_PADRAO: u32 = 30;

#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub ordem_service: OrdemService,
    pub cliente_service: ClienteService,
    pub tecnico_service: TecnicoService,
    pub cidade_service: CidadeService,
    pub kit_service: KitService,
    pub painel_service: PainelService,
    pub mapa_service: MapaService,
    pub relatorio_service: RelatorioService,
}

impl AppState {
    pub async fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL deve ser definida");
        let dias_estimativa_mensal = env::var("DIAS_ESTIMATIVA_MENSAL")
            .ok()
            .and_then(|valor| valor.parse().ok())
            .unwrap_or(DIAS_ESTIMATIVA_MENSAL_PADRAO);

        // Conecta ao banco de dados, usando '?' para propagar erros
        let db_pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&database_url)
            .await?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        // --- Monta o gráfico de dependências ---
        let ordem_repo = OrdemRepository::new(db_pool.clone());
        let cliente_repo = ClienteRepository::new(db_pool.clone());
        let tecnico_repo = TecnicoRepository::new(db_pool.clone());
        let cidade_repo = CidadeRepository::new(db_pool.clone());
        let contato_repo = ContatoRepository::new(db_pool.clone());
        let kit_repo = KitRepository::new(db_pool.clone());

        let ordem_service = OrdemService::new(ordem_repo.clone());
        let cliente_service = ClienteService::new(
            cliente_repo.clone(),
            contato_repo.clone(),
            ordem_repo.clone(),
        );
        let tecnico_service = TecnicoService::new(
            tecnico_repo.clone(),
            contato_repo.clone(),
            ordem_repo.clone(),
        );
        let cidade_service = CidadeService::new(cidade_repo.clone(), ordem_repo.clone());
        let kit_service = KitService::new(kit_repo);
        let painel_service = PainelService::new(ordem_repo.clone());
        let mapa_service = MapaService::new(
            ordem_repo.clone(),
            cliente_repo.clone(),
            cidade_repo.clone(),
        );
        let relatorio_service = RelatorioService::new(
            ordem_repo,
            cliente_repo,
            cidade_repo,
            tecnico_repo,
            contato_repo,
            dias_estimativa_mensal,
        );

        Ok(Self {
            db_pool,
            ordem_service,
            cliente_service,
            tecnico_service,
            cidade_service,
            kit_service,
            painel_service,
            mapa_service,
            relatorio_service,
        })
    }
}
