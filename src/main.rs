//src/main.rs

use axum::{
    routing::{delete, get, put},
    Router,
};
use tokio::net::TcpListener;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod analise;
mod common;
mod config;
mod db;
mod docs;
mod handlers;
mod models;
mod services;

use crate::config::AppState;
use crate::docs::ApiDoc;

#[tokio::main]
async fn main() {
    // Inicializa o logger.
    tracing_subscriber::fmt().with_target(false).compact().init();

    // .expect() é bom aqui: se a configuração falhar, a aplicação não deve iniciar.
    let app_state = AppState::new()
        .await
        .expect("Falha ao inicializar o estado da aplicação.");

    // Roda as migrações do SQLx na inicialização
    sqlx::migrate!()
        .run(&app_state.db_pool)
        .await
        .expect("Falha ao rodar as migrações do banco de dados.");

    tracing::info!("✅ Migrações do banco de dados executadas com sucesso!");

    let ordens_routes = Router::new()
        .route(
            "/",
            get(handlers::ordens::listar_ordens).post(handlers::ordens::criar_ordem),
        )
        .route("/proximas-vencimento", get(handlers::ordens::proximas_vencimento))
        .route("/metricas", get(handlers::ordens::metricas_ordens))
        .route(
            "/{id}",
            get(handlers::ordens::obter_ordem)
                .put(handlers::ordens::atualizar_ordem)
                .delete(handlers::ordens::excluir_ordem),
        );

    let clientes_routes = Router::new()
        .route(
            "/",
            get(handlers::clientes::listar_clientes).post(handlers::clientes::criar_cliente),
        )
        .route(
            "/{id}",
            get(handlers::clientes::obter_cliente)
                .put(handlers::clientes::atualizar_cliente)
                .delete(handlers::clientes::excluir_cliente),
        )
        .route(
            "/{id}/contatos/{indice}",
            delete(handlers::clientes::remover_contato),
        )
        .route(
            "/{id}/contatos/{indice}/principal",
            put(handlers::clientes::definir_contato_principal),
        );

    let tecnicos_routes = Router::new()
        .route(
            "/",
            get(handlers::tecnicos::listar_tecnicos).post(handlers::tecnicos::criar_tecnico),
        )
        .route(
            "/{id}",
            get(handlers::tecnicos::obter_tecnico)
                .put(handlers::tecnicos::atualizar_tecnico)
                .delete(handlers::tecnicos::excluir_tecnico),
        )
        .route("/{id}/desempenho", get(handlers::tecnicos::desempenho_tecnico))
        .route(
            "/{id}/contatos/{indice}",
            delete(handlers::tecnicos::remover_contato),
        )
        .route(
            "/{id}/contatos/{indice}/principal",
            put(handlers::tecnicos::definir_contato_principal),
        );

    let cidades_routes = Router::new()
        .route(
            "/",
            get(handlers::cidades::listar_cidades).post(handlers::cidades::criar_cidade),
        )
        .route(
            "/{id}",
            get(handlers::cidades::obter_cidade)
                .put(handlers::cidades::atualizar_cidade)
                .delete(handlers::cidades::excluir_cidade),
        );

    let kits_routes = Router::new()
        .route(
            "/",
            get(handlers::kits::listar_kits).post(handlers::kits::criar_kit),
        )
        .route(
            "/fornecedores",
            get(handlers::kits::listar_fornecedores).post(handlers::kits::criar_fornecedor),
        )
        .route("/{id}", get(handlers::kits::obter_kit));

    let painel_routes = Router::new()
        .route("/resumo", get(handlers::painel::resumo))
        .route("/por-cidade", get(handlers::painel::por_cidade))
        .route("/por-tecnico", get(handlers::painel::por_tecnico))
        .route("/por-bairro", get(handlers::painel::por_bairro))
        .route("/por-data", get(handlers::painel::por_data));

    let relatorios_routes = Router::new()
        .route("/tecnicos/pdf", get(handlers::relatorios::relatorio_tecnicos_pdf))
        .route("/admin/csv", get(handlers::relatorios::relatorio_admin_csv));

    // Combina tudo no router principal
    let app = Router::new()
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/api/health", get(|| async { "OK" }))
        .nest("/api/ordens", ordens_routes)
        .nest("/api/clientes", clientes_routes)
        .nest("/api/tecnicos", tecnicos_routes)
        .nest("/api/cidades", cidades_routes)
        .nest("/api/kits", kits_routes)
        .nest("/api/painel", painel_routes)
        .route("/api/mapa/marcadores", get(handlers::mapa::marcadores))
        .nest("/api/relatorios", relatorios_routes)
        .with_state(app_state);

    // Inicia o servidor
    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let listener = TcpListener::bind(&addr)
        .await
        .expect("Falha ao iniciar o listener TCP");
    tracing::info!("🚀 Servidor escutando em {}", listener.local_addr().unwrap());
    axum::serve(listener, app)
        .await
        .expect("Erro no servidor Axum");
}
