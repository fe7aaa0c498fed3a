use actix_cors::Cors;
use actix_web::middleware::Compress;
use actix_web::{http::header, web, App, HttpServer};
use actix_web_prometheus::PrometheusMetricsBuilder;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

pub mod asset;
pub mod catalog;
pub mod config;
pub mod quote;
pub mod render;
pub mod state;

pub use crate::config::AppConfig;
pub use crate::state::AppState;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub timestamp: String,
}

impl ErrorResponse {
    pub fn new(error_type: &str, message: &str) -> Self {
        Self {
            error: error_type.to_string(),
            message: message.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn not_found(message: &str) -> Self {
        Self::new("NotFound", message)
    }

    pub fn bad_request(message: &str) -> Self {
        Self::new("BadRequest", message)
    }

    pub fn internal_error(message: &str) -> Self {
        Self::new("InternalServerError", message)
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::quote::handlers::create_quote,
        crate::quote::handlers::get_quote,
        crate::quote::handlers::update_quote,
        crate::quote::handlers::delete_quote,
        crate::quote::handlers::add_item,
        crate::quote::handlers::remove_item,
        crate::quote::handlers::get_totals,
        crate::quote::handlers::download_document,
        crate::quote::handlers::download_pdf,
        crate::catalog::routes::list_entries,
        crate::catalog::routes::create_entry,
        crate::catalog::routes::prefill_entry,
        crate::asset::serve_logo
    ),
    components(
        schemas(
            quote::models::DocumentKind,
            quote::models::LineItem,
            quote::models::QuoteHeader,
            quote::models::QuoteModel,
            quote::models::Totals,
            quote::models::CreateQuoteRequest,
            quote::models::UpdateQuoteRequest,
            quote::models::NewItemRequest,
            quote::handlers::QuoteResponse,
            catalog::model::ServiceCatalogEntry,
            catalog::model::CreateEntryRequest,
            ErrorResponse,
        )
    ),
    tags(
        (name = "Quote Service", description = "Quote session endpoints."),
        (name = "Document Service", description = "Document rendering and PDF conversion endpoints."),
        (name = "Catalog", description = "Reusable service catalog endpoints."),
        (name = "Asset Service", description = "Logo asset endpoint.")
    ),
    servers(
        (url = "http://127.0.0.1:8080", description = "Local server")
    )
)]
struct ApiDoc;

pub async fn run() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();
    let app_state = web::Data::new(AppState::new(&config).await);

    let prometheus = PrometheusMetricsBuilder::new("quotegen_server")
        .endpoint("/metrics")
        .build()
        .expect("Failed to create Prometheus metrics middleware");

    log::info!("Starting server at http://{}", config.bind_addr);
    let bind_addr = config.bind_addr.clone();

    HttpServer::new(move || {
        let app_state = app_state.clone();
        let prometheus = prometheus.clone();
        let cors = Cors::default()
            .allowed_origin("http://localhost:8080")
            .allowed_origin("http://127.0.0.1:8080")
            .allowed_origin("http://localhost:5173")
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
            .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
            .max_age(3600);

        App::new()
            .wrap(Compress::default())
            .wrap(prometheus)
            .wrap(cors)
            .app_data(app_state)
            .service(
                web::scope("/api")
                    .configure(quote::handlers::config)
                    .configure(catalog::routes::config),
            )
            .service(web::resource("/assets/logo").route(web::get().to(asset::serve_logo)))
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-doc/openapi.json", ApiDoc::openapi()),
            )
            .service(actix_files::Files::new("/", "./static").index_file("index.html"))
    })
    .bind(bind_addr)?
    .run()
    .await
}
