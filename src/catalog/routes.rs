use actix_web::{web, HttpResponse, Responder};

use crate::catalog::model::{prefill, CreateEntryRequest, ServiceCatalogEntry};
use crate::render::traits::Validator;
use crate::state::AppState;
use crate::ErrorResponse;

#[utoipa::path(
    get,
    path = "/api/catalog",
    tag = "Catalog",
    responses(
        (status = 200, description = "List all catalog entries", body = Vec<ServiceCatalogEntry>)
    )
)]
pub async fn list_entries(state: web::Data<AppState>) -> impl Responder {
    let entries: Vec<ServiceCatalogEntry> = state.catalog.read().values().cloned().collect();
    HttpResponse::Ok().json(entries)
}

#[utoipa::path(
    post,
    path = "/api/catalog",
    tag = "Catalog",
    request_body = CreateEntryRequest,
    responses(
        (status = 201, description = "Entry created and persisted", body = ServiceCatalogEntry),
        (status = 400, description = "Invalid entry", body = ErrorResponse),
        (status = 409, description = "An entry with this name already exists", body = ErrorResponse),
        (status = 500, description = "Catalog could not be persisted", body = ErrorResponse)
    )
)]
pub async fn create_entry(
    state: web::Data<AppState>,
    item: web::Json<CreateEntryRequest>,
) -> impl Responder {
    let item = item.into_inner();
    if let Err(message) = item.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse::bad_request(&message));
    }

    let entry = item.into_entry();
    let updated = {
        let catalog = state.catalog.read();
        if catalog.contains_key(&entry.name) {
            return HttpResponse::Conflict().json(ErrorResponse::new(
                "DuplicateName",
                &format!("A catalog entry named '{}' already exists", entry.name),
            ));
        }
        let mut updated = catalog.clone();
        updated.insert(entry.name.clone(), entry.clone());
        updated
    };

    // Persist before publishing so a failed save leaves the catalog untouched.
    if let Err(e) = state.store.save(&updated).await {
        log::error!("failed to persist catalog: {}", e);
        return HttpResponse::InternalServerError().json(ErrorResponse::internal_error(&format!(
            "The entry was not saved: {}",
            e
        )));
    }

    *state.catalog.write() = updated;
    log::info!("catalog entry '{}' saved", entry.name);
    HttpResponse::Created().json(entry)
}

#[utoipa::path(
    get,
    path = "/api/catalog/{name}",
    tag = "Catalog",
    params(
        ("name" = String, Path, description = "Catalog entry name")
    ),
    responses(
        (status = 200, description = "Line-item defaults for the entry", body = crate::quote::models::LineItem),
        (status = 404, description = "No entry with this name", body = ErrorResponse)
    )
)]
pub async fn prefill_entry(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let name = path.into_inner();
    let catalog = state.catalog.read();
    match prefill(&name, &catalog) {
        Some(item) => HttpResponse::Ok().json(item),
        None => HttpResponse::NotFound().json(ErrorResponse::not_found(&format!(
            "No catalog entry named '{}'",
            name
        ))),
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/catalog")
            .route(web::get().to(list_entries))
            .route(web::post().to(create_entry)),
    )
    .service(web::resource("/catalog/{name}").route(web::get().to(prefill_entry)));
}
