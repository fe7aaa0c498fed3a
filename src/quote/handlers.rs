use actix_web::http::header;
use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::quote::models::{
    CreateQuoteRequest, LineItem, NewItemRequest, QuoteHeader, QuoteModel, Totals,
    UpdateQuoteRequest,
};
use crate::render::common::download_filename;
use crate::render::pdf::PdfConvertEngine;
use crate::render::traits::{Generator, Validator};
use crate::render::{DocumentRequest, DOCX_CONTENT_TYPE};
use crate::state::AppState;
use crate::ErrorResponse;

/// A quote session together with its derived totals.
#[derive(Serialize, ToSchema)]
pub struct QuoteResponse {
    pub id: Uuid,
    pub header: QuoteHeader,
    pub items: Vec<LineItem>,
    pub totals: Totals,
}

impl QuoteResponse {
    fn from_model(model: &QuoteModel) -> Self {
        Self {
            id: model.id,
            header: model.header.clone(),
            items: model.items.clone(),
            totals: model.compute_totals(),
        }
    }
}

fn quote_not_found(id: Uuid) -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::not_found(&format!(
        "No quote session with id {}",
        id
    )))
}

#[utoipa::path(
    context_path = "/api",
    tag = "Quote Service",
    post,
    path = "/quotes",
    request_body = CreateQuoteRequest,
    responses(
        (status = 201, description = "Quote session created", body = QuoteResponse),
        (status = 400, description = "Invalid header fields", body = ErrorResponse)
    )
)]
pub async fn create_quote(
    req: web::Json<CreateQuoteRequest>,
    state: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();
    if let Err(message) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse::bad_request(&message));
    }

    let model = QuoteModel::new(req.into_header());
    let response = QuoteResponse::from_model(&model);
    state.quotes.write().insert(model.id, model);
    HttpResponse::Created().json(response)
}

#[utoipa::path(
    context_path = "/api",
    tag = "Quote Service",
    get,
    path = "/quotes/{id}",
    params(
        ("id" = Uuid, Path, description = "Quote session id")
    ),
    responses(
        (status = 200, description = "Quote session found", body = QuoteResponse),
        (status = 404, description = "Quote session not found", body = ErrorResponse)
    )
)]
pub async fn get_quote(id: web::Path<Uuid>, state: web::Data<AppState>) -> impl Responder {
    let id = id.into_inner();
    let quotes = state.quotes.read();
    match quotes.get(&id) {
        Some(model) => HttpResponse::Ok().json(QuoteResponse::from_model(model)),
        None => quote_not_found(id),
    }
}

#[utoipa::path(
    context_path = "/api",
    tag = "Quote Service",
    put,
    path = "/quotes/{id}",
    request_body = UpdateQuoteRequest,
    params(
        ("id" = Uuid, Path, description = "Quote session id")
    ),
    responses(
        (status = 200, description = "Header updated", body = QuoteResponse),
        (status = 404, description = "Quote session not found", body = ErrorResponse)
    )
)]
pub async fn update_quote(
    id: web::Path<Uuid>,
    req: web::Json<UpdateQuoteRequest>,
    state: web::Data<AppState>,
) -> impl Responder {
    let id = id.into_inner();
    let mut quotes = state.quotes.write();

    let Some(model) = quotes.get_mut(&id) else {
        return quote_not_found(id);
    };

    if let Some(kind) = req.kind {
        model.header.kind = kind;
    }
    if let Some(date) = req.date {
        model.header.date = date;
    }
    if let Some(number) = &req.number {
        model.header.number = number.clone();
    }
    if let Some(client) = &req.client {
        model.header.client = client.clone();
    }
    if let Some(subject) = &req.subject {
        model.header.subject = subject.clone();
    }
    if let Some(include_vat) = req.include_vat {
        model.header.include_vat = include_vat;
    }

    HttpResponse::Ok().json(QuoteResponse::from_model(model))
}

#[utoipa::path(
    context_path = "/api",
    tag = "Quote Service",
    delete,
    path = "/quotes/{id}",
    params(
        ("id" = Uuid, Path, description = "Quote session id")
    ),
    responses(
        (status = 204, description = "Quote session discarded"),
        (status = 404, description = "Quote session not found", body = ErrorResponse)
    )
)]
pub async fn delete_quote(id: web::Path<Uuid>, state: web::Data<AppState>) -> impl Responder {
    let id = id.into_inner();
    if state.quotes.write().remove(&id).is_some() {
        HttpResponse::NoContent().finish()
    } else {
        quote_not_found(id)
    }
}

#[utoipa::path(
    context_path = "/api",
    tag = "Quote Service",
    post,
    path = "/quotes/{id}/items",
    request_body = NewItemRequest,
    params(
        ("id" = Uuid, Path, description = "Quote session id")
    ),
    responses(
        (status = 200, description = "Item appended", body = QuoteResponse),
        (status = 400, description = "Invalid line item", body = ErrorResponse),
        (status = 404, description = "Quote session not found", body = ErrorResponse)
    )
)]
pub async fn add_item(
    id: web::Path<Uuid>,
    req: web::Json<NewItemRequest>,
    state: web::Data<AppState>,
) -> impl Responder {
    let id = id.into_inner();
    let req = req.into_inner();
    if let Err(message) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse::bad_request(&message));
    }

    let mut quotes = state.quotes.write();
    let Some(model) = quotes.get_mut(&id) else {
        return quote_not_found(id);
    };

    model.add_item(req.into_item());
    HttpResponse::Ok().json(QuoteResponse::from_model(model))
}

#[utoipa::path(
    context_path = "/api",
    tag = "Quote Service",
    delete,
    path = "/quotes/{id}/items/{index}",
    params(
        ("id" = Uuid, Path, description = "Quote session id"),
        ("index" = usize, Path, description = "Zero-based row index")
    ),
    responses(
        (status = 200, description = "Item removed", body = QuoteResponse),
        (status = 404, description = "Quote session or row not found", body = ErrorResponse)
    )
)]
pub async fn remove_item(
    path: web::Path<(Uuid, usize)>,
    state: web::Data<AppState>,
) -> impl Responder {
    let (id, index) = path.into_inner();
    let mut quotes = state.quotes.write();
    let Some(model) = quotes.get_mut(&id) else {
        return quote_not_found(id);
    };

    match model.remove_item(index) {
        Some(_) => HttpResponse::Ok().json(QuoteResponse::from_model(model)),
        None => HttpResponse::NotFound().json(ErrorResponse::not_found(&format!(
            "Quote {} has no item at index {}",
            id, index
        ))),
    }
}

#[utoipa::path(
    context_path = "/api",
    tag = "Quote Service",
    get,
    path = "/quotes/{id}/totals",
    params(
        ("id" = Uuid, Path, description = "Quote session id")
    ),
    responses(
        (status = 200, description = "Derived totals", body = Totals),
        (status = 404, description = "Quote session not found", body = ErrorResponse)
    )
)]
pub async fn get_totals(id: web::Path<Uuid>, state: web::Data<AppState>) -> impl Responder {
    let id = id.into_inner();
    let quotes = state.quotes.read();
    match quotes.get(&id) {
        Some(model) => HttpResponse::Ok().json(model.compute_totals()),
        None => quote_not_found(id),
    }
}

#[utoipa::path(
    context_path = "/api",
    tag = "Document Service",
    get,
    path = "/quotes/{id}/document",
    params(
        ("id" = Uuid, Path, description = "Quote session id")
    ),
    responses(
        (status = 200, description = "The rendered document as an attachment"),
        (status = 404, description = "Quote session not found", body = ErrorResponse),
        (status = 500, description = "Document assembly failed", body = ErrorResponse)
    )
)]
pub async fn download_document(
    id: web::Path<Uuid>,
    state: web::Data<AppState>,
) -> impl Responder {
    let id = id.into_inner();
    let Some(model) = state.quotes.read().get(&id).cloned() else {
        return quote_not_found(id);
    };

    let logo = crate::asset::resolve_logo(&state.logo_path).await;
    let request = DocumentRequest {
        model: &model,
        logo: logo.as_deref(),
    };

    match state.generator.generate(request) {
        Ok(document) => HttpResponse::Ok()
            .content_type(DOCX_CONTENT_TYPE)
            .insert_header((
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", document.filename),
            ))
            .body(document.docx),
        Err(e) => {
            log::error!("document render failed for quote {}: {}", id, e);
            HttpResponse::InternalServerError()
                .json(ErrorResponse::internal_error(&e.to_string()))
        }
    }
}

#[utoipa::path(
    context_path = "/api",
    tag = "Document Service",
    get,
    path = "/quotes/{id}/document/pdf",
    params(
        ("id" = Uuid, Path, description = "Quote session id")
    ),
    responses(
        (status = 200, description = "The rendered document converted to PDF"),
        (status = 404, description = "Quote session not found", body = ErrorResponse),
        (status = 502, description = "PDF conversion failed; the document itself is still available", body = ErrorResponse)
    )
)]
pub async fn download_pdf(id: web::Path<Uuid>, state: web::Data<AppState>) -> impl Responder {
    let id = id.into_inner();
    let Some(model) = state.quotes.read().get(&id).cloned() else {
        return quote_not_found(id);
    };

    let logo = crate::asset::resolve_logo(&state.logo_path).await;
    let request = DocumentRequest {
        model: &model,
        logo: logo.as_deref(),
    };

    let document = match state.generator.generate(request) {
        Ok(document) => document,
        Err(e) => {
            log::error!("document render failed for quote {}: {}", id, e);
            return HttpResponse::InternalServerError()
                .json(ErrorResponse::internal_error(&e.to_string()));
        }
    };

    let pdf_filename = download_filename(
        model.header.kind,
        &model.header.client,
        model.header.date,
        "pdf",
    );
    let docx = document.docx;
    let converted = web::block(move || PdfConvertEngine::convert(&docx)).await;

    match converted {
        Ok(Ok(pdf)) => HttpResponse::Ok()
            .content_type("application/pdf")
            .insert_header((
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", pdf_filename),
            ))
            .body(pdf),
        Ok(Err(e)) => {
            log::warn!("PDF conversion failed for quote {}: {}", id, e);
            HttpResponse::BadGateway().json(ErrorResponse::new(
                "ConversionFailed",
                &format!("PDF conversion failed: {}. The document download is unaffected.", e),
            ))
        }
        Err(e) => {
            log::error!("PDF conversion task failed for quote {}: {}", id, e);
            HttpResponse::InternalServerError()
                .json(ErrorResponse::internal_error("PDF conversion was interrupted"))
        }
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/quotes")
            .route(web::post().to(create_quote)),
    )
    .service(
        web::resource("/quotes/{id}")
            .route(web::get().to(get_quote))
            .route(web::put().to(update_quote))
            .route(web::delete().to(delete_quote)),
    )
    .service(web::resource("/quotes/{id}/items").route(web::post().to(add_item)))
    .service(
        web::resource("/quotes/{id}/items/{index}").route(web::delete().to(remove_item)),
    )
    .service(web::resource("/quotes/{id}/totals").route(web::get().to(get_totals)))
    .service(web::resource("/quotes/{id}/document").route(web::get().to(download_document)))
    .service(
        web::resource("/quotes/{id}/document/pdf").route(web::get().to(download_pdf)),
    );
}
