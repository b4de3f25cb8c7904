//! Item HTTP handlers

use actix_web::{delete, get, post, put, web, HttpResponse};
use storefront_core::models::{CreateProductRequest, DeletedProduct, UpdateProductRequest};
use tracing::info;

use crate::errors::ApiResult;
use crate::models::{NewProduct, ProductPatch};
use crate::repository::ProductRepository;

/// Configure item routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/items")
            .service(list_items)
            .service(get_item)
            .service(create_item)
            .service(update_item)
            .service(delete_item),
    );
}

/// List all items in insertion order
#[get("")]
async fn list_items(repo: web::Data<dyn ProductRepository>) -> ApiResult<HttpResponse> {
    let items = repo.list().await?;
    Ok(HttpResponse::Ok().json(items))
}

/// Get item by ID
#[get("/{id}")]
async fn get_item(
    repo: web::Data<dyn ProductRepository>,
    path: web::Path<u64>,
) -> ApiResult<HttpResponse> {
    let item = repo.find_by_id(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(item))
}

/// Create new item
#[post("")]
async fn create_item(
    repo: web::Data<dyn ProductRepository>,
    body: web::Json<CreateProductRequest>,
) -> ApiResult<HttpResponse> {
    let new = NewProduct::try_from(body.into_inner())?;
    let item = repo.create(new).await?;
    info!(id = item.id, name = %item.name, "Item created");

    Ok(HttpResponse::Created().json(item))
}

/// Update item; only the fields present in the body change
#[put("/{id}")]
async fn update_item(
    repo: web::Data<dyn ProductRepository>,
    path: web::Path<u64>,
    body: web::Json<UpdateProductRequest>,
) -> ApiResult<HttpResponse> {
    let id = path.into_inner();
    let patch = ProductPatch::try_from(body.into_inner())?;
    let item = repo.update(id, patch).await?;
    info!(id, "Item updated");

    Ok(HttpResponse::Ok().json(item))
}

/// Delete item, echoing the removed record
#[delete("/{id}")]
async fn delete_item(
    repo: web::Data<dyn ProductRepository>,
    path: web::Path<u64>,
) -> ApiResult<HttpResponse> {
    let id = path.into_inner();
    let item = repo.delete(id).await?;
    info!(id, "Item deleted");

    Ok(HttpResponse::Ok().json(DeletedProduct {
        message: "Item deleted successfully".to_string(),
        item,
    }))
}
