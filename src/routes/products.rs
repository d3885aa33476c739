use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post, put},
};

use crate::{
    db::DbPool,
    dto::products::{
        CreateProductRequest, DeletedProduct, ProductDetail, ProductListData, ProductWithId,
        UpdateProductRequest,
    },
    error::AppResult,
    response::ApiResponse,
    routes::params::{ListQuery, parse_id},
    services::product_service,
};

pub fn router() -> Router<DbPool> {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/{id}", get(get_product).put(update_product).delete(delete_product))
        // Historical path variants, kept as aliases of the canonical routes.
        .route("/create", post(create_product))
        .route("/update/{id}", put(update_product))
        .route("/delete/{id}", delete(delete_product))
}

#[utoipa::path(
    get,
    path = "/products",
    params(
        ("limit" = Option<i64>, Query, description = "Page size, default 10, clamped to [1, 100]"),
        ("page" = Option<i64>, Query, description = "Page number, default 1"),
    ),
    responses(
        (status = 200, description = "List products, newest first", body = ApiResponse<ProductListData>)
    ),
    tag = "products"
)]
pub async fn list_products(
    State(pool): State<DbPool>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<ApiResponse<ProductListData>>> {
    let body = product_service::list_products(&pool, query).await?;
    Ok(Json(body))
}

#[utoipa::path(
    get,
    path = "/products/{id}",
    params(
        ("id" = String, Path, description = "Product ID, digits only")
    ),
    responses(
        (status = 200, description = "Get product", body = ApiResponse<ProductDetail>),
        (status = 400, description = "Invalid id"),
        (status = 404, description = "Product not found"),
    ),
    tag = "products"
)]
pub async fn get_product(
    Path(id): Path<String>,
    State(pool): State<DbPool>,
) -> AppResult<Json<ApiResponse<ProductDetail>>> {
    let id = parse_id(&id)?;
    let body = product_service::get_product(&pool, id).await?;
    Ok(Json(body))
}

#[utoipa::path(
    post,
    path = "/products",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Create product", body = ApiResponse<ProductWithId>),
        (status = 400, description = "Missing required field"),
    ),
    tag = "products"
)]
pub async fn create_product(
    State(pool): State<DbPool>,
    Json(payload): Json<CreateProductRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<ProductWithId>>)> {
    let body = product_service::create_product(&pool, payload).await?;
    Ok((StatusCode::CREATED, Json(body)))
}

#[utoipa::path(
    put,
    path = "/products/{id}",
    params(
        ("id" = String, Path, description = "Product ID, digits only")
    ),
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Updated product", body = ApiResponse<ProductWithId>),
        (status = 400, description = "Invalid id or empty update"),
        (status = 404, description = "Product not found"),
    ),
    tag = "products"
)]
pub async fn update_product(
    State(pool): State<DbPool>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateProductRequest>,
) -> AppResult<Json<ApiResponse<ProductWithId>>> {
    let id = parse_id(&id)?;
    let body = product_service::update_product(&pool, id, payload).await?;
    Ok(Json(body))
}

#[utoipa::path(
    delete,
    path = "/products/{id}",
    params(
        ("id" = String, Path, description = "Product ID, digits only")
    ),
    responses(
        (status = 200, description = "Deleted product", body = ApiResponse<DeletedProduct>),
        (status = 400, description = "Invalid id"),
        (status = 404, description = "Product not found"),
    ),
    tag = "products"
)]
pub async fn delete_product(
    State(pool): State<DbPool>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<DeletedProduct>>> {
    let id = parse_id(&id)?;
    let body = product_service::delete_product(&pool, id).await?;
    Ok(Json(body))
}
