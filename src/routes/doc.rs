use utoipa::OpenApi;
use utoipa::openapi::OpenApi as OpenApiSpec;
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::products::{
        CreateProductRequest, DeletedProduct, ProductDetail, ProductListData, ProductWithId,
        UpdateProductRequest,
    },
    models::Product,
    response::{ApiResponse, Status},
    routes::{
        health::{self, HealthData},
        params,
        products,
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        products::list_products,
        products::create_product,
        products::get_product,
        products::update_product,
        products::delete_product,
    ),
    components(
        schemas(
            Product,
            CreateProductRequest,
            UpdateProductRequest,
            ProductListData,
            ProductDetail,
            ProductWithId,
            DeletedProduct,
            HealthData,
            params::ListQuery,
            Status,
            ApiResponse<ProductListData>,
            ApiResponse<ProductDetail>,
            ApiResponse<ProductWithId>,
            ApiResponse<DeletedProduct>,
            ApiResponse<HealthData>
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "products", description = "Product endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
