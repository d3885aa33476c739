use chrono::Utc;
use serde_json::json;

use produk_api::{
    dto::products::{CreateProductRequest, ProductDetail, UpdateProductRequest},
    error::AppError,
    models::Product,
    response::ApiResponse,
    routes::params::{ListQuery, parse_id},
    services::product_service::{merge_update, normalize_create},
};

fn sample_product() -> Product {
    Product {
        id: 7,
        nama_produk: "Galaxy S25".to_string(),
        kategori: "Smartphone".to_string(),
        merek: "Samsung".to_string(),
        harga: 12_000_000.0,
        stok: 4,
        rating: Some(4.5),
        deskripsi: "Flagship".to_string(),
        created_at: Utc::now(),
    }
}

#[test]
fn parse_id_accepts_digit_only_positive_ids() {
    assert_eq!(parse_id("42").unwrap(), 42);
    assert_eq!(parse_id("1").unwrap(), 1);
}

#[test]
fn parse_id_rejects_everything_else() {
    for raw in ["abc", "12abc", "", "-5", "0", "4.2", " 7", "99999999999999999999"] {
        let err = parse_id(raw).unwrap_err();
        assert!(
            matches!(err, AppError::BadRequest(ref m) if m == "ID tidak valid"),
            "expected rejection for {raw:?}"
        );
    }
}

#[test]
fn list_query_applies_defaults_and_clamps() {
    assert_eq!(ListQuery::default().normalize(), (1, 10, 0));
    let q = ListQuery {
        limit: Some(500),
        page: Some(0),
    };
    assert_eq!(q.normalize(), (1, 100, 0));
    let q = ListQuery {
        limit: Some(10),
        page: Some(3),
    };
    assert_eq!(q.normalize(), (3, 10, 20));
    let q = ListQuery {
        limit: Some(0),
        page: Some(-2),
    };
    assert_eq!(q.normalize(), (1, 1, 0));
}

#[test]
fn create_requires_the_first_missing_field_by_name() {
    let err = normalize_create(CreateProductRequest::default()).unwrap_err();
    assert!(matches!(err, AppError::BadRequest(ref m) if m == "Field nama_produk harus diisi"));

    let err = normalize_create(CreateProductRequest {
        nama_produk: Some("X".to_string()),
        kategori: Some(String::new()),
        ..Default::default()
    })
    .unwrap_err();
    assert!(matches!(err, AppError::BadRequest(ref m) if m == "Field kategori harus diisi"));

    let err = normalize_create(CreateProductRequest {
        nama_produk: Some("X".to_string()),
        kategori: Some("Y".to_string()),
        ..Default::default()
    })
    .unwrap_err();
    assert!(matches!(err, AppError::BadRequest(ref m) if m == "Field merek harus diisi"));
}

#[test]
fn create_defaults_leave_rating_absent() {
    let data = normalize_create(CreateProductRequest {
        nama_produk: Some("X".to_string()),
        kategori: Some("Y".to_string()),
        merek: Some("Z".to_string()),
        ..Default::default()
    })
    .unwrap();

    assert_eq!(data.harga, 0.0);
    assert_eq!(data.stok, 0);
    assert_eq!(data.rating, None);
    assert_eq!(data.deskripsi, "");
}

#[test]
fn merge_keeps_stored_values_for_absent_fields() {
    let existing = sample_product();
    let merged = merge_update(
        &existing,
        UpdateProductRequest {
            harga: Some(500.0),
            ..Default::default()
        },
    )
    .unwrap();

    assert_eq!(merged.harga, 500.0);
    assert_eq!(merged.nama_produk, "Galaxy S25");
    assert_eq!(merged.kategori, "Smartphone");
    assert_eq!(merged.merek, "Samsung");
    assert_eq!(merged.stok, 4);
    assert_eq!(merged.rating, Some(4.5));
    assert_eq!(merged.deskripsi, "Flagship");
}

#[test]
fn merge_rejects_a_payload_without_recognized_fields() {
    let err = merge_update(&sample_product(), UpdateProductRequest::default()).unwrap_err();
    assert!(matches!(err, AppError::BadRequest(ref m) if m == "Tidak ada field yang diperbarui"));
}

#[test]
fn numeric_fields_coerce_from_strings() {
    let payload: CreateProductRequest = serde_json::from_value(json!({
        "nama_produk": "X",
        "kategori": "Y",
        "merek": "Z",
        "harga": "2500.5",
        "stok": "7",
        "rating": null
    }))
    .unwrap();

    assert_eq!(payload.harga, Some(2500.5));
    assert_eq!(payload.stok, Some(7));
    assert_eq!(payload.rating, None);

    let payload: UpdateProductRequest = serde_json::from_value(json!({
        "stok": 3.9
    }))
    .unwrap();
    assert_eq!(payload.stok, Some(3));
}

#[test]
fn envelope_flattens_payload_next_to_status() {
    let value = serde_json::to_value(ApiResponse::success(ProductDetail {
        product: sample_product(),
    }))
    .unwrap();

    assert_eq!(value["status"], "success");
    assert_eq!(value["product"]["nama_produk"], "Galaxy S25");
    assert!(value.get("message").is_none());

    let value = serde_json::to_value(ApiResponse::<()>::error("Produk tidak ditemukan")).unwrap();
    assert_eq!(value["status"], "error");
    assert_eq!(value["message"], "Produk tidak ditemukan");
}
