use produk_api::{
    db::create_pool,
    dto::products::{CreateProductRequest, UpdateProductRequest},
    error::AppError,
    routes::params::ListQuery,
    services::product_service,
};

// Integration flow: create -> read back -> partial update -> delete twice,
// then pagination over a seeded table.
#[tokio::test]
async fn product_crud_flow() -> anyhow::Result<()> {
    // Allow skipping when no DB is configured in the environment.
    let database_url = match std::env::var("TEST_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
    {
        Ok(url) => url,
        Err(_) => {
            eprintln!(
                "Skipping test: set TEST_DATABASE_URL or DATABASE_URL to run integration flow tests."
            );
            return Ok(());
        }
    };

    let pool = create_pool(&database_url).await?;
    sqlx::migrate!("./migrations").run(&pool).await?;
    sqlx::query("TRUNCATE TABLE products RESTART IDENTITY")
        .execute(&pool)
        .await?;

    // Create with only the required fields; defaults must apply.
    let created = product_service::create_product(
        &pool,
        CreateProductRequest {
            nama_produk: Some("Galaxy S25".to_string()),
            kategori: Some("Smartphone".to_string()),
            merek: Some("Samsung".to_string()),
            ..Default::default()
        },
    )
    .await?
    .body
    .expect("created payload");

    assert!(created.id >= 1);
    assert_eq!(created.data.harga, 0.0);
    assert_eq!(created.data.stok, 0);
    assert_eq!(created.data.rating, None);
    assert_eq!(created.data.deskripsi, "");

    // Round trip.
    let fetched = product_service::get_product(&pool, created.id)
        .await?
        .body
        .expect("detail payload")
        .product;
    assert_eq!(fetched, created.data);

    // Missing required field persists nothing.
    let err = product_service::create_product(
        &pool,
        CreateProductRequest {
            nama_produk: Some("X".to_string()),
            kategori: Some("Y".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::BadRequest(ref m) if m == "Field merek harus diisi"));
    let total = product_service::list_products(&pool, ListQuery::default())
        .await?
        .body
        .expect("list payload")
        .total;
    assert_eq!(total, 1);

    // Partial update touches only harga.
    let updated = product_service::update_product(
        &pool,
        created.id,
        UpdateProductRequest {
            harga: Some(500.0),
            ..Default::default()
        },
    )
    .await?
    .body
    .expect("updated payload");

    assert_eq!(updated.data.harga, 500.0);
    assert_eq!(updated.data.nama_produk, "Galaxy S25");
    assert_eq!(updated.data.kategori, "Smartphone");
    assert_eq!(updated.data.merek, "Samsung");
    assert_eq!(updated.data.stok, 0);
    assert_eq!(updated.data.rating, None);
    assert_eq!(updated.data.deskripsi, "");

    // A payload without recognized fields is rejected.
    let err = product_service::update_product(&pool, created.id, UpdateProductRequest::default())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::BadRequest(ref m) if m == "Tidak ada field yang diperbarui"));

    // Delete succeeds once, then reports not-found.
    product_service::delete_product(&pool, created.id).await?;
    let err = product_service::delete_product(&pool, created.id)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound));
    let err = product_service::get_product(&pool, created.id)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound));

    // Pagination: 25 rows, page 2 of 10 holds the 11th..20th newest.
    sqlx::query("TRUNCATE TABLE products RESTART IDENTITY")
        .execute(&pool)
        .await?;
    for i in 1..=25 {
        product_service::create_product(
            &pool,
            CreateProductRequest {
                nama_produk: Some(format!("Produk {i}")),
                kategori: Some("Laptop".to_string()),
                merek: Some("Asus".to_string()),
                harga: Some(i as f64 * 1000.0),
                ..Default::default()
            },
        )
        .await?;
    }

    let page2 = product_service::list_products(
        &pool,
        ListQuery {
            limit: Some(10),
            page: Some(2),
        },
    )
    .await?
    .body
    .expect("list payload");

    assert_eq!(page2.total, 25);
    assert_eq!(page2.page, 2);
    assert_eq!(page2.limit, 10);
    assert_eq!(page2.total_pages, 3);
    assert_eq!(page2.products.len(), 10);
    assert_eq!(page2.products.first().unwrap().nama_produk, "Produk 15");
    assert_eq!(page2.products.last().unwrap().nama_produk, "Produk 6");

    Ok(())
}
