use crate::{db::DbPool, dto::products::NewProduct, error::AppResult, models::Product};

/// Insert a product and return the stored row. `fetch_optional` keeps "the
/// insert produced no row" distinguishable from a driver fault.
pub async fn insert(pool: &DbPool, data: &NewProduct) -> AppResult<Option<Product>> {
    let row = sqlx::query_as::<_, Product>(
        r#"
        INSERT INTO products (nama_produk, kategori, merek, harga, stok, rating, deskripsi)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING *
        "#,
    )
    .bind(&data.nama_produk)
    .bind(&data.kategori)
    .bind(&data.merek)
    .bind(data.harga)
    .bind(data.stok)
    .bind(data.rating)
    .bind(&data.deskripsi)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

pub async fn fetch_page(pool: &DbPool, limit: i64, offset: i64) -> AppResult<Vec<Product>> {
    // id breaks ties between rows created within the same timestamp tick.
    let rows = sqlx::query_as::<_, Product>(
        "SELECT * FROM products ORDER BY created_at DESC, id DESC LIMIT $1 OFFSET $2",
    )
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

pub async fn fetch_by_id(pool: &DbPool, id: i64) -> AppResult<Option<Product>> {
    let row = sqlx::query_as::<_, Product>("SELECT * FROM products WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(row)
}

pub async fn count(pool: &DbPool) -> AppResult<i64> {
    let total: (i64,) = sqlx::query_as("SELECT count(*) FROM products")
        .fetch_one(pool)
        .await?;

    Ok(total.0)
}

/// All seven mutable columns are bound on every call, so the statement shape
/// never varies; the service supplies carried-forward values for fields the
/// caller left out.
pub async fn update(pool: &DbPool, id: i64, data: &NewProduct) -> AppResult<Option<Product>> {
    let row = sqlx::query_as::<_, Product>(
        r#"
        UPDATE products
        SET nama_produk = $2,
            kategori = $3,
            merek = $4,
            harga = $5,
            stok = $6,
            rating = $7,
            deskripsi = $8
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(&data.nama_produk)
    .bind(&data.kategori)
    .bind(&data.merek)
    .bind(data.harga)
    .bind(data.stok)
    .bind(data.rating)
    .bind(&data.deskripsi)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

/// Reports whether a row was actually removed.
pub async fn delete(pool: &DbPool, id: i64) -> AppResult<bool> {
    let result = sqlx::query("DELETE FROM products WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
