use produk_api::{config::AppConfig, db::create_pool};

const KATEGORI: &[&str] = &[
    "Smartphone",
    "Laptop",
    "Tablet",
    "Smartwatch",
    "Headphone",
    "Speaker",
    "Camera",
    "TV",
    "Monitor",
    "Printer",
];

const MEREK: &[&str] = &[
    "Samsung", "Apple", "Xiaomi", "Sony", "LG", "Asus", "Dell", "HP", "Canon", "Nikon", "JBL",
    "Bose",
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let pool = create_pool(&config.database_url).await?;
    println!("Koneksi database berhasil...");
    // Ensure migrations are applied.
    sqlx::migrate!("./migrations").run(&pool).await?;

    sqlx::query("TRUNCATE TABLE products RESTART IDENTITY")
        .execute(&pool)
        .await?;
    println!("Data lama dihapus...");

    for i in 1..=1000_i64 {
        let kategori = KATEGORI[mix(i, 3) % KATEGORI.len()];
        let merek = MEREK[mix(i, 7) % MEREK.len()];
        let harga = (500_000 + mix(i, 11) % 24_500_001) as f64;
        let stok = (mix(i, 13) % 101) as i32;
        let rating = (30 + mix(i, 17) % 21) as f64 / 10.0;
        let nama_produk = format!("{merek} {kategori}");
        let deskripsi = format!("Ini adalah deskripsi untuk {merek} {kategori} model {i}");

        sqlx::query(
            r#"
            INSERT INTO products (nama_produk, kategori, merek, harga, stok, rating, deskripsi)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(nama_produk)
        .bind(kategori)
        .bind(merek)
        .bind(harga)
        .bind(stok)
        .bind(rating)
        .bind(deskripsi)
        .execute(&pool)
        .await?;

        if i % 100 == 0 {
            println!("Data ke-{i} berhasil ditambahkan...");
        }
    }

    println!("\nSUKSES! 1000 data berhasil ditambahkan ke database!");

    let total: (i64,) = sqlx::query_as("SELECT count(*) FROM products")
        .fetch_one(&pool)
        .await?;

    let per_kategori: Vec<(String, i64)> = sqlx::query_as(
        "SELECT kategori, count(*) FROM products GROUP BY kategori ORDER BY count(*) DESC",
    )
    .fetch_all(&pool)
    .await?;

    let per_merek: Vec<(String, i64)> = sqlx::query_as(
        "SELECT merek, count(*) FROM products GROUP BY merek ORDER BY count(*) DESC",
    )
    .fetch_all(&pool)
    .await?;

    let (min_harga, max_harga, avg_harga): (f64, f64, f64) =
        sqlx::query_as("SELECT min(harga), max(harga), avg(harga) FROM products")
            .fetch_one(&pool)
            .await?;

    println!("\n=== STATISTIK DATA ===");
    println!("Total produk: {}", total.0);
    println!("\nPer Kategori:");
    for (kategori, jumlah) in per_kategori {
        println!("  {kategori:<15}: {jumlah} produk");
    }
    println!("\nPer Merek:");
    for (merek, jumlah) in per_merek {
        println!("  {merek:<15}: {jumlah} produk");
    }
    println!("\nStatistik Harga:");
    println!("  Harga Terendah  : Rp {min_harga:.0}");
    println!("  Harga Tertinggi : Rp {max_harga:.0}");
    println!("  Harga Rata-rata : Rp {avg_harga:.0}");

    println!("\nSeeder selesai dijalankan!");

    Ok(())
}

// Repeatable splitmix-style scramble; seed data stays stable run to run.
fn mix(i: i64, salt: u64) -> usize {
    let mut x = (i as u64)
        .wrapping_add(salt.wrapping_mul(0xBF58_476D_1CE4_E5B9))
        .wrapping_mul(0x9E37_79B9_7F4A_7C15);
    x ^= x >> 31;
    x as usize
}
