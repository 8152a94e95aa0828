use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    Pool, Sqlite,
};
use std::str::FromStr;
use std::time::Duration;
use tracing::info;

// Стартовые места: (section, row, seat_number, price, is_available)
const SEED_SEATS: [(&str, &str, i64, f64, bool); 3] = [
    ("Floor", "A", 1, 150.0, true),
    ("A", "B", 5, 120.0, true),
    ("B", "C", 10, 95.0, false),
];

#[derive(Clone)]
pub struct Database {
    pub pool: Pool<Sqlite>,
}

impl Database {
    pub async fn new(database_url: &str, pool_size: u32) -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(pool_size.max(1))
            .acquire_timeout(Duration::from_secs(5))
            .connect_with(options)
            .await?;

        Ok(Database { pool })
    }

    /// Создаёт таблицу мест и заполняет её демо-данными, если она пуста.
    pub async fn bootstrap(&self) -> Result<(), sqlx::Error> {
        self.ensure_schema().await?;
        self.seed_if_empty().await
    }

    async fn ensure_schema(&self) -> Result<(), sqlx::Error> {
        info!("Ensuring seats schema...");
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS seats (
                id           INTEGER PRIMARY KEY AUTOINCREMENT,
                section      VARCHAR(50) NOT NULL,
                row          VARCHAR(10) NOT NULL,
                seat_number  INTEGER NOT NULL CHECK (seat_number > 0),
                price        REAL NOT NULL CHECK (price >= 0),
                is_available BOOLEAN NOT NULL DEFAULT 1
            )
            "#,
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn seed_if_empty(&self) -> Result<(), sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM seats")
            .fetch_one(&mut *tx)
            .await?;
        if count > 0 {
            info!("Seats table already has {} rows, skipping seed", count);
            return Ok(());
        }

        for (section, row, seat_number, price, is_available) in SEED_SEATS {
            sqlx::query(
                "INSERT INTO seats (section, row, seat_number, price, is_available)
                 VALUES ($1, $2, $3, $4, $5)",
            )
            .bind(section)
            .bind(row)
            .bind(seat_number)
            .bind(price)
            .bind(is_available)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        info!("Seeded {} sample seats", SEED_SEATS.len());
        Ok(())
    }
}
