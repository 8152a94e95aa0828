use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Seat {
    pub id: i64,
    pub section: String,
    pub row: String,
    pub seat_number: i64,
    pub price: f64,
    pub is_available: bool,
}

impl Seat {
    // Все места в порядке хранения, без фильтров и пагинации
    pub async fn list_all(db: &crate::database::Database) -> Result<Vec<Seat>, sqlx::Error> {
        sqlx::query_as::<_, Seat>(
            "SELECT id, section, row, seat_number, price, is_available FROM seats",
        )
        .fetch_all(&db.pool)
        .await
    }
}
