use sqlx::FromRow;

#[derive(Debug, FromRow)]
pub struct StoredValueEntity {
    pub key: String,
    pub value: Vec<u8>,
}
