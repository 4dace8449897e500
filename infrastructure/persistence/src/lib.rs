pub mod db;
pub mod durable_store {
    pub mod entity;
    pub mod repository;
}
