pub mod catalog_service;
pub mod client;
pub mod stock_service;
