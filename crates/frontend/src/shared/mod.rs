pub mod cache_storage;
pub mod config;
pub mod icons;
pub mod service_worker;
