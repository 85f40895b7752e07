pub mod cache_bridge;
pub mod controller;
pub mod ui;
