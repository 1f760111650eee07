// Library exports for the flight network service
pub mod config;
pub mod error;
pub mod models;
pub mod server;
pub mod storage;
