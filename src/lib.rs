#![allow(dead_code)]

pub mod api_client;
pub mod builder;
pub mod error_handler;
pub mod generate;
pub mod health_client;
pub mod ingestion_client;
pub mod model;
pub mod scenario;
pub mod wire;
