// src/api/handlers/mod.rs
pub mod consent_handler;
pub mod health_handler;
pub mod origin_handler;
