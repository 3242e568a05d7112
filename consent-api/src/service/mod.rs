// src/service/mod.rs
pub mod consent_service;
pub mod origin_service;
