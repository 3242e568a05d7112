// src/repository/mod.rs
pub mod origin_repository;
pub mod user_consent_repository;
