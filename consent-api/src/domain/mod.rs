// src/domain/mod.rs
pub mod cookie_consent;
pub mod origin_model;
pub mod user_consent_model;
