// src/api/dto/mod.rs
pub mod consent_dto;
pub mod health_dto;
