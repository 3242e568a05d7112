// src/utils/mod.rs
pub mod uid;
