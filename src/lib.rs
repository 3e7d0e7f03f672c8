// src/lib.rs

//! Acme Product Management Library

pub mod app;
pub mod error;
pub mod filter;
pub mod models;
pub mod router;
pub mod services;
pub mod utils;
pub mod views;
