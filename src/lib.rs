//! Trattoria
//!
//! Restaurant-management backend: CRUD services over menus, recipes,
//! orders, and users, persisted through Diesel against PostgreSQL with a
//! unit-of-work transaction boundary around every mutation.

pub mod cli;
pub mod config;
pub mod db;
pub mod dto;
pub mod error;
pub mod logger;
pub mod mapping;
pub mod models;
pub mod repositories;
pub mod schema;
pub mod services;
pub mod state;

pub use state::AppState;
