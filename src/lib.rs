//! T-SMART - school treasury and administration backend.
//!
//! Actix Web service for SPP billing, payments, expenses and reporting.
//!
//! # Architecture
//! - `cache`: caching layer (Moka/Redis)
//! - `config`: configuration management
//! - `entity`: SeaORM database entities
//! - `errors`: unified error handling
//! - `middlewares`: authentication and authorization middleware
//! - `models`: data model definitions
//! - `routes`: API routing layer
//! - `runtime`: runtime lifecycle management
//! - `services`: business logic layer
//! - `storage`: data storage layer (SeaORM)
//! - `utils`: utility functions

pub mod cache;
pub mod config;
pub mod entity;
pub mod errors;
pub mod middlewares;
pub mod models;
pub mod routes;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod utils;
