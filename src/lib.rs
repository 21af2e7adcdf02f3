//! Consignado Dashboard API Library
//!
//! Input normalization and small helpers behind the loan sales dashboard:
//! CPF and phone validation/masks, WhatsApp deep links and settlement
//! quotes, plus the HTTP handlers that expose them.
//!
//! # Modules
//!
//! - `api`: Route table and OpenAPI document.
//! - `config`: Configuration management.
//! - `errors`: Error handling types.
//! - `handlers`: HTTP request handlers.
//! - `models`: Value types and API models.
//! - `normalizer`: CPF and phone validation and formatting.
//! - `settlement`: Early-settlement (quitação) quotes.
//! - `whatsapp`: WhatsApp deep links.

pub mod api;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod normalizer;
pub mod settlement;
pub mod whatsapp;
