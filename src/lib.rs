//! Visittrack - field-visit data collection with Excel export
//!
//! Collects partner-onboarding and agency-channel visit records submitted
//! from mobile browser clients, persists them to an append-only document
//! store, and exports them as date-filtered XLSX workbooks.
//!
//! # Architecture
//! - `storage`: record models, the `VisitStore` seam and its backends
//! - `export`: date-range resolution, row projection, XLSX serialization
//! - `services`: HTTP handlers (ingestion, export, health)
//! - `config`: environment-backed process configuration

pub mod config;
pub mod errors;
pub mod export;
pub mod services;
pub mod storage;
