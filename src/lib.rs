//! Scholar Bridge - Research Assistant Tools Gateway
//!
//! This crate implements the HTTP gateway that relays document-processing
//! tool requests (PDF search, audio conversion, slide generation, journal
//! retrieval) from the browser UI to the external AI core service.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
