//! Ticket Service - Ticket purchase validation and orchestration
//!
//! This crate validates ticket purchase requests for a venue, prices them,
//! and drives payment and seat reservation through external services.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
