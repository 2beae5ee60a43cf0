//! # mprs-core
//!
//! Core types for the MPRS property-inspection report service.
//!
//! This crate provides the types shared across all MPRS crates:
//! - Entity structs for reports, authors and report sections
//! - Patch structs for partial updates
//! - The `Entity` trait the generic synchronizer is written against
//! - Field enums and the entity-kind discriminator
//! - Paging and sorting requests
//! - Cross-cutting error types

pub mod entities;
pub mod entity;
pub mod enums;
pub mod errors;
pub mod paging;
pub mod patches;
pub mod validate;
