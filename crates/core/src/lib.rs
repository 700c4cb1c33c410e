//! Core domain logic for Aliada.
//!
//! This crate contains pure domain logic with ZERO web or database
//! dependencies. All domain types, validation rules, and capability traits
//! live here.
//!
//! # Modules
//!
//! - `auth` - Credential verification capability
//! - `company` - Company domain model and store trait
//! - `reports` - Report types, request validation, webhook payload shape

pub mod auth;
pub mod company;
pub mod reports;
