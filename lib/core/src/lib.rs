//! Core domain types and utilities for the RukunOS client.
//!
//! This crate provides the foundational ID types and error handling used
//! throughout the RukunOS client-side session and authorization stack.

pub mod error;
pub mod id;

pub use error::Result;
pub use id::{RoleId, TenantId, UnitId, UserId};
