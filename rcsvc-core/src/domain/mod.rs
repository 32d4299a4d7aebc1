//! Core domain types
//!
//! Service names and the directory layout that the resolver and the
//! enumerator both read from.

pub mod layout;
pub mod service;
