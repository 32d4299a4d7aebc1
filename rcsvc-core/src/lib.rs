//! rcsvc Core
//!
//! Service resolution and runlevel enumeration for an rc-style init system.
//!
//! This crate contains:
//! - Domain types: service names and the on-disk directory layout
//! - DTOs: listing results handed to the dispatcher
//! - Resolver: maps a service name to its script
//! - Enumerator: lists the services that are members of a set of runlevels
//!
//! Everything here is read-only. Each call re-reads the filesystem and no
//! state is kept between calls.

pub mod domain;
pub mod dto;
pub mod enumerator;
pub mod error;
pub mod resolver;
pub mod runlevel;

pub use domain::layout::Layout;
pub use domain::service::ServiceName;
pub use dto::listing::{Listing, StaleMembership};
pub use enumerator::Enumerator;
pub use error::{BrokenLinkReason, Error, Result};
pub use resolver::{MAX_LINK_DEPTH, Resolver};
pub use runlevel::{ActiveRunlevels, FixedRunlevels, SoftlevelFile};

#[cfg(test)]
mod fixture;
