//! Data Transfer Objects
//!
//! Results handed from the core to the dispatcher.

pub mod listing;
