//! Listing DTOs

use serde::Serialize;

use crate::domain::service::ServiceName;
use crate::error::Error;

/// Result of enumerating one or more runlevels
#[derive(Debug, Default, Serialize)]
pub struct Listing {
    /// Member services that resolve, strictly ascending by name
    pub services: Vec<ServiceName>,

    /// Memberships that are broken or whose service does not resolve,
    /// ascending by name
    pub stale: Vec<StaleMembership>,
}

impl Listing {
    /// True when no member service resolved
    ///
    /// Stale memberships do not count; check `stale` separately.
    pub fn has_no_services(&self) -> bool {
        self.services.is_empty()
    }
}

/// A runlevel marker that is broken or whose service could not be resolved
#[derive(Debug, Serialize)]
pub struct StaleMembership {
    /// Service named by the marker
    pub service: ServiceName,

    /// Every runlevel, in query order, that had a marker for the service
    pub runlevels: Vec<String>,

    /// Why the marker or the resolution failed
    #[serde(serialize_with = "serialize_error")]
    pub reason: Error,
}

fn serialize_error<S>(error: &Error, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_str(error)
}
