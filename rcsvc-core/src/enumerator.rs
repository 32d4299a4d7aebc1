//! Runlevel enumerator
//!
//! Lists the services that are members of a sequence of runlevels. Names are
//! collected into an ordered map keyed by service name, so membership in
//! several runlevels collapses to one entry and the output comes out sorted
//! byte-wise without a separate dedup pass.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, warn};

use crate::domain::layout::Layout;
use crate::domain::service::ServiceName;
use crate::dto::listing::{Listing, StaleMembership};
use crate::error::{Error, Result};
use crate::resolver::Resolver;
use crate::runlevel::ActiveRunlevels;

/// Runlevels referencing one service, and the first broken marker seen
#[derive(Default)]
struct Member {
    runlevels: Vec<String>,
    broken_marker: Option<Error>,
}

/// Enumerates runlevel members
pub struct Enumerator<'a> {
    layout: &'a Layout,
    resolver: Resolver,
    active: &'a dyn ActiveRunlevels,
}

impl<'a> Enumerator<'a> {
    /// Creates an enumerator over `layout`, using `active` when no runlevel
    /// is named explicitly
    pub fn new(layout: &'a Layout, active: &'a dyn ActiveRunlevels) -> Self {
        Self {
            layout,
            resolver: Resolver::new(layout),
            active,
        }
    }

    /// List the services in `runlevels`
    ///
    /// An empty slice means the active runlevel set. Missing or unreadable
    /// runlevel directories contribute no members. Members that do not
    /// resolve, or whose marker is a broken link, are reported in
    /// `Listing::stale` instead of `services`.
    ///
    /// # Errors
    /// Fails only with `ActiveSetUnavailable`, when `runlevels` is empty and
    /// the active set cannot be obtained.
    pub fn list<S: AsRef<str>>(&self, runlevels: &[S]) -> Result<Listing> {
        let runlevels: Vec<String> = if runlevels.is_empty() {
            self.active.active_runlevels()?
        } else {
            runlevels.iter().map(|r| r.as_ref().to_string()).collect()
        };
        debug!("listing services in runlevels {:?}", runlevels);

        let mut members: BTreeMap<ServiceName, Member> = BTreeMap::new();
        for runlevel in &runlevels {
            for (name, marker) in self.read_members(runlevel) {
                let broken = self.resolver.check_marker(&name, &marker).err();
                let member = members.entry(name).or_default();
                if !member.runlevels.contains(runlevel) {
                    member.runlevels.push(runlevel.clone());
                }
                if member.broken_marker.is_none() {
                    member.broken_marker = broken;
                }
            }
        }

        let mut listing = Listing::default();
        for (service, member) in members {
            let resolved = self
                .resolver
                .resolve_name(&service)
                .and_then(|_| member.broken_marker.map_or(Ok(()), Err));

            match resolved {
                Ok(()) => listing.services.push(service),
                Err(reason) => {
                    warn!(
                        "stale membership: {} in runlevel(s) {}: {}",
                        service,
                        member.runlevels.join(", "),
                        reason
                    );
                    listing.stale.push(StaleMembership {
                        service,
                        runlevels: member.runlevels,
                        reason,
                    });
                }
            }
        }

        Ok(listing)
    }

    /// Read the membership markers of one runlevel, with their paths
    fn read_members(&self, runlevel: &str) -> Vec<(ServiceName, PathBuf)> {
        // Runlevel names are joined onto a managed directory like service names
        if let Err(e) = ServiceName::parse(runlevel) {
            warn!("skipping runlevel: {}", e);
            return Vec::new();
        }

        let dir = self.layout.runlevel_path(runlevel);
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) => {
                debug!("runlevel {} has no members ({}): {}", runlevel, dir.display(), e);
                return Vec::new();
            }
        };

        let mut names = Vec::new();
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("error reading {}: {}", dir.display(), e);
                    continue;
                }
            };

            let Some(file_name) = entry.file_name().to_str().map(str::to_string) else {
                debug!("ignoring non UTF-8 entry in {}", dir.display());
                continue;
            };
            if file_name.starts_with('.') {
                continue;
            }

            match ServiceName::parse(&file_name) {
                Ok(name) => names.push((name, entry.path())),
                Err(e) => debug!("ignoring entry in {}: {}", dir.display(), e),
            }
        }

        names
    }
}
