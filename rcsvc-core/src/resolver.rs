//! Service resolver
//!
//! Maps a service name to the script that implements it. Only the script
//! directory is consulted: a runlevel marker without a matching script entry
//! is stale, not a service.

use std::fs::{self, Metadata};
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::domain::layout::Layout;
use crate::domain::service::ServiceName;
use crate::error::{BrokenLinkReason, Error, Result};

/// Maximum number of indirections followed before giving up
pub const MAX_LINK_DEPTH: usize = 40;

/// Resolves service names against a script directory
#[derive(Debug, Clone)]
pub struct Resolver {
    script_dir: PathBuf,
}

impl Resolver {
    /// Creates a resolver reading from the layout's script directory
    pub fn new(layout: &Layout) -> Self {
        Self {
            script_dir: layout.script_dir.clone(),
        }
    }

    /// Resolve a raw service name to its script path
    ///
    /// The name is validated before any filesystem access, so names like
    /// `../etc/passwd` fail with `InvalidName` without touching the disk.
    ///
    /// # Errors
    /// - `InvalidName` if the name is malformed
    /// - `NotFound` if the script directory has no executable entry by that name
    /// - `BrokenLink` if the entry is an indirection that dangles or loops
    pub fn resolve(&self, name: &str) -> Result<PathBuf> {
        let name = ServiceName::parse(name)?;
        self.resolve_name(&name)
    }

    /// Resolve an already validated service name
    pub fn resolve_name(&self, name: &ServiceName) -> Result<PathBuf> {
        let result = self.follow(name);
        match &result {
            Ok(path) => debug!("resolved {} to {}", name, path.display()),
            Err(e) => debug!("failed to resolve {}: {}", name, e),
        }
        result
    }

    /// Check whether a service resolves to a script
    pub fn exists(&self, name: &str) -> bool {
        self.resolve(name).is_ok()
    }

    /// Check that a runlevel marker for `name` dereferences to something
    ///
    /// The marker itself was just read from its directory, so any failure
    /// here means its chain is broken.
    pub fn check_marker(&self, name: &ServiceName, marker: &Path) -> Result<()> {
        match walk(marker.to_path_buf()) {
            Ok(_) => Ok(()),
            Err(Walk::Missing { path, source, .. }) => {
                debug!("marker {} is broken: {}", marker.display(), source);
                Err(Error::BrokenLink {
                    name: name.to_string(),
                    path,
                    reason: BrokenLinkReason::Dangling,
                })
            }
            Err(Walk::TooDeep { path }) => Err(Error::BrokenLink {
                name: name.to_string(),
                path,
                reason: BrokenLinkReason::TooDeep,
            }),
        }
    }

    /// Follow the chain rooted at the script directory entry
    fn follow(&self, name: &ServiceName) -> Result<PathBuf> {
        let (path, meta, hops) = match walk(self.script_dir.join(name.as_str())) {
            Ok(found) => found,
            Err(Walk::Missing { path, hops, source }) => {
                debug!("lookup of {} failed: {}", path.display(), source);
                if hops == 0 {
                    return Err(Error::NotFound(name.to_string()));
                }
                return Err(Error::BrokenLink {
                    name: name.to_string(),
                    path,
                    reason: BrokenLinkReason::Dangling,
                });
            }
            Err(Walk::TooDeep { path }) => {
                return Err(Error::BrokenLink {
                    name: name.to_string(),
                    path,
                    reason: BrokenLinkReason::TooDeep,
                });
            }
        };

        if !meta.is_file() || !is_executable(&meta) {
            debug!("{} is not an executable file, ignoring", path.display());
            return Err(Error::NotFound(name.to_string()));
        }

        if hops == 0 {
            return Ok(path);
        }

        // `..` in a followed target is relative to the real directory
        fs::canonicalize(&path).map_err(|e| {
            debug!("cannot canonicalize {}: {}", path.display(), e);
            Error::BrokenLink {
                name: name.to_string(),
                path,
                reason: BrokenLinkReason::Dangling,
            }
        })
    }
}

/// Why a chain could not be walked to its end
enum Walk {
    Missing {
        path: PathBuf,
        hops: usize,
        source: io::Error,
    },
    TooDeep {
        path: PathBuf,
    },
}

/// Follow indirections from `path` until something that is not a link,
/// returning it with its metadata and the number of links followed
///
/// Targets are joined onto the link's directory as written, so the kernel
/// interprets `..` against the real directory.
fn walk(mut path: PathBuf) -> std::result::Result<(PathBuf, Metadata, usize), Walk> {
    let mut hops = 0;

    loop {
        let meta = match fs::symlink_metadata(&path) {
            Ok(meta) => meta,
            Err(source) => return Err(Walk::Missing { path, hops, source }),
        };

        if !meta.file_type().is_symlink() {
            return Ok((path, meta, hops));
        }

        if hops >= MAX_LINK_DEPTH {
            return Err(Walk::TooDeep { path });
        }

        let target = match fs::read_link(&path) {
            Ok(target) => target,
            Err(source) => {
                return Err(Walk::Missing {
                    path,
                    hops: hops + 1,
                    source,
                });
            }
        };

        path = match path.parent() {
            Some(parent) if target.is_relative() => parent.join(&target),
            _ => target,
        };
        hops += 1;
    }
}

#[cfg(unix)]
fn is_executable(meta: &Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;
    meta.permissions().mode() & 0o111 != 0
}

#[cfg(not(unix))]
fn is_executable(_meta: &Metadata) -> bool {
    true
}
