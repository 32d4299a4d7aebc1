//! Test fixture building a throwaway init tree under a temporary directory

use std::fs;
use std::os::unix::fs::{PermissionsExt, symlink};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::domain::layout::Layout;

pub struct Tree {
    dir: TempDir,
    pub layout: Layout,
}

impl Tree {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let layout = Layout::new(
            dir.path().join("init.d"),
            dir.path().join("runlevels"),
            dir.path().join("run"),
        );
        fs::create_dir_all(&layout.script_dir).unwrap();
        fs::create_dir_all(&layout.runlevel_dir).unwrap();
        fs::create_dir_all(&layout.state_dir).unwrap();

        Self { dir, layout }
    }

    /// Root of the temporary tree, for files outside the managed directories
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Installs an executable script in the script directory
    pub fn script(&self, name: &str) -> PathBuf {
        let path = self.layout.script_dir.join(name);
        write_file(&path, 0o755);
        path
    }

    /// Installs a non-executable file in the script directory
    pub fn plain_file(&self, name: &str) -> PathBuf {
        let path = self.layout.script_dir.join(name);
        write_file(&path, 0o644);
        path
    }

    /// Creates `name` in the script directory as a link to `target`
    pub fn link(&self, name: &str, target: impl AsRef<Path>) -> PathBuf {
        let path = self.layout.script_dir.join(name);
        symlink(target, &path).unwrap();
        path
    }

    /// Adds a membership marker for `name` to `runlevel`
    pub fn member(&self, runlevel: &str, name: &str) {
        let dir = self.layout.runlevel_path(runlevel);
        fs::create_dir_all(&dir).unwrap();
        symlink(self.layout.script_dir.join(name), dir.join(name)).unwrap();
    }

    /// Adds a membership marker for `name` to `runlevel` pointing at `target`
    pub fn marker(&self, runlevel: &str, name: &str, target: impl AsRef<Path>) {
        let dir = self.layout.runlevel_path(runlevel);
        fs::create_dir_all(&dir).unwrap();
        symlink(target, dir.join(name)).unwrap();
    }

    /// Creates an empty runlevel directory
    pub fn runlevel(&self, runlevel: &str) {
        fs::create_dir_all(self.layout.runlevel_path(runlevel)).unwrap();
    }

    /// Writes the file naming the currently selected runlevel
    pub fn softlevel(&self, content: &str) {
        fs::write(self.layout.softlevel_path(), content).unwrap();
    }
}

pub fn write_file(path: &Path, mode: u32) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, "#!/sbin/openrc-run\n").unwrap();
    fs::set_permissions(path, fs::Permissions::from_mode(mode)).unwrap();
}
