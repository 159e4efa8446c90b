pub mod audio;
pub mod graphics;
pub mod misc;
pub mod networking;

use crate::os::{OsVersion, OsWindow};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

pub const EXTENSIONS: &str = "/System/Library/Extensions";
pub const FRAMEWORKS: &str = "/System/Library/Frameworks";
pub const PRIVATE_FRAMEWORKS: &str = "/System/Library/PrivateFrameworks";
pub const LAUNCH_DAEMONS: &str = "/System/Library/LaunchDaemons";
pub const SANDBOX_PROFILES: &str = "/System/Library/Sandbox/Profiles";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum PatchCategory {
    Graphics,
    Brightness,
    Audio,
    Networking,
    Miscellaneous,
}

impl fmt::Display for PatchCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatchCategory::Graphics => write!(f, "Graphics"),
            PatchCategory::Brightness => write!(f, "Brightness"),
            PatchCategory::Audio => write!(f, "Audio"),
            PatchCategory::Networking => write!(f, "Networking"),
            PatchCategory::Miscellaneous => write!(f, "Miscellaneous"),
        }
    }
}

/// File payload of a catalog entry.
///
/// `install` maps a target directory to `file -> source`, where source names
/// the OS build the binary was taken from. `remove` lists files deleted from
/// a directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FileOperations {
    pub install: BTreeMap<String, BTreeMap<String, String>>,
    pub remove: BTreeMap<String, Vec<String>>,
}

impl FileOperations {
    /// Drop one install sub-operation, leaving everything else untouched.
    /// Returns whether anything was removed.
    pub fn remove_install(&mut self, directory: &str, file: &str) -> bool {
        let Some(files) = self.install.get_mut(directory) else {
            return false;
        };
        let removed = files.remove(file).is_some();
        if files.is_empty() {
            self.install.remove(directory);
        }
        removed
    }

    pub fn installs(&self, directory: &str, file: &str) -> bool {
        self.install
            .get(directory)
            .is_some_and(|files| files.contains_key(file))
    }

    pub fn is_empty(&self) -> bool {
        self.install.is_empty() && self.remove.is_empty()
    }

    /// Number of individual file operations.
    pub fn len(&self) -> usize {
        self.install.values().map(BTreeMap::len).sum::<usize>()
            + self.remove.values().map(Vec::len).sum::<usize>()
    }
}

/// A named, OS-windowed bundle of file operations.
///
/// Shared support payloads have an empty display name and are not listed to users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatchCatalogEntry {
    pub name: String,
    pub display_name: String,
    pub category: PatchCategory,
    pub file_operations: FileOperations,
    pub minimum_os: OsVersion,
    pub maximum_os: OsVersion,
}

impl PatchCatalogEntry {
    pub fn new(name: impl Into<String>, category: PatchCategory, window: OsWindow) -> Self {
        Self {
            name: name.into(),
            display_name: String::new(),
            category,
            file_operations: FileOperations::default(),
            minimum_os: window.minimum,
            maximum_os: window.maximum,
        }
    }

    pub fn display_name(mut self, value: impl Into<String>) -> Self {
        self.display_name = value.into();
        self
    }

    /// Install `files` (as `(file, source)` pairs) into `directory`.
    pub fn install(mut self, directory: &str, files: &[(&str, &str)]) -> Self {
        let target = self
            .file_operations
            .install
            .entry(directory.to_string())
            .or_default();
        for (file, source) in files {
            target.insert(file.to_string(), source.to_string());
        }
        self
    }

    pub fn remove(mut self, directory: &str, files: &[&str]) -> Self {
        let target = self
            .file_operations
            .remove
            .entry(directory.to_string())
            .or_default();
        target.extend(files.iter().map(|f| f.to_string()));
        self
    }

    pub fn is_visible(&self) -> bool {
        !self.display_name.is_empty()
    }

    pub fn window(&self) -> OsWindow {
        OsWindow::new(self.minimum_os, self.maximum_os)
    }

    pub fn supports(&self, host: OsVersion) -> bool {
        self.window().contains(host)
    }
}

/// Named patch entries, in declaration order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<PatchCatalogEntry>,
}

impl Catalog {
    pub fn from_entries(entries: Vec<PatchCatalogEntry>) -> Self {
        Self { entries }
    }

    /// The built-in catalog, shared across all hosts. Entry windows do the versioning.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    pub fn get(&self, name: &str) -> Option<&PatchCatalogEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PatchCatalogEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries whose window admits `host`.
    pub fn eligible(&self, host: OsVersion) -> impl Iterator<Item = &PatchCatalogEntry> {
        self.entries.iter().filter(move |e| e.supports(host))
    }
}

static BUILTIN: LazyLock<Catalog> = LazyLock::new(|| {
    let mut entries = graphics::entries();
    entries.extend(audio::entries());
    entries.extend(networking::entries());
    entries.extend(misc::entries());
    Catalog::from_entries(entries)
});
