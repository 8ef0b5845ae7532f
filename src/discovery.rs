//! Cardset discovery across search roots.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use std::collections::HashSet;
use std::io;
use std::path::Path;

use log::{debug, trace, warn};

use crate::options::DiscoveryOptions;
use crate::theme::{CardThemeProvider, PysolTheme};

/// Lists the subdirectories of a search root.
pub trait DirectoryLister {
    /// Returns the names of the subdirectories of `root`.
    ///
    /// # Errors
    ///
    /// Returns an error if `root` cannot be read.
    fn list(&self, root: &Path) -> io::Result<Vec<String>>;
}

/// Lists directories with [`std::fs::read_dir`].
///
/// Entries whose names are not valid UTF-8 are skipped. Names are returned
/// sorted.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsDirectoryLister;

impl DirectoryLister for FsDirectoryLister {
    fn list(&self, root: &Path) -> io::Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in std::fs::read_dir(root)? {
            let entry = entry?;
            if !entry.file_type()?.is_dir() {
                continue;
            }
            if let Ok(name) = entry.file_name().into_string() {
                names.push(name);
            }
        }
        names.sort_unstable();
        Ok(names)
    }
}

/// Finds every usable PySol cardset under the configured roots.
///
/// Directories without the configured prefix are skipped without being
/// read. A cardset that fails to parse is logged and skipped; it never
/// stops the sweep. When the same directory name appears under several
/// roots, the first root's cardset is kept.
pub fn discover_themes<L>(options: &DiscoveryOptions, lister: &L) -> Vec<PysolTheme>
where
    L: DirectoryLister + ?Sized,
{
    let mut themes = Vec::new();
    let mut seen = HashSet::new();

    for root in &options.roots {
        let names = match lister.list(root) {
            Ok(names) => names,
            Err(err) => {
                warn!("Skipping theme root {}: {err}", root.display());
                continue;
            }
        };

        for name in names {
            if !name.starts_with(options.prefix.as_str()) {
                trace!("Skipping {name}: not a cardset directory");
                continue;
            }
            match PysolTheme::open(root, &name) {
                Ok(theme) => {
                    if seen.insert(theme.info().pref_name.clone()) {
                        themes.push(theme);
                    } else {
                        debug!("Ignoring {name} in {}: shadowed", root.display());
                    }
                }
                Err(err) => debug!("Rejected cardset {name} in {}: {err}", root.display()),
            }
        }
    }

    themes
}
