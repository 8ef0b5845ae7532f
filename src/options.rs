//! Theme discovery configuration.

extern crate alloc;

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use std::ffi::OsStr;
use std::path::PathBuf;

/// Directory searched when no other roots are configured.
pub const DEFAULT_ROOT: &str = "/usr/share/games/pysol";

/// Prefix a directory name must carry to be considered a cardset.
pub const CARDSET_PREFIX: &str = "cardset-";

/// Where and how to look for PySol cardsets.
///
/// Roots are searched in order; when two roots hold a cardset with the
/// same directory name, the earlier root wins. Use the builder methods to
/// customize options:
///
/// ```
/// use pysol_cardset::DiscoveryOptions;
///
/// let options = DiscoveryOptions::default()
///     .with_root("/home/me/.pysol/cardsets")
///     .with_prefix("cardset-");
/// assert_eq!(options.roots.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryOptions {
    /// Search roots, highest priority first.
    pub roots: Vec<PathBuf>,
    /// Required directory name prefix.
    pub prefix: String,
}

impl Default for DiscoveryOptions {
    fn default() -> Self {
        Self {
            roots: vec![PathBuf::from(DEFAULT_ROOT)],
            prefix: String::from(CARDSET_PREFIX),
        }
    }
}

impl DiscoveryOptions {
    /// Replaces the search roots.
    ///
    /// # Example
    ///
    /// ```
    /// use pysol_cardset::DiscoveryOptions;
    ///
    /// let options = DiscoveryOptions::default().with_roots(["/a", "/b"]);
    /// assert_eq!(options.roots.len(), 2);
    /// ```
    #[must_use]
    pub fn with_roots<I, P>(mut self, roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.roots = roots.into_iter().map(Into::into).collect();
        self
    }

    /// Adds a root searched before all current ones.
    #[must_use]
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.roots.insert(0, root.into());
        self
    }

    /// Adds the entries of a platform path list (as found in `PATH`-style
    /// variables) ahead of the current roots, keeping their order.
    ///
    /// Empty entries are ignored.
    ///
    /// # Example
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use pysol_cardset::DiscoveryOptions;
    ///
    /// # #[cfg(unix)]
    /// # {
    /// let options = DiscoveryOptions::default().with_search_path("/opt/cards:/srv/cards".as_ref());
    /// assert_eq!(options.roots[0], PathBuf::from("/opt/cards"));
    /// assert_eq!(options.roots[1], PathBuf::from("/srv/cards"));
    /// # }
    /// ```
    #[must_use]
    pub fn with_search_path(mut self, search_path: &OsStr) -> Self {
        let mut roots: Vec<PathBuf> = std::env::split_paths(search_path)
            .filter(|root| !root.as_os_str().is_empty())
            .collect();
        roots.append(&mut self.roots);
        self.roots = roots;
        self
    }

    /// Sets the required directory name prefix.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }
}
