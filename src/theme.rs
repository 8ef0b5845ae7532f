//! Card theme providers.
//!
//! A theme format plugs in by implementing [`CardThemeProvider`]. PySol
//! cardsets are one such format: [`PysolTheme`] wraps a parsed
//! [`CardsetDescriptor`] together with the naming metadata a theme list
//! needs.

extern crate alloc;

use alloc::boxed::Box;
use alloc::string::String;
use std::path::{Path, PathBuf};

use log::debug;

use crate::card::CardId;
use crate::decode::ImageDecoder;
use crate::descriptor::{CardSize, CardsetDescriptor};
use crate::error::ParseError;
use crate::parser;
use crate::resolver::AssetResolver;

/// Theme file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ThemeKind {
    /// A PySol cardset directory.
    Pysol,
}

impl ThemeKind {
    /// Returns the prefix used in preference keys for this kind.
    #[must_use]
    pub const fn pref_prefix(self) -> &'static str {
        match self {
            Self::Pysol => "pysol",
        }
    }

    /// Returns the suffix shown after theme names of this kind.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pysol => "PySol",
        }
    }
}

/// Naming metadata for a discovered theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeInfo {
    /// Format of the theme.
    pub kind: ThemeKind,
    /// Search root the theme was found under.
    pub root: PathBuf,
    /// Name of the theme's entry inside `root`.
    pub filename: String,
    /// Name to show in a theme list.
    pub display_name: String,
    /// Stable key for storing the selection in preferences.
    pub pref_name: String,
}

impl ThemeInfo {
    /// Builds the metadata for a theme named `name` found at
    /// `root/filename`.
    ///
    /// ```
    /// use pysol_cardset::{ThemeInfo, ThemeKind};
    ///
    /// let info = ThemeInfo::new(ThemeKind::Pysol, "/usr/share/games/pysol", "cardset-oxymoron", "Oxymoron");
    /// assert_eq!(info.display_name, "Oxymoron (PySol)");
    /// assert_eq!(info.pref_name, "pysol:cardset-oxymoron");
    /// ```
    #[must_use]
    pub fn new(
        kind: ThemeKind,
        root: impl Into<PathBuf>,
        filename: impl Into<String>,
        name: &str,
    ) -> Self {
        let filename = filename.into();
        Self {
            kind,
            root: root.into(),
            display_name: format!("{name} ({})", kind.label()),
            pref_name: format!("{}:{filename}", kind.pref_prefix()),
            filename,
        }
    }
}

/// Capabilities every theme format provides.
pub trait CardThemeProvider {
    /// Returns the theme's naming metadata.
    fn info(&self) -> &ThemeInfo;

    /// Prepares the theme for rendering.
    ///
    /// # Errors
    ///
    /// Returns an error if the theme's metadata turns out to be unusable.
    fn load(&mut self) -> Result<(), ParseError>;

    /// Returns the current card size.
    fn card_size(&self) -> CardSize;

    /// Returns the card width divided by its height.
    fn card_aspect(&self) -> f64 {
        self.card_size().aspect()
    }

    /// Requests a new card size.
    ///
    /// Returns `true` if the size changed. Bitmap themes cannot scale and
    /// always return `false`.
    fn set_card_size(&mut self, width: i32, height: i32, proportion: f64) -> bool;

    /// Returns the image path for `card`, or `None` if the theme has no
    /// image for it.
    fn card_path(&self, card: CardId) -> Option<PathBuf>;
}

/// Loads the image for `card` from `theme`.
///
/// Returns `None` both when the theme has no image for the card and when
/// decoding fails. Decode failures are logged and do not affect other
/// cards.
pub fn card_image<D>(theme: &dyn CardThemeProvider, card: CardId, decoder: &D) -> Option<D::Image>
where
    D: ImageDecoder + ?Sized,
{
    let path = theme.card_path(card)?;
    match decoder.decode(&path) {
        Ok(image) => Some(image),
        Err(err) => {
            debug!("Failed to load card ID {}: {err}", card.to_raw());
            None
        }
    }
}

/// A PySol cardset theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PysolTheme {
    info: ThemeInfo,
    descriptor: CardsetDescriptor,
}

impl PysolTheme {
    /// Wraps a descriptor parsed from `root/subdir`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, subdir: &str, descriptor: CardsetDescriptor) -> Self {
        let info = ThemeInfo::new(ThemeKind::Pysol, root, subdir, descriptor.name());
        Self { info, descriptor }
    }

    /// Parses the cardset at `root/subdir`.
    ///
    /// # Errors
    ///
    /// Returns the parser's error if the cardset is unusable.
    pub fn open(root: &Path, subdir: &str) -> Result<Self, ParseError> {
        let descriptor = parser::parse(root, subdir)?;
        Ok(Self::new(root, subdir, descriptor))
    }

    /// Returns the parsed cardset metadata.
    #[must_use]
    pub const fn descriptor(&self) -> &CardsetDescriptor {
        &self.descriptor
    }

    /// Returns a resolver for this cardset's images.
    #[must_use]
    pub const fn resolver(&self) -> AssetResolver<'_> {
        AssetResolver::new(&self.descriptor)
    }

    /// Boxes the theme as a provider trait object.
    #[must_use]
    pub fn into_provider(self) -> Box<dyn CardThemeProvider> {
        Box::new(self)
    }
}

impl CardThemeProvider for PysolTheme {
    fn info(&self) -> &ThemeInfo {
        &self.info
    }

    fn load(&mut self) -> Result<(), ParseError> {
        // Everything was read when the config was parsed.
        Ok(())
    }

    fn card_size(&self) -> CardSize {
        self.descriptor.card_size()
    }

    fn set_card_size(&mut self, _width: i32, _height: i32, _proportion: f64) -> bool {
        false
    }

    fn card_path(&self, card: CardId) -> Option<PathBuf> {
        self.resolver().resolve(card)
    }
}
