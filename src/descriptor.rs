//! Validated cardset metadata.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use std::path::{Path, PathBuf};

use crate::error::ParseError;

/// PySol cardset family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum DeckType {
    /// French type (52 cards).
    French,
    /// Hanafuda type (48 cards).
    Hanafuda,
    /// Tarock type (78 cards).
    Tarock,
    /// Mahjongg type (42 tiles).
    Mahjongg,
    /// Hex A Deck type (68 cards).
    HexADeck,
    /// Mughal Ganjifa type (96 cards).
    MughalGanjifa,
    /// Navagraha Ganjifa type (108 cards).
    NavagrahaGanjifa,
    /// Dashavatara Ganjifa type (120 cards).
    DashavataraGanjifa,
    /// Trumps only type (variable cards).
    TrumpOnly,
    /// A code this crate does not know about.
    Other(i32),
}

impl DeckType {
    /// Maps a numeric type code from the config header.
    #[must_use]
    pub const fn from_code(code: i32) -> Self {
        match code {
            1 => Self::French,
            2 => Self::Hanafuda,
            3 => Self::Tarock,
            4 => Self::Mahjongg,
            5 => Self::HexADeck,
            6 => Self::MughalGanjifa,
            7 => Self::NavagrahaGanjifa,
            8 => Self::DashavataraGanjifa,
            9 => Self::TrumpOnly,
            other => Self::Other(other),
        }
    }

    /// Returns the numeric type code.
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::French => 1,
            Self::Hanafuda => 2,
            Self::Tarock => 3,
            Self::Mahjongg => 4,
            Self::HexADeck => 5,
            Self::MughalGanjifa => 6,
            Self::NavagrahaGanjifa => 7,
            Self::DashavataraGanjifa => 8,
            Self::TrumpOnly => 9,
            Self::Other(code) => code,
        }
    }

    /// Returns the number of cards a set of this type holds, if fixed.
    #[must_use]
    pub const fn expected_cards(self) -> Option<i32> {
        match self {
            Self::French => Some(52),
            Self::Hanafuda => Some(48),
            Self::Tarock => Some(78),
            Self::Mahjongg => Some(42),
            Self::HexADeck => Some(68),
            Self::MughalGanjifa => Some(96),
            Self::NavagrahaGanjifa => Some(108),
            Self::DashavataraGanjifa => Some(120),
            Self::TrumpOnly | Self::Other(_) => None,
        }
    }
}

/// Pixel size of a card image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CardSize {
    /// Width in pixels.
    pub width: i32,
    /// Height in pixels.
    pub height: i32,
}

impl CardSize {
    /// Creates a new card size.
    #[must_use]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Returns `width / height`.
    #[must_use]
    pub fn aspect(self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }
}

/// Metadata of one PySol cardset directory.
///
/// A descriptor can only be obtained through the config parser, so every
/// value of this type describes a 52-card French deck with a non-empty
/// extension and at least one back image, and its default back index is
/// always in range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardsetDescriptor {
    name: String,
    base_path: PathBuf,
    image_extension: String,
    format_version: i32,
    deck_type: DeckType,
    card_count: i32,
    card_size: CardSize,
    card_delta: i32,
    backs: Vec<String>,
    default_back_index: usize,
}

/// Values collected from a config file that has passed every check.
#[derive(Debug)]
pub(crate) struct DescriptorParts {
    pub name: String,
    pub base_path: PathBuf,
    pub image_extension: String,
    pub format_version: i32,
    pub card_count: i32,
    pub card_size: CardSize,
    pub card_delta: i32,
    pub backs: Vec<String>,
    pub default_back: String,
}

impl CardsetDescriptor {
    /// Parses config text that has already been loaded.
    ///
    /// `base_path` is the cardset directory the text came from.
    ///
    /// # Errors
    ///
    /// Returns the first structural or validation failure found.
    ///
    /// # Example
    ///
    /// ```
    /// use pysol_cardset::CardsetDescriptor;
    ///
    /// let text = "PySol solitaire cardset;4;.png;1;52\n\
    ///             cardset-demo;Demo\n\
    ///             73 97 8\n\
    ///             18 18 8 8\n\
    ///             back02.png\n\
    ///             back01.png;back02.png\n";
    /// let descriptor = CardsetDescriptor::from_config_text(text, "/themes/cardset-demo")?;
    /// assert_eq!(descriptor.name(), "Demo");
    /// assert_eq!(descriptor.default_back(), "back02.png");
    /// # Ok::<(), pysol_cardset::ParseError>(())
    /// ```
    pub fn from_config_text(
        text: &str,
        base_path: impl Into<PathBuf>,
    ) -> Result<Self, ParseError> {
        crate::parser::parse_str(text, base_path.into())
    }

    /// Builds the descriptor from checked parts and picks the default back.
    pub(crate) fn from_parts(parts: DescriptorParts) -> Self {
        debug_assert!(!parts.backs.is_empty());
        debug_assert!(!parts.image_extension.is_empty());
        let default_back_index = parts
            .backs
            .iter()
            .position(|back| *back == parts.default_back)
            .unwrap_or(0);

        Self {
            name: parts.name,
            base_path: parts.base_path,
            image_extension: parts.image_extension,
            format_version: parts.format_version,
            deck_type: DeckType::French,
            card_count: parts.card_count,
            card_size: parts.card_size,
            card_delta: parts.card_delta,
            backs: parts.backs,
            default_back_index,
        }
    }

    /// Human-readable cardset name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Directory holding the cardset images.
    #[must_use]
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Extension of per-card images, including the leading dot.
    #[must_use]
    pub fn image_extension(&self) -> &str {
        &self.image_extension
    }

    /// Declared config format version.
    #[must_use]
    pub const fn format_version(&self) -> i32 {
        self.format_version
    }

    /// Deck type. Always [`DeckType::French`] for an accepted cardset.
    #[must_use]
    pub const fn deck_type(&self) -> DeckType {
        self.deck_type
    }

    /// Number of cards. Always 52 for an accepted cardset.
    #[must_use]
    pub const fn card_count(&self) -> i32 {
        self.card_count
    }

    /// Card image size.
    #[must_use]
    pub const fn card_size(&self) -> CardSize {
        self.card_size
    }

    /// Card delta, carried through from the geometry line.
    #[must_use]
    pub const fn card_delta(&self) -> i32 {
        self.card_delta
    }

    /// Available back images, in file order.
    #[must_use]
    pub fn backs(&self) -> &[String] {
        &self.backs
    }

    /// Index of the default back in [`backs`](Self::backs).
    #[must_use]
    pub const fn default_back_index(&self) -> usize {
        self.default_back_index
    }

    /// Filename of the default back image.
    #[must_use]
    pub fn default_back(&self) -> &str {
        &self.backs[self.default_back_index]
    }
}
