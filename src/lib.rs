//! Parser and asset resolver for PySol card themes.
//!
//! A PySol cardset is a directory named `cardset-*` holding card images and
//! a positional `config.txt` that describes them. This crate parses that
//! file into a [`CardsetDescriptor`], maps card ids to image paths with an
//! [`AssetResolver`], and finds cardsets under a list of search roots.
//!
//! Only 52-card French cardsets are accepted.
//!
//! # Example
//!
//! ```no_run
//! use pysol_cardset::{CardId, CardThemeProvider, DiscoveryOptions, FsDirectoryLister, discover_themes};
//!
//! let options = DiscoveryOptions::default();
//! for theme in discover_themes(&options, &FsDirectoryLister) {
//!     println!("{} -> {:?}", theme.info().display_name, theme.card_path(CardId::Back));
//! }
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

pub mod card;
pub mod decode;
pub mod descriptor;
pub mod discovery;
pub mod error;
pub mod options;
pub mod parser;
pub mod resolver;
pub mod theme;

// Re-export main types
pub use card::{CardId, DECK_SIZE, PlayingCard, Suit};
#[cfg(feature = "image")]
pub use decode::FileImageDecoder;
pub use decode::ImageDecoder;
pub use descriptor::{CardSize, CardsetDescriptor, DeckType};
pub use discovery::{DirectoryLister, FsDirectoryLister, discover_themes};
pub use error::{DecodeError, ParseError};
pub use options::DiscoveryOptions;
pub use resolver::AssetResolver;
pub use theme::{CardThemeProvider, PysolTheme, ThemeInfo, ThemeKind, card_image};
