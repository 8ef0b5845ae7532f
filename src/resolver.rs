//! Card id to image path resolution.

use std::path::PathBuf;

use crate::card::CardId;
use crate::descriptor::CardsetDescriptor;

/// Image used for the empty-slot placeholder.
///
/// Always a GIF, whatever extension the cardset declares for its cards.
pub const SLOT_IMAGE: &str = "bottom01.gif";

/// Computes image paths for the cards of one cardset.
///
/// Resolution is pure: it never touches the filesystem, so a returned path
/// may still point at a missing file.
#[derive(Debug, Clone, Copy)]
pub struct AssetResolver<'a> {
    descriptor: &'a CardsetDescriptor,
}

impl<'a> AssetResolver<'a> {
    /// Creates a resolver for `descriptor`.
    #[must_use]
    pub const fn new(descriptor: &'a CardsetDescriptor) -> Self {
        Self { descriptor }
    }

    /// Returns the image filename for `card`, relative to the cardset
    /// directory.
    ///
    /// Jokers have no image in a French cardset and yield `None`.
    ///
    /// ```
    /// use pysol_cardset::{AssetResolver, CardId, CardsetDescriptor, Suit};
    ///
    /// let text = "PySol solitaire cardset;4;.png;1;52\nx;Demo\n71 96 2\n\nb.png\nb.png\n";
    /// let descriptor = CardsetDescriptor::from_config_text(text, "/themes/cardset-demo")?;
    /// let resolver = AssetResolver::new(&descriptor);
    ///
    /// let four = CardId::card(Suit::Diamonds, 4).unwrap();
    /// assert_eq!(resolver.file_name(four).as_deref(), Some("04d.png"));
    /// assert_eq!(resolver.file_name(CardId::Joker(52)), None);
    /// # Ok::<(), pysol_cardset::ParseError>(())
    /// ```
    #[must_use]
    pub fn file_name(&self, card: CardId) -> Option<String> {
        match card {
            CardId::Slot => Some(SLOT_IMAGE.to_string()),
            CardId::Back => Some(self.descriptor.default_back().to_string()),
            CardId::Card(card) => Some(format!(
                "{:02}{}{}",
                card.rank(),
                card.suit().as_char(),
                self.descriptor.image_extension()
            )),
            CardId::Joker(_) => None,
        }
    }

    /// Returns the full image path for `card`.
    #[must_use]
    pub fn resolve(&self, card: CardId) -> Option<PathBuf> {
        self.file_name(card)
            .map(|name| self.descriptor.base_path().join(name))
    }

    /// Resolves a raw integer id.
    ///
    /// Returns `None` for jokers and for values that are not card ids.
    #[must_use]
    pub fn resolve_raw(&self, raw: i32) -> Option<PathBuf> {
        CardId::from_raw(raw).and_then(|card| self.resolve(card))
    }
}
