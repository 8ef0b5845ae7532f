//! Card identifiers and suit encoding.
//!
//! Themes address their images through a small closed identifier space:
//! the 52 ordinary cards, two jokers, the card back, and the empty-slot
//! placeholder. The raw integer numbering matches the one used by GNOME
//! card games, so ids coming from existing game code can be converted with
//! [`CardId::from_raw`].

/// Card suit, in encoding order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
}

impl Suit {
    /// All suits, ordered by their numeric encoding.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];

    /// Returns the suit for a numeric suit index (`0..4`).
    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::Clubs),
            1 => Some(Self::Diamonds),
            2 => Some(Self::Hearts),
            3 => Some(Self::Spades),
            _ => None,
        }
    }

    /// Returns the numeric suit index.
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Returns the character used for this suit in image filenames.
    ///
    /// ```
    /// use pysol_cardset::Suit;
    ///
    /// assert_eq!(Suit::Diamonds.as_char(), 'd');
    /// ```
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Clubs => 'c',
            Self::Diamonds => 'd',
            Self::Hearts => 'h',
            Self::Spades => 's',
        }
    }
}

/// Number of cards per suit.
pub const RANKS_PER_SUIT: u8 = 13;

/// Number of ordinary cards in a French deck.
pub const DECK_SIZE: usize = 52;

/// Raw id of the small joker.
pub const SMALL_JOKER: i32 = 52;

/// Raw id of the large joker.
pub const LARGE_JOKER: i32 = 53;

/// Raw id of the card-back sentinel.
pub const CARD_BACK: i32 = 54;

/// Raw id of the empty-slot sentinel.
pub const CARD_SLOT: i32 = 55;

/// Total number of distinct raw card ids a theme can be asked for.
pub const TOTAL_CARD_IDS: usize = 56;

/// First raw id past the joker block (suit 4, ranks 0..13).
const JOKER_END: i32 = 65;

/// An ordinary playing card with a rank in `1..=13`.
///
/// The fields are private so that every value carries a valid rank; build
/// one with [`PlayingCard::new`] or [`CardId::card`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlayingCard {
    suit: Suit,
    rank: u8,
}

impl PlayingCard {
    /// Creates a card, returning `None` if `rank` is outside `1..=13`.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Option<Self> {
        if rank == 0 || rank > RANKS_PER_SUIT {
            return None;
        }
        Some(Self { suit, rank })
    }

    /// The suit of the card.
    #[must_use]
    pub const fn suit(self) -> Suit {
        self.suit
    }

    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    #[must_use]
    pub const fn rank(self) -> u8 {
        self.rank
    }
}

/// An identifier for a card image within a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardId {
    /// An ordinary playing card.
    Card(PlayingCard),
    /// A joker, identified by its raw id.
    Joker(i32),
    /// The card back.
    Back,
    /// The empty-slot placeholder.
    Slot,
}

impl CardId {
    /// Creates an ordinary card id.
    ///
    /// Returns `None` if `rank` is outside `1..=13`.
    #[must_use]
    pub const fn card(suit: Suit, rank: u8) -> Option<Self> {
        match PlayingCard::new(suit, rank) {
            Some(card) => Some(Self::Card(card)),
            None => None,
        }
    }

    /// Converts a raw integer id.
    ///
    /// Back and slot sentinels are recognised first; the rest of the
    /// `suit == 4` block is treated as a joker. Values outside `0..65`
    /// are not card ids.
    ///
    /// ```
    /// use pysol_cardset::{CardId, Suit};
    ///
    /// assert_eq!(CardId::from_raw(16), CardId::card(Suit::Diamonds, 4));
    /// assert_eq!(CardId::from_raw(54), Some(CardId::Back));
    /// assert_eq!(CardId::from_raw(60), Some(CardId::Joker(60)));
    /// assert_eq!(CardId::from_raw(-1), None);
    /// ```
    #[must_use]
    pub fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            CARD_BACK => Some(Self::Back),
            CARD_SLOT => Some(Self::Slot),
            SMALL_JOKER..JOKER_END => Some(Self::Joker(raw)),
            0..SMALL_JOKER => {
                let raw = u8::try_from(raw).ok()?;
                let suit = Suit::from_index(raw / RANKS_PER_SUIT)?;
                Self::card(suit, raw % RANKS_PER_SUIT + 1)
            }
            _ => None,
        }
    }

    /// Returns the raw integer id.
    #[must_use]
    pub fn to_raw(self) -> i32 {
        match self {
            Self::Card(card) => {
                i32::from(card.suit.index() * RANKS_PER_SUIT + card.rank) - 1
            }
            Self::Joker(raw) => raw,
            Self::Back => CARD_BACK,
            Self::Slot => CARD_SLOT,
        }
    }

    /// Returns `true` for the two sentinel ids (back and slot).
    #[must_use]
    pub const fn is_sentinel(self) -> bool {
        matches!(self, Self::Back | Self::Slot)
    }
}

impl core::fmt::Display for CardId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Card(card) => write!(f, "{:02}{}", card.rank, card.suit.as_char()),
            Self::Joker(raw) => write!(f, "joker({raw})"),
            Self::Back => f.write_str("back"),
            Self::Slot => f.write_str("slot"),
        }
    }
}
