//! Card id resolution tests.

use std::path::{Path, PathBuf};

use proptest::prelude::*;
use pysol_cardset::card::{CARD_BACK, CARD_SLOT, LARGE_JOKER, SMALL_JOKER};
use pysol_cardset::resolver::SLOT_IMAGE;
use pysol_cardset::{AssetResolver, CardId, CardsetDescriptor, PlayingCard, Suit};

const BASE: &str = "/themes/cardset-test";

fn descriptor(extension: &str) -> CardsetDescriptor {
    let text = format!(
        "PySol solitaire cardset;4;{extension};1;52\n\
         cardset-test;Test\n\
         71 96 2\n\
         18 18 8 8\n\
         back02{extension}\n\
         back01{extension};back02{extension}\n"
    );
    CardsetDescriptor::from_config_text(&text, BASE).expect("config should parse")
}

fn base_join(name: &str) -> PathBuf {
    Path::new(BASE).join(name)
}

#[test]
fn raw_ids_follow_suit_major_encoding() {
    assert_eq!(CardId::from_raw(0), CardId::card(Suit::Clubs, 1));
    assert_eq!(CardId::from_raw(16), CardId::card(Suit::Diamonds, 4));
    assert_eq!(CardId::from_raw(51), CardId::card(Suit::Spades, 13));
    assert_eq!(CardId::from_raw(CARD_BACK), Some(CardId::Back));
    assert_eq!(CardId::from_raw(CARD_SLOT), Some(CardId::Slot));
    assert_eq!(CardId::from_raw(SMALL_JOKER), Some(CardId::Joker(SMALL_JOKER)));
    assert_eq!(CardId::from_raw(LARGE_JOKER), Some(CardId::Joker(LARGE_JOKER)));
    assert_eq!(CardId::from_raw(64), Some(CardId::Joker(64)));
    assert_eq!(CardId::from_raw(65), None);
    assert_eq!(CardId::from_raw(-1), None);
}

#[test]
fn card_constructor_checks_rank() {
    assert_eq!(CardId::card(Suit::Hearts, 0), None);
    assert_eq!(CardId::card(Suit::Hearts, 14), None);
    assert_eq!(PlayingCard::new(Suit::Clubs, 0), None);
    assert_eq!(PlayingCard::new(Suit::Clubs, 200), None);

    let queen = CardId::card(Suit::Hearts, 12).expect("valid rank");
    let CardId::Card(card) = queen else {
        panic!("expected an ordinary card");
    };
    assert_eq!((card.suit(), card.rank()), (Suit::Hearts, 12));
    assert_eq!(queen.to_raw(), 2 * 13 + 11);
    assert_eq!(queen.to_string(), "12h");
}

#[test]
fn ordinary_card_uses_declared_extension() {
    let descriptor = descriptor(".png");
    let resolver = AssetResolver::new(&descriptor);

    assert_eq!(resolver.resolve_raw(16), Some(base_join("04d.png")));
    assert_eq!(resolver.resolve_raw(0), Some(base_join("01c.png")));
    assert_eq!(resolver.resolve_raw(51), Some(base_join("13s.png")));
}

#[test]
fn back_uses_default_back() {
    let descriptor = descriptor(".png");
    let resolver = AssetResolver::new(&descriptor);

    assert_eq!(resolver.resolve(CardId::Back), Some(base_join("back02.png")));
}

#[test]
fn slot_is_always_a_gif() {
    for extension in [".gif", ".png", ".jpg"] {
        let descriptor = descriptor(extension);
        let resolver = AssetResolver::new(&descriptor);
        assert_eq!(resolver.resolve(CardId::Slot), Some(base_join(SLOT_IMAGE)));
        assert_eq!(resolver.file_name(CardId::Slot).as_deref(), Some("bottom01.gif"));
    }
}

#[test]
fn jokers_have_no_asset() {
    let descriptor = descriptor(".png");
    let resolver = AssetResolver::new(&descriptor);

    for raw in (SMALL_JOKER..65).filter(|raw| *raw != CARD_BACK && *raw != CARD_SLOT) {
        assert_eq!(resolver.resolve_raw(raw), None, "raw id {raw}");
    }
}

proptest! {
    #[test]
    fn ordinary_cards_resolve_deterministically(raw in 0..52i32) {
        let descriptor = descriptor(".png");
        let resolver = AssetResolver::new(&descriptor);

        let first = resolver.resolve_raw(raw);
        prop_assert_eq!(&first, &resolver.resolve_raw(raw));

        let card = CardId::from_raw(raw).expect("ordinary id");
        prop_assert_eq!(card.to_raw(), raw);
        let expected = format!("{:02}{}.png", raw % 13 + 1, Suit::ALL[(raw / 13) as usize].as_char());
        prop_assert_eq!(first, Some(base_join(&expected)));
    }
}
