//! Lists the PySol cardsets found on this machine.
//!
//! Extra search roots are read from `GAMES_CARD_THEME_PATH_PYSOL`. Pass a
//! cardset preference key (for example `pysol:cardset-oxymoron`) to also
//! decode every card of that cardset and report failures. Set `RUST_LOG=debug`
//! to see why directories were rejected.

use std::env;

use pysol_cardset::card::{CARD_SLOT, TOTAL_CARD_IDS};
use pysol_cardset::{
    CardId, CardThemeProvider, DiscoveryOptions, FileImageDecoder, FsDirectoryLister, card_image,
    discover_themes,
};

fn main() {
    env_logger::init();

    let mut options = DiscoveryOptions::default();
    if let Some(search_path) = env::var_os("GAMES_CARD_THEME_PATH_PYSOL") {
        options = options.with_search_path(&search_path);
    }

    let themes = discover_themes(&options, &FsDirectoryLister);
    if themes.is_empty() {
        println!("No cardsets found in {:?}", options.roots);
        return;
    }

    for theme in &themes {
        let info = theme.info();
        let size = theme.card_size();
        println!(
            "{:<40} {:<32} {}x{} {}",
            info.display_name,
            info.pref_name,
            size.width,
            size.height,
            theme.descriptor().image_extension()
        );
    }

    let Some(wanted) = env::args().nth(1) else {
        return;
    };
    let Some(theme) = themes.iter().find(|theme| theme.info().pref_name == wanted) else {
        println!("Unknown cardset {wanted}");
        return;
    };

    let mut missing = 0;
    for raw in 0..=CARD_SLOT {
        let Some(card) = CardId::from_raw(raw) else {
            continue;
        };
        if card_image(theme, card, &FileImageDecoder).is_none() {
            println!("  no image for {card}");
            missing += 1;
        }
    }
    println!("{missing} of {TOTAL_CARD_IDS} card ids have no image");
}
