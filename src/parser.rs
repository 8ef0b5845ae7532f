//! Parser for PySol cardset `config.txt` files.
//!
//! The format is positional: each of the first six lines has its own
//! grammar.
//!
//! ```text
//! PySol solitaire cardset;<version>[;<ext>;<type>;<cards>...]
//! <ident>;<name>
//! <width> <height> <delta>
//! <offsets, ignored>
//! <default back>
//! <back>;<back>;...
//! ```
//!
//! Version 3 and later headers carry the image extension, deck type and
//! card count. Older headers imply a 52-card French deck but declare no
//! extension, which this crate cannot resolve images without.

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use std::path::{Path, PathBuf};

use crate::descriptor::{CardSize, CardsetDescriptor, DeckType, DescriptorParts};
use crate::error::ParseError;

/// Name of the config file inside a cardset directory.
pub const CONFIG_FILENAME: &str = "config.txt";

/// Literal that must open the header line.
pub const MAGIC: &str = "PySol solitaire cardset";

/// Extension assumed when a version 3+ header leaves it blank.
pub const DEFAULT_EXTENSION: &str = ".gif";

/// Minimum number of lines in a config file.
const MIN_LINES: usize = 6;

/// First format version whose header carries extension, type and count.
const EXTENDED_HEADER_VERSION: i32 = 3;

/// Fields read from the header line.
#[derive(Debug)]
struct Header {
    version: i32,
    extension: Option<String>,
    deck_type: i32,
    card_count: i32,
}

/// Parses `<root>/<subdir>/config.txt`.
///
/// On success the descriptor's base path is `<root>/<subdir>`.
///
/// # Errors
///
/// Returns [`ParseError::MissingFile`] if the file cannot be read or is
/// empty, and the first validation failure otherwise. Bytes that are not
/// valid UTF-8 (older cardsets use Latin-1 names) are replaced rather than
/// rejected.
pub fn parse(root: &Path, subdir: &str) -> Result<CardsetDescriptor, ParseError> {
    let base_path = root.join(subdir);
    let bytes =
        std::fs::read(base_path.join(CONFIG_FILENAME)).map_err(|_| ParseError::MissingFile)?;
    parse_str(&String::from_utf8_lossy(&bytes), base_path)
}

/// Parses config text for the cardset located at `base_path`.
///
/// # Errors
///
/// Returns the first validation failure found, checking lines in order.
pub fn parse_str(text: &str, base_path: PathBuf) -> Result<CardsetDescriptor, ParseError> {
    if text.is_empty() {
        return Err(ParseError::MissingFile);
    }
    let lines: Vec<&str> = text.split('\n').map(str::trim).collect();
    if lines.len() < MIN_LINES {
        return Err(ParseError::TooFewLines);
    }

    let header = parse_header(lines[0])?;
    if DeckType::from_code(header.deck_type) != DeckType::French
        || Some(header.card_count) != DeckType::French.expected_cards()
    {
        return Err(ParseError::UnsupportedDeckType);
    }
    let image_extension = header.extension.ok_or(ParseError::MissingExtension)?;

    let name = parse_name(lines[1])?;
    let (card_size, card_delta) = parse_geometry(lines[2])?;
    let backs = parse_backs(lines[5])?;

    Ok(CardsetDescriptor::from_parts(DescriptorParts {
        name,
        base_path,
        image_extension,
        format_version: header.version,
        card_count: header.card_count,
        card_size,
        card_delta,
        backs,
        default_back: lines[4].to_string(),
    }))
}

fn parse_header(line: &str) -> Result<Header, ParseError> {
    let fields: Vec<&str> = line.split(';').collect();
    if fields[0].trim() != MAGIC {
        return Err(ParseError::BadMagic);
    }
    let version = fields
        .get(1)
        .and_then(|field| parse_int(field.trim()))
        .ok_or(ParseError::BadVersion)?;

    if version < EXTENDED_HEADER_VERSION {
        return Ok(Header {
            version,
            extension: None,
            deck_type: DeckType::French.code(),
            card_count: 52,
        });
    }

    if fields.len() < 5 {
        return Err(ParseError::BadHeaderField);
    }
    let extension = match fields[2].trim() {
        "" => DEFAULT_EXTENSION,
        ext => ext,
    };
    let deck_type = parse_int(fields[3].trim()).ok_or(ParseError::BadHeaderField)?;
    let card_count = parse_int(fields[4].trim()).ok_or(ParseError::BadHeaderField)?;

    Ok(Header {
        version,
        extension: Some(extension.to_string()),
        deck_type,
        card_count,
    })
}

fn parse_name(line: &str) -> Result<String, ParseError> {
    match line.split(';').nth(1).map(str::trim) {
        Some(name) if !name.is_empty() => Ok(name.to_string()),
        _ => Err(ParseError::MissingName),
    }
}

fn parse_geometry(line: &str) -> Result<(CardSize, i32), ParseError> {
    let fields: Vec<&str> = line.split(' ').collect();
    let &[width, height, delta] = fields.as_slice() else {
        return Err(ParseError::BadGeometry);
    };
    let parse = |field: &str| parse_int(field.trim()).ok_or(ParseError::BadGeometry);

    Ok((CardSize::new(parse(width)?, parse(height)?), parse(delta)?))
}

/// Splits the backs line. Empty fields are kept so that positions match
/// the file; only a blank line has no backs at all.
fn parse_backs(line: &str) -> Result<Vec<String>, ParseError> {
    if line.is_empty() {
        return Err(ParseError::NoBacks);
    }
    Ok(line
        .split(';')
        .map(|back| back.trim().to_string())
        .collect())
}

/// Parses a leading base-10 integer.
///
/// Accepts an optional sign followed by at least one digit; anything after
/// the digits is ignored. Returns `None` when no digit is consumed or the
/// value overflows `i32`.
fn parse_int(field: &str) -> Option<i32> {
    let unsigned = field.strip_prefix(['+', '-']).unwrap_or(field);
    let digits = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    if digits == 0 {
        return None;
    }
    let sign_len = field.len() - unsigned.len();
    field[..sign_len + digits].parse().ok()
}
