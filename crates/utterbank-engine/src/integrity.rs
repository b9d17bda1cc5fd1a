//! Text integrity checks applied before any write.
//!
//! Emoji glyphs break downstream tokenizers, so text carrying them is
//! rejected outright rather than stored and cleaned up later.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Error, Result};

// Extended_Pictographic covers emoji proper (including unqualified
// forms like a bare U+2764 heart); Regional_Indicator catches flag
// pairs, whose halves are not pictographic on their own.
static EMOJI: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\p{Extended_Pictographic}\p{Regional_Indicator}]")
        .expect("emoji character class must compile")
});

/// Whether `text` contains any emoji glyph.
pub fn contains_emoji(text: &str) -> bool {
    EMOJI.is_match(text)
}

/// Reject text that carries emoji glyphs.
pub(crate) fn ensure_clean_text(text: &str) -> Result<()> {
    if contains_emoji(text) {
        return Err(Error::Validation(format!(
            "example text contains emoji: {:?}",
            text
        )));
    }
    Ok(())
}
