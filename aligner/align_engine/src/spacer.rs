//! Spacer text generation.
//!
//! Maps a padding width to literal spacer text. Two forms:
//!
//! - **Plain**: the fill character repeated `width` times. Used by the enum
//!   rule, which aligns by raw spaces.
//! - **Delimited**: the fill wrapped in comment markers (`/*  */`), so the
//!   padding survives in source form without altering semantics. A second
//!   pass over delimited output sees a comment token, not semantic
//!   whitespace; alignment state is therefore detected by column position,
//!   never by the presence of a marker.

/// Opening marker for delimited padding.
pub const COMMENT_OPEN: &str = "/*";

/// Closing marker for delimited padding.
pub const COMMENT_CLOSE: &str = "*/";

/// Generate spacer text of the given width.
///
/// `width == 0` yields the minimal `/**/` delimiter when `delimited`, and
/// empty text otherwise. The `char` fill parameter makes multi-character
/// fills unrepresentable; host-supplied fill strings are validated in
/// [`crate::config`].
pub fn generate(width: usize, fill: char, delimited: bool) -> String {
    if delimited {
        let mut text =
            String::with_capacity(COMMENT_OPEN.len() + width * fill.len_utf8() + COMMENT_CLOSE.len());
        text.push_str(COMMENT_OPEN);
        for _ in 0..width {
            text.push(fill);
        }
        text.push_str(COMMENT_CLOSE);
        text
    } else {
        std::iter::repeat(fill).take(width).collect()
    }
}
