//! HTML escaping of raw Markdown input.
//!
//! This is the first pipeline stage: every HTML metacharacter in the
//! source is replaced by its entity before any trusted markup is added,
//! so user text can never produce a live tag.
//!
//! Fast-path optimized: scans for the first escapable character,
//! then bulk-copies segments between escapes.

use memchr::{memchr2, memchr3};

/// Lookup table for escapable characters.
/// Index by byte value, true if needs escaping.
const ESCAPE_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    table[b'<' as usize] = true;
    table[b'>' as usize] = true;
    table[b'&' as usize] = true;
    table[b'"' as usize] = true;
    table[b'\'' as usize] = true;
    table
};

/// Entity for an escapable byte (HTML5 names).
#[inline]
fn entity(b: u8) -> &'static str {
    match b {
        b'<' => "&lt;",
        b'>' => "&gt;",
        b'&' => "&amp;",
        b'"' => "&quot;",
        b'\'' => "&apos;",
        _ => unreachable!("byte is not in the escape table"),
    }
}

/// Escape `input` into an output buffer.
///
/// Escapes `<`, `>`, `&`, `"` and `'`. Everything else, whitespace
/// included, is copied through untouched.
///
/// # Example
/// ```
/// use tidemark::escape::escape_into;
///
/// let mut out = String::new();
/// escape_into(&mut out, "<script>");
/// assert_eq!(out, "&lt;script&gt;");
/// ```
pub fn escape_into(out: &mut String, input: &str) {
    let bytes = input.as_bytes();

    let mut pos = match first_escape(bytes) {
        Some(p) => p,
        None => {
            out.push_str(input);
            return;
        }
    };

    out.push_str(&input[..pos]);

    while pos < bytes.len() {
        let scan_start = pos;
        while pos < bytes.len() && !ESCAPE_TABLE[bytes[pos] as usize] {
            pos += 1;
        }

        // Escapable bytes are ASCII, so every cut lands on a char boundary.
        if pos > scan_start {
            out.push_str(&input[scan_start..pos]);
        }

        if pos < bytes.len() {
            out.push_str(entity(bytes[pos]));
            pos += 1;
        }
    }
}

/// Escape and return as a new String.
///
/// Prefer `escape_into` to reuse buffers.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + input.len() / 8);
    escape_into(&mut out, input);
    out
}

/// Check if a string contains anything that would be escaped.
#[inline]
pub fn needs_escape(input: &str) -> bool {
    input.bytes().any(|b| ESCAPE_TABLE[b as usize])
}

#[inline]
fn first_escape(input: &[u8]) -> Option<usize> {
    let a = memchr3(b'<', b'>', b'&', input);
    let b = memchr2(b'"', b'\'', input);
    min_opt(a, b)
}

#[inline]
fn min_opt(a: Option<usize>, b: Option<usize>) -> Option<usize> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (Some(a), None) => Some(a),
        (None, Some(b)) => Some(b),
        (None, None) => None,
    }
}
