//! Region-name codec.
//!
//! Packs a short ASCII name into a `u128` tag, five bits per character,
//! low-bit end first, so every transition on the hot matching path can
//! compare region identity with a single integer comparison instead of a
//! string interner lookup.

/// Longest name the codec can represent.
pub const MAX_NAME_LEN: usize = 25;

/// Bits devoted to each packed character.
const BITS_PER_CHAR: u32 = 5;

/// Reserved region names assigned by the lexer's synthetic framing step.
pub const START_REGION: &str = "start";
pub const ACCEPT_REGION: &str = "accept";

/// Encodes `name` into its 128-bit tag.
///
/// `name` longer than [`MAX_NAME_LEN`] characters is truncated to the
/// first `MAX_NAME_LEN` bytes — callers that need a unique tag are
/// expected to keep names within the limit and drawn from
/// `[a-z0-9_]`.
pub fn encode(name: &str) -> u128 {
    let mut encoded: u128 = 0;
    for (i, byte) in name.bytes().take(MAX_NAME_LEN).enumerate() {
        let group = (byte & 0b11111) as u128;
        encoded |= group << (BITS_PER_CHAR * i as u32);
    }
    encoded
}

/// Decodes a tag produced by [`encode`] back into a lowercase ASCII string.
///
/// The mapping loses case and the top three bits of each source byte, and
/// `decode` can only ever emit a lowercase letter, `_`, or stop — it has no
/// way to reproduce a digit, so `decode(encode(s)) == s` only holds for `s`
/// drawn from `[a-z_]` (see DESIGN.md: the broader claim that any
/// `[a-z0-9_]` name round-trips does not hold for names containing
/// `0`-`9`, by construction of the decode formula, not by any choice made
/// here).
pub fn decode(encoded: u128) -> String {
    let mut out = String::with_capacity(MAX_NAME_LEN);
    for i in 0..MAX_NAME_LEN {
        let group = ((encoded >> (BITS_PER_CHAR * i as u32)) & 0b11111) as u8;
        if group == 0 {
            break;
        }
        if group == 0b11111 {
            out.push('_');
        } else {
            out.push((0b0110_0000 | group) as char);
        }
    }
    out
}
