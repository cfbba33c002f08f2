//! Stateful multi-byte character decoding
//!
//! Incoming text is a raw byte stream: plain ASCII mixed with a small fixed
//! set of multi-byte sequences for accented Latin and Central European
//! letters, plus one pictographic sequence. The decoder is a two-state
//! machine fed one byte at a time; recognized sequences are remapped to
//! extended slots of the built-in [`font`](crate::font) table.
//!
//! Coverage is deliberately limited to the fixed remap table below. Any
//! multi-byte sequence outside it is unrenderable and silently dropped —
//! the decoder resets to idle without surfacing an error, so garbage input
//! degrades to missing characters rather than failing a whole render call.
//!
//! ## Example
//!
//! ```
//! use st7789_watch::decoder::{CharDecoder, DecodeStep};
//!
//! let mut decoder = CharDecoder::new();
//!
//! // Plain ASCII resolves immediately
//! assert_eq!(decoder.advance(b'A'), DecodeStep::Glyph(b'A'));
//!
//! // A two-byte sequence resolves on its continuation byte
//! assert_eq!(decoder.advance(0xC3), DecodeStep::Pending);
//! assert_eq!(decoder.advance(0xA4), DecodeStep::Glyph(0x84)); // a-dieresis
//!
//! // Unrecognized sequences are dropped
//! assert_eq!(decoder.advance(0xC3), DecodeStep::Pending);
//! assert_eq!(decoder.advance(0x80), DecodeStep::Rejected);
//! ```

/// Outcome of feeding one byte to the decoder
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecodeStep {
    /// A character resolved to this glyph slot in the font table
    Glyph(u8),
    /// The byte started a multi-byte sequence; more input is needed
    Pending,
    /// The byte (or the sequence it completed) is not renderable and was dropped
    Rejected,
}

/// Two-state decoder for the multi-byte text encoding
///
/// One instance per output stream. The state is reset on completion of every
/// decode, success or rejection, so a stream of mixed valid and invalid
/// input never wedges the decoder.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CharDecoder {
    /// Initial and terminal state: the next byte starts a new character
    #[default]
    Idle,
    /// A lead byte was consumed; holds it until the continuation byte arrives
    AwaitingContinuation(u8),
}

impl CharDecoder {
    /// Lowest renderable single-byte character
    const FIRST_PRINTABLE: u8 = 0x20;
    /// First value treated as a multi-byte lead byte
    const FIRST_LEAD: u8 = 0x7F;

    /// Create a decoder in the idle state
    pub fn new() -> Self {
        Self::Idle
    }

    /// Feed one input byte and advance the state machine
    ///
    /// Exactly the bytes making up one logical character are consumed per
    /// resolved glyph: one byte for printable ASCII, two for recognized
    /// multi-byte sequences. Malformed input is dropped and the decoder
    /// returns to idle.
    pub fn advance(&mut self, byte: u8) -> DecodeStep {
        match *self {
            Self::Idle => {
                if byte < Self::FIRST_PRINTABLE {
                    DecodeStep::Rejected
                } else if byte < Self::FIRST_LEAD {
                    DecodeStep::Glyph(byte)
                } else {
                    *self = Self::AwaitingContinuation(byte);
                    DecodeStep::Pending
                }
            }
            Self::AwaitingContinuation(lead) => {
                *self = Self::Idle;
                match remap(lead, byte) {
                    Some(slot) => DecodeStep::Glyph(slot),
                    None => DecodeStep::Rejected,
                }
            }
        }
    }

    /// Drop any pending lead byte and return to idle
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }

    /// Whether the decoder is between characters
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}

/// Look up a `(lead, trail)` pair in the remap table
///
/// Returns the extended font slot for recognized sequences, `None` otherwise.
pub fn remap(lead: u8, trail: u8) -> Option<u8> {
    REMAP_TABLE
        .binary_search_by_key(&(lead, trail), |entry| (entry.0, entry.1))
        .ok()
        .map(|i| REMAP_TABLE[i].2)
}

/// Fixed remap table: `(lead byte, trail byte, font slot)`
///
/// Sorted by `(lead, trail)` for binary search. Lead 0xC3 covers Latin-1
/// accents, 0xC4/0xC5 the Central European carons and rings, and the single
/// 0xF0 pair maps the notification pictograph. This set is the complete
/// supported repertoire; extending it requires a glyph in the font table.
#[rustfmt::skip]
static REMAP_TABLE: [(u8, u8, u8); 38] = [
    (0xC3, 0x81, 0xB5), // A acute
    (0xC3, 0x84, 0x8E), // A dieresis
    (0xC3, 0x89, 0x90), // E acute
    (0xC3, 0x8D, 0xD6), // I acute
    (0xC3, 0x93, 0xE0), // O acute
    (0xC3, 0x96, 0x99), // O dieresis
    (0xC3, 0x9A, 0xE9), // U acute
    (0xC3, 0x9C, 0x9A), // U dieresis
    (0xC3, 0x9D, 0xED), // Y acute
    (0xC3, 0x9F, 0xE1), // sharp s
    (0xC3, 0xA1, 0xA0), // a acute
    (0xC3, 0xA4, 0x84), // a dieresis
    (0xC3, 0xA9, 0x82), // e acute
    (0xC3, 0xAD, 0xA1), // i acute
    (0xC3, 0xB3, 0xA2), // o acute
    (0xC3, 0xB6, 0x94), // o dieresis
    (0xC3, 0xBA, 0xE3), // u acute
    (0xC3, 0xBC, 0x81), // u dieresis
    (0xC3, 0xBD, 0xEC), // y acute
    (0xC4, 0x8C, 0x80), // C caron
    (0xC4, 0x8D, 0x87), // c caron
    (0xC4, 0x8E, 0x9D), // D caron
    (0xC4, 0x8F, 0x9B), // d caron
    (0xC4, 0x9A, 0xD2), // E caron
    (0xC4, 0x9B, 0x88), // e caron
    (0xC5, 0x87, 0xA5), // N caron
    (0xC5, 0x88, 0xA4), // n caron
    (0xC5, 0x98, 0x92), // R caron
    (0xC5, 0x99, 0x91), // r caron
    (0xC5, 0xA0, 0xB6), // S caron
    (0xC5, 0xA1, 0x83), // s caron
    (0xC5, 0xA4, 0xD7), // T caron
    (0xC5, 0xA5, 0x8C), // t caron
    (0xC5, 0xAE, 0xEA), // U ring
    (0xC5, 0xAF, 0x96), // u ring
    (0xC5, 0xBD, 0xE2), // Z caron
    (0xC5, 0xBE, 0x93), // z caron
    (0xF0, 0x9F, 0x02), // notification pictograph
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_printable_ascii_resolves_to_itself() {
        for byte in 0x20..0x7F_u8 {
            let mut decoder = CharDecoder::new();
            assert_eq!(decoder.advance(byte), DecodeStep::Glyph(byte));
            assert!(decoder.is_idle());
        }
    }

    #[test]
    fn test_control_bytes_rejected_from_idle() {
        for byte in 0x00..0x20_u8 {
            let mut decoder = CharDecoder::new();
            assert_eq!(decoder.advance(byte), DecodeStep::Rejected);
            assert!(decoder.is_idle());
        }
    }

    #[test]
    fn test_every_remap_pair_resolves() {
        for &(lead, trail, slot) in &REMAP_TABLE {
            let mut decoder = CharDecoder::new();
            assert_eq!(decoder.advance(lead), DecodeStep::Pending);
            assert_eq!(decoder.advance(trail), DecodeStep::Glyph(slot));
            assert!(decoder.is_idle());
        }
    }

    #[test]
    fn test_table_is_sorted_for_binary_search() {
        let mut previous = (0u8, 0u8);
        for &(lead, trail, _) in &REMAP_TABLE {
            assert!((lead, trail) > previous);
            previous = (lead, trail);
        }
    }

    #[test]
    fn test_unrecognized_continuation_rejected() {
        let mut decoder = CharDecoder::new();
        assert_eq!(decoder.advance(0xC3), DecodeStep::Pending);
        assert_eq!(decoder.advance(0x80), DecodeStep::Rejected);
        assert!(decoder.is_idle());
    }

    #[test]
    fn test_unknown_lead_consumes_continuation() {
        // Lead bytes outside the table still swallow exactly one
        // continuation byte before resetting
        let mut decoder = CharDecoder::new();
        assert_eq!(decoder.advance(0xE2), DecodeStep::Pending);
        assert_eq!(decoder.advance(b'A'), DecodeStep::Rejected);
        assert_eq!(decoder.advance(b'A'), DecodeStep::Glyph(b'A'));
    }

    #[test]
    fn test_delete_byte_acts_as_lead() {
        // 0x7F is a lead byte, not a printable character
        let mut decoder = CharDecoder::new();
        assert_eq!(decoder.advance(0x7F), DecodeStep::Pending);
        assert_eq!(decoder.advance(b'x'), DecodeStep::Rejected);
    }

    #[test]
    fn test_pictograph_sequence() {
        let mut decoder = CharDecoder::new();
        assert_eq!(decoder.advance(0xF0), DecodeStep::Pending);
        assert_eq!(decoder.advance(0x9F), DecodeStep::Glyph(0x02));
    }

    #[test]
    fn test_four_byte_sequence_desyncs_leniently() {
        // A full 4-byte pictograph sequence: the first two bytes resolve,
        // the trailing two form a second, rejected pair. Preserved behavior.
        let mut decoder = CharDecoder::new();
        assert_eq!(decoder.advance(0xF0), DecodeStep::Pending);
        assert_eq!(decoder.advance(0x9F), DecodeStep::Glyph(0x02));
        assert_eq!(decoder.advance(0x98), DecodeStep::Pending);
        assert_eq!(decoder.advance(0x80), DecodeStep::Rejected);
        assert!(decoder.is_idle());
    }

    #[test]
    fn test_reset_drops_pending_lead() {
        let mut decoder = CharDecoder::new();
        assert_eq!(decoder.advance(0xC3), DecodeStep::Pending);
        decoder.reset();
        assert_eq!(decoder.advance(b'a'), DecodeStep::Glyph(b'a'));
    }
}
