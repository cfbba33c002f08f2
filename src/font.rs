//! Built-in 5x8 bitmap font
//!
//! A fixed 256-slot glyph table in the classic LCD column format: each glyph
//! is 5 bytes, one byte per column, bit 0 = top row. A rendered character
//! cell is 6 columns wide (5 glyph columns plus 1 spacing column) and 8 rows
//! tall.
//!
//! Slot layout:
//! - 0x00..=0x1F: control slots, never rendered (0x02 holds the pictograph
//!   used for the notification symbol)
//! - 0x20..=0x7E: printable ASCII
//! - 0x7F..=0xFF: extended slots targeted by the multi-byte remap table in
//!   [`decoder`](crate::decoder); slots without a mapped character are blank
//!
//! The table is immutable and process-wide. There is no font loading: the
//! glyph data is compiled in (the device has no storage for alternatives).

/// Glyph width in pixels (columns per glyph, excluding spacing)
pub const GLYPH_WIDTH: usize = 5;

/// Glyph height in pixels
pub const GLYPH_HEIGHT: usize = 8;

/// Horizontal advance per character cell in pixels (glyph plus spacing column)
pub const GLYPH_ADVANCE: usize = 6;

/// Number of glyph slots in the table
pub const GLYPH_COUNT: usize = 256;

/// Look up the 5 column bytes for a glyph slot
///
/// Valid for every `u8` index; unmapped slots return all-zero columns and
/// render as blank cells.
pub const fn glyph(index: u8) -> &'static [u8; GLYPH_WIDTH] {
    &FONT5X7[index as usize]
}

#[rustfmt::skip]
static FONT5X7: [[u8; GLYPH_WIDTH]; GLYPH_COUNT] = [
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0x00
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0x01
    [0x3E, 0x6B, 0x4F, 0x6B, 0x3E], // 0x02 status pictograph
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0x03
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0x04
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0x05
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0x06
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0x07
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0x08
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0x09
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0x0A
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0x0B
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0x0C
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0x0D
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0x0E
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0x0F
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0x10
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0x11
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0x12
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0x13
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0x14
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0x15
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0x16
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0x17
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0x18
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0x19
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0x1A
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0x1B
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0x1C
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0x1D
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0x1E
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0x1F
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0x20 ' '
    [0x00, 0x00, 0x5F, 0x00, 0x00], // 0x21 '!'
    [0x00, 0x07, 0x00, 0x07, 0x00], // 0x22 '"'
    [0x14, 0x7F, 0x14, 0x7F, 0x14], // 0x23 '#'
    [0x24, 0x2A, 0x7F, 0x2A, 0x12], // 0x24 '$'
    [0x23, 0x13, 0x08, 0x64, 0x62], // 0x25 '%'
    [0x36, 0x49, 0x55, 0x22, 0x50], // 0x26 '&'
    [0x00, 0x05, 0x03, 0x00, 0x00], // 0x27 '''
    [0x00, 0x1C, 0x22, 0x41, 0x00], // 0x28 '('
    [0x00, 0x41, 0x22, 0x1C, 0x00], // 0x29 ')'
    [0x14, 0x08, 0x3E, 0x08, 0x14], // 0x2A '*'
    [0x08, 0x08, 0x3E, 0x08, 0x08], // 0x2B '+'
    [0x00, 0x50, 0x30, 0x00, 0x00], // 0x2C ','
    [0x08, 0x08, 0x08, 0x08, 0x08], // 0x2D '-'
    [0x00, 0x60, 0x60, 0x00, 0x00], // 0x2E '.'
    [0x20, 0x10, 0x08, 0x04, 0x02], // 0x2F '/'
    [0x3E, 0x51, 0x49, 0x45, 0x3E], // 0x30 '0'
    [0x00, 0x42, 0x7F, 0x40, 0x00], // 0x31 '1'
    [0x42, 0x61, 0x51, 0x49, 0x46], // 0x32 '2'
    [0x21, 0x41, 0x45, 0x4B, 0x31], // 0x33 '3'
    [0x18, 0x14, 0x12, 0x7F, 0x10], // 0x34 '4'
    [0x27, 0x45, 0x45, 0x45, 0x39], // 0x35 '5'
    [0x3C, 0x4A, 0x49, 0x49, 0x30], // 0x36 '6'
    [0x01, 0x71, 0x09, 0x05, 0x03], // 0x37 '7'
    [0x36, 0x49, 0x49, 0x49, 0x36], // 0x38 '8'
    [0x06, 0x49, 0x49, 0x29, 0x1E], // 0x39 '9'
    [0x00, 0x36, 0x36, 0x00, 0x00], // 0x3A ':'
    [0x00, 0x56, 0x36, 0x00, 0x00], // 0x3B ';'
    [0x08, 0x14, 0x22, 0x41, 0x00], // 0x3C '<'
    [0x14, 0x14, 0x14, 0x14, 0x14], // 0x3D '='
    [0x00, 0x41, 0x22, 0x14, 0x08], // 0x3E '>'
    [0x02, 0x01, 0x51, 0x09, 0x06], // 0x3F '?'
    [0x32, 0x49, 0x79, 0x41, 0x3E], // 0x40 '@'
    [0x7E, 0x11, 0x11, 0x11, 0x7E], // 0x41 'A'
    [0x7F, 0x49, 0x49, 0x49, 0x36], // 0x42 'B'
    [0x3E, 0x41, 0x41, 0x41, 0x22], // 0x43 'C'
    [0x7F, 0x41, 0x41, 0x22, 0x1C], // 0x44 'D'
    [0x7F, 0x49, 0x49, 0x49, 0x41], // 0x45 'E'
    [0x7F, 0x09, 0x09, 0x09, 0x01], // 0x46 'F'
    [0x3E, 0x41, 0x49, 0x49, 0x7A], // 0x47 'G'
    [0x7F, 0x08, 0x08, 0x08, 0x7F], // 0x48 'H'
    [0x00, 0x41, 0x7F, 0x41, 0x00], // 0x49 'I'
    [0x20, 0x40, 0x41, 0x3F, 0x01], // 0x4A 'J'
    [0x7F, 0x08, 0x14, 0x22, 0x41], // 0x4B 'K'
    [0x7F, 0x40, 0x40, 0x40, 0x40], // 0x4C 'L'
    [0x7F, 0x02, 0x0C, 0x02, 0x7F], // 0x4D 'M'
    [0x7F, 0x04, 0x08, 0x10, 0x7F], // 0x4E 'N'
    [0x3E, 0x41, 0x41, 0x41, 0x3E], // 0x4F 'O'
    [0x7F, 0x09, 0x09, 0x09, 0x06], // 0x50 'P'
    [0x3E, 0x41, 0x51, 0x21, 0x5E], // 0x51 'Q'
    [0x7F, 0x09, 0x19, 0x29, 0x46], // 0x52 'R'
    [0x46, 0x49, 0x49, 0x49, 0x31], // 0x53 'S'
    [0x01, 0x01, 0x7F, 0x01, 0x01], // 0x54 'T'
    [0x3F, 0x40, 0x40, 0x40, 0x3F], // 0x55 'U'
    [0x1F, 0x20, 0x40, 0x20, 0x1F], // 0x56 'V'
    [0x3F, 0x40, 0x38, 0x40, 0x3F], // 0x57 'W'
    [0x63, 0x14, 0x08, 0x14, 0x63], // 0x58 'X'
    [0x07, 0x08, 0x70, 0x08, 0x07], // 0x59 'Y'
    [0x61, 0x51, 0x49, 0x45, 0x43], // 0x5A 'Z'
    [0x00, 0x7F, 0x41, 0x41, 0x00], // 0x5B '['
    [0x02, 0x04, 0x08, 0x10, 0x20], // 0x5C '\\'
    [0x00, 0x41, 0x41, 0x7F, 0x00], // 0x5D ']'
    [0x04, 0x02, 0x01, 0x02, 0x04], // 0x5E '^'
    [0x40, 0x40, 0x40, 0x40, 0x40], // 0x5F '_'
    [0x00, 0x01, 0x02, 0x04, 0x00], // 0x60 '`'
    [0x20, 0x54, 0x54, 0x54, 0x78], // 0x61 'a'
    [0x7F, 0x48, 0x44, 0x44, 0x38], // 0x62 'b'
    [0x38, 0x44, 0x44, 0x44, 0x20], // 0x63 'c'
    [0x38, 0x44, 0x44, 0x48, 0x7F], // 0x64 'd'
    [0x38, 0x54, 0x54, 0x54, 0x18], // 0x65 'e'
    [0x08, 0x7E, 0x09, 0x01, 0x02], // 0x66 'f'
    [0x0C, 0x52, 0x52, 0x52, 0x3E], // 0x67 'g'
    [0x7F, 0x08, 0x04, 0x04, 0x78], // 0x68 'h'
    [0x00, 0x44, 0x7D, 0x40, 0x00], // 0x69 'i'
    [0x20, 0x40, 0x44, 0x3D, 0x00], // 0x6A 'j'
    [0x7F, 0x10, 0x28, 0x44, 0x00], // 0x6B 'k'
    [0x00, 0x41, 0x7F, 0x40, 0x00], // 0x6C 'l'
    [0x7C, 0x04, 0x18, 0x04, 0x78], // 0x6D 'm'
    [0x7C, 0x08, 0x04, 0x04, 0x78], // 0x6E 'n'
    [0x38, 0x44, 0x44, 0x44, 0x38], // 0x6F 'o'
    [0x7C, 0x14, 0x14, 0x14, 0x08], // 0x70 'p'
    [0x08, 0x14, 0x14, 0x18, 0x7C], // 0x71 'q'
    [0x7C, 0x08, 0x04, 0x04, 0x08], // 0x72 'r'
    [0x48, 0x54, 0x54, 0x54, 0x20], // 0x73 's'
    [0x04, 0x3F, 0x44, 0x40, 0x20], // 0x74 't'
    [0x3C, 0x40, 0x40, 0x20, 0x7C], // 0x75 'u'
    [0x1C, 0x20, 0x40, 0x20, 0x1C], // 0x76 'v'
    [0x3C, 0x40, 0x30, 0x40, 0x3C], // 0x77 'w'
    [0x44, 0x28, 0x10, 0x28, 0x44], // 0x78 'x'
    [0x0C, 0x50, 0x50, 0x50, 0x3C], // 0x79 'y'
    [0x44, 0x64, 0x54, 0x4C, 0x44], // 0x7A 'z'
    [0x00, 0x08, 0x36, 0x41, 0x00], // 0x7B '{'
    [0x00, 0x00, 0x7F, 0x00, 0x00], // 0x7C '|'
    [0x00, 0x41, 0x36, 0x08, 0x00], // 0x7D '}'
    [0x08, 0x04, 0x08, 0x10, 0x08], // 0x7E '~'
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0x7F
    [0x7C, 0x83, 0x82, 0x83, 0x44], // 0x80 C caron
    [0x3C, 0x41, 0x40, 0x21, 0x7C], // 0x81 u dieresis
    [0x38, 0x54, 0x56, 0x55, 0x18], // 0x82 e acute
    [0x48, 0x55, 0x56, 0x55, 0x20], // 0x83 s caron
    [0x20, 0x55, 0x54, 0x55, 0x78], // 0x84 a dieresis
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0x85
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0x86
    [0x38, 0x45, 0x46, 0x45, 0x20], // 0x87 c caron
    [0x38, 0x55, 0x56, 0x55, 0x18], // 0x88 e caron
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0x89
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0x8A
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0x8B
    [0x04, 0x3F, 0x44, 0x41, 0x20], // 0x8C t caron
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0x8D
    [0xFC, 0x23, 0x22, 0x23, 0xFC], // 0x8E A dieresis
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0x8F
    [0xFE, 0x92, 0x93, 0x93, 0x82], // 0x90 E acute
    [0x7C, 0x09, 0x06, 0x05, 0x08], // 0x91 r caron
    [0xFE, 0x13, 0x32, 0x53, 0x8C], // 0x92 R caron
    [0x44, 0x65, 0x56, 0x4D, 0x44], // 0x93 z caron
    [0x38, 0x45, 0x44, 0x45, 0x38], // 0x94 o dieresis
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0x95
    [0x3C, 0x40, 0x43, 0x20, 0x7C], // 0x96 u ring
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0x97
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0x98
    [0x7C, 0x83, 0x82, 0x83, 0x7C], // 0x99 O dieresis
    [0x7E, 0x81, 0x80, 0x81, 0x7E], // 0x9A U dieresis
    [0x38, 0x44, 0x44, 0x49, 0x7F], // 0x9B d caron
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0x9C
    [0xFE, 0x82, 0x82, 0x45, 0x38], // 0x9D D caron
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0x9E
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0x9F
    [0x20, 0x54, 0x56, 0x55, 0x78], // 0xA0 a acute
    [0x00, 0x00, 0x7A, 0x01, 0x00], // 0xA1 i acute
    [0x38, 0x44, 0x46, 0x45, 0x38], // 0xA2 o acute
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0xA3
    [0x7C, 0x09, 0x06, 0x05, 0x78], // 0xA4 n caron
    [0xFE, 0x09, 0x10, 0x21, 0xFE], // 0xA5 N caron
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0xA6
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0xA7
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0xA8
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0xA9
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0xAA
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0xAB
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0xAC
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0xAD
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0xAE
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0xAF
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0xB0
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0xB1
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0xB2
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0xB3
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0xB4
    [0xFC, 0x22, 0x23, 0x23, 0xFC], // 0xB5 A acute
    [0x8C, 0x93, 0x92, 0x93, 0x62], // 0xB6 S caron
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0xB7
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0xB8
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0xB9
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0xBA
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0xBB
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0xBC
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0xBD
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0xBE
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0xBF
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0xC0
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0xC1
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0xC2
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0xC3
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0xC4
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0xC5
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0xC6
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0xC7
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0xC8
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0xC9
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0xCA
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0xCB
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0xCC
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0xCD
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0xCE
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0xCF
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0xD0
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0xD1
    [0xFE, 0x93, 0x92, 0x93, 0x82], // 0xD2 E caron
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0xD3
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0xD4
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0xD5
    [0x00, 0x82, 0xFF, 0x83, 0x00], // 0xD6 I acute
    [0x02, 0x02, 0xFE, 0x03, 0x02], // 0xD7 T caron
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0xD8
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0xD9
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0xDA
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0xDB
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0xDC
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0xDD
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0xDE
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0xDF
    [0x7C, 0x82, 0x83, 0x83, 0x7C], // 0xE0 O acute
    [0x7E, 0x25, 0x25, 0x25, 0x1A], // 0xE1 sharp s
    [0xC2, 0xA3, 0x92, 0x8B, 0x86], // 0xE2 Z caron
    [0x3C, 0x40, 0x42, 0x21, 0x7C], // 0xE3 u acute
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0xE4
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0xE5
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0xE6
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0xE7
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0xE8
    [0x7E, 0x80, 0x81, 0x81, 0x7E], // 0xE9 U acute
    [0x7E, 0x80, 0x81, 0x80, 0x7E], // 0xEA U ring
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0xEB
    [0x0C, 0x50, 0x52, 0x51, 0x3C], // 0xEC y acute
    [0x0E, 0x10, 0xE1, 0x11, 0x0E], // 0xED Y acute
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0xEE
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0xEF
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0xF0
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0xF1
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0xF2
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0xF3
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0xF4
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0xF5
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0xF6
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0xF7
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0xF8
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0xF9
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0xFA
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0xFB
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0xFC
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0xFD
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0xFE
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0xFF
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_covers_all_slots() {
        assert_eq!(FONT5X7.len(), GLYPH_COUNT);
        // Every index resolves; the final slot is an unmapped blank
        for index in 0..=u8::MAX {
            let _ = glyph(index);
        }
        assert_eq!(glyph(0xFF), &[0x00; GLYPH_WIDTH]);
    }

    #[test]
    fn test_space_is_blank() {
        assert_eq!(glyph(b' '), &[0x00; GLYPH_WIDTH]);
    }

    #[test]
    fn test_printable_ascii_has_pixels() {
        // Every printable ASCII glyph except space draws something
        for index in 0x21..0x7F_u8 {
            assert!(
                glyph(index).iter().any(|col| *col != 0),
                "glyph 0x{index:02X} is blank"
            );
        }
    }

    #[test]
    fn test_remapped_slots_have_pixels() {
        // Spot-check the extended slots the decoder remaps into
        for index in [0x80, 0x81, 0x84, 0x8E, 0x94, 0x99, 0x9A, 0xA0, 0xE1, 0x02] {
            assert!(glyph(index).iter().any(|col| *col != 0));
        }
    }

    #[test]
    fn test_digit_one_shape() {
        // '1': vertical stroke on the center-left column
        assert_eq!(glyph(b'1'), &[0x00, 0x42, 0x7F, 0x40, 0x00]);
    }
}
