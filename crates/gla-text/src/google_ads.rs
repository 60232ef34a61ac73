//! The Google Ads display-width count.
//!
//! Text is measured per UTF-16 code unit, not per grapheme: a character
//! outside the Basic Multilingual Plane (most emoji) is two surrogate units
//! and counts 2 for each. Composed emoji sequences therefore count every
//! unit of the sequence.
//!
//! Each unit is classified in this order:
//!
//! 1. [`ONE_COUNT_RULES`] -- any match counts 1.
//! 2. The Indic block [`INDIC_BLOCK`] -- 0 for the combining marks in
//!    [`ZERO_COUNT_UNITS`], 1 for everything else.
//! 3. Anything else counts 2.

/// An inclusive range of UTF-16 code units.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnitRange {
    pub name: &'static str,
    pub first: u16,
    pub last: u16,
}

impl UnitRange {
    const fn new(name: &'static str, first: u16, last: u16) -> Self {
        Self { name, first, last }
    }

    pub fn contains(&self, unit: u16) -> bool {
        (self.first..=self.last).contains(&unit)
    }
}

/// Ranges whose units count 1, in evaluation order.
pub const ONE_COUNT_RULES: &[UnitRange] = &[
    UnitRange::new("Basic Latin to Cyrillic", 0x0000, 0x04F9),
    UnitRange::new("Latin Extended Additional to Currency Symbols", 0x1E00, 0x20BF),
    UnitRange::new("Halfwidth Forms", 0xFF61, 0xFFDC),
    UnitRange::new("Thai", 0x0E00, 0x0E7F),
    UnitRange::new("Letterlike Symbols", 0x2100, 0x2138),
    UnitRange::new("Arabic", 0x0600, 0x06FF),
    UnitRange::new("Arabic Supplement", 0x0750, 0x077F),
    UnitRange::new("Arabic Presentation Forms-A", 0xFB50, 0xFDFF),
    UnitRange::new("Arabic Presentation Forms-B", 0xFE70, 0xFEFF),
    UnitRange::new("Hebrew letters", 0x05D0, 0x05EA),
    UnitRange::new("Hebrew maqaf", 0x05BE, 0x05BE),
    UnitRange::new("Hebrew geresh", 0x05F3, 0x05F3),
    UnitRange::new("Hebrew gershayim", 0x05F4, 0x05F4),
];

/// Devanagari through Malayalam.
pub const INDIC_BLOCK: UnitRange = UnitRange::new("Devanagari to Malayalam", 0x0900, 0x0D7F);

/// Non-spacing combining marks of [`INDIC_BLOCK`] that count 0. Sorted.
pub const ZERO_COUNT_UNITS: &[u16] = &[
    // Devanagari
    0x0900, 0x0901, 0x0902, 0x093A, 0x093C, 0x0941, 0x0942, 0x0943, 0x0944, 0x0945, 0x0946,
    0x0947, 0x0948, 0x094D, 0x0951, 0x0952, 0x0953, 0x0954, 0x0955, 0x0956, 0x0957, 0x0962,
    0x0963,
    // Bengali
    0x0981, 0x09BC, 0x09C1, 0x09C2, 0x09C3, 0x09C4, 0x09CD, 0x09E2, 0x09E3, 0x09FE,
    // Gurmukhi
    0x0A01, 0x0A02, 0x0A3C, 0x0A41, 0x0A42, 0x0A47, 0x0A48, 0x0A4B, 0x0A4C, 0x0A4D, 0x0A51,
    0x0A70, 0x0A71, 0x0A75,
    // Gujarati
    0x0A81, 0x0A82, 0x0ABC, 0x0AC1, 0x0AC2, 0x0AC3, 0x0AC4, 0x0AC5, 0x0AC7, 0x0AC8, 0x0ACD,
    0x0AE2, 0x0AE3, 0x0AFA, 0x0AFB, 0x0AFC, 0x0AFD, 0x0AFE, 0x0AFF,
    // Oriya
    0x0B01, 0x0B3C, 0x0B3F, 0x0B41, 0x0B42, 0x0B43, 0x0B44, 0x0B4D, 0x0B55, 0x0B56, 0x0B62,
    0x0B63,
    // Tamil
    0x0B82, 0x0BC0, 0x0BCD,
    // Telugu
    0x0C00, 0x0C04, 0x0C3C, 0x0C3E, 0x0C3F, 0x0C40, 0x0C46, 0x0C47, 0x0C48, 0x0C4A, 0x0C4B,
    0x0C4C, 0x0C4D, 0x0C55, 0x0C56, 0x0C62, 0x0C63,
    // Kannada
    0x0C81, 0x0CBC, 0x0CBF, 0x0CC6, 0x0CCC, 0x0CCD, 0x0CE2, 0x0CE3,
    // Malayalam
    0x0D00, 0x0D01, 0x0D3B, 0x0D3C, 0x0D41, 0x0D42, 0x0D43, 0x0D44, 0x0D4D, 0x0D62, 0x0D63,
];

/// Width of a single UTF-16 code unit.
pub fn unit_width(unit: u16) -> usize {
    if ONE_COUNT_RULES.iter().any(|rule| rule.contains(unit)) {
        return 1;
    }
    if INDIC_BLOCK.contains(unit) {
        return if ZERO_COUNT_UNITS.binary_search(&unit).is_ok() {
            0
        } else {
            1
        };
    }
    2
}

/// Count `text` the way Google Ads does.
pub fn google_ads_count(text: &str) -> usize {
    text.encode_utf16().map(unit_width).sum()
}
