//! # Unicode Fonts
//!
//! `TextStyler` backed by the Mathematical Alphanumeric Symbols block.
//! ASCII letters and digits are shifted into the chosen alphabet; everything
//! else passes through untouched.

use async_trait::async_trait;

use crate::domain::traits::TextStyler;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontStyle {
    Bold,
    Italic,
    BoldItalic,
    Sans,
    SansBold,
    SansItalic,
    SansBoldItalic,
    Monospace,
    DoubleStruck,
}

struct Alphabet {
    upper: u32,
    lower: u32,
    digits: Option<u32>,
    /// Letters that live outside the contiguous range (Letterlike Symbols).
    holes: &'static [(char, char)],
}

const NO_HOLES: &[(char, char)] = &[];
const ITALIC_HOLES: &[(char, char)] = &[('h', 'ℎ')];
const DOUBLE_STRUCK_HOLES: &[(char, char)] = &[
    ('C', 'ℂ'),
    ('H', 'ℍ'),
    ('N', 'ℕ'),
    ('P', 'ℙ'),
    ('Q', 'ℚ'),
    ('R', 'ℝ'),
    ('Z', 'ℤ'),
];

impl FontStyle {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().replace(['_', '-', ' '], "").as_str() {
            "bold" => Some(Self::Bold),
            "italic" => Some(Self::Italic),
            "bolditalic" => Some(Self::BoldItalic),
            "sans" => Some(Self::Sans),
            "sansbold" => Some(Self::SansBold),
            "sansitalic" => Some(Self::SansItalic),
            "sansbolditalic" => Some(Self::SansBoldItalic),
            "monospace" | "mono" => Some(Self::Monospace),
            "doublestruck" => Some(Self::DoubleStruck),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bold => "bold",
            Self::Italic => "italic",
            Self::BoldItalic => "boldItalic",
            Self::Sans => "sans",
            Self::SansBold => "sansBold",
            Self::SansItalic => "sansItalic",
            Self::SansBoldItalic => "sansBoldItalic",
            Self::Monospace => "monospace",
            Self::DoubleStruck => "doubleStruck",
        }
    }

    fn alphabet(&self) -> Alphabet {
        let (upper, lower, digits, holes) = match self {
            Self::Bold => (0x1D400, 0x1D41A, Some(0x1D7CE), NO_HOLES),
            Self::Italic => (0x1D434, 0x1D44E, None, ITALIC_HOLES),
            Self::BoldItalic => (0x1D468, 0x1D482, None, NO_HOLES),
            Self::Sans => (0x1D5A0, 0x1D5BA, Some(0x1D7E2), NO_HOLES),
            Self::SansBold => (0x1D5D4, 0x1D5EE, Some(0x1D7EC), NO_HOLES),
            Self::SansItalic => (0x1D608, 0x1D622, None, NO_HOLES),
            Self::SansBoldItalic => (0x1D63C, 0x1D656, None, NO_HOLES),
            Self::Monospace => (0x1D670, 0x1D68A, Some(0x1D7F6), NO_HOLES),
            Self::DoubleStruck => (0x1D538, 0x1D552, Some(0x1D7D8), DOUBLE_STRUCK_HOLES),
        };
        Alphabet {
            upper,
            lower,
            digits,
            holes,
        }
    }

    pub fn apply(&self, text: &str) -> String {
        let alphabet = self.alphabet();
        text.chars().map(|c| alphabet.map(c)).collect()
    }
}

impl Alphabet {
    fn map(&self, c: char) -> char {
        if let Some((_, replacement)) = self.holes.iter().find(|(from, _)| *from == c) {
            return *replacement;
        }
        let shifted = match c {
            'A'..='Z' => Some(self.upper + (c as u32 - 'A' as u32)),
            'a'..='z' => Some(self.lower + (c as u32 - 'a' as u32)),
            '0'..='9' => self.digits.map(|base| base + (c as u32 - '0' as u32)),
            _ => None,
        };
        shifted.and_then(char::from_u32).unwrap_or(c)
    }
}

/// Default styler used by the bot.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeStyler;

#[async_trait]
impl TextStyler for UnicodeStyler {
    async fn style(&self, text: &str, style: &str) -> Result<String, String> {
        let font = FontStyle::from_str(style).ok_or_else(|| format!("Unknown font style: {style}"))?;
        tracing::trace!("Styling {} chars as {}", text.chars().count(), font.as_str());
        Ok(font.apply(text))
    }
}
