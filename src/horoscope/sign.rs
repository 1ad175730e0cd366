use std::{fmt, str::FromStr};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

impl Element {
    pub fn lucky_colors(self) -> &'static [&'static str; 4] {
        match self {
            Element::Fire => &["red", "orange", "gold", "purple"],
            Element::Earth => &["green", "brown", "beige", "grey"],
            Element::Air => &["yellow", "blue", "white", "silver"],
            Element::Water => &["blue", "purple", "cyan", "black"],
        }
    }
}

/// Fixed per-sign traits that steer generation.
///
/// `base_strength` is ordered overall, luck, love, career, health.
#[derive(Debug)]
pub struct Traits {
    pub element: Element,
    pub keywords: [&'static str; 5],
    pub base_strength: [f64; 5],
}

/// Inclusive (month, day) bounds; Capricorn's range wraps the year end.
struct DateRange {
    start: (u32, u32),
    end: (u32, u32),
}

const fn range(start: (u32, u32), end: (u32, u32)) -> DateRange {
    DateRange { start, end }
}

/// Scanned in order, first match wins.
const BIRTHDAY_TABLE: [(ZodiacSign, DateRange); 12] = [
    (ZodiacSign::Capricorn, range((12, 22), (1, 19))),
    (ZodiacSign::Aquarius, range((1, 20), (2, 18))),
    (ZodiacSign::Pisces, range((2, 19), (3, 20))),
    (ZodiacSign::Aries, range((3, 21), (4, 19))),
    (ZodiacSign::Taurus, range((4, 20), (5, 20))),
    (ZodiacSign::Gemini, range((5, 21), (6, 21))),
    (ZodiacSign::Cancer, range((6, 22), (7, 22))),
    (ZodiacSign::Leo, range((7, 23), (8, 22))),
    (ZodiacSign::Virgo, range((8, 23), (9, 22))),
    (ZodiacSign::Libra, range((9, 23), (10, 23))),
    (ZodiacSign::Scorpio, range((10, 24), (11, 22))),
    (ZodiacSign::Sagittarius, range((11, 23), (12, 21))),
];

static ARIES: Traits = Traits {
    element: Element::Fire,
    keywords: ["passion", "impulse", "leadership", "adventure", "candor"],
    base_strength: [80.0, 75.0, 85.0, 75.0, 80.0],
};
static TAURUS: Traits = Traits {
    element: Element::Earth,
    keywords: ["steadiness", "pragmatism", "indulgence", "stubbornness", "reliability"],
    base_strength: [75.0, 80.0, 70.0, 85.0, 75.0],
};
static GEMINI: Traits = Traits {
    element: Element::Air,
    keywords: ["wit", "changeability", "communication", "curiosity", "liveliness"],
    base_strength: [78.0, 80.0, 75.0, 70.0, 75.0],
};
static CANCER: Traits = Traits {
    element: Element::Water,
    keywords: ["sensitivity", "homeliness", "moodiness", "intuition", "protectiveness"],
    base_strength: [75.0, 70.0, 80.0, 70.0, 75.0],
};
static LEO: Traits = Traits {
    element: Element::Fire,
    keywords: ["confidence", "generosity", "drama", "creativity", "command"],
    base_strength: [85.0, 80.0, 85.0, 80.0, 75.0],
};
static VIRGO: Traits = Traits {
    element: Element::Earth,
    keywords: ["perfectionism", "analysis", "service", "practicality", "precision"],
    base_strength: [75.0, 75.0, 65.0, 85.0, 70.0],
};
static LIBRA: Traits = Traits {
    element: Element::Air,
    keywords: ["balance", "harmony", "hesitation", "taste", "sociability"],
    base_strength: [78.0, 80.0, 75.0, 75.0, 75.0],
};
static SCORPIO: Traits = Traits {
    element: Element::Water,
    keywords: ["depth", "mystery", "intensity", "insight", "persistence"],
    base_strength: [80.0, 70.0, 80.0, 80.0, 70.0],
};
static SAGITTARIUS: Traits = Traits {
    element: Element::Fire,
    keywords: ["optimism", "freedom", "philosophy", "adventure", "candor"],
    base_strength: [82.0, 85.0, 75.0, 70.0, 80.0],
};
static CAPRICORN: Traits = Traits {
    element: Element::Earth,
    keywords: ["ambition", "discipline", "tradition", "responsibility", "practicality"],
    base_strength: [80.0, 75.0, 70.0, 85.0, 70.0],
};
static AQUARIUS: Traits = Traits {
    element: Element::Air,
    keywords: ["independence", "innovation", "humanity", "rebellion", "reason"],
    base_strength: [78.0, 80.0, 70.0, 75.0, 75.0],
};
static PISCES: Traits = Traits {
    element: Element::Water,
    keywords: ["dreaminess", "compassion", "artistry", "escapism", "intuition"],
    base_strength: [75.0, 70.0, 80.0, 65.0, 70.0],
};

impl ZodiacSign {
    pub const ALL: [ZodiacSign; 12] = [
        ZodiacSign::Aries,
        ZodiacSign::Taurus,
        ZodiacSign::Gemini,
        ZodiacSign::Cancer,
        ZodiacSign::Leo,
        ZodiacSign::Virgo,
        ZodiacSign::Libra,
        ZodiacSign::Scorpio,
        ZodiacSign::Sagittarius,
        ZodiacSign::Capricorn,
        ZodiacSign::Aquarius,
        ZodiacSign::Pisces,
    ];

    /// Wire name; also the first half of the generator seed.
    pub fn as_str(self) -> &'static str {
        match self {
            ZodiacSign::Aries => "aries",
            ZodiacSign::Taurus => "taurus",
            ZodiacSign::Gemini => "gemini",
            ZodiacSign::Cancer => "cancer",
            ZodiacSign::Leo => "leo",
            ZodiacSign::Virgo => "virgo",
            ZodiacSign::Libra => "libra",
            ZodiacSign::Scorpio => "scorpio",
            ZodiacSign::Sagittarius => "sagittarius",
            ZodiacSign::Capricorn => "capricorn",
            ZodiacSign::Aquarius => "aquarius",
            ZodiacSign::Pisces => "pisces",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            ZodiacSign::Aries => "Aries",
            ZodiacSign::Taurus => "Taurus",
            ZodiacSign::Gemini => "Gemini",
            ZodiacSign::Cancer => "Cancer",
            ZodiacSign::Leo => "Leo",
            ZodiacSign::Virgo => "Virgo",
            ZodiacSign::Libra => "Libra",
            ZodiacSign::Scorpio => "Scorpio",
            ZodiacSign::Sagittarius => "Sagittarius",
            ZodiacSign::Capricorn => "Capricorn",
            ZodiacSign::Aquarius => "Aquarius",
            ZodiacSign::Pisces => "Pisces",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            ZodiacSign::Aries => "♈",
            ZodiacSign::Taurus => "♉",
            ZodiacSign::Gemini => "♊",
            ZodiacSign::Cancer => "♋",
            ZodiacSign::Leo => "♌",
            ZodiacSign::Virgo => "♍",
            ZodiacSign::Libra => "♎",
            ZodiacSign::Scorpio => "♏",
            ZodiacSign::Sagittarius => "♐",
            ZodiacSign::Capricorn => "♑",
            ZodiacSign::Aquarius => "♒",
            ZodiacSign::Pisces => "♓",
        }
    }

    pub fn traits(self) -> &'static Traits {
        match self {
            ZodiacSign::Aries => &ARIES,
            ZodiacSign::Taurus => &TAURUS,
            ZodiacSign::Gemini => &GEMINI,
            ZodiacSign::Cancer => &CANCER,
            ZodiacSign::Leo => &LEO,
            ZodiacSign::Virgo => &VIRGO,
            ZodiacSign::Libra => &LIBRA,
            ZodiacSign::Scorpio => &SCORPIO,
            ZodiacSign::Sagittarius => &SAGITTARIUS,
            ZodiacSign::Capricorn => &CAPRICORN,
            ZodiacSign::Aquarius => &AQUARIUS,
            ZodiacSign::Pisces => &PISCES,
        }
    }

    pub fn element(self) -> Element {
        self.traits().element
    }

    pub fn from_birthday(birthday: NaiveDate) -> ZodiacSign {
        sign_from_birthday(birthday.month(), birthday.day())
    }
}

/// Sign for a birthday given as calendar month (1-12) and day.
pub fn sign_from_birthday(month: u32, day: u32) -> ZodiacSign {
    BIRTHDAY_TABLE
        .iter()
        .find(|(_, range)| {
            (month == range.start.0 && day >= range.start.1)
                || (month == range.end.0 && day <= range.end.1)
        })
        .map(|(sign, _)| *sign)
        .unwrap_or(ZodiacSign::Capricorn)
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown zodiac sign: {0}")]
pub struct UnknownSign(pub String);

impl FromStr for ZodiacSign {
    type Err = UnknownSign;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ZodiacSign::ALL
            .into_iter()
            .find(|sign| sign.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownSign(s.to_string()))
    }
}
