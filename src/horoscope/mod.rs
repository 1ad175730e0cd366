//! Daily horoscope generation.
//!
//! [`daily_horoscope`] is a pure function of a sign and a calendar date.
//! Every random-looking field comes from [`SeededDraws`] in a fixed order:
//! five scores, lucky colour, lucky number, lucky time, short forecast,
//! mood. Changing that order changes the output for every existing
//! (sign, date) pair.

mod rng;
mod sign;

use chrono::{DateTime, NaiveDate, TimeZone};
use serde::Serialize;

pub use rng::SeededDraws;
pub use sign::{Element, UnknownSign, ZodiacSign};

const LUCKY_TIMES: [&str; 5] = ["morning", "noon", "afternoon", "evening", "night"];

const MOODS: [&str; 10] = [
    "😊", "🤔", "😌", "🥳", "😤", "🧘", "✨", "🌟", "💫", "🔮",
];

const POSITIVE: [&str; 5] = [
    "Your energy runs high today, a good day to start something new.",
    "The stars hint at a stroke of unexpected luck.",
    "Keep a bright outlook and something good will turn up.",
    "Your intuition is sharp today, trust your first instinct.",
    "A fine day to let your charm show, make the most of it!",
];

const NEUTRAL: [&str; 5] = [
    "A steady day, well suited to everyday tasks.",
    "Be patient, things are moving in the right direction.",
    "Good for thinking and planning, less so for big decisions.",
    "A calm day to recharge and reflect.",
    "Take it one step at a time and you will be fine.",
];

const NEGATIVE: [&str; 5] = [
    "A few small challenges may appear, nothing to worry about.",
    "Keep a low profile and steer clear of arguments.",
    "Today may ask for extra patience, breathe deeply.",
    "When things get hard, lean on your friends.",
    "Slow down and do not rush for results.",
];

const ORDINARY_DAY: &str = "An ordinary day, keep a calm and even mind.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Positive,
    Neutral,
    Negative,
}

impl Tier {
    pub fn of(overall: f64) -> Tier {
        if overall >= 70.0 {
            Tier::Positive
        } else if overall >= 50.0 {
            Tier::Neutral
        } else {
            Tier::Negative
        }
    }

    fn sentences(self) -> &'static [&'static str; 5] {
        match self {
            Tier::Positive => &POSITIVE,
            Tier::Neutral => &NEUTRAL,
            Tier::Negative => &NEGATIVE,
        }
    }
}

/// Clamped but unrounded scores. Every threshold reads these; rounding only
/// happens when they are written into a [`Horoscope`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scores {
    pub overall: f64,
    pub luck: f64,
    pub love: f64,
    pub career: f64,
    pub health: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Horoscope {
    pub sign: ZodiacSign,
    pub date: String,
    pub overall_score: u8,
    pub luck_score: u8,
    pub love_score: u8,
    pub career_score: u8,
    pub health_score: u8,
    pub lucky_color: &'static str,
    pub lucky_number: u8,
    pub lucky_time: &'static str,
    pub short_forecast: &'static str,
    pub detailed_forecast: String,
    pub advice: Vec<String>,
    pub mood: &'static str,
}

/// The calendar date as seen in `at`'s own offset. Never goes through UTC,
/// so a late evening stays on its own day.
pub fn local_date<Tz: TimeZone>(at: &DateTime<Tz>) -> NaiveDate {
    at.date_naive()
}

pub fn daily_horoscope(sign: ZodiacSign, date: NaiveDate) -> Horoscope {
    let date_str = date.format("%Y-%m-%d").to_string();
    let mut draws = SeededDraws::new(format!("{}-{}", sign.as_str(), date_str));
    let traits = sign.traits();

    let scores = draw_scores(&traits.base_strength, &mut draws);

    let lucky_color = *draws.pick(traits.element.lucky_colors());
    let lucky_number = (draws.next_f64() * 99.0).floor() as u8 + 1;
    let lucky_time = *draws.pick(&LUCKY_TIMES);
    let short_forecast = *draws.pick(Tier::of(scores.overall).sentences());

    let detailed_forecast = detailed_forecast(&scores);
    let advice = advice(sign, &scores);

    let mood = *draws.pick(&MOODS);

    Horoscope {
        sign,
        date: date_str,
        overall_score: shown(scores.overall),
        luck_score: shown(scores.luck),
        love_score: shown(scores.love),
        career_score: shown(scores.career),
        health_score: shown(scores.health),
        lucky_color,
        lucky_number,
        lucky_time,
        short_forecast,
        detailed_forecast,
        advice,
        mood,
    }
}

/// Five draws in order overall, luck, love, career, health.
fn draw_scores(base: &[f64; 5], draws: &mut SeededDraws) -> Scores {
    let mut score = |base: f64| {
        let variance = (draws.next_f64() - 0.5) * 20.0;
        (base + variance).clamp(0.0, 100.0)
    };

    Scores {
        overall: score(base[0]),
        luck: score(base[1]),
        love: score(base[2]),
        career: score(base[3]),
        health: score(base[4]),
    }
}

fn shown(score: f64) -> u8 {
    score.round() as u8
}

fn detailed_forecast(scores: &Scores) -> String {
    let mut parts = Vec::new();

    if scores.love >= 70.0 {
        parts.push("Love looks promising, a romantic encounter may be near.");
    } else if scores.love <= 40.0 {
        parts.push("Love may hit some bumps, a little patience helps.");
    }

    if scores.career >= 70.0 {
        parts.push("A good opportunity is coming at work, seize it!");
    } else if scores.career <= 40.0 {
        parts.push("Work may bring some challenges, stay calm.");
    }

    if scores.health >= 70.0 {
        parts.push("You are in good shape and full of energy.");
    } else if scores.health <= 40.0 {
        parts.push("Get some rest and do not overwork yourself.");
    }

    if scores.luck >= 70.0 {
        parts.push("Fortune smiles on you today.");
    }

    if parts.is_empty() {
        ORDINARY_DAY.to_string()
    } else {
        parts.join(" ")
    }
}

fn advice(sign: ZodiacSign, scores: &Scores) -> Vec<String> {
    let mut advice = Vec::new();

    if scores.luck < 50.0 {
        advice.push("Not a day for risks, slow and steady wins.".to_string());
    }
    if scores.love < 50.0 {
        advice.push("Talk with the people around you and share how you feel.".to_string());
    }
    if scores.career > 70.0 {
        advice.push("Be bold at work, your effort will be noticed.".to_string());
    }

    advice.push(format!(
        "Leaning into {}'s {} will bring good luck.",
        sign.display_name(),
        sign.traits().keywords[0]
    ));

    advice
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, FixedOffset, TimeZone};

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn shown_scores(h: &Horoscope) -> [u8; 5] {
        [
            h.overall_score,
            h.luck_score,
            h.love_score,
            h.career_score,
            h.health_score,
        ]
    }

    fn raw_scores(sign: ZodiacSign, day: NaiveDate) -> Scores {
        let mut draws = SeededDraws::new(format!("{}-{}", sign.as_str(), day.format("%Y-%m-%d")));
        draw_scores(&sign.traits().base_strength, &mut draws)
    }

    #[test]
    fn same_input_same_output() {
        for sign in ZodiacSign::ALL {
            let a = daily_horoscope(sign, date(2026, 10, 18));
            let b = daily_horoscope(sign, date(2026, 10, 18));
            assert_eq!(a, b);
            assert_eq!(
                serde_json::to_vec(&a).unwrap(),
                serde_json::to_vec(&b).unwrap()
            );
        }
    }

    #[test]
    fn different_days_differ() {
        let days: Vec<Horoscope> = (1..=10)
            .map(|d| daily_horoscope(ZodiacSign::Gemini, date(2026, 2, d)))
            .collect();
        assert!(days
            .windows(2)
            .any(|pair| shown_scores(&pair[0]) != shown_scores(&pair[1])));
    }

    #[test]
    fn fields_stay_in_range() {
        let start = date(2025, 6, 1);
        for sign in ZodiacSign::ALL {
            for offset in 0..400 {
                let day = start + Duration::days(offset);
                let h = daily_horoscope(sign, day);
                let s = raw_scores(sign, day);
                let raw = [s.overall, s.luck, s.love, s.career, s.health];
                for (value, shown) in raw.into_iter().zip(shown_scores(&h)) {
                    assert!((0.0..=100.0).contains(&value));
                    assert_eq!(value.round() as u8, shown);
                }
                assert!((1..=99).contains(&h.lucky_number));
                assert!(sign.element().lucky_colors().contains(&h.lucky_color));
                assert!(LUCKY_TIMES.contains(&h.lucky_time));
                assert!(MOODS.contains(&h.mood));
                assert!(Tier::of(s.overall).sentences().contains(&h.short_forecast));
                assert!(!h.advice.is_empty());
                assert!(!h.detailed_forecast.is_empty());
                assert_eq!(h.date, day.format("%Y-%m-%d").to_string());
            }
        }
    }

    #[test]
    fn scores_follow_the_draw_order() {
        let sign = ZodiacSign::Leo;
        let h = daily_horoscope(sign, date(2026, 1, 1));
        let mut draws = SeededDraws::new("leo-2026-01-01");
        let expect = |base: f64, draw: f64| (base + (draw - 0.5) * 20.0).clamp(0.0, 100.0);
        let base = sign.traits().base_strength;

        let overall = expect(base[0], draws.next_f64());
        assert_eq!(h.overall_score, overall.round() as u8);
        assert_eq!(h.luck_score, expect(base[1], draws.next_f64()).round() as u8);
        assert_eq!(h.love_score, expect(base[2], draws.next_f64()).round() as u8);
        assert_eq!(h.career_score, expect(base[3], draws.next_f64()).round() as u8);
        assert_eq!(h.health_score, expect(base[4], draws.next_f64()).round() as u8);
        assert_eq!(h.lucky_color, *draws.pick(sign.element().lucky_colors()));
        assert_eq!(h.lucky_number, (draws.next_f64() * 99.0).floor() as u8 + 1);
        assert_eq!(h.lucky_time, *draws.pick(&LUCKY_TIMES));
        assert_eq!(h.short_forecast, *draws.pick(Tier::of(overall).sentences()));
        assert_eq!(h.mood, *draws.pick(&MOODS));
    }

    #[test]
    fn tiers() {
        assert_eq!(Tier::of(100.0), Tier::Positive);
        assert_eq!(Tier::of(70.0), Tier::Positive);
        assert_eq!(Tier::of(69.6), Tier::Neutral);
        assert_eq!(Tier::of(50.0), Tier::Neutral);
        assert_eq!(Tier::of(49.99), Tier::Negative);
    }

    #[test]
    fn detailed_forecast_clauses() {
        let middling = Scores {
            overall: 60.0,
            luck: 60.0,
            love: 55.0,
            career: 55.0,
            health: 55.0,
        };
        assert_eq!(detailed_forecast(&middling), ORDINARY_DAY);

        let mixed = Scores {
            love: 75.0,
            career: 40.0,
            luck: 70.0,
            ..middling
        };
        assert_eq!(
            detailed_forecast(&mixed),
            "Love looks promising, a romantic encounter may be near. \
             Work may bring some challenges, stay calm. \
             Fortune smiles on you today."
        );
    }

    #[test]
    fn advice_order() {
        let low = Scores {
            overall: 45.0,
            luck: 40.0,
            love: 30.0,
            career: 80.0,
            health: 50.0,
        };
        let list = advice(ZodiacSign::Aries, &low);
        assert_eq!(list.len(), 4);
        assert!(list[0].starts_with("Not a day for risks"));
        assert!(list[1].starts_with("Talk with the people"));
        assert!(list[2].starts_with("Be bold at work"));
        assert_eq!(list[3], "Leaning into Aries's passion will bring good luck.");

        let high = Scores {
            overall: 80.0,
            luck: 80.0,
            love: 80.0,
            career: 70.0,
            health: 80.0,
        };
        assert_eq!(advice(ZodiacSign::Aries, &high).len(), 1);
    }

    #[test]
    fn thresholds_read_unrounded_scores() {
        let edge = Scores {
            overall: 69.6,
            luck: 49.6,
            love: 40.4,
            career: 70.2,
            health: 80.0,
        };
        assert_eq!(shown(edge.overall), 70);
        assert_eq!(Tier::of(edge.overall), Tier::Neutral);

        let list = advice(ZodiacSign::Aries, &edge);
        assert_eq!(list.len(), 4);
        assert!(list[0].starts_with("Not a day for risks"));
        assert!(list[1].starts_with("Talk with the people"));
        assert!(list[2].starts_with("Be bold at work"));

        // 40.4 shows as 40 but is not a low love day.
        assert_eq!(
            detailed_forecast(&edge),
            "A good opportunity is coming at work, seize it! \
             You are in good shape and full of energy."
        );
    }

    #[test]
    fn career_just_over_seventy_gets_bold_advice() {
        let day = date(2025, 7, 12);
        let raw = raw_scores(ZodiacSign::Aries, day);
        assert!(raw.career > 70.0 && raw.career < 70.5, "{raw:?}");

        let h = daily_horoscope(ZodiacSign::Aries, day);
        assert_eq!(h.career_score, 70);
        assert!(h.advice.iter().any(|line| line.starts_with("Be bold at work")));
    }

    #[test]
    fn late_evening_keeps_its_local_day() {
        let tz = FixedOffset::east_opt(8 * 3600).unwrap();
        let late = tz.with_ymd_and_hms(2026, 3, 9, 23, 59, 59).unwrap();
        let early = tz.with_ymd_and_hms(2026, 3, 10, 0, 0, 1).unwrap();

        assert_eq!(local_date(&late), date(2026, 3, 9));
        assert_eq!(local_date(&early), date(2026, 3, 10));
        // Early morning at +08:00 is still the previous day in UTC.
        assert_eq!(early.naive_utc().date(), date(2026, 3, 9));

        let h = daily_horoscope(ZodiacSign::Cancer, local_date(&early));
        assert_eq!(h.date, "2026-03-10");
        assert_eq!(h, daily_horoscope(ZodiacSign::Cancer, date(2026, 3, 10)));

        let west = FixedOffset::west_opt(5 * 3600).unwrap();
        let evening = west.with_ymd_and_hms(2026, 3, 9, 23, 30, 0).unwrap();
        assert_eq!(local_date(&evening), date(2026, 3, 9));
        assert_eq!(evening.naive_utc().date(), date(2026, 3, 10));
    }

    #[test]
    fn serializes_camel_case() {
        let h = daily_horoscope(ZodiacSign::Libra, date(2026, 7, 4));
        let json = serde_json::to_value(&h).unwrap();
        for key in [
            "sign",
            "date",
            "overallScore",
            "luckScore",
            "loveScore",
            "careerScore",
            "healthScore",
            "luckyColor",
            "luckyNumber",
            "luckyTime",
            "shortForecast",
            "detailedForecast",
            "advice",
            "mood",
        ] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
        assert_eq!(json["sign"], "libra");
        assert_eq!(json["date"], "2026-07-04");
    }
}
