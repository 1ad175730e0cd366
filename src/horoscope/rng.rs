//! Seed-derived pseudo random numbers for the horoscope generator.
//!
//! This is deliberately weak: a 31-multiplier string hash fed through `sin`.
//! Its only job is reproducibility, so the same seed gives the same numbers
//! forever. Never use it for anything security related, and never swap it
//! for a better generator without versioning the horoscope output.
//!
//! Seeds are `<sign>-<YYYY-MM-DD>` with the lowercase English sign name, and
//! the generated text is English. Both differ from the older output, which
//! seeded with the Chinese sign names, so horoscopes from that release do not
//! carry over: this is version 2 of the output, not a continuation.

/// Map `seed` to a float in `[0, 1)`.
///
/// The hash runs over UTF-16 code units with wrapping 32-bit signed math.
pub fn seeded_random(seed: &str) -> f64 {
    let hash = seed
        .encode_utf16()
        .fold(0i32, |hash, unit| hash.wrapping_mul(31).wrapping_add(i32::from(unit)));

    let x = f64::from(hash).sin() * 10000.0;
    x - x.floor()
}

/// Successive draws for one seed. The n-th draw (starting at 1) is
/// `seeded_random(seed + n)`, so draw order decides every value.
#[derive(Debug)]
pub struct SeededDraws {
    seed: String,
    counter: u32,
}

impl SeededDraws {
    pub fn new(seed: impl Into<String>) -> Self {
        SeededDraws {
            seed: seed.into(),
            counter: 0,
        }
    }

    pub fn next_f64(&mut self) -> f64 {
        self.counter += 1;
        seeded_random(&format!("{}{}", self.seed, self.counter))
    }

    /// Index into a collection of `len` items.
    pub fn next_index(&mut self, len: usize) -> usize {
        let index = (self.next_f64() * len as f64).floor() as usize;
        index.min(len.saturating_sub(1))
    }

    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.next_index(items.len())]
    }
}
