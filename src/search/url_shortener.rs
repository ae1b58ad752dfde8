//! Packing two ASCII characters per code unit.
//!
//! A pair `(hi, lo)` becomes the single character `hi << 8 | lo`. A trailing
//! unpaired character is stored with a zero low byte, which decoding reads
//! as "one character only". No lookup table is kept: the packed string is
//! self-contained.

use crate::error::{KataError, Result};

/// Highest character code that can be packed.
const MAX_CODE: u32 = 0x7F;

/// Stateless packer; `decode(encode(s)) == s` for ASCII text without NUL.
#[derive(Debug, Clone, Copy, Default)]
pub struct UrlShortener;

impl UrlShortener {
    /// Create a new shortener.
    pub fn new() -> Self {
        Self
    }

    /// Pack `url` into half as many characters (rounded up).
    pub fn encode(&self, url: &str) -> Result<String> {
        let codes = url
            .chars()
            .map(|c| match c as u32 {
                code @ 1..=MAX_CODE => Ok(code),
                _ => Err(KataError::UnsupportedChar(c)),
            })
            .collect::<Result<Vec<u32>>>()?;

        codes
            .chunks(2)
            .map(|pair| {
                let packed = (pair[0] << 8) | pair.get(1).copied().unwrap_or(0);
                char::from_u32(packed).ok_or(KataError::InvalidCode(packed))
            })
            .collect()
    }

    /// Restore the text packed by [`UrlShortener::encode`].
    pub fn decode(&self, code: &str) -> Result<String> {
        let units: Vec<u32> = code.chars().map(|c| c as u32).collect();
        let mut url = String::with_capacity(units.len() * 2);
        for (i, &unit) in units.iter().enumerate() {
            let (hi, lo) = (unit >> 8, unit & 0xFF);
            let is_last = i + 1 == units.len();
            let valid = (1..=MAX_CODE).contains(&hi) && lo <= MAX_CODE && (lo != 0 || is_last);
            if !valid {
                return Err(KataError::InvalidCode(unit));
            }
            url.push(hi as u8 as char);
            if lo != 0 {
                url.push(lo as u8 as char);
            }
        }
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_round_trip_url() {
        let shortener = UrlShortener::new();
        let url = "https://en.wikipedia.org/wiki/URL_shortening";
        let short = shortener.encode(url).unwrap();
        assert_eq!(short.chars().count(), 22);
        assert_eq!(shortener.decode(&short).unwrap(), url);
    }

    #[test]
    fn test_odd_length_padding() {
        let shortener = UrlShortener::new();
        let short = shortener.encode("abc").unwrap();
        let units: Vec<u32> = short.chars().map(|c| c as u32).collect();
        assert_eq!(units, vec![('a' as u32) << 8 | 'b' as u32, ('c' as u32) << 8]);
        assert_eq!(shortener.decode(&short).unwrap(), "abc");
        assert_eq!(shortener.encode("").unwrap(), "");
        assert_eq!(shortener.decode("").unwrap(), "");
    }

    #[test]
    fn test_random_ascii_round_trip() {
        let shortener = UrlShortener::new();
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let len = rng.gen_range(0..64);
            let s: String = (0..len).map(|_| rng.gen_range(1u8..=127) as char).collect();
            let packed = shortener.encode(&s).unwrap();
            assert_eq!(shortener.decode(&packed).unwrap(), s);
        }
    }

    #[test]
    fn test_rejects_unpackable_input() {
        let shortener = UrlShortener::new();
        assert!(matches!(shortener.encode("caf\u{e9}"), Err(KataError::UnsupportedChar('\u{e9}'))));
        assert!(matches!(shortener.encode("a\0b"), Err(KataError::UnsupportedChar('\0'))));
        assert!(matches!(shortener.decode("\u{1F600}"), Err(KataError::InvalidCode(_))));
        // A lone character may only come last.
        let lone = char::from_u32(('a' as u32) << 8).unwrap();
        let pair = char::from_u32(('b' as u32) << 8 | 'c' as u32).unwrap();
        assert!(shortener.decode(&format!("{}{}", lone, pair)).is_err());
        assert_eq!(shortener.decode(&format!("{}{}", pair, lone)).unwrap(), "bca");
    }
}
