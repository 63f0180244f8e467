use std::fmt;

/// Cup letters from smallest to largest
pub const CUP_PROGRESSION: [&str; 10] = ["A", "B", "C", "D", "DD", "DDD", "E", "F", "FF", "G"];

/// Smallest band a sister size may step down from
pub const MIN_BAND: u32 = 30;

/// Largest band a sister size may step up from
pub const MAX_BAND: u32 = 44;

/// Band units traded for one cup step
pub const BAND_STEP: u32 = 2;

/// A parsed size string such as "34D"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BraSize {
    pub band: u32,
    cup_index: usize,
}

impl BraSize {
    /// Parse a band number followed by an exact cup letter code
    pub fn parse(size: &str) -> Option<Self> {
        let size = size.trim();
        let split = size
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(size.len());
        let (digits, cup) = size.split_at(split);

        let band: u32 = digits.parse().ok()?;
        if band == 0 {
            return None;
        }
        let cup_index = CUP_PROGRESSION.iter().position(|letter| *letter == cup)?;

        Some(Self { band, cup_index })
    }

    pub fn cup(&self) -> &'static str {
        CUP_PROGRESSION[self.cup_index]
    }

    /// Two bands smaller, one cup larger
    pub fn sister_down(&self) -> Option<Self> {
        if self.band <= MIN_BAND || self.cup_index + 1 >= CUP_PROGRESSION.len() {
            return None;
        }
        Some(Self {
            band: self.band - BAND_STEP,
            cup_index: self.cup_index + 1,
        })
    }

    /// Two bands larger, one cup smaller
    pub fn sister_up(&self) -> Option<Self> {
        if self.band >= MAX_BAND || self.cup_index == 0 {
            return None;
        }
        Some(Self {
            band: self.band + BAND_STEP,
            cup_index: self.cup_index - 1,
        })
    }
}

impl fmt::Display for BraSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.band, self.cup())
    }
}

/// Equivalent-volume sizes for a recommendation
///
/// Returns the smaller-band sister first, then the larger-band one.
/// Unparseable sizes have no sisters.
pub fn sister_sizes(size: &str) -> Vec<String> {
    let Some(parsed) = BraSize::parse(size) else {
        return Vec::new();
    };

    [parsed.sister_down(), parsed.sister_up()]
        .into_iter()
        .flatten()
        .map(|sister| sister.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let size = BraSize::parse("34DD").unwrap();
        assert_eq!(size.band, 34);
        assert_eq!(size.cup(), "DD");
        assert_eq!(size.to_string(), "34DD");

        assert!(BraSize::parse("DD").is_none());
        assert!(BraSize::parse("34").is_none());
        assert!(BraSize::parse("34H").is_none());
        assert!(BraSize::parse("34dd").is_none());
        assert!(BraSize::parse("0D").is_none());
        assert!(BraSize::parse("").is_none());
    }

    #[test]
    fn test_both_sisters() {
        assert_eq!(sister_sizes("32D"), vec!["30DD", "34C"]);
        assert_eq!(sister_sizes("36DDD"), vec!["34E", "38DD"]);
    }

    #[test]
    fn test_band_bounds() {
        // A 30 band has no smaller sister
        assert_eq!(sister_sizes("30B"), vec!["32A"]);
        // A 44 band has no larger sister
        assert_eq!(sister_sizes("44C"), vec!["42D"]);
    }

    #[test]
    fn test_cup_bounds() {
        assert_eq!(sister_sizes("34A"), vec!["32B"]);
        assert_eq!(sister_sizes("34G"), vec!["36FF"]);
    }

    #[test]
    fn test_unparseable() {
        assert!(sister_sizes("").is_empty());
        assert!(sister_sizes("large").is_empty());
        assert!(sister_sizes("34Z").is_empty());
    }

    #[test]
    fn test_sisters_stay_in_progression() {
        for band in (28..=46).step_by(2) {
            for cup in CUP_PROGRESSION {
                let sisters = sister_sizes(&format!("{}{}", band, cup));
                assert!(sisters.len() <= 2);
                for sister in sisters {
                    let parsed = BraSize::parse(&sister).unwrap();
                    assert!(parsed.band > 0);
                    assert_eq!(parsed.band.abs_diff(band), BAND_STEP);
                }
            }
        }
    }
}
