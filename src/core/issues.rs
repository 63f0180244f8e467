use std::collections::BTreeSet;
use crate::core::text::words;
use crate::models::IssueTag;

/// Surface phrases mapped to the fit problem they describe
///
/// Every phrase matches whole words of the normalized query only, so "gap"
/// does not fire on "gapless", "pokes" does not fire on "spokes" and
/// "band lifts" does not fire on "husband lifts".
pub const ISSUE_PHRASES: &[(&str, IssueTag)] = &[
    // Band
    ("riding up", IssueTag::BandRidingUp),
    ("rides up", IssueTag::BandRidingUp),
    ("ride up", IssueTag::BandRidingUp),
    ("rode up", IssueTag::BandRidingUp),
    ("creeps up", IssueTag::BandRidingUp),
    ("creeping up", IssueTag::BandRidingUp),
    ("band moves up", IssueTag::BandRidingUp),
    ("band lifts", IssueTag::BandRidingUp),
    // Straps
    ("falling", IssueTag::StrapsFalling),
    ("slipping", IssueTag::StrapsFalling),
    ("straps fall", IssueTag::StrapsFalling),
    ("straps slip", IssueTag::StrapsFalling),
    ("fall off", IssueTag::StrapsFalling),
    ("falls off", IssueTag::StrapsFalling),
    ("slide off", IssueTag::StrapsFalling),
    ("slides off", IssueTag::StrapsFalling),
    ("digging", IssueTag::StrapsDigging),
    ("straps dig", IssueTag::StrapsDigging),
    ("dig in", IssueTag::StrapsDigging),
    ("digs in", IssueTag::StrapsDigging),
    ("shoulder pain", IssueTag::StrapsDigging),
    ("sore shoulders", IssueTag::StrapsDigging),
    ("shoulder grooves", IssueTag::StrapsDigging),
    // Cups
    ("wrinkle", IssueTag::CupWrinkling),
    ("wrinkles", IssueTag::CupWrinkling),
    ("wrinkling", IssueTag::CupWrinkling),
    ("wrinkly", IssueTag::CupWrinkling),
    ("puckering", IssueTag::CupWrinkling),
    ("empty space", IssueTag::CupWrinkling),
    ("gap", IssueTag::CupGapping),
    ("gaps", IssueTag::CupGapping),
    ("gapping", IssueTag::CupGapping),
    ("gaping", IssueTag::CupGapping),
    ("loose cups", IssueTag::CupGapping),
    ("cups are too big", IssueTag::CupGapping),
    ("overflow", IssueTag::Quadraboob),
    ("overflowing", IssueTag::Quadraboob),
    ("spilling", IssueTag::Quadraboob),
    ("spillage", IssueTag::Quadraboob),
    ("quadraboob", IssueTag::Quadraboob),
    ("quadboob", IssueTag::Quadraboob),
    ("double boob", IssueTag::Quadraboob),
    ("cutting in", IssueTag::Quadraboob),
    ("cups are too small", IssueTag::Quadraboob),
    // Underwire
    ("poking", IssueTag::WirePoking),
    ("pokes", IssueTag::WirePoking),
    ("stabbing", IssueTag::WirePoking),
    ("wire digs", IssueTag::WirePoking),
    ("wires dig", IssueTag::WirePoking),
    ("underwire hurts", IssueTag::WirePoking),
    ("wires hurt", IssueTag::WirePoking),
    ("sits on breast tissue", IssueTag::WirePoking),
    // Centre gore
    ("floating", IssueTag::GoreFloating),
    ("gore floats", IssueTag::GoreFloating),
    ("gore lifts", IssueTag::GoreFloating),
    ("gore doesn't touch", IssueTag::GoreFloating),
    ("gore does not touch", IssueTag::GoreFloating),
    ("gore doesn't tack", IssueTag::GoreFloating),
    ("gore does not tack", IssueTag::GoreFloating),
    ("gore not tacking", IssueTag::GoreFloating),
    ("gore sticks out", IssueTag::GoreFloating),
];

/// Detect canonical fit issues mentioned in free text
pub fn detect_issues(text: &str) -> BTreeSet<IssueTag> {
    // Padding both sides keeps matches on word boundaries
    let padded = format!(" {} ", words(&text.replace('-', " ")).join(" "));

    ISSUE_PHRASES
        .iter()
        .filter(|(phrase, _)| padded.contains(&format!(" {} ", phrase)))
        .map(|(_, tag)| *tag)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_and_straps() {
        let issues = detect_issues("the band keeps riding up and straps are digging");
        let expected: BTreeSet<IssueTag> =
            [IssueTag::BandRidingUp, IssueTag::StrapsDigging].into_iter().collect();
        assert_eq!(issues, expected);
    }

    #[test]
    fn test_case_and_punctuation_insensitive() {
        let issues = detect_issues("My straps are SLIPPING, and the cups WRINKLE.");
        assert!(issues.contains(&IssueTag::StrapsFalling));
        assert!(issues.contains(&IssueTag::CupWrinkling));
        assert_eq!(issues.len(), 2);
    }

    #[test]
    fn test_duplicates_collapse() {
        let issues = detect_issues("straps fall, they keep falling and slipping");
        assert_eq!(issues.len(), 1);
        assert!(issues.contains(&IssueTag::StrapsFalling));
    }

    #[test]
    fn test_single_words_need_whole_token() {
        // "gap" inside "singapore" and "pokes" inside "spokes" are not issues
        assert!(detect_issues("I bought it in singapore near the bike spokes shop").is_empty());
    }

    #[test]
    fn test_multi_word_phrases() {
        let issues = detect_issues("The centre gore doesn't touch my sternum and I get double boob");
        assert!(issues.contains(&IssueTag::GoreFloating));
        assert!(issues.contains(&IssueTag::Quadraboob));
    }

    #[test]
    fn test_phrases_need_word_boundaries() {
        assert!(detect_issues("my husband lifts weights").is_empty());
        assert!(detect_issues("the strap is overriding upwards").is_empty());
        assert!(detect_issues("my band lifts when I raise my arms").contains(&IssueTag::BandRidingUp));
    }

    #[test]
    fn test_hyphenated_phrase() {
        assert!(detect_issues("band is riding-up").contains(&IssueTag::BandRidingUp));
    }

    #[test]
    fn test_no_issues() {
        assert!(detect_issues("32 underbust 34 overbust").is_empty());
        assert!(detect_issues("").is_empty());
    }

    #[test]
    fn test_every_tag_reachable() {
        for tag in IssueTag::ALL {
            assert!(
                ISSUE_PHRASES.iter().any(|(_, mapped)| *mapped == tag),
                "no phrase maps to {}",
                tag
            );
        }
    }
}
