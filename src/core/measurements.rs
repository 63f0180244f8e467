use crate::models::Measurements;

/// Unit tokens dropped before typing; digits glued to them ("34inches") are kept
const NOISE_WORDS: &[&str] = &["inches", "inch"];

/// Characters treated as token separators
const NOISE_CHARS: &[char] = &['-', ','];

const UNDERBUST_TERMS: &[&str] = &["underbust", "band"];

const OVERBUST_TERMS: &[&str] = &["overbust", "bust", "cup"];

const CENTIMETRE_UNITS: &[&str] = &[
    "cm",
    "cms",
    "centimeter",
    "centimeters",
    "centimetre",
    "centimetres",
];

/// Tokens inspected on each side of a number
const CONTEXT_RADIUS: usize = 3;

const CM_PER_INCH: f64 = 2.54;

/// A number found in the token stream, already converted to inches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct NumericToken {
    index: usize,
    value: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Field {
    Underbust,
    Overbust,
}

/// Extract underbust/overbust measurements from free text
///
/// Numbers are typed by the words around them: a window of up to three
/// tokens on each side mentioning "underbust" or "band" marks an underbust
/// value, one mentioning "overbust", "bust" or "cup" marks an overbust value.
/// When a window mentions both, the term nearest the number is tried first
/// (a term before the number wins a tie). The first number typed for a field
/// wins. Untyped numbers are used as a fallback:
/// - exactly two numbers and nothing typed: smaller is underbust, larger is overbust
/// - one field typed: the first other number with a different value fills the other
///
/// Centimetre values ("81 cm", "81cm") are converted to whole inches.
pub fn extract_measurements(text: &str) -> Measurements {
    let normalized = normalize(text);
    let tokens: Vec<&str> = normalized.split_whitespace().collect();
    let numbers = numeric_tokens(&tokens);

    let mut measurements = Measurements::default();
    let mut typed = vec![false; numbers.len()];

    for (slot, number) in numbers.iter().enumerate() {
        for field in fields_by_distance(&tokens, number.index) {
            let target = match field {
                Field::Underbust => &mut measurements.underbust,
                Field::Overbust => &mut measurements.overbust,
            };
            if target.is_none() {
                *target = Some(number.value);
                typed[slot] = true;
                break;
            }
        }
    }

    match (measurements.underbust, measurements.overbust) {
        (None, None) if numbers.len() == 2 => {
            // Equal values keep text order: first mention is the underbust
            let (low, high) = if numbers[1].value < numbers[0].value {
                (numbers[1].value, numbers[0].value)
            } else {
                (numbers[0].value, numbers[1].value)
            };
            measurements.underbust = Some(low);
            measurements.overbust = Some(high);
        }
        (Some(assigned), None) => {
            measurements.overbust = first_untyped_other(&numbers, &typed, assigned);
        }
        (None, Some(assigned)) => {
            measurements.underbust = first_untyped_other(&numbers, &typed, assigned);
        }
        _ => {}
    }

    measurements
}

fn normalize(text: &str) -> String {
    text.to_lowercase()
        .replace(NOISE_CHARS, " ")
        .split_whitespace()
        .filter_map(strip_inch_unit)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Drop a standalone inch unit and trim one glued to a number
fn strip_inch_unit(token: &str) -> Option<&str> {
    if NOISE_WORDS.contains(&token) {
        return None;
    }
    if token.starts_with(|c: char| c.is_ascii_digit()) {
        for unit in NOISE_WORDS {
            if let Some(number) = token.strip_suffix(unit) {
                return Some(number);
            }
        }
    }
    Some(token)
}

fn numeric_tokens(tokens: &[&str]) -> Vec<NumericToken> {
    tokens
        .iter()
        .enumerate()
        .filter_map(|(index, token)| {
            let digits: String = token.chars().filter(|c| c.is_ascii_digit()).collect();
            if digits.is_empty() {
                return None;
            }
            let raw: u32 = digits.parse().ok()?;

            let suffix: String = token.chars().filter(|c| c.is_alphabetic()).collect();
            let centimetres = is_centimetre_unit(&suffix)
                || tokens.get(index + 1).is_some_and(|next| is_centimetre_unit(next));

            let value = if centimetres {
                (f64::from(raw) / CM_PER_INCH) as u32
            } else {
                raw
            };

            Some(NumericToken { index, value })
        })
        .collect()
}

fn is_centimetre_unit(token: &str) -> bool {
    let unit = token.trim_matches(|c: char| !c.is_alphanumeric());
    CENTIMETRE_UNITS.contains(&unit)
}

/// Fields named within `CONTEXT_RADIUS` tokens of `index`, nearest first
fn fields_by_distance(tokens: &[&str], index: usize) -> Vec<Field> {
    let start = index.saturating_sub(CONTEXT_RADIUS);
    let end = (index + CONTEXT_RADIUS + 1).min(tokens.len());

    let mut terms: Vec<(usize, usize, Field)> = (start..end)
        .filter(|&position| position != index)
        .filter_map(|position| {
            term_field(tokens, position).map(|field| (index.abs_diff(position), position, field))
        })
        .collect();
    terms.sort_unstable();

    let mut fields = Vec::with_capacity(2);
    for (_, _, field) in terms {
        if !fields.contains(&field) {
            fields.push(field);
        }
    }
    fields
}

/// Which field the token at `position` names, if any
///
/// "under bust" and "over bust" are split by normalization, so both halves
/// are read together.
fn term_field(tokens: &[&str], position: usize) -> Option<Field> {
    let token = tokens[position];
    let previous = position.checked_sub(1).map(|p| tokens[p]);
    let next_is_bust = tokens
        .get(position + 1)
        .is_some_and(|next| next.starts_with("bust"));

    if contains_any(token, UNDERBUST_TERMS)
        || (token == "under" && next_is_bust)
        || (token.starts_with("bust") && previous == Some("under"))
    {
        Some(Field::Underbust)
    } else if contains_any(token, OVERBUST_TERMS) || (token == "over" && next_is_bust) {
        Some(Field::Overbust)
    } else {
        None
    }
}

#[inline]
fn contains_any(token: &str, terms: &[&str]) -> bool {
    terms.iter().any(|term| token.contains(term))
}

fn first_untyped_other(numbers: &[NumericToken], typed: &[bool], assigned: u32) -> Option<u32> {
    numbers
        .iter()
        .zip(typed)
        .find(|(number, typed)| !**typed && number.value != assigned)
        .map(|(number, _)| number.value)
}
