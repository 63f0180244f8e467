/// Split text into lowercase words
///
/// Words are whitespace-separated with leading and trailing punctuation
/// removed, so "digging," and "digging" compare equal. Inner punctuation
/// such as the apostrophe in "doesn't" is kept.
pub fn words(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|token| {
            token
                .trim_matches(|c: char| !c.is_alphanumeric())
                .to_lowercase()
        })
        .filter(|word| !word.is_empty())
        .collect()
}
