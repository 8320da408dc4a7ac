use fancy_regex::Regex;
use lazy_static::lazy_static;

use crate::base::Token;

const ID_LIST_NOISE_PATTERN: &str = r"[\[\]\s]+";

lazy_static! {
    static ref ID_LIST_NOISE: Regex = Regex::new(ID_LIST_NOISE_PATTERN).unwrap();
}

/// Split `text` into lowercase word tokens.
///
/// Newlines count as spaces and splitting happens on the ASCII space only, so
/// tabs and carriage returns stay inside their token. Empty fragments left by
/// consecutive spaces are dropped.
pub fn tokenize(text: &str) -> Vec<String> {
    text.replace('\n', " ")
        .split(' ')
        .filter(|word| !word.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Parse a stringified ID list such as `"[2, 7, 13, 3]"`.
///
/// Brackets and whitespace are removed before splitting on commas. Fragments
/// that are not a plain decimal ID (`-0`, `0x10`, `1e1`) come back as `None`;
/// empty fragments are skipped.
pub fn parse_ids(text: &str) -> Vec<Option<Token>> {
    let cleaned = ID_LIST_NOISE.replace_all(text, "");
    cleaned
        .split(',')
        .filter(|fragment| !fragment.is_empty())
        .map(|fragment| fragment.parse::<Token>().ok())
        .collect()
}
