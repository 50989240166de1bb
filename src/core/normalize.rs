//! Reduction of punctuated input to its bare digit sequence.

/// Strip every character that is not an ASCII digit `0`-`9`.
///
/// Never fails; empty or digit-free input yields an empty string.
/// Non-ASCII digits (e.g. Arabic-Indic or fullwidth) are removed too.
pub fn normalize(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// [`normalize`] for possibly absent input; `None` is treated as `""`.
pub fn normalize_opt(input: Option<&str>) -> String {
    input.map(normalize).unwrap_or_default()
}
