use once_cell::sync::Lazy;
use regex::Regex;

static CONTROL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\p{Cc}").unwrap());

/// True if `name`, once trimmed, is non-empty and carries no control characters.
///
/// Surrounding whitespace (including `\t` and `\n`) is dropped before the check.
pub fn is_valid_name(name: &str) -> bool {
    let name = name.trim();
    !name.is_empty() && !CONTROL_RE.is_match(name)
}
