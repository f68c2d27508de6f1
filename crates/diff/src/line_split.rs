use once_cell::sync::Lazy;
use regex::Regex;

/// Any recognized newline convention. CRLF comes first so it is consumed
/// as a single terminator.
static NEWLINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\r\n|\r|\n").expect("newline pattern"));

/// Split text into lines, keeping a trailing empty line if the text ends
/// with a terminator: `"a\nb\n"` yields `["a", "b", ""]`. An empty input
/// yields no lines at all.
pub fn split_lines(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    NEWLINE.split(text).map(str::to_owned).collect()
}
