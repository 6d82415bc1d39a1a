/// Formats a meeting ID for display: a 9-character ID is split into three
/// groups of 3 with a trailing `#`. Anything else is assumed to be already
/// formatted or non-standard and passes through unchanged; an absent or empty
/// ID yields the empty string.
pub fn format_meeting_id(raw: Option<&str>) -> String {
    let Some(id) = raw else {
        return String::new();
    };
    if id.is_empty() {
        return String::new();
    }

    let chars: Vec<char> = id.chars().collect();
    if chars.len() != 9 {
        return id.to_string();
    }

    let first: String = chars[..3].iter().collect();
    let middle: String = chars[3..6].iter().collect();
    let last: String = chars[6..].iter().collect();
    format!("{} {} {}#", first, middle, last)
}
