/// Formats a raw dial-in number for display using North-American 3-3-4
/// grouping.
///
/// With `apply_country_code_prefix`, an 11-character number starting with `1`
/// is treated as a North-American number missing its leading plus and gets one
/// prepended before formatting. A leading `1` becomes the country-code prefix
/// `"1 "`; a leading `+` takes the next character with it as the prefix (the
/// second character is not validated). Working numbers shorter than 4 or
/// longer than 10 characters are returned ungrouped behind the prefix.
///
/// Character content is not validated; non-digits pass through positionally.
pub fn format_phone_number(raw: &str, apply_country_code_prefix: bool) -> String {
    if raw.is_empty() {
        return raw.to_string();
    }

    // Counts and slices are in characters, never bytes.
    let mut chars: Vec<char> = raw.chars().collect();

    if apply_country_code_prefix && chars[0] == '1' && chars.len() == 11 {
        chars.insert(0, '+');
    }

    let (country_code, number): (String, &[char]) = match chars[0] {
        '1' => ("1 ".to_string(), &chars[1..]),
        '+' => {
            let taken = chars.len().min(2);
            let mut code: String = chars[..taken].iter().collect();
            code.push(' ');
            (code, &chars[taken..])
        }
        _ => (String::new(), &chars[..]),
    };

    let n = number.len();

    if n < 4 || n > 10 {
        // Too short to group, or already internationalized beyond the NA
        // layout. Drop the space behind the country code.
        let digits: String = number.iter().collect();
        return format!("{}{}", country_code.replacen(' ', "", 1), digits);
    }

    let area: String = number[..3].iter().collect();

    if n < 7 {
        let rest: String = number[3..].iter().collect();
        return format!("{}({}) {}", country_code, area, rest);
    }

    let exchange: String = number[3..6].iter().collect();
    let line: String = number[6..].iter().collect();
    format!("{}({}) {}-{}", country_code, area, exchange, line)
}
