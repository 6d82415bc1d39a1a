use crate::domain::ConferencePhoneInfo;

/// Produces the geographic toll sentence for a dial-in record by substituting
/// `{country}` and `{city}` in the locale template.
///
/// Both fields must be present and non-empty and a template must be supplied;
/// otherwise the result is empty. Substitution replaces the first occurrence
/// of each placeholder only, never globally.
pub fn format_toll_geography_info(info: &ConferencePhoneInfo, template: Option<&str>) -> String {
    let (Some(country), Some(city)) = (info.country.as_deref(), info.city.as_deref()) else {
        return String::new();
    };
    if country.is_empty() || city.is_empty() {
        return String::new();
    }
    let Some(template) = template else {
        return String::new();
    };

    template
        .replacen("{country}", country, 1)
        .replacen("{city}", city, 1)
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::format_toll_geography_info;
    use crate::domain::ConferencePhoneInfo;

    fn record(country: Option<&str>, city: Option<&str>) -> ConferencePhoneInfo {
        ConferencePhoneInfo {
            phone_number: "5551234567".to_string(),
            is_toll_free: false,
            country: country.map(str::to_string),
            city: city.map(str::to_string),
            conference_id: None,
        }
    }

    #[test]
    fn substitutes_country_and_city() {
        let info = record(Some("US"), Some("Seattle"));
        let out = format_toll_geography_info(&info, Some("Calling from {country}, {city}"));
        assert_eq!(out, "Calling from US, Seattle");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let info = record(Some("US"), Some("Seattle"));
        let out = format_toll_geography_info(&info, Some("  {country}, {city}  "));
        assert_eq!(out, "US, Seattle");
    }

    #[test]
    fn missing_country_or_city_yields_empty() {
        assert_eq!(
            format_toll_geography_info(&record(None, Some("Seattle")), Some("{country}, {city}")),
            ""
        );
        assert_eq!(
            format_toll_geography_info(&record(Some("US"), None), Some("{country}, {city}")),
            ""
        );
        assert_eq!(
            format_toll_geography_info(&record(Some(""), Some("Seattle")), Some("{country}, {city}")),
            ""
        );
    }

    #[test]
    fn missing_template_yields_empty() {
        assert_eq!(
            format_toll_geography_info(&record(Some("US"), Some("Seattle")), None),
            ""
        );
    }

    #[test]
    fn substitution_is_first_occurrence_only() {
        let info = record(Some("US"), Some("Seattle"));
        let out = format_toll_geography_info(&info, Some("{country} and {country}"));
        assert_eq!(out, "US and {country}");
    }

    #[test]
    fn template_without_placeholders_passes_through_trimmed() {
        let info = record(Some("US"), Some("Seattle"));
        let out = format_toll_geography_info(&info, Some(" local rates apply "));
        assert_eq!(out, "local rates apply");
    }
}
