use crate::domain::ConferencePhoneInfo;
use crate::dto::{DialInPanelDto, PhoneEntryDto};
use crate::format::{format_meeting_id, format_phone_number, format_toll_geography_info};
use crate::locale::PhoneInfoStrings;

/// Builds the display panel for a call's dial-in details.
///
/// Entries keep the order of the input records. The shared meeting ID comes
/// from the first record's conference id; an empty record list yields an
/// empty panel.
pub fn build_panel(records: &[ConferencePhoneInfo], strings: &PhoneInfoStrings) -> DialInPanelDto {
    let phones = records
        .iter()
        .map(|info| PhoneEntryDto {
            display_number: format_phone_number(&info.phone_number, true),
            toll_label: if info.is_toll_free {
                strings.toll_free_label.clone()
            } else {
                strings.toll_label.clone()
            },
            geography: format_toll_geography_info(info, Some(&strings.toll_geo_template)),
        })
        .collect();

    let meeting_id = format_meeting_id(
        records
            .first()
            .and_then(|info| info.conference_id.as_deref()),
    );

    DialInPanelDto { phones, meeting_id }
}
