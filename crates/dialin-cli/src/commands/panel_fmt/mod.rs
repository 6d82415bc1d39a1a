use dialin_core::dto::DialInPanelDto;
use dialin_core::locale::PhoneInfoStrings;

pub(crate) fn print_human(panel: &DialInPanelDto, strings: &PhoneInfoStrings) {
    println!("{}", panel_body(panel, strings));
}

pub(crate) fn panel_body(panel: &DialInPanelDto, strings: &PhoneInfoStrings) -> String {
    let mut lines = vec![strings.modal_title.clone(), String::new()];

    if panel.phones.is_empty() {
        lines.push(strings.no_phone_available.clone());
        return lines.join("\n");
    }

    lines.push(format!("{}:", strings.dial_in_label));
    for entry in &panel.phones {
        lines.push(format!("  {}  {}", entry.display_number, entry.toll_label));
        if !entry.geography.is_empty() {
            lines.push(format!("    {}", entry.geography));
        }
    }

    lines.push(format!("{}:", strings.meeting_id_label));
    lines.push(format!("  {}", panel.meeting_id));
    lines.push(strings.wait_label.clone());

    lines.join("\n")
}
