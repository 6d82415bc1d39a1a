use crate::commands::{print_json, Context};
use anyhow::Result;
use clap::Args;
use dialin_core::dto::FormattedStringDto;
use dialin_core::format::format_meeting_id;

#[derive(Debug, Args)]
pub struct MeetingIdArgs {
    /// Raw meeting ID; omit to format an absent ID
    pub id: Option<String>,
}

pub fn format_id(ctx: &Context<'_>, args: MeetingIdArgs) -> Result<()> {
    let formatted = format_meeting_id(args.id.as_deref());

    if ctx.json {
        print_json(&FormattedStringDto {
            input: args.id.unwrap_or_default(),
            formatted,
        })?;
    } else {
        println!("{formatted}");
    }

    Ok(())
}
