use crate::commands::{print_json, Context};
use anyhow::Result;
use clap::Args;
use dialin_core::dto::FormattedStringDto;
use dialin_core::format::format_phone_number;

#[derive(Debug, Args)]
pub struct PhoneArgs {
    /// Raw phone number, digits with an optional leading 1 or +<country code>
    pub number: String,
    /// Do not promote bare 11-digit North American numbers to +1 form
    #[arg(long)]
    pub no_country_code: bool,
}

pub fn format_number(ctx: &Context<'_>, args: PhoneArgs) -> Result<()> {
    let formatted = format_phone_number(&args.number, !args.no_country_code);

    if ctx.json {
        print_json(&FormattedStringDto {
            input: args.number,
            formatted,
        })?;
    } else {
        println!("{formatted}");
    }

    Ok(())
}
