use crate::commands::{panel_fmt, print_json, Context};
use crate::error::{invalid_input, not_found};
use anyhow::{Context as _, Result};
use clap::Args;
use dialin_core::domain::ConferencePhoneInfo;
use dialin_core::panel::build_panel;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// JSON file with the call's dial-in records
    #[arg(long)]
    pub records: Option<PathBuf>,
}

pub fn show_panel(ctx: &Context<'_>, args: ShowArgs) -> Result<()> {
    let path = args
        .records
        .or_else(|| ctx.config.records_path.clone())
        .ok_or_else(|| {
            invalid_input("no records file: pass --records or set records_path in the config")
        })?;

    if !path.exists() {
        return Err(not_found(format!("records file {}", path.display())));
    }

    let contents = fs::read_to_string(&path)
        .with_context(|| format!("read records file {}", path.display()))?;
    let records: Vec<ConferencePhoneInfo> = serde_json::from_str(&contents)
        .map_err(|err| invalid_input(format!("parse records file: {err}")))?;
    debug!(count = records.len(), "records loaded");

    let panel = build_panel(&records, &ctx.config.strings);

    if ctx.json {
        print_json(&panel)?;
    } else {
        panel_fmt::print_human(&panel, &ctx.config.strings);
    }

    Ok(())
}
