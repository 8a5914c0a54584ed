//! Slot-ingest trigger command handler.

use cellwatch_core::{Command as CoreCommand, CommandResult, Monitor};

use crate::cli::{GlobalOpts, IngestArgs};
use crate::error::CliError;
use crate::output;

use super::util;

pub async fn handle(
    monitor: &Monitor,
    args: IngestArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let datetime = args
        .datetime
        .as_deref()
        .map(|raw| util::parse_datetime(raw, "datetime"))
        .transpose()?;

    let result = monitor
        .execute(CoreCommand::IngestSlot { datetime })
        .await?;

    if let CommandResult::SlotIngested { slot, sent_events } = result {
        output::print_output(
            &format!("ingested slot {slot}: {sent_events} events"),
            global.quiet,
        );
    }
    Ok(())
}
