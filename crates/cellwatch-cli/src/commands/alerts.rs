//! Alert command handlers.

use tabled::Tabled;

use cellwatch_config::Config;
use cellwatch_core::analytics::severity;
use cellwatch_core::{Alert, Command as CoreCommand, CommandResult, Monitor};

use crate::cli::{AlertsArgs, AlertsCommand, GlobalOpts};
use crate::config::thresholds_for;
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct AlertRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Time")]
    time: String,
    #[tabled(rename = "Severity")]
    severity: String,
    #[tabled(rename = "Cell")]
    cell: u32,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Message")]
    message: String,
    #[tabled(rename = "Resolved")]
    resolved: String,
}

impl AlertRow {
    fn new(a: &Alert, color: bool) -> Self {
        Self {
            id: a.id.clone(),
            time: a.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
            severity: severity_label(a, color),
            cell: a.cell_id,
            kind: format!("{:?}", a.kind).to_lowercase(),
            message: a.message.clone(),
            resolved: if a.resolved { "yes" } else { "no" }.into(),
        }
    }
}

fn severity_label(a: &Alert, color: bool) -> String {
    use owo_colors::OwoColorize;
    let label = a.severity.to_string();
    if !color {
        return label;
    }
    match a.severity {
        cellwatch_core::AlertSeverity::Critical => label.red().bold().to_string(),
        cellwatch_core::AlertSeverity::High => label.red().to_string(),
        cellwatch_core::AlertSeverity::Medium => label.yellow().to_string(),
        cellwatch_core::AlertSeverity::Low => label.blue().to_string(),
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    monitor: &Monitor,
    args: AlertsArgs,
    global: &GlobalOpts,
    config: &Config,
) -> Result<(), CliError> {
    match args.command {
        AlertsCommand::List {
            since,
            unresolved,
            limit,
        } => {
            let since = since
                .as_deref()
                .map(|raw| util::parse_datetime(raw, "since"))
                .transpose()?;
            let mut alerts = monitor.alerts_since(since).await?;

            if unresolved {
                alerts.retain(|a| !a.resolved);
            }

            // Triage order: critical first, ties in arrival order.
            severity::triage_sort(&mut alerts, |a| a.severity);

            if let Some(limit) = limit {
                alerts.truncate(limit);
            }

            let color = output::should_color(&global.color);
            let out = output::render_list(
                &global.output,
                &alerts,
                |a| AlertRow::new(a, color),
                |a| a.id.clone(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        AlertsCommand::Resolve { id } => {
            if !util::confirm(&format!("Resolve alert {id}?"), global.yes)? {
                return Ok(());
            }
            monitor
                .execute(CoreCommand::ResolveAlert { id })
                .await?;
            if !global.quiet {
                eprintln!("Alert resolved");
            }
            Ok(())
        }

        AlertsCommand::Generate {
            hour,
            warn,
            crit,
            limit,
        } => {
            let hour = util::resolve_hour(hour.as_deref(), monitor)?;
            let thresholds = thresholds_for(warn, crit, &config.defaults)?;

            let result = monitor
                .execute(CoreCommand::GenerateCongestionAlerts {
                    hour,
                    limit,
                    thresholds,
                })
                .await?;

            let created = match result {
                CommandResult::AlertsGenerated(alerts) => alerts,
                _ => Vec::new(),
            };

            if created.is_empty() {
                output::print_output("no cells crossed the thresholds", global.quiet);
                return Ok(());
            }

            let color = output::should_color(&global.color);
            let out = output::render_list(
                &global.output,
                &created,
                |a| AlertRow::new(a, color),
                |a| a.id.clone(),
            );
            output::print_output(&out, global.quiet);
            if !global.quiet {
                eprintln!("{} alert(s) generated", created.len());
            }
            Ok(())
        }
    }
}
