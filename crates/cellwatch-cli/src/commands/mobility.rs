//! Mobility command handlers.

use tabled::Tabled;

use cellwatch_core::{MobilityFlow, Monitor, ProvinceFlow};

use crate::cli::{GlobalOpts, MobilityArgs, MobilityCommand};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table rows ──────────────────────────────────────────────────────

#[derive(Tabled)]
struct FlowRow {
    #[tabled(rename = "From")]
    from: u32,
    #[tabled(rename = "To")]
    to: u32,
    #[tabled(rename = "Volume")]
    volume: String,
}

impl From<&MobilityFlow> for FlowRow {
    fn from(f: &MobilityFlow) -> Self {
        Self {
            from: f.from_cell_id,
            to: f.to_cell_id,
            volume: format!("{:.1}", f.volume),
        }
    }
}

#[derive(Tabled)]
struct ProvinceRow {
    #[tabled(rename = "Province")]
    provincia: String,
    #[tabled(rename = "Outbound")]
    outbound: String,
    #[tabled(rename = "Inbound")]
    inbound: String,
    #[tabled(rename = "Total")]
    total: String,
}

impl From<&ProvinceFlow> for ProvinceRow {
    fn from(p: &ProvinceFlow) -> Self {
        Self {
            provincia: p.provincia.clone(),
            outbound: format!("{:.1}", p.outbound),
            inbound: format!("{:.1}", p.inbound),
            total: format!("{:.1}", p.total),
        }
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    monitor: &Monitor,
    args: MobilityArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        MobilityCommand::Flows {
            hour,
            cell,
            provincia,
            limit,
        } => {
            let hour = util::resolve_hour(hour.as_deref(), monitor)?;
            let mut flows = monitor
                .mobility_flows_at(hour, cell, provincia.as_deref())
                .await?;
            flows.sort_by(|a, b| b.volume.total_cmp(&a.volume));
            flows.truncate(limit);

            let out = output::render_list(&global.output, &flows, |f| FlowRow::from(f), |f| {
                format!("{}->{}", f.from_cell_id, f.to_cell_id)
            });
            output::print_output(&out, global.quiet);
            Ok(())
        }

        MobilityCommand::Provinces => {
            let mut provinces: Vec<ProvinceFlow> = monitor
                .provinces_snapshot()
                .iter()
                .map(|p| (**p).clone())
                .collect();
            provinces.sort_by(|a, b| b.total.total_cmp(&a.total));

            let out = output::render_list(&global.output, &provinces, |p| ProvinceRow::from(p), |p| {
                p.provincia.clone()
            });
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}
