//! Plain data row types written by output backends.

use sir_agent::HealthState;
use sir_sim::StepReport;

/// One agent's position and state at a snapshot tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgentSnapshotRow {
    pub agent_id: u32,
    pub tick:     u64,
    pub x:        f64,
    pub y:        f64,
    pub state:    HealthState,
}

/// Aggregate counts and event totals for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSummaryRow {
    pub tick:           u64,
    pub susceptible:    u64,
    pub infected:       u64,
    pub recovered:      u64,
    pub new_infections: u64,
    pub new_recoveries: u64,
    pub contacts:       u64,
}

impl From<&StepReport> for TickSummaryRow {
    fn from(report: &StepReport) -> Self {
        Self {
            tick:           report.tick.0,
            susceptible:    report.counts.susceptible as u64,
            infected:       report.counts.infected as u64,
            recovered:      report.counts.recovered as u64,
            new_infections: report.new_infections as u64,
            new_recoveries: report.new_recoveries as u64,
            contacts:       report.contacts as u64,
        }
    }
}
