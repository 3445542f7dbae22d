//! Simulation observer trait for progress reporting and data collection.

use sir_agent::{Population, SirCounts};
use sir_core::Tick;

use crate::StepReport;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, report: &StepReport) {
///         if report.tick.0 % self.interval == 0 {
///             println!("{}: {}", report.tick, report.counts);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called before tick `tick` is processed.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after a tick completes and its invariants have been checked.
    fn on_tick_end(&mut self, _report: &StepReport) {}

    /// Called at snapshot intervals (every `config.output_interval_ticks`
    /// ticks, plus tick 0 when a run starts from scratch).
    ///
    /// Provides read-only access to every agent so renderers and output
    /// writers can record positions and states.
    fn on_snapshot(&mut self, _tick: Tick, _population: &Population) {}

    /// Called once after the final tick of [`Sim::run`][crate::Sim::run].
    fn on_sim_end(&mut self, _final_tick: Tick, _counts: SirCounts) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

/// Drive two observers from one run: `sim.run(&mut (writer, history))`.
impl<A: SimObserver, B: SimObserver> SimObserver for (A, B) {
    fn on_tick_start(&mut self, tick: Tick) {
        self.0.on_tick_start(tick);
        self.1.on_tick_start(tick);
    }

    fn on_tick_end(&mut self, report: &StepReport) {
        self.0.on_tick_end(report);
        self.1.on_tick_end(report);
    }

    fn on_snapshot(&mut self, tick: Tick, population: &Population) {
        self.0.on_snapshot(tick, population);
        self.1.on_snapshot(tick, population);
    }

    fn on_sim_end(&mut self, final_tick: Tick, counts: SirCounts) {
        self.0.on_sim_end(final_tick, counts);
        self.1.on_sim_end(final_tick, counts);
    }
}

/// Observers held by mutable reference work too.
impl<O: SimObserver + ?Sized> SimObserver for &mut O {
    fn on_tick_start(&mut self, tick: Tick) {
        (**self).on_tick_start(tick);
    }

    fn on_tick_end(&mut self, report: &StepReport) {
        (**self).on_tick_end(report);
    }

    fn on_snapshot(&mut self, tick: Tick, population: &Population) {
        (**self).on_snapshot(tick, population);
    }

    fn on_sim_end(&mut self, final_tick: Tick, counts: SirCounts) {
        (**self).on_sim_end(final_tick, counts);
    }
}
