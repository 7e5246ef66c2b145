//! Paced tick loop driving the engagement controller.
//!
//! Runs one tick at a time on the calling thread, hands each tick's events
//! to an `EventSink` and sleeps between ticks. The delay only paces output.

use std::io;
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use aegis_core::constants::{DEFAULT_MAX_TICKS, TICK_DELAY_MS};
use aegis_core::events::EngagementStats;
use aegis_sim::{EngagementController, TickReport};

/// Receives the events of every tick.
pub trait EventSink {
    fn tick(&mut self, report: &TickReport) -> io::Result<()>;

    /// Called when the loop stops at the tick cap with entities still active.
    fn halted(&mut self, ticks: u64) -> io::Result<()>;
}

pub struct LoopOptions {
    pub tick_delay: Duration,
    pub max_ticks: u64,
}

impl Default for LoopOptions {
    fn default() -> Self {
        Self {
            tick_delay: Duration::from_millis(TICK_DELAY_MS),
            max_ticks: DEFAULT_MAX_TICKS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOutcome {
    pub ticks: u64,
    /// False when the tick cap stopped the run.
    pub completed: bool,
    pub stats: EngagementStats,
}

/// Tick until no entities remain (at least once, so an empty scenario still
/// reports its summary) or until `max_ticks` is reached.
pub fn run(
    engine: &mut EngagementController,
    options: &LoopOptions,
    sink: &mut impl EventSink,
) -> io::Result<RunOutcome> {
    let mut next_tick_time = Instant::now();

    loop {
        let report = engine.tick();
        sink.tick(&report)?;

        if !engine.has_active_entities() {
            break;
        }
        if engine.tick_count() >= options.max_ticks {
            warn!(
                ticks = engine.tick_count(),
                contacts = engine.contacts().len(),
                interceptors = engine.interceptors().len(),
                "tick cap reached with entities still active"
            );
            sink.halted(engine.tick_count())?;
            return Ok(RunOutcome {
                ticks: engine.tick_count(),
                completed: false,
                stats: *engine.stats(),
            });
        }

        pace(&mut next_tick_time, options.tick_delay);
    }

    debug!(ticks = engine.tick_count(), "engagement resolved");
    Ok(RunOutcome {
        ticks: engine.tick_count(),
        completed: true,
        stats: *engine.stats(),
    })
}

/// Sleep until the next tick is due. A loop that fell far behind resets its
/// schedule instead of bursting.
fn pace(next_tick_time: &mut Instant, delay: Duration) {
    if delay.is_zero() {
        return;
    }
    *next_tick_time += delay;
    let now = Instant::now();
    if *next_tick_time > now {
        std::thread::sleep(*next_tick_time - now);
    } else if now - *next_tick_time > delay * 2 {
        *next_tick_time = now;
    }
}
