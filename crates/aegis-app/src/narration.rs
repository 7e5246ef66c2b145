//! Presentation of engagement events: console narration or JSON lines.

use std::io::{self, Write};

use aegis_core::events::EngagementEvent;
use aegis_sim::TickReport;

use crate::game_loop::EventSink;

/// One line of narration for an event.
pub fn describe(event: &EngagementEvent) -> String {
    match event {
        EngagementEvent::ContactSpawned {
            contact,
            category,
            position,
        } => format!("[RADAR] New contact {contact} ({category}) at {position}"),
        EngagementEvent::ContactEscaped {
            contact, position, ..
        } => format!("[RADAR] Contact {contact} left the operations area at {position}."),
        EngagementEvent::InterceptorLaunched {
            interceptor,
            target,
            category,
            target_position,
        } => format!(
            "[LAUNCHER] Threat detected! Launching {interceptor} at: HOSTILE {target} ({category}) {target_position}"
        ),
        EngagementEvent::InterceptorPursuing {
            interceptor,
            target,
            fuel_remaining,
        } => format!(" -> {interceptor} pursuing target {target} (fuel: {fuel_remaining})"),
        EngagementEvent::InterceptorLostTarget {
            interceptor,
            target,
        } => format!(
            ">> [AUTO-DESTRUCT] {interceptor}: target {target} is gone. Self-destructing."
        ),
        EngagementEvent::InterceptorFuelExhausted {
            interceptor,
            target,
        } => format!(">> [FAIL] {interceptor}: fuel exhausted chasing {target}. Interceptor down."),
        EngagementEvent::TargetDestroyed {
            interceptor,
            target,
            category,
            position,
        } => format!(">> [BOOM] HIT by {interceptor}! Destroyed: HOSTILE {target} ({category}) {position}"),
        EngagementEvent::EngagementComplete { ticks, stats } => format!(
            "FINAL REPORT after {ticks} turns: {} destroyed, {} escaped, {} interceptors fired \
             ({} out of fuel, {} lost target).",
            stats.contacts_destroyed,
            stats.contacts_escaped,
            stats.interceptors_launched,
            stats.interceptors_out_of_fuel,
            stats.interceptors_lost_target,
        ),
    }
}

/// Human-readable narration with a header per tick.
pub struct Narrator<W: Write> {
    out: W,
}

impl<W: Write> Narrator<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

const RULE: &str = "================================================";

impl<W: Write> EventSink for Narrator<W> {
    fn tick(&mut self, report: &TickReport) -> io::Result<()> {
        writeln!(self.out, "\n--- SIMULATION TURN {} ---", report.tick)?;
        for event in &report.events {
            if matches!(event, EngagementEvent::EngagementComplete { .. }) {
                writeln!(self.out, "\n{RULE}\n {}\n{RULE}", describe(event))?;
            } else {
                writeln!(self.out, "{}", describe(event))?;
            }
        }
        self.out.flush()
    }

    fn halted(&mut self, ticks: u64) -> io::Result<()> {
        writeln!(
            self.out,
            "\n{RULE}\n Simulation halted after {ticks} turns with contacts still active.\n{RULE}"
        )?;
        self.out.flush()
    }
}

/// One JSON object per event, tagged with the tick that produced it.
pub struct JsonLines<W: Write> {
    out: W,
}

impl<W: Write> JsonLines<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> EventSink for JsonLines<W> {
    fn tick(&mut self, report: &TickReport) -> io::Result<()> {
        for event in &report.events {
            let line = serde_json::json!({ "tick": report.tick, "event": event });
            writeln!(self.out, "{line}")?;
        }
        self.out.flush()
    }

    fn halted(&mut self, ticks: u64) -> io::Result<()> {
        let line = serde_json::json!({ "tick": ticks, "halted": true });
        writeln!(self.out, "{line}")?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aegis_core::enums::ContactCategory;
    use aegis_core::events::EngagementStats;
    use aegis_core::types::{ContactId, InterceptorId, Vector3};

    #[test]
    fn test_describe_hit_names_target() {
        let line = describe(&EngagementEvent::TargetDestroyed {
            interceptor: InterceptorId(3),
            target: ContactId(2),
            category: ContactCategory::Fighter,
            position: Vector3::new(-1200.4, 800.0, 1500.9),
        });
        assert_eq!(
            line,
            ">> [BOOM] HIT by M-3! Destroyed: HOSTILE #2 (FIGHTER) [x:-1200 y:800 z:1500]"
        );
    }

    #[test]
    fn test_describe_pursuit() {
        let line = describe(&EngagementEvent::InterceptorPursuing {
            interceptor: InterceptorId(1),
            target: ContactId(1),
            fuel_remaining: 17,
        });
        assert_eq!(line, " -> M-1 pursuing target #1 (fuel: 17)");
    }

    #[test]
    fn test_narrator_frames_final_report() {
        let report = TickReport {
            tick: 9,
            events: vec![EngagementEvent::EngagementComplete {
                ticks: 9,
                stats: EngagementStats {
                    contacts_spawned: 1,
                    contacts_destroyed: 1,
                    interceptors_launched: 1,
                    ..Default::default()
                },
            }],
        };
        let mut narrator = Narrator::new(Vec::new());
        narrator.tick(&report).unwrap();
        let text = String::from_utf8(narrator.into_inner()).unwrap();
        assert!(text.starts_with("\n--- SIMULATION TURN 9 ---\n"));
        assert!(text.contains("FINAL REPORT after 9 turns: 1 destroyed, 0 escaped"));
        assert!(text.contains(RULE));
    }

    #[test]
    fn test_json_lines_one_object_per_event() {
        let report = TickReport {
            tick: 4,
            events: vec![
                EngagementEvent::ContactEscaped {
                    contact: ContactId(5),
                    category: ContactCategory::Missile,
                    position: Vector3::new(9001.0, 0.0, 0.0),
                },
                EngagementEvent::InterceptorLostTarget {
                    interceptor: InterceptorId(2),
                    target: ContactId(5),
                },
            ],
        };
        let mut sink = JsonLines::new(Vec::new());
        sink.tick(&report).unwrap();
        let text = String::from_utf8(sink.into_inner()).unwrap();
        let lines: Vec<serde_json::Value> = text
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["tick"], 4);
        assert_eq!(lines[0]["event"]["type"], "ContactEscaped");
        assert_eq!(lines[1]["event"]["interceptor"], 2);
    }
}
