//! Reporting sinks for agent events: human-readable console text and JSON lines.

use std::io::{self, Write};

use crate::agent::{AgentEvent, Reporter};

/// Separator used between node labels in traces.
pub const DEFAULT_SEPARATOR: &str = " -> ";

const RULE: &str = "-------------------------------";

/// Join node labels into a readable trace, e.g. `Palidez -> Labios palidos`.
pub fn format_trace<S: AsRef<str>>(nodes: &[S], separator: &str) -> String {
    nodes
        .iter()
        .map(|n| n.as_ref())
        .collect::<Vec<_>>()
        .join(separator)
}

/// Writes each event as plain text.
pub struct ConsoleReporter<W: Write> {
    out: W,
    separator: String,
}

impl ConsoleReporter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_event(&mut self, event: &AgentEvent) -> io::Result<()> {
        match event {
            AgentEvent::AttemptStarted { strategy, symptom } => {
                writeln!(self.out, "Starting {} search from: '{}'...", strategy, symptom)?;
            }
            AgentEvent::Traversal { strategy, order, .. } => {
                writeln!(
                    self.out,
                    "{} traversal order: {}",
                    strategy,
                    format_trace(order, &self.separator)
                )?;
            }
            AgentEvent::Verdict {
                strategy,
                goal,
                positive,
                path,
            } => {
                writeln!(self.out, "--- Final diagnosis ({}) ---", strategy)?;
                if *positive {
                    writeln!(self.out, "Result: patient has {}", goal)?;
                    writeln!(
                        self.out,
                        "Diagnostic path: {}",
                        format_trace(path, &self.separator)
                    )?;
                } else {
                    writeln!(self.out, "Result: patient does not have {}", goal)?;
                }
                writeln!(self.out)?;
                writeln!(self.out, "{}", RULE)?;
            }
        }
        self.out.flush()
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn report(&mut self, event: &AgentEvent) {
        if let Err(e) = self.write_event(event) {
            log::warn!("Failed to write report: {}", e);
        }
    }
}

/// Writes each event as one JSON object per line.
pub struct JsonReporter<W: Write> {
    out: W,
}

impl JsonReporter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> JsonReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for JsonReporter<W> {
    fn report(&mut self, event: &AgentEvent) {
        let result = serde_json::to_writer(&mut self.out, event)
            .map_err(io::Error::from)
            .and_then(|_| writeln!(self.out));
        if let Err(e) = result {
            log::warn!("Failed to write JSON report: {}", e);
        }
    }
}
