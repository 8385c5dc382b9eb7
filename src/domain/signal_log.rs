//! Signal log shown under the explored widget

use std::fmt::Display;

/// Append-only record of the signals an explored object emitted, oldest first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignalLog {
    entries: Vec<String>,
}

impl SignalLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one emission as `name(arg1, arg2, ...)`.
    pub fn record<A: Display>(&mut self, name: &str, args: &[A]) {
        let line = Self::format_entry(name, args);
        tracing::trace!("signal {}", line);
        self.entries.push(line);
    }

    pub fn format_entry<A: Display>(name: &str, args: &[A]) -> String {
        let rendered: Vec<String> = args.iter().map(ToString::to_string).collect();
        format!("{}({})", name, rendered.join(", "))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries joined by newlines, as the output pane displays them
    pub fn render(&self) -> String {
        self.entries.join("\n")
    }
}
