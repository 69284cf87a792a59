use crate::ir::{Event, Severity};
use once_cell::sync::Lazy;
use regex::Regex;

/// Shape of a ticky line, searched anywhere in the raw line:
///
/// ```text
/// ticky: <SEVERITY>[pid]: <message> [pid] (<user>)
/// ```
///
/// The pids and the colon are optional; the trailing pid may also be written
/// bare as `#1234`. Exactly one separator space in front of the pid or user
/// is left out of the lazy message group, so any further whitespace stays in
/// the message. The user group is greedy up to the closing parenthesis at end
/// of line.
const TICKY_PATTERN: &str =
    r"ticky: ([\w+]*)(?:\[#?[0-9]*\])?:? ([\w' ]*?) ?(?:(?:\[[#0-9]*|#[0-9]*)\]?\]? ?)?\((.*)\)$";

static SHARED: Lazy<LineClassifier> = Lazy::new(LineClassifier::new);

/// Parses single raw log lines into [`Event`]s.
///
/// Classification is a pure function of the line, so one classifier can be
/// shared freely between threads.
#[derive(Debug, Clone)]
pub struct LineClassifier {
    pattern: Regex,
}

impl Default for LineClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl LineClassifier {
    /// Compiles the ticky line pattern.
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(TICKY_PATTERN).expect("ticky line pattern is valid"),
        }
    }

    /// Process-wide classifier, compiled on first use.
    pub fn shared() -> &'static LineClassifier {
        &SHARED
    }

    /// Extracts an [`Event`] from `line`, or `None` if the line does not have
    /// the ticky shape.
    ///
    /// A trailing line terminator (`\n` or `\r\n`) is ignored. Captured fields
    /// are returned verbatim.
    pub fn classify(&self, line: &str) -> Option<Event> {
        let line = line.trim_end_matches(['\r', '\n']);
        let caps = self.pattern.captures(line)?;

        Some(Event {
            severity: Severity::parse(&caps[1]),
            message: caps[2].to_string(),
            user: caps[3].to_string(),
        })
    }

}

/// Classifies `line` with the shared classifier.
pub fn classify(line: &str) -> Option<Event> {
    LineClassifier::shared().classify(line)
}
