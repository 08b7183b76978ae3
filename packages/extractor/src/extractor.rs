// Interface Extractor
//
// Line-oriented state machine that turns the raw text of one source file
// into a sequence of `InterfaceEntry` records. Two states only: outside
// any declaration, or inside the one currently being accumulated. There
// is no lookahead and no brace-depth tracking, so the first line that is
// exactly `}` closes the current interface even when that brace belongs
// to an inline object type.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::entities::{InterfaceEntry, PropertyEntry};

static INTERFACE_OPEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^interface\s+(\w+)\s*\{").unwrap());
static PROPERTY: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*(\w+)(\?)?:\s*([^;]+)").unwrap());

/// Extraction state. The inside variant owns the entry being accumulated,
/// so an unclosed interface is dropped simply by never leaving the state.
enum State {
    Outside,
    InsideInterface(InterfaceEntry),
}

/// Line-oriented extractor for interface declarations.
///
/// One extractor instance covers one file; state never carries across
/// files or runs.
pub struct InterfaceExtractor {
    state: State,
    pending_description: String,
    entries: Vec<InterfaceEntry>,
}

impl InterfaceExtractor {
    pub fn new() -> Self {
        Self {
            state: State::Outside,
            pending_description: String::new(),
            entries: Vec::new(),
        }
    }

    /// Extract all interface entries from one file's text.
    pub fn extract(source: &str) -> Vec<InterfaceEntry> {
        let mut extractor = Self::new();
        for line in source.lines() {
            extractor.process_line(line);
        }
        extractor.finish()
    }

    /// Feed one physical line to the state machine.
    pub fn process_line(&mut self, line: &str) {
        let trimmed = line.trim();

        // An opener always starts a fresh entry, even while inside an
        // unfinished one, which is then silently dropped.
        if let Some(caps) = INTERFACE_OPEN.captures(trimmed) {
            let entry = InterfaceEntry::new(&caps[1], self.pending_description.trim());
            self.state = State::InsideInterface(entry);
            self.pending_description.clear();
            return;
        }

        if trimmed == "}" {
            if let State::InsideInterface(entry) =
                std::mem::replace(&mut self.state, State::Outside)
            {
                self.entries.push(entry);
            }
            return;
        }

        if let State::InsideInterface(entry) = &mut self.state {
            if let Some(caps) = PROPERTY.captures(trimmed) {
                entry.properties.push(PropertyEntry {
                    name: caps[1].to_string(),
                    type_annotation: caps[3].trim().to_string(),
                    required: caps.get(2).is_none(),
                });
            }
            // Anything else inside the body is ignored.
        }
        // TODO: accumulate leading comment text into pending_description so
        // extracted entries actually carry a description.
    }

    /// End of input. An entry still open never saw its closing brace and
    /// is discarded along with its properties.
    pub fn finish(self) -> Vec<InterfaceEntry> {
        self.entries
    }
}

impl Default for InterfaceExtractor {
    fn default() -> Self {
        Self::new()
    }
}
