//! Code-scan input: decode events coming from a scanner, and the optional
//! gate that drops repeated reads of the same code.

use chrono::NaiveDateTime;
use std::collections::HashMap;
use std::collections::VecDeque;
use std::io::BufRead;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanEvent {
    /// A code was read; the payload is the decoded text.
    Decoded(String),
    /// The frame contained no code. Never shown to the user.
    NotFound,
    /// Any other decoder failure.
    Failed(String),
}

/// Push-style source of decode events. `None` means the stream is over
/// (scanner unplugged, file consumed, dialog dismissed).
pub trait ScanSource {
    fn next_event(&mut self) -> Option<ScanEvent>;
}

/// One event per input line, as produced by keyboard-wedge scanners.
///
/// An empty line is a read with nothing decoded. Only the line terminator is
/// stripped: the payload is otherwise kept byte for byte.
pub struct LineScanSource<R: BufRead> {
    reader: R,
    done: bool,
}

impl<R: BufRead> LineScanSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            done: false,
        }
    }
}

impl<R: BufRead> ScanSource for LineScanSource<R> {
    fn next_event(&mut self) -> Option<ScanEvent> {
        if self.done {
            return None;
        }

        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => {
                self.done = true;
                None
            }
            Ok(_) => Some(line_to_event(&line)),
            Err(e) => {
                self.done = true;
                Some(ScanEvent::Failed(e.to_string()))
            }
        }
    }
}

/// Map one raw scanner line to its event.
pub fn line_to_event(line: &str) -> ScanEvent {
    let payload = strip_line_ending(line);
    if payload.is_empty() {
        ScanEvent::NotFound
    } else {
        ScanEvent::Decoded(payload.to_string())
    }
}

fn strip_line_ending(line: &str) -> &str {
    line.strip_suffix("\r\n")
        .or_else(|| line.strip_suffix('\n'))
        .unwrap_or(line)
}

/// Prepared list of events.
#[derive(Debug, Default, Clone)]
pub struct MemoryScanSource {
    events: VecDeque<ScanEvent>,
}

impl MemoryScanSource {
    pub fn new(events: impl IntoIterator<Item = ScanEvent>) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }

    /// One `Decoded` event per payload.
    pub fn from_codes<S: Into<String>>(codes: impl IntoIterator<Item = S>) -> Self {
        Self::new(codes.into_iter().map(|c| ScanEvent::Decoded(c.into())))
    }
}

impl ScanSource for MemoryScanSource {
    fn next_event(&mut self) -> Option<ScanEvent> {
        self.events.pop_front()
    }
}

/// Drops a decode identical to one accepted for the same folder within the
/// last `window_secs` seconds. A zero window lets everything through.
#[derive(Debug, Default, Clone)]
pub struct ScanGate {
    window_secs: u64,
    last_seen: HashMap<(usize, String), NaiveDateTime>,
}

impl ScanGate {
    pub fn new(window_secs: u64) -> Self {
        Self {
            window_secs,
            last_seen: HashMap::new(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.window_secs > 0
    }

    /// Returns true when the decode should be recorded, and remembers it.
    pub fn admit(&mut self, folder: usize, payload: &str, at: NaiveDateTime) -> bool {
        if !self.is_enabled() {
            return true;
        }

        let key = (folder, payload.to_string());
        if let Some(prev) = self.last_seen.get(&key) {
            let elapsed = (at - *prev).num_seconds();
            if elapsed >= 0 && (elapsed as u64) < self.window_secs {
                return false;
            }
        }

        self.last_seen.insert(key, at);
        true
    }
}
