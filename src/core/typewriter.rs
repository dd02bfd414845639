use crate::constants::TYPEWRITER_DEFAULT_MS;

/// Reveals a fixed string one character per tick.
///
/// Construct a new instance to type the text again.
#[derive(Clone, Debug)]
pub struct Typewriter {
    chars: Vec<char>,
    index: usize,
    interval_ms: u32,
}

impl Typewriter {
    pub fn new(text: &str) -> Self {
        Self::with_interval(text, TYPEWRITER_DEFAULT_MS)
    }

    pub fn with_interval(text: &str, interval_ms: u32) -> Self {
        Self {
            chars: text.chars().collect(),
            index: 0,
            interval_ms,
        }
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Next character to append, or `None` once everything is revealed.
    pub fn tick(&mut self) -> Option<char> {
        let c = self.chars.get(self.index).copied()?;
        self.index += 1;
        Some(c)
    }

    pub fn is_done(&self) -> bool {
        self.index >= self.chars.len()
    }

    pub fn revealed(&self) -> String {
        self.chars[..self.index].iter().collect()
    }
}
