/// Cursor over the characters of a SMILES string.
///
/// Positions are character offsets into the input, which for valid
/// (ASCII) SMILES are also byte offsets.
#[derive(Debug, Clone)]
pub struct CharBuffer {
    chars: Vec<char>,
    pos: usize,
}

impl CharBuffer {
    pub fn new(s: &str) -> Self {
        Self {
            chars: s.chars().collect(),
            pos: 0,
        }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn has_remaining(&self) -> bool {
        self.pos < self.chars.len()
    }

    pub fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    pub fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    /// Consume and return the next character.
    pub fn next_char(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += 1;
        Some(c)
    }

    /// Consume the next character if it is `c`.
    pub fn next_is(&mut self, c: char) -> bool {
        if self.peek() == Some(c) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Consume a single decimal digit.
    pub fn digit(&mut self) -> Option<u32> {
        let d = self.peek()?.to_digit(10)?;
        self.pos += 1;
        Some(d)
    }

    /// Consume up to `max_digits` decimal digits; `None` if there are none.
    pub fn number(&mut self, max_digits: usize) -> Option<u32> {
        let mut value: Option<u32> = None;
        for _ in 0..max_digits {
            match self.peek().and_then(|c| c.to_digit(10)) {
                Some(d) => {
                    value = Some(value.unwrap_or(0) * 10 + d);
                    self.pos += 1;
                }
                None => break,
            }
        }
        value
    }

    /// Text from `start` up to the cursor.
    pub fn substring(&self, start: usize) -> String {
        self.chars[start.min(self.pos)..self.pos].iter().collect()
    }

    /// Everything after the cursor, consuming it.
    pub fn rest(&mut self) -> String {
        let s: String = self.chars[self.pos..].iter().collect();
        self.pos = self.chars.len();
        s
    }
}
