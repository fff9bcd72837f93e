use super::MIN_LINE_REMAINDER;

/// Cursor over the unconsumed remainder of one input line.
///
/// Consuming a token advances the offset; the underlying bytes are never
/// shifted or rewritten.
#[derive(Debug, Clone)]
pub struct LineCursor<'a> {
    line: &'a [u8],
    pos: usize,
}

impl<'a> LineCursor<'a> {
    pub fn new(line: &'a [u8]) -> Self {
        Self { line, pos: 0 }
    }

    /// Bytes not yet consumed.
    pub fn remaining(&self) -> &'a [u8] {
        &self.line[self.pos..]
    }

    pub fn remaining_len(&self) -> usize {
        self.line.len() - self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.remaining_len() == 0
    }

    /// Take the leading run of ASCII alphanumerics, then drop at most one
    /// delimiter byte after it.
    ///
    /// The run is empty when the cursor sits on a delimiter; that delimiter
    /// is still consumed so repeated calls always make progress.
    pub fn next_word(&mut self) -> &'a [u8] {
        let rest = self.remaining();
        let run = rest
            .iter()
            .take_while(|b| b.is_ascii_alphanumeric())
            .count();
        let token = &rest[..run];
        self.pos = (self.pos + run + 1).min(self.line.len());
        token
    }

    /// Tokens of this line under the remainder threshold.
    pub fn tokens(self) -> Tokens<'a> {
        Tokens { cursor: self }
    }
}

/// Yields tokens while the line still has `MIN_LINE_REMAINDER` bytes left.
///
/// Short tails (a trailing newline, a two-letter word at the end) are never
/// visited.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    cursor: LineCursor<'a>,
}

impl<'a> Tokens<'a> {
    /// Bytes the iterator has not consumed yet.
    pub fn remaining(&self) -> &'a [u8] {
        self.cursor.remaining()
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor.remaining_len() < MIN_LINE_REMAINDER {
            return None;
        }
        Some(self.cursor.next_word())
    }
}
