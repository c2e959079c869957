/// Maps byte offsets to 1-based line and column numbers.
///
/// Columns count characters from the start of the line, so a line holding
/// non-ASCII text reports the column an editor shows.
#[derive(Debug, Clone)]
pub struct LineIndex<'a> {
    source: &'a str,
    line_starts: Vec<u32>,
}

impl<'a> LineIndex<'a> {
    pub fn new(source: &'a str) -> Self {
        let mut line_starts = vec![0];
        for (i, b) in source.bytes().enumerate() {
            if b == b'\n' {
                line_starts.push(i as u32 + 1);
            }
        }
        Self {
            source,
            line_starts,
        }
    }

    /// 1-based (line, column). Offsets past the end land on the last line
    /// and count the missing bytes as columns.
    pub fn line_col(&self, offset: u32) -> (u32, u32) {
        let line = match self.line_starts.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert) => insert - 1,
        };
        let start = self.line_starts[line];
        let end = offset.min(self.source.len() as u32);
        let chars = match self.source.get(start as usize..end as usize) {
            Some(text) => text.chars().count() as u32,
            // Offset inside a multi-byte character.
            None => end.saturating_sub(start),
        };
        let col = chars + offset.saturating_sub(end);
        (line as u32 + 1, col + 1)
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}
