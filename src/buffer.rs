use std::ops::Range;

/// Cached line start offsets for fast line<->byte conversion
struct LineCache {
    /// Byte offset where each line starts
    /// line_starts[0] = 0 (first line starts at byte 0)
    line_starts: Vec<usize>,
}

impl LineCache {
    fn new() -> Self {
        Self {
            line_starts: vec![0],
        }
    }

    /// Rebuild the line cache from text (full scan)
    fn rebuild(&mut self, text: &str) {
        self.line_starts.clear();
        self.line_starts.push(0);

        for (i, byte) in text.bytes().enumerate() {
            if byte == b'\n' {
                self.line_starts.push(i + 1);
            }
        }
    }

    fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    fn line_to_byte(&self, line: usize) -> Option<usize> {
        self.line_starts.get(line).copied()
    }

    fn byte_to_line(&self, byte: usize) -> usize {
        match self.line_starts.binary_search(&byte) {
            Ok(line) => line,
            Err(line) => line.saturating_sub(1),
        }
    }
}

/// The editable source text together with its caret and selection.
///
/// All offsets are byte offsets into the UTF-8 text. Offsets handed in from
/// outside are clamped to the buffer length and snapped back to the nearest
/// char boundary, so callers never split a code point.
pub struct EditorBuffer {
    text: String,

    line_cache: LineCache,

    /// Where the caret sits (the moving end of the selection)
    caret: usize,

    /// The fixed end of the selection; equal to `caret` when nothing is selected
    anchor: usize,

    /// Column (in chars) that vertical movement tries to keep
    preferred_column: Option<usize>,

    /// Has the buffer been edited since it was last replaced wholesale?
    modified: bool,
}

impl EditorBuffer {
    /// Create a new empty buffer
    pub fn new() -> Self {
        Self {
            text: String::new(),
            line_cache: LineCache::new(),
            caret: 0,
            anchor: 0,
            preferred_column: None,
            modified: false,
        }
    }

    /// Create a buffer from a string, with the caret at the end
    pub fn from_str(s: &str) -> Self {
        let mut buffer = Self::new();
        buffer.set_text(s);
        buffer
    }

    /// Current text
    pub fn text(&self) -> String {
        self.text.clone()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Replace the whole buffer. The caret collapses to the end of the new text.
    pub fn set_text(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
        self.line_cache.rebuild(&self.text);
        self.caret = self.text.len();
        self.anchor = self.caret;
        self.preferred_column = None;
        self.modified = false;
    }

    /// Insert `fragment` at `position` and return the offset just past it.
    ///
    /// Caret and anchor positions after the insertion point shift along with
    /// the text. Repeated calls compose left to right when each call uses the
    /// previous return value.
    pub fn insert_at(&mut self, position: usize, fragment: &str) -> usize {
        let pos = self.clamp(position);
        self.text.insert_str(pos, fragment);
        self.line_cache.rebuild(&self.text);

        let shift = |offset: usize| {
            if offset > pos {
                offset + fragment.len()
            } else {
                offset
            }
        };
        self.caret = shift(self.caret);
        self.anchor = shift(self.anchor);
        self.modified = true;

        pos + fragment.len()
    }

    /// Delete a byte range
    pub fn delete(&mut self, range: Range<usize>) {
        let start = self.clamp(range.start);
        let end = self.clamp(range.end).max(start);
        if start == end {
            return;
        }
        self.text.replace_range(start..end, "");
        self.line_cache.rebuild(&self.text);

        let shift = |offset: usize| {
            if offset >= end {
                offset - (end - start)
            } else if offset > start {
                start
            } else {
                offset
            }
        };
        self.caret = shift(self.caret);
        self.anchor = shift(self.anchor);
        self.modified = true;
    }

    /// Selected range as `(start, end)` with `start <= end`
    pub fn selection(&self) -> (usize, usize) {
        (self.caret.min(self.anchor), self.caret.max(self.anchor))
    }

    pub fn has_selection(&self) -> bool {
        self.caret != self.anchor
    }

    /// Select `start..end`; the caret ends up at `end`
    pub fn set_selection(&mut self, start: usize, end: usize) {
        self.anchor = self.clamp(start);
        self.caret = self.clamp(end);
        self.preferred_column = None;
    }

    pub fn caret(&self) -> usize {
        self.caret
    }

    /// Move the caret, collapsing any selection
    pub fn set_caret(&mut self, position: usize) {
        self.caret = self.clamp(position);
        self.anchor = self.caret;
        self.preferred_column = None;
    }

    /// Replace the selected range with `fragment` (or insert it at the caret
    /// when nothing is selected). Returns the new caret position.
    pub fn replace_selection(&mut self, fragment: &str) -> usize {
        let (start, end) = self.selection();
        self.delete(start..end);
        let caret = self.insert_at(start, fragment);
        self.set_caret(caret);
        caret
    }

    pub fn insert_char(&mut self, c: char) {
        let mut encoded = [0u8; 4];
        self.replace_selection(c.encode_utf8(&mut encoded));
    }

    pub fn insert_newline(&mut self) {
        self.replace_selection("\n");
    }

    /// Delete the selection, or the char before the caret
    pub fn backspace(&mut self) {
        if self.has_selection() {
            let (start, end) = self.selection();
            self.delete(start..end);
            return;
        }
        let prev = self.prev_char_boundary(self.caret);
        self.delete(prev..self.caret);
        self.preferred_column = None;
    }

    /// Delete the selection, or the char after the caret
    pub fn delete_forward(&mut self) {
        if self.has_selection() {
            let (start, end) = self.selection();
            self.delete(start..end);
            return;
        }
        let next = self.next_char_boundary(self.caret);
        self.delete(self.caret..next);
        self.preferred_column = None;
    }

    pub fn move_left(&mut self, extend: bool) {
        let target = if !extend && self.has_selection() {
            self.selection().0
        } else {
            self.prev_char_boundary(self.caret)
        };
        self.move_caret(target, extend);
    }

    pub fn move_right(&mut self, extend: bool) {
        let target = if !extend && self.has_selection() {
            self.selection().1
        } else {
            self.next_char_boundary(self.caret)
        };
        self.move_caret(target, extend);
    }

    pub fn move_home(&mut self, extend: bool) {
        let line = self.byte_to_line(self.caret);
        self.move_caret(self.line_to_byte(line), extend);
    }

    pub fn move_end(&mut self, extend: bool) {
        let line = self.byte_to_line(self.caret);
        self.move_caret(self.line_end(line), extend);
    }

    pub fn move_up(&mut self, extend: bool) {
        let line = self.byte_to_line(self.caret);
        if line == 0 {
            self.move_caret_keeping_column(0, extend);
            return;
        }
        self.move_to_line(line - 1, extend);
    }

    pub fn move_down(&mut self, extend: bool) {
        let line = self.byte_to_line(self.caret);
        if line + 1 >= self.line_count() {
            self.move_caret_keeping_column(self.text.len(), extend);
            return;
        }
        self.move_to_line(line + 1, extend);
    }

    fn move_to_line(&mut self, line: usize, extend: bool) {
        let column = self
            .preferred_column
            .unwrap_or_else(|| self.caret_position().1);
        let start = self.line_to_byte(line);
        let target = self.text[start..self.line_end(line)]
            .char_indices()
            .nth(column)
            .map(|(i, _)| start + i)
            .unwrap_or_else(|| self.line_end(line));
        self.move_caret_keeping_column(target, extend);
        self.preferred_column = Some(column);
    }

    fn move_caret_keeping_column(&mut self, target: usize, extend: bool) {
        let column = self.preferred_column;
        self.move_caret(target, extend);
        self.preferred_column = column;
    }

    fn move_caret(&mut self, target: usize, extend: bool) {
        self.caret = self.clamp(target);
        if !extend {
            self.anchor = self.caret;
        }
        self.preferred_column = None;
    }

    /// Caret location as `(line, column)`, column counted in chars
    pub fn caret_position(&self) -> (usize, usize) {
        let line = self.byte_to_line(self.caret);
        let start = self.line_to_byte(line);
        (line, self.text[start..self.caret].chars().count())
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn line_count(&self) -> usize {
        self.line_cache.line_count()
    }

    /// Byte offset where `line` starts (end of buffer for out-of-range lines)
    pub fn line_to_byte(&self, line: usize) -> usize {
        self.line_cache
            .line_to_byte(line)
            .unwrap_or(self.text.len())
    }

    pub fn byte_to_line(&self, byte: usize) -> usize {
        self.line_cache.byte_to_line(byte)
    }

    /// Byte offset of the end of `line`, excluding its newline
    fn line_end(&self, line: usize) -> usize {
        match self.line_cache.line_to_byte(line + 1) {
            Some(next) => next - 1,
            None => self.text.len(),
        }
    }

    /// Content of a line without its trailing newline
    pub fn line_content(&self, line: usize) -> &str {
        if line >= self.line_count() {
            return "";
        }
        &self.text[self.line_to_byte(line)..self.line_end(line)]
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        (0..self.line_count()).map(move |line| self.line_content(line))
    }

    pub fn prev_char_boundary(&self, pos: usize) -> usize {
        let pos = self.clamp(pos);
        self.text[..pos]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    pub fn next_char_boundary(&self, pos: usize) -> usize {
        let pos = self.clamp(pos);
        self.text[pos..]
            .chars()
            .next()
            .map(|c| pos + c.len_utf8())
            .unwrap_or(pos)
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Clamp to the buffer and snap down to a char boundary
    fn clamp(&self, pos: usize) -> usize {
        let mut pos = pos.min(self.text.len());
        while !self.text.is_char_boundary(pos) {
            pos -= 1;
        }
        pos
    }
}

impl Default for EditorBuffer {
    fn default() -> Self {
        Self::new()
    }
}
