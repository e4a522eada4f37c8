//! Single-line text field with unicode-aware cursor editing.
//!
//! Form screens own one of these per input. Password fields render a
//! masked view; the raw value is only read at submission time.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Mask character used for hidden password display.
const MASK: char = '\u{2022}';

/// A single-line editable text field.
#[derive(Debug, Default, Clone)]
pub struct TextField {
    value: String,
    /// Cursor position in grapheme clusters from the start.
    cursor: usize,
}

impl TextField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current raw value.
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Value as displayed: masked when `hidden` is set.
    pub fn display(&self, hidden: bool) -> String {
        if hidden {
            MASK.to_string().repeat(self.grapheme_count())
        } else {
            self.value.clone()
        }
    }

    /// Terminal column of the cursor within the displayed value.
    pub fn cursor_column(&self, hidden: bool) -> u16 {
        if hidden {
            self.cursor as u16
        } else {
            let prefix: String = self
                .value
                .graphemes(true)
                .take(self.cursor)
                .collect();
            prefix.width() as u16
        }
    }

    pub fn insert_char(&mut self, ch: char) {
        let offset = self.byte_offset(self.cursor);
        self.value.insert(offset, ch);
        self.cursor += 1;
    }

    pub fn insert_str(&mut self, s: &str) {
        let offset = self.byte_offset(self.cursor);
        self.value.insert_str(offset, s);
        self.cursor += s.graphemes(true).count();
    }

    /// Deletes the grapheme before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let start = self.byte_offset(self.cursor - 1);
        let end = self.byte_offset(self.cursor);
        self.value.replace_range(start..end, "");
        self.cursor -= 1;
    }

    /// Deletes the grapheme at the cursor.
    pub fn delete(&mut self) {
        if self.cursor >= self.grapheme_count() {
            return;
        }
        let start = self.byte_offset(self.cursor);
        let end = self.byte_offset(self.cursor + 1);
        self.value.replace_range(start..end, "");
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.grapheme_count());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.grapheme_count();
    }

    /// Clears from the start of the line to the cursor (unix line-kill).
    pub fn kill_to_start(&mut self) {
        let end = self.byte_offset(self.cursor);
        self.value.replace_range(..end, "");
        self.cursor = 0;
    }

    fn grapheme_count(&self) -> usize {
        self.value.graphemes(true).count()
    }

    fn byte_offset(&self, grapheme_index: usize) -> usize {
        self.value
            .grapheme_indices(true)
            .nth(grapheme_index)
            .map_or(self.value.len(), |(i, _)| i)
    }
}
