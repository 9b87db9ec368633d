//! Comment skipping.

use crate::Scanner;

impl<'a> Scanner<'a> {
    /// Skips the rest of a line comment.
    ///
    /// Called with the cursor just past the `//`. Stops before the newline
    /// so the drive loop still counts it.
    pub fn skip_line_comment(&mut self) {
        self.cursor.eat_while(|c| c != '\n');
    }
}
