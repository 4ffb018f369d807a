//! Line-oriented `ItemView` for a terminal.

use std::io::Write;

use item_core::{ItemView, Notice};
use tracing::warn;

/// Prints the item list and notices to any writer.
///
/// The last displayed entries are kept so the shell can reprint them without
/// another request.
pub struct ConsoleView<W: Write> {
    out: W,
    entries: Vec<String>,
}

impl<W: Write> ConsoleView<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            entries: Vec::new(),
        }
    }

    pub fn out(&mut self) -> &mut W {
        &mut self.out
    }

    pub fn into_out(self) -> W {
        self.out
    }

    pub fn print_entries(&mut self) {
        let result = if self.entries.is_empty() {
            writeln!(self.out, "(no items)")
        } else {
            self.entries
                .iter()
                .try_for_each(|entry| writeln!(self.out, "  {entry}"))
        };
        self.report(result);
    }

    fn report(&mut self, result: std::io::Result<()>) {
        if let Err(err) = result.and_then(|()| self.out.flush()) {
            warn!(error = %err, "console write failed");
        }
    }
}

impl<W: Write> ItemView for ConsoleView<W> {
    fn show_entries(&mut self, entries: Vec<String>) {
        self.entries = entries;
        self.print_entries();
    }

    fn notify(&mut self, notice: &Notice) {
        let tag = if notice.is_error() { "error" } else { "ok" };
        let result = writeln!(self.out, "[{tag}] {notice}");
        self.report(result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn printed(view: ConsoleView<Vec<u8>>) -> String {
        String::from_utf8(view.out).unwrap()
    }

    #[test]
    fn shows_each_entry_on_its_own_line() {
        let mut view = ConsoleView::new(Vec::new());
        view.show_entries(vec!["1: Pen - Blue pen".to_string(), "2: Cup - Mug".to_string()]);
        assert_eq!(view.entries.len(), 2);
        assert_eq!(printed(view), "  1: Pen - Blue pen\n  2: Cup - Mug\n");
    }

    #[test]
    fn empty_list_says_so() {
        let mut view = ConsoleView::new(Vec::new());
        view.show_entries(Vec::new());
        assert_eq!(printed(view), "(no items)\n");
    }

    #[test]
    fn notices_are_tagged() {
        let mut view = ConsoleView::new(Vec::new());
        view.notify(&Notice::Added);
        view.notify(&Notice::DeleteFailed);
        assert_eq!(
            printed(view),
            "[ok] Item added successfully\n[error] Failed to delete item.\n"
        );
    }
}
