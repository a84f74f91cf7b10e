// src/core/tables.rs
//! Rebuilds nested `<table>` structure from the flat event stream.
//!
//! State is one [`Frame`] per open table, so memory is bounded by the deepest
//! nesting seen. Text always lands in the innermost open cell: a table nested
//! inside a cell contributes nothing to the outer cell's string, it is emitted
//! as its own entry instead.
//!
//! Tables are pushed to the output when they *close*, so an inner table comes
//! out before the table that contains it.
//!
//! Real-world pages are sloppy. Stray `</td>`, `</tr>`, `</table>` and text
//! outside cells are ignored; nothing here ever fails.

use std::convert::Infallible;

use super::events::{Event, EventSink};

/// Text of one `<td>`, chunks concatenated in document order.
pub type Cell = String;
/// Cells in the order their `</td>` was seen.
pub type Row = Vec<Cell>;
/// Rows in the order their `</tr>` was seen.
pub type Table = Vec<Row>;

/// In-progress state of the table open at one depth.
#[derive(Debug, Default)]
struct Frame {
    rows: Vec<Row>,
    row: Option<Row>,
    cell: Option<Cell>,
}

#[derive(Debug, Default)]
pub struct TableBuilder {
    /// `frames[d - 1]` belongs to the table open at depth `d`.
    frames: Vec<Frame>,
    tables: Vec<Table>,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tables currently open.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Completed tables, in close order.
    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    pub fn into_tables(self) -> Vec<Table> {
        self.tables
    }

    fn open_table(&mut self) {
        self.frames.push(Frame::default());
    }

    fn close_table(&mut self) {
        // Anything still open inside the table (row/cell) is dropped with it.
        match self.frames.pop() {
            Some(frame) => self.tables.push(frame.rows),
            None => logd!("stray </table> outside any table, ignored"),
        }
    }

    fn current(&mut self) -> Option<&mut Frame> {
        self.frames.last_mut()
    }

    fn apply(&mut self, event: Event<'_>) {
        match event {
            Event::StartTable => self.open_table(),
            Event::EndTable => self.close_table(),

            Event::StartRow => {
                if let Some(f) = self.current() {
                    f.row = Some(Row::new());
                }
            }
            Event::EndRow => {
                if let Some(f) = self.current() {
                    if let Some(row) = f.row.take() {
                        f.rows.push(row);
                    }
                }
            }

            Event::StartCell => {
                if let Some(f) = self.current() {
                    f.cell = Some(Cell::new());
                }
            }
            Event::EndCell => {
                if let Some(f) = self.current() {
                    // A cell closed with no open row has nowhere to go.
                    if let (Some(cell), Some(row)) = (f.cell.take(), f.row.as_mut()) {
                        row.push(cell);
                    }
                }
            }

            Event::Text(chunk) => {
                if let Some(cell) = self.current().and_then(|f| f.cell.as_mut()) {
                    cell.push_str(chunk);
                }
            }

            Event::StartForm
            | Event::EndForm
            | Event::StartOption { .. }
            | Event::EndOption => {}
        }
    }
}

impl EventSink for TableBuilder {
    type Error = Infallible;

    fn handle(&mut self, event: Event<'_>) -> Result<(), Infallible> {
        self.apply(event);
        Ok(())
    }
}
