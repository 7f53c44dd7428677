//! Cursor-relative placement
//!
//! Text continues from the current cursor instead of owning whole rows:
//!
//! - The first segment starts at the cursor; each later segment starts at
//!   column 0 of the row below the cursor (the last row is reused once the
//!   bottom is reached).
//! - Without scrolling, a segment is cut at the end of its row.
//! - With scrolling, a segment wraps onto the following rows. Whatever
//!   would pass the last cell of the display is dropped.
//! - Nothing is padded and there are no pauses.

use serlcd_protocol::{line_from, Command, Line};

use super::plan::Step;
use super::text::{segments, Segments};
use crate::cursor::CursorModel;
use crate::geometry::CursorPosition;

/// Steps for a cursor-relative print request, excluding the cursor
/// visibility command that [`RenderPlan`](super::RenderPlan) adds in front
#[derive(Debug, Clone)]
pub struct CursorRelativePlan<'a> {
    cursor: CursorModel,
    wrap: bool,
    segments: Segments<'a>,
    started: bool,
    rest: &'a [u8],
    pending: Option<Line>,
}

impl<'a> CursorRelativePlan<'a> {
    pub fn new(text: &'a str, cursor: CursorModel, wrap: bool) -> Self {
        Self {
            cursor,
            wrap,
            segments: segments(text),
            started: false,
            rest: &[],
            pending: None,
        }
    }

    /// Cursor after the steps produced so far
    pub fn cursor(&self) -> CursorPosition {
        self.cursor.position()
    }

    /// Emit the MOVE for the next chunk of the current segment and queue
    /// its PRINT
    fn chunk(&mut self) -> Step {
        let at = self.cursor.position();
        let geometry = self.cursor.geometry();
        let room = usize::from(geometry.columns() - at.column);
        let take = self.rest.len().min(room);

        self.pending = Some(line_from(&self.rest[..take]));
        self.rest = if self.wrap && at.row < geometry.last_row() {
            &self.rest[take..]
        } else {
            &[]
        };
        self.cursor.commit(self.cursor.advance_by(take, self.wrap));

        Step::new(Command::move_to(at.column, at.row))
    }
}

impl Iterator for CursorRelativePlan<'_> {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        if let Some(line) = self.pending.take() {
            return Some(Step::new(Command::PrintLine(line)));
        }
        if !self.rest.is_empty() {
            return Some(self.chunk());
        }

        let segment = self.segments.next()?;
        if self.started {
            self.cursor.commit(self.cursor.next_line());
        }
        self.started = true;

        if segment.is_empty() {
            let at = self.cursor.position();
            return Some(Step::new(Command::move_to(at.column, at.row)));
        }
        self.rest = segment;
        Some(self.chunk())
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::vec::Vec;

    use super::*;
    use crate::geometry::DisplayGeometry;

    fn run(text: &str, start: (u16, u16), wrap: bool) -> (Vec<Step>, CursorPosition) {
        let mut cursor = CursorModel::new(DisplayGeometry::new(2, 8).unwrap());
        cursor.set(start.0, start.1).unwrap();
        let mut plan = CursorRelativePlan::new(text, cursor, wrap);
        let steps = plan.by_ref().collect();
        (steps, plan.cursor())
    }

    #[test]
    fn test_continues_from_cursor() {
        let (steps, cursor) = run("abc", (2, 0), false);
        assert_eq!(
            steps,
            [
                Step::new(Command::move_to(2, 0)),
                Step::new(Command::print(b"abc")),
            ]
        );
        assert_eq!(cursor, CursorPosition::new(5, 0));
    }

    #[test]
    fn test_truncates_at_row_end_without_wrap() {
        let (steps, cursor) = run("abcdefgh", (5, 1), false);
        assert_eq!(steps[1], Step::new(Command::print(b"abc")));
        assert_eq!(steps.len(), 2);
        assert_eq!(cursor, CursorPosition::new(7, 1));
    }

    #[test]
    fn test_wraps_onto_next_row() {
        let (steps, cursor) = run("abcdefgh", (5, 0), true);
        assert_eq!(
            steps,
            [
                Step::new(Command::move_to(5, 0)),
                Step::new(Command::print(b"abc")),
                Step::new(Command::move_to(0, 1)),
                Step::new(Command::print(b"defgh")),
            ]
        );
        assert_eq!(cursor, CursorPosition::new(5, 1));
    }

    #[test]
    fn test_wrap_drops_text_past_last_cell() {
        let (steps, cursor) = run("abcdefghijklmnop", (4, 1), true);
        assert_eq!(
            steps,
            [
                Step::new(Command::move_to(4, 1)),
                Step::new(Command::print(b"abcd")),
            ]
        );
        assert_eq!(cursor, CursorPosition::new(7, 1));
    }

    #[test]
    fn test_line_break_moves_to_next_row() {
        let (steps, cursor) = run("hi\nyo", (3, 0), false);
        assert_eq!(
            steps,
            [
                Step::new(Command::move_to(3, 0)),
                Step::new(Command::print(b"hi")),
                Step::new(Command::move_to(0, 1)),
                Step::new(Command::print(b"yo")),
            ]
        );
        assert_eq!(cursor, CursorPosition::new(2, 1));
    }

    #[test]
    fn test_line_break_on_last_row_reuses_it() {
        let (steps, cursor) = run("a\nb", (0, 1), false);
        assert_eq!(steps[2], Step::new(Command::move_to(0, 1)));
        assert_eq!(cursor, CursorPosition::new(1, 1));
    }

    #[test]
    fn test_empty_segments_only_move() {
        let (steps, cursor) = run("\n", (6, 0), true);
        assert_eq!(
            steps,
            [
                Step::new(Command::move_to(6, 0)),
                Step::new(Command::move_to(0, 1)),
            ]
        );
        assert_eq!(cursor, CursorPosition::new(0, 1));
    }
}
