//! Rendering of a single segment onto a single row

use serlcd_protocol::{line_from, Command, Line};

use super::plan::Step;
use super::{SCROLL_SETTLE_MS, SCROLL_STEP_MS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Fit {
    /// Fits; padded to the full width
    Pad,
    /// Too wide; cut to the width
    Truncate,
    /// Too wide; animated
    Scroll,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Move,
    Print,
    /// Animation frame at `offset`; `moved` once its MOVE has been issued
    Window { offset: usize, moved: bool },
    Done,
}

/// Steps that paint one segment on one row
#[derive(Debug, Clone)]
pub struct SegmentSteps<'a> {
    text: &'a [u8],
    row: u8,
    width: usize,
    fit: Fit,
    phase: Phase,
}

impl<'a> SegmentSteps<'a> {
    pub fn new(text: &'a [u8], row: u8, columns: u8, scroll: bool) -> Self {
        let width = usize::from(columns);
        let fit = if text.len() <= width {
            Fit::Pad
        } else if scroll {
            Fit::Scroll
        } else {
            Fit::Truncate
        };

        Self {
            text,
            row,
            width,
            fit,
            phase: Phase::Move,
        }
    }

    fn last_offset(&self) -> usize {
        self.text.len() - self.width
    }

    fn padded(&self) -> Line {
        let mut line = line_from(self.text);
        while line.len() < self.width {
            let _ = line.push(b' ');
        }
        line
    }
}

impl Iterator for SegmentSteps<'_> {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        match self.phase {
            Phase::Move => {
                self.phase = Phase::Print;
                Some(Step::new(Command::move_to(0, self.row)))
            }
            Phase::Print => match self.fit {
                Fit::Pad => {
                    self.phase = Phase::Done;
                    Some(Step::new(Command::PrintLine(self.padded())))
                }
                Fit::Truncate => {
                    self.phase = Phase::Done;
                    Some(Step::new(Command::print(&self.text[..self.width])))
                }
                Fit::Scroll => {
                    // One column short, so the first frame hints that more follows
                    self.phase = Phase::Window {
                        offset: 1,
                        moved: false,
                    };
                    Some(Step::wait_after(
                        Command::print(&self.text[..self.width - 1]),
                        SCROLL_SETTLE_MS,
                    ))
                }
            },
            Phase::Window {
                offset,
                moved: false,
            } => {
                if offset > self.last_offset() {
                    self.phase = Phase::Done;
                    return None;
                }
                self.phase = Phase::Window {
                    offset,
                    moved: true,
                };
                Some(Step::wait_after(
                    Command::move_to(0, self.row),
                    SCROLL_STEP_MS,
                ))
            }
            Phase::Window {
                offset,
                moved: true,
            } => {
                self.phase = Phase::Window {
                    offset: offset + 1,
                    moved: false,
                };
                Some(Step::new(Command::print(
                    &self.text[offset..offset + self.width],
                )))
            }
            Phase::Done => None,
        }
    }
}
