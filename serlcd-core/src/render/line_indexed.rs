//! Line-indexed placement

use super::plan::Step;
use super::segment::SegmentSteps;
use super::text::{segments, Segments};
use crate::geometry::{CursorPosition, DisplayGeometry};

/// Steps for a line-indexed print request, excluding the cursor visibility
/// command that [`RenderPlan`](super::RenderPlan) adds in front
#[derive(Debug, Clone)]
pub struct LineIndexedPlan<'a> {
    geometry: DisplayGeometry,
    scroll: bool,
    segments: Segments<'a>,
    index: usize,
    previous: Option<&'a [u8]>,
    current: Option<SegmentSteps<'a>>,
    queued: Option<SegmentSteps<'a>>,
    last_row: u8,
}

impl<'a> LineIndexedPlan<'a> {
    pub fn new(text: &'a str, geometry: DisplayGeometry, scroll: bool) -> Self {
        Self {
            geometry,
            scroll,
            segments: segments(text),
            index: 0,
            previous: None,
            current: None,
            queued: None,
            last_row: 0,
        }
    }

    /// Column 0 of the last row planned so far
    pub fn cursor(&self) -> CursorPosition {
        CursorPosition::new(0, self.last_row)
    }

    fn segment(&self, text: &'a [u8], row: u8) -> SegmentSteps<'a> {
        SegmentSteps::new(text, row, self.geometry.columns(), self.scroll)
    }

    /// Schedule the next segment; false once the text is used up
    fn advance(&mut self) -> bool {
        let Some(text) = self.segments.next() else {
            return false;
        };

        let index = self.index;
        self.index += 1;

        let rows = usize::from(self.geometry.rows());
        let row = index.min(rows - 1) as u8;

        // Overflow: shift the previous line up one row before drawing this one
        if index >= rows && rows >= 2 {
            if let Some(previous) = self.previous {
                self.current = Some(self.segment(previous, self.geometry.last_row() - 1));
            }
        }

        let steps = self.segment(text, row);
        if self.current.is_none() {
            self.current = Some(steps);
        } else {
            self.queued = Some(steps);
        }

        self.previous = Some(text);
        self.last_row = row;
        true
    }
}

impl Iterator for LineIndexedPlan<'_> {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        loop {
            if let Some(step) = self.current.as_mut().and_then(Iterator::next) {
                return Some(step);
            }
            self.current = self.queued.take();
            if self.current.is_none() && !self.advance() {
                return None;
            }
        }
    }
}
