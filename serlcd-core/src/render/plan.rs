//! Render plans

use serlcd_protocol::Command;

use super::line_indexed::LineIndexedPlan;
use super::relative::CursorRelativePlan;
use crate::geometry::CursorPosition;

/// One command of a plan, with an optional pause after it is written
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Step {
    pub command: Command,
    pub delay_ms: Option<u32>,
}

impl Step {
    /// A command with no pause after it
    pub const fn new(command: Command) -> Self {
        Self {
            command,
            delay_ms: None,
        }
    }

    /// A command followed by a pause
    pub const fn wait_after(command: Command, delay_ms: u32) -> Self {
        Self {
            command,
            delay_ms: Some(delay_ms),
        }
    }
}

#[derive(Debug, Clone)]
enum Placement<'a> {
    LineIndexed(LineIndexedPlan<'a>),
    CursorRelative(CursorRelativePlan<'a>),
}

/// Ordered steps for one print request
///
/// Produced lazily; steps are meant to be executed in order, and execution
/// stops at the first failed write. [`RenderPlan::cursor`] reports where the
/// cursor will be once every step has been executed.
#[derive(Debug, Clone)]
pub struct RenderPlan<'a> {
    visibility: Option<bool>,
    placement: Placement<'a>,
}

impl<'a> RenderPlan<'a> {
    pub(crate) fn line_indexed(show_cursor: bool, plan: LineIndexedPlan<'a>) -> Self {
        Self {
            visibility: Some(show_cursor),
            placement: Placement::LineIndexed(plan),
        }
    }

    pub(crate) fn cursor_relative(show_cursor: bool, plan: CursorRelativePlan<'a>) -> Self {
        Self {
            visibility: Some(show_cursor),
            placement: Placement::CursorRelative(plan),
        }
    }

    /// Cursor position after the plan has run to completion
    ///
    /// Only meaningful once the iterator is exhausted.
    pub fn cursor(&self) -> CursorPosition {
        match &self.placement {
            Placement::LineIndexed(plan) => plan.cursor(),
            Placement::CursorRelative(plan) => plan.cursor(),
        }
    }
}

impl Iterator for RenderPlan<'_> {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        if let Some(show) = self.visibility.take() {
            return Some(Step::new(Command::SetCursorVisible(show)));
        }
        match &mut self.placement {
            Placement::LineIndexed(plan) => plan.next(),
            Placement::CursorRelative(plan) => plan.next(),
        }
    }
}
