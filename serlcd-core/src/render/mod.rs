//! Render engine
//!
//! Turns a print request into a [`RenderPlan`]: the ordered commands, and
//! the pauses between them, that put the text on the display. Planning is
//! pure; executing the plan is the session's job.
//!
//! # Placement
//!
//! Under [`AddressingMode::LineIndexed`] every line of the request owns a
//! physical row starting at column 0. Line `i` goes to row
//! `min(i, rows - 1)`. Once the text has more lines than the display has
//! rows, each new line first repaints the previous one a row higher and
//! then lands on the bottom row. Rows above that are not repainted; the
//! protocol has no way to shift the whole screen.
//!
//! Each row is rendered by [`SegmentSteps`]:
//!
//! - Text that fits is padded with spaces to the full width, so nothing is
//!   left over from an earlier, longer line.
//! - Text that does not fit is cut to the width when scrolling is off.
//! - With scrolling on, the row first shows one column less than the width,
//!   waits [`SCROLL_SETTLE_MS`], then slides a full-width window one byte at
//!   a time, [`SCROLL_STEP_MS`] per step, until the last byte is visible.
//!
//! [`AddressingMode::CursorRelative`] is documented on
//! [`CursorRelativePlan`].

mod line_indexed;
mod plan;
mod relative;
mod segment;
mod text;

pub use line_indexed::LineIndexedPlan;
pub use plan::{RenderPlan, Step};
pub use relative::CursorRelativePlan;
pub use segment::SegmentSteps;
pub use text::{segments, InvalidText, Segments, LINE_BREAK};

use crate::config::{AddressingMode, RenderOptions};
use crate::cursor::CursorModel;

/// Pause after the controller is reset, before it accepts commands
pub const INIT_SETTLE_MS: u32 = 600;

/// Pause after the first, narrowed frame of a scrolling row
pub const SCROLL_SETTLE_MS: u32 = 500;

/// Pause before each subsequent frame of a scrolling row
pub const SCROLL_STEP_MS: u32 = 200;

/// Plan a print request
///
/// `cursor` is only consulted as a starting point by
/// [`AddressingMode::CursorRelative`]; line-indexed plans always start at
/// the top-left.
pub fn plan<'a>(
    text: &'a str,
    options: RenderOptions,
    cursor: &CursorModel,
) -> Result<RenderPlan<'a>, InvalidText> {
    text::validate(text)?;

    let plan = match options.addressing {
        AddressingMode::LineIndexed => RenderPlan::line_indexed(
            options.show_cursor,
            LineIndexedPlan::new(text, cursor.geometry(), options.scroll),
        ),
        AddressingMode::CursorRelative => RenderPlan::cursor_relative(
            options.show_cursor,
            CursorRelativePlan::new(text, *cursor, options.scroll),
        ),
    };
    Ok(plan)
}
