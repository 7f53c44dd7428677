//! Splitting print requests into segments

/// Separates segments of a print request
pub const LINE_BREAK: char = '\n';

/// Text contains a NUL byte, which would end a PRINT early on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InvalidText;

pub(crate) fn validate(text: &str) -> Result<(), InvalidText> {
    if text.as_bytes().contains(&0) {
        Err(InvalidText)
    } else {
        Ok(())
    }
}

/// Iterator over the line-break separated segments of a request, as bytes
///
/// A carriage return ending a segment is dropped, so `\r\n` text splits
/// the same way as `\n` text. There is always at least one segment.
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    inner: core::str::Split<'a, char>,
}

/// Split `text` into segments
pub fn segments(text: &str) -> Segments<'_> {
    Segments {
        inner: text.split(LINE_BREAK),
    }
}

impl<'a> Iterator for Segments<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|segment| {
            let segment = segment.as_bytes();
            segment.strip_suffix(b"\r").unwrap_or(segment)
        })
    }
}
