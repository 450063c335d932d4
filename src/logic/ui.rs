//! UI state logic
//!
//! Pure calculations for the loading pane and the alert dialog.

use unicode_width::UnicodeWidthStr;

/// Braille spinner frames, one per tick
pub const SPINNER_FRAMES: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Spinner glyph for the given animation tick
///
/// # Examples
/// ```
/// use bizsuite::logic::ui::spinner_frame;
///
/// assert_eq!(spinner_frame(0), '⠋');
/// assert_eq!(spinner_frame(1), '⠙');
/// assert_eq!(spinner_frame(10), '⠋'); // wraps around
/// ```
pub fn spinner_frame(tick: usize) -> char {
    SPINNER_FRAMES[tick % SPINNER_FRAMES.len()]
}

/// Acknowledgement hint shown under the alert text
pub const ALERT_HINT: &str = "Press Enter to continue";

/// Size of the alert box for `text` inside an area of `area_width` columns
///
/// Width fits the wider of the text and the hint plus borders and padding,
/// capped at 60 columns and at the area. Height grows with the wrapped line
/// counts of both.
///
/// # Returns
/// `(width, height)` in terminal cells
pub fn alert_dimensions(text: &str, area_width: u16) -> (u16, u16) {
    const MAX_WIDTH: usize = 60;
    const CHROME: usize = 4; // borders + one column padding each side

    let max_width = MAX_WIDTH.min(area_width as usize).max(CHROME + 1);
    let text_width = UnicodeWidthStr::width(text);
    let hint_width = UnicodeWidthStr::width(ALERT_HINT);
    let width = (text_width.max(hint_width) + CHROME).clamp(CHROME + 1, max_width);

    let inner = width - CHROME;
    let text_lines = text_width.div_ceil(inner).max(1);
    let hint_lines = hint_width.div_ceil(inner);
    // borders (2) + blank line between text and hint
    let height = text_lines + hint_lines + 3;

    (width as u16, height as u16)
}
