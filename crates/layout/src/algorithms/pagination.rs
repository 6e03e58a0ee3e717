pub struct BreakAnalysis {
    pub should_break: bool,
    pub remaining_height: f32,
}

/// Threshold check used before placing a block.
///
/// * `cursor_y`: The current baseline, measured up from the bottom edge of the page.
/// * `threshold`: The lowest cursor position at which the block may still start.
/// * `bottom_margin`: The page's bottom margin, used to report the space left.
///
/// The block's real height is never measured: a cursor below the threshold breaks,
/// anything else stays on the page.
pub fn check_threshold(cursor_y: f32, threshold: f32, bottom_margin: f32) -> BreakAnalysis {
    BreakAnalysis {
        should_break: cursor_y < threshold,
        remaining_height: (cursor_y - bottom_margin).max(0.0),
    }
}
