//! The rotating daily coding tip.

/// Pick the tip for a given day of the month (`tips[day % len]`).
/// Returns None for an empty tip list.
pub fn daily_tip(tips: &[String], day_of_month: u32) -> Option<&str> {
    if tips.is_empty() {
        return None;
    }
    Some(tips[day_of_month as usize % tips.len()].as_str())
}
