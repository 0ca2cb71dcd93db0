//! Progress bar for the services list

use crate::constants::PROGRESS_BAR_WIDTH;

/// `[#########...........]  45%`
///
/// Values outside 0..=100 are drawn clamped but printed as stored.
pub fn progress_bar(progress: i32) -> String {
    let clamped = progress.clamp(0, 100) as usize;
    let filled = clamped * PROGRESS_BAR_WIDTH / 100;
    format!(
        "[{}{}] {:>3}%",
        "#".repeat(filled),
        ".".repeat(PROGRESS_BAR_WIDTH - filled),
        progress
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_fills_proportionally() {
        assert_eq!(progress_bar(0), format!("[{}]   0%", ".".repeat(20)));
        assert_eq!(progress_bar(50), format!("[{}{}]  50%", "#".repeat(10), ".".repeat(10)));
        assert_eq!(progress_bar(100), format!("[{}] 100%", "#".repeat(20)));
    }

    #[test]
    fn out_of_range_is_clamped_for_drawing() {
        assert_eq!(progress_bar(-5), format!("[{}]  -5%", ".".repeat(20)));
        assert!(progress_bar(140).starts_with(&format!("[{}]", "#".repeat(20))));
    }
}
