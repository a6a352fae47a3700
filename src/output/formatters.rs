//! Formatting utilities for terminal output

use crate::core::GameState;

/// Badge showing a word's letter count, e.g. `⑤`
///
/// Counts past 20 fall back to `(n)`.
#[must_use]
pub fn length_badge(len: usize) -> String {
    match u32::try_from(len) {
        Ok(n @ 1..=20) => {
            char::from_u32(0x2460 + n - 1).map_or_else(|| format!("({len})"), String::from)
        }
        _ => format!("({len})"),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 { width } else { value * width / max };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Accepted words needed before the next one scores double
#[must_use]
pub fn bonus_target(state: &GameState) -> usize {
    state.bonus_threshold().saturating_add(1)
}

/// Progress toward the double-score bonus, 0 to 100
#[must_use]
pub fn bonus_percent(state: &GameState) -> u16 {
    let target = bonus_target(state);
    let percent = state.word_count().min(target) * 100 / target;
    u16::try_from(percent).unwrap_or(100)
}

/// Progress toward the double-score bonus
///
/// Full once the next accepted word would score double.
#[must_use]
pub fn bonus_bar(state: &GameState, width: usize) -> String {
    create_progress_bar(state.word_count(), bonus_target(state), width)
}

/// Points earned by a word, e.g. `+4` or `+8 ×2`
#[must_use]
pub fn points_label(points: u32, bonus: bool) -> String {
    if bonus {
        format!("+{points} ×2")
    } else {
        format!("+{points}")
    }
}
