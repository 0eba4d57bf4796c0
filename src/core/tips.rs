use chrono::NaiveDate;

use crate::content::TipCategory;
use crate::content::tips::tips;
use crate::models::PhaseType;

/// Sum of the character codes of a date string. Stable per date, not a hash
/// in any cryptographic sense.
pub fn date_seed(date_str: &str) -> u32 {
    date_str.chars().map(|c| c as u32).sum()
}

/// The tip shown for `date`: same date, same tip.
pub fn tip_of_the_day(
    phase: PhaseType,
    category: TipCategory,
    date: NaiveDate,
) -> Option<&'static str> {
    let list = tips(phase, category);
    if list.is_empty() {
        return None;
    }
    let seed = date_seed(&date.format("%Y-%m-%d").to_string()) as usize;
    Some(list[seed % list.len()])
}
