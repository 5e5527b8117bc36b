use crate::models::WellnessRecord;

pub const DEFAULT_WELLNESS_SCORE: f64 = 75.0;

/// Mean of every present `moodScore`, rounded to two decimals.
pub fn compute_score(records: &[WellnessRecord]) -> f64 {
    let (sum, count) = records
        .iter()
        .filter_map(|r| r.mood_score)
        .fold((0.0_f64, 0usize), |(sum, count), score| (sum + score, count + 1));

    if count == 0 {
        return DEFAULT_WELLNESS_SCORE;
    }
    round_to_hundredths(sum / count as f64)
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
