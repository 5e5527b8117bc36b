use crate::models::WellnessRecord;

pub trait InsightProvider {
    fn insights(&self, records: &[WellnessRecord]) -> Vec<String>;
}

// TODO: replace with trend analytics over the submitted records.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderInsights;

pub const PLACEHOLDER_INSIGHTS: [&str; 2] = [
    "Your mood tends to drop after nights with less than 6 hours of sleep.",
    "Completing tasks is strongly correlated with higher mood for you.",
];

impl InsightProvider for PlaceholderInsights {
    fn insights(&self, _records: &[WellnessRecord]) -> Vec<String> {
        PLACEHOLDER_INSIGHTS.iter().map(|s| s.to_string()).collect()
    }
}
