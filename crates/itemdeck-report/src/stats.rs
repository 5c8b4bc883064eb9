use itemdeck_model::Record;
use serde::Serialize;

/// Headline figures for the dashboard cards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_items: usize,
    pub total_value: f64,
    pub active_items: usize,
    /// Zero for an empty collection.
    pub average_value: f64,
}

impl DashboardStats {
    pub fn from_items(items: &[Record]) -> Self {
        let total_items = items.len();
        let total_value: f64 = items.iter().map(|item| item.value).sum();
        let active_items = items.iter().filter(|item| item.is_active()).count();
        let average_value = if total_items == 0 {
            0.0
        } else {
            total_value / total_items as f64
        };
        Self {
            total_items,
            total_value,
            active_items,
            average_value,
        }
    }
}
