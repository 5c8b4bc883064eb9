use itemdeck_model::Record;
use serde::Serialize;

/// One bar or slice of a chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
}

/// Total value per category, in order of first appearance.
pub fn value_by_category(items: &[Record]) -> Vec<ChartPoint> {
    accumulate(items, |item| (item.category.as_str(), item.value))
}

/// Record count per status, in order of first appearance. Points carry the
/// serialized status (`active`); display labels are up to the renderer.
pub fn items_by_status(items: &[Record]) -> Vec<ChartPoint> {
    accumulate(items, |item| (item.status.as_str(), 1.0))
}

fn accumulate<'a>(items: &'a [Record], key: impl Fn(&'a Record) -> (&'a str, f64)) -> Vec<ChartPoint> {
    let mut points: Vec<ChartPoint> = Vec::new();
    for item in items {
        let (label, amount) = key(item);
        match points.iter_mut().find(|point| point.label == label) {
            Some(point) => point.value += amount,
            None => points.push(ChartPoint {
                label: label.to_string(),
                value: amount,
            }),
        }
    }
    points
}
