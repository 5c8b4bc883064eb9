use itemdeck_model::{Category, ItemId, Record, Status};
use itemdeck_report::{DashboardStats, format_currency, items_by_status, value_by_category};

fn record(id: &str, category: &str, value: f64, status: Status) -> Record {
    Record {
        id: ItemId::new(id).unwrap(),
        name: format!("Record {id}"),
        category: Category::new(category).unwrap(),
        value,
        status,
        created_at: "2024-01-01T00:00:00Z".parse().unwrap(),
        description: None,
    }
}

fn sample() -> Vec<Record> {
    vec![
        record("1", "Reports", 1500.0, Status::Active),
        record("2", "Marketing", 2500.0, Status::Active),
        record("3", "IT", 800.0, Status::Inactive),
        record("4", "Reports", 350.0, Status::Active),
    ]
}

#[test]
fn chart_points_keep_first_seen_order() {
    let items = sample();
    insta::assert_json_snapshot!(value_by_category(&items), @r#"
    [
      {
        "label": "Reports",
        "value": 1850.0
      },
      {
        "label": "Marketing",
        "value": 2500.0
      },
      {
        "label": "IT",
        "value": 800.0
      }
    ]
    "#);
    insta::assert_json_snapshot!(items_by_status(&items), @r#"
    [
      {
        "label": "active",
        "value": 3.0
      },
      {
        "label": "inactive",
        "value": 1.0
      }
    ]
    "#);
}

#[test]
fn dashboard_stats_over_sample() {
    let stats = DashboardStats::from_items(&sample());
    insta::assert_json_snapshot!(stats, @r#"
    {
      "totalItems": 4,
      "totalValue": 5150.0,
      "activeItems": 3,
      "averageValue": 1287.5
    }
    "#);
    assert_eq!(format_currency(stats.average_value), "$1,287.50");
}

#[test]
fn empty_collection_has_no_chart_points() {
    assert!(value_by_category(&[]).is_empty());
    assert!(items_by_status(&[]).is_empty());
}
