use std::fs;

use tempfile::TempDir;

use super::chart::generate_chart;
use crate::types::DisplaySeries;
use crate::utils::DAY_LABELS;

fn chart_path(temp_dir: &TempDir) -> String {
    temp_dir
        .path()
        .join("test_chart.png")
        .to_str()
        .unwrap()
        .to_string()
}

fn full_week_series() -> DisplaySeries {
    DisplaySeries {
        labels: DAY_LABELS.to_vec(),
        values: vec![0, 2, 0, 1, 0, 3, 0],
        week_start: chrono::NaiveDate::from_ymd_opt(2024, 6, 2),
    }
}

#[test]
fn test_generate_chart_writes_png() {
    let temp_dir = TempDir::new().unwrap();
    let path = chart_path(&temp_dir);

    assert!(generate_chart(&full_week_series(), &path).is_ok());

    let metadata = fs::metadata(&path).unwrap();
    assert!(metadata.len() > 0);
}

#[test]
fn test_generate_chart_partial_series() {
    let temp_dir = TempDir::new().unwrap();
    let path = chart_path(&temp_dir);

    // The fallback scan can retain fewer than 7 days.
    let series = DisplaySeries {
        labels: vec!["Sun", "Tue"],
        values: vec![1, 2],
        week_start: None,
    };

    assert!(generate_chart(&series, &path).is_ok());
    assert!(fs::metadata(&path).is_ok());
}

#[test]
fn test_generate_chart_overwrites_previous_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = chart_path(&temp_dir);

    assert!(generate_chart(&full_week_series(), &path).is_ok());
    let first = fs::metadata(&path).unwrap().len();

    let series = DisplaySeries {
        labels: vec!["Mon"],
        values: vec![42],
        week_start: None,
    };
    assert!(generate_chart(&series, &path).is_ok());

    // Exactly one chart file exists afterward, holding the latest render.
    let entries = fs::read_dir(temp_dir.path()).unwrap().count();
    assert_eq!(entries, 1);
    assert!(first > 0);
}
