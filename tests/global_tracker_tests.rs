//! Tests for the process-wide mark/clear/stats API
//!
//! Every test touches `GLOBAL_TRACKER`, so they run serially.

use marktime::{clear, mark, mark_labeled, report, stats, LineRange, GLOBAL_TRACKER};
use serial_test::serial;
use std::thread;
use std::time::Duration;

#[test]
#[serial]
fn test_clear_then_report_is_empty() {
    mark_labeled("leftover", 1);
    mark_labeled("leftover", 2);
    clear();

    assert!(report().is_empty());
    let mut out = Vec::new();
    GLOBAL_TRACKER.write_stats(&mut out).unwrap();
    assert!(out.is_empty(), "expected no output after clear");
}

#[test]
#[serial]
fn test_single_mark_after_clear_records_nothing() {
    clear();
    mark();
    assert!(report().is_empty());
}

#[test]
#[serial]
fn test_mark_attributes_to_call_site() {
    clear();
    let first = line!() + 1;
    mark();
    thread::sleep(Duration::from_millis(5));
    let second = line!() + 1;
    mark();

    let total = GLOBAL_TRACKER
        .total_for(file!(), LineRange { start: first, end: second })
        .expect("range should be recorded");
    assert!(total >= Duration::from_millis(5));
}

#[test]
#[serial]
fn test_loop_sums_iterations() {
    clear();
    for _ in 0..3 {
        mark();
        thread::sleep(Duration::from_millis(2));
        mark();
    }

    let report = report();
    assert_eq!(report.files.len(), 1);
    let file = &report.files[0];
    assert_eq!(file.file, file!());
    assert_eq!(file.ranges.len(), 1);
    assert_eq!(file.ranges[0].hits, 3);
    assert!(file.ranges[0].seconds >= 0.006);
}

#[test]
#[serial]
fn test_slowest_range_listed_first() {
    clear();
    mark_labeled("pipeline", 5);
    thread::sleep(Duration::from_millis(1));
    mark_labeled("pipeline", 10);
    thread::sleep(Duration::from_millis(20));
    mark_labeled("pipeline", 50);

    let report = report();
    let ranges = &report.files[0].ranges;
    assert_eq!((ranges[0].start, ranges[0].end), (10, 50));
    assert_eq!((ranges[1].start, ranges[1].end), (5, 10));
}

#[test]
#[serial]
fn test_labels_and_files_reported_separately() {
    clear();
    mark_labeled("alpha", 1);
    mark_labeled("beta", 1);
    mark_labeled("alpha", 2);
    mark_labeled("beta", 2);

    let names: Vec<String> = report().files.into_iter().map(|f| f.file).collect();
    assert_eq!(names, vec!["alpha".to_string(), "beta".to_string()]);
}

#[test]
#[serial]
fn test_stats_is_read_only() {
    clear();
    mark_labeled("A", 1);
    mark_labeled("A", 2);

    let before = report();
    stats();
    assert_eq!(report(), before);
    clear();
}
