use core::time::Duration;

use super::{Mode, Opts, Report};

fn args(args: &[&str]) -> Vec<String> {
    args.iter().map(|a| a.to_string()).collect()
}

#[test]
fn test_parse_opts() {
    let opts = Opts::parse_from(args(&["--json", "--input", "example.txt", "--bench"])).unwrap();
    assert!(opts.json);
    assert!(matches!(opts.mode, Mode::Bench));
    assert_eq!(opts.input.as_deref(), Some("example.txt"));

    let opts = Opts::parse_from(args(&["--", "--unknown"])).unwrap();
    assert!(!opts.json);
    assert!(matches!(opts.mode, Mode::Default));
}

#[test]
fn test_parse_opts_errors() {
    assert!(Opts::parse_from(args(&["--bench", "--bench"])).is_err());
    assert!(Opts::parse_from(args(&["--input"])).is_err());
    assert!(Opts::parse_from(args(&["--count", "many"])).is_err());
    assert!(Opts::parse_from(args(&["--frobnicate"])).is_err());
}

#[test]
fn test_report() {
    let samples = (1..=100).map(Duration::from_millis).collect::<Vec<_>>();
    let report = Report::from_sorted(&samples);

    assert_eq!(report.count, 100);
    assert_eq!(report.min, Duration::from_millis(1));
    assert_eq!(report.max, Duration::from_millis(100));
    assert_eq!(report.p50, Duration::from_millis(50));
    assert_eq!(report.p99, Duration::from_millis(99));
    assert_eq!(report.avg, Duration::from_micros(50500));

    let empty = Report::from_sorted(&[]);
    assert_eq!(empty.count, 0);
    assert_eq!(empty.p95, Duration::ZERO);
}
