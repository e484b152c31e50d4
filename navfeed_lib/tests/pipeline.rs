use chrono::NaiveDate;
use navfeed_lib::{refresh, JsonFileStore, NavFeedError, Observation, SeriesStore};

fn scratch_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!(
        "navfeed_pipeline_{}_{}.json",
        std::process::id(),
        name
    ))
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn first_run_creates_the_series_file() {
    let path = scratch_path("first_run");
    let store = JsonFileStore::new(&path);
    let incoming = vec![Observation::Historical {
        as_of: "2025-12-26T00:00:00-05:00".to_string(),
        price: 100.12,
    }];

    let out = refresh(&store, &incoming, date(2025, 12, 27), 90).unwrap();
    assert_eq!(out.len(), 1);

    let text = std::fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value[0]["asOfDate"], "12/26/2025");
    assert_eq!(value[0]["netAssetValue"], 100.12);

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn repeated_runs_accumulate_without_duplicates() {
    let path = scratch_path("accumulate");
    let store = JsonFileStore::new(&path);
    let today = date(2025, 12, 27);

    let first = vec![
        Observation::Historical {
            as_of: "2025-12-24T00:00:00-05:00".to_string(),
            price: 100.05,
        },
        Observation::Historical {
            as_of: "2025-12-26T00:00:00-05:00".to_string(),
            price: 100.12,
        },
    ];
    refresh(&store, &first, today, 90).unwrap();

    // next run re-delivers an overlapping batch plus one new close
    let second = vec![
        Observation::Historical {
            as_of: "2025-12-26T00:00:00-05:00".to_string(),
            price: 100.12,
        },
        Observation::Historical {
            as_of: "2025-12-29T00:00:00-05:00".to_string(),
            price: 100.30,
        },
    ];
    let out = refresh(&store, &second, date(2025, 12, 30), 90).unwrap();

    let dates: Vec<String> = out
        .iter()
        .map(|e| e.as_of_date.format("%m/%d/%Y").to_string())
        .collect();
    assert_eq!(dates, vec!["12/24/2025", "12/26/2025", "12/29/2025"]);

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn failed_merge_leaves_the_file_untouched() {
    let path = scratch_path("untouched");
    let store = JsonFileStore::new(&path);
    let good = vec![Observation::Historical {
        as_of: "2025-12-26T00:00:00-05:00".to_string(),
        price: 100.12,
    }];
    refresh(&store, &good, date(2025, 12, 27), 90).unwrap();
    let before = std::fs::read_to_string(&path).unwrap();

    let bad = vec![Observation::Historical {
        as_of: "not-a-timestamp".to_string(),
        price: 1.0,
    }];
    let err = refresh(&store, &bad, date(2025, 12, 27), 90).unwrap_err();
    assert!(matches!(err, NavFeedError::MalformedInput(_)));

    assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn corrupt_file_aborts_instead_of_rebuilding() {
    let path = scratch_path("corrupt");
    std::fs::write(&path, "callback garbage, not a series").unwrap();
    let store = JsonFileStore::new(&path);

    let err = store.load().unwrap_err();
    assert!(matches!(err, NavFeedError::MalformedStoredData { .. }));

    std::fs::remove_file(&path).unwrap();
}
