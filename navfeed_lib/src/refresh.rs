//! The load → merge → save pipeline.

use chrono::NaiveDate;

use crate::error::NavFeedError;
use crate::series::{merge_observations, Observation, Series};
use crate::store::SeriesStore;

/// Runs one full update: loads the stored series, merges the incoming
/// observations, trims to the retention window, and writes the result
/// back as a full replacement.
///
/// The store is only written after a fully successful merge; any failure
/// leaves the previously stored series untouched.
pub fn refresh(
    store: &dyn SeriesStore,
    incoming: &[Observation],
    today: NaiveDate,
    window_days: u32,
) -> Result<Series, NavFeedError> {
    let existing = store.load()?;
    tracing::debug!("loaded {} existing entries", existing.len());

    let updated = merge_observations(existing, incoming, today, window_days)?;
    store.save(&updated)?;
    Ok(updated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::PriceEntry;
    use std::cell::RefCell;

    /// In-memory store for exercising the pipeline without a filesystem.
    struct MemoryStore {
        series: RefCell<Series>,
        saves: RefCell<usize>,
    }

    impl MemoryStore {
        fn with(series: Series) -> Self {
            Self {
                series: RefCell::new(series),
                saves: RefCell::new(0),
            }
        }
    }

    impl SeriesStore for MemoryStore {
        fn load(&self) -> Result<Series, NavFeedError> {
            Ok(self.series.borrow().clone())
        }

        fn save(&self, series: &[PriceEntry]) -> Result<(), NavFeedError> {
            *self.series.borrow_mut() = series.to_vec();
            *self.saves.borrow_mut() += 1;
            Ok(())
        }
    }

    fn date(y: i32, m: u32, d: u32) -> chrono::NaiveDate {
        chrono::NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn entry(y: i32, m: u32, d: u32, nav: f64) -> PriceEntry {
        PriceEntry {
            as_of_date: date(y, m, d),
            net_asset_value: nav,
            change: None,
            change_percentage: None,
        }
    }

    #[test]
    fn refresh_merges_and_saves_once() {
        let store = MemoryStore::with(vec![entry(2025, 12, 24, 100.05)]);
        let incoming = vec![Observation::Historical {
            as_of: "2025-12-26T00:00:00-05:00".to_string(),
            price: 100.12,
        }];

        let out = refresh(&store, &incoming, date(2025, 12, 27), 90).unwrap();

        assert_eq!(out.len(), 2);
        assert_eq!(*store.saves.borrow(), 1);
        assert_eq!(*store.series.borrow(), out);
    }

    #[test]
    fn refresh_with_no_incoming_still_trims_and_saves() {
        let store = MemoryStore::with(vec![
            entry(2025, 6, 10, 95.0),
            entry(2025, 12, 24, 100.05),
        ]);

        let out = refresh(&store, &[], date(2025, 12, 27), 90).unwrap();

        assert_eq!(out, vec![entry(2025, 12, 24, 100.05)]);
        assert_eq!(*store.saves.borrow(), 1);
    }

    #[test]
    fn failed_merge_does_not_write_the_store() {
        let before = vec![entry(2025, 12, 24, 100.05)];
        let store = MemoryStore::with(before.clone());
        let incoming = vec![Observation::Historical {
            as_of: "garbage".to_string(),
            price: 1.0,
        }];

        let err = refresh(&store, &incoming, date(2025, 12, 27), 90).unwrap_err();

        assert!(matches!(err, NavFeedError::MalformedInput(_)));
        assert_eq!(*store.saves.borrow(), 0);
        assert_eq!(*store.series.borrow(), before);
    }
}
