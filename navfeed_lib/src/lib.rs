//! Library layer for the NAV feed: price series model, merge-and-retain
//! logic, and series persistence.
//!
//! Wraps the `vanguard_api` crate with the domain pipeline: observations
//! from either upstream payload shape are merged into a deduplicated
//! series trimmed to a trailing retention window, then written back as a
//! single JSON array.

pub mod error;
pub mod refresh;
pub mod series;
pub mod store;

pub use vanguard_api;
pub use vanguard_api::types;

pub use error::NavFeedError;
pub use refresh::refresh;
pub use series::{
    merge_observations, observations_from_history, Observation, PriceEntry, Series,
    DEFAULT_WINDOW_DAYS,
};
pub use store::{JsonFileStore, SeriesStore};
