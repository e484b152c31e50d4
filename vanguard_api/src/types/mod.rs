mod historical;
pub use self::historical::{HistoricalPrice, HistoricalPriceResponse, NavItem, NavSeries};

mod quote;
pub use self::quote::FundQuote;
