mod client;
mod errors;
pub mod jsonp;
pub mod types;
mod user_agent;
pub use self::client::Client;
pub use self::errors::Error;
