//! Unofficial client for the EskomSePush business API (v2.0).
//!
//! ```no_run
//! # async fn run() -> Result<(), sepush_api::Error> {
//! let client = sepush_api::Client::new("my-token")?;
//! let allowance = client.check_allowance().await?;
//! println!("used {} of {}", allowance["allowance"]["count"], allowance["allowance"]["limit"]);
//! # Ok(())
//! # }
//! ```
//!
//! Every operation returns the body as a `serde_json::Value`. Use
//! [`parse_as`] with a struct from [`types`] for typed access.

mod client;
pub mod config;
mod errors;
mod query;
mod response;
pub mod types;
pub use self::client::Client;
pub use self::config::ClientConfig;
pub use self::errors::{Cause, Error, ErrorKind};
pub use self::query::{AreaQuery, AreaTest, AreasSearchQuery, NearbyQuery, Query};
pub use self::response::{classify_status, handle_response, parse_as, RawResponse};
