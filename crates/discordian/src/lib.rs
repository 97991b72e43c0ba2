//! # eris-discordian
//!
//! Conversion of proleptic Gregorian dates to the Discordian calendar:
//! five 73-day seasons, a 5-day week, ten holydays, and St. Tib's Day
//! standing outside the week in leap years.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["GregorianDate"] -->|"convert()"| B["DiscordianDate"]
//!     B -->|".holyday()"| C["Option of Holyday"]
//!     B -->|".roll_days() / .roll_years()"| B
//!     B -->|"Display / .short()"| D["String"]
//!     B -->|"DateReport::from()"| E["DateReport"]
//!     E -->|"to_json()"| F["JSON"]
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use eris_calendar::GregorianDate;
//! use eris_discordian::{Holyday, convert};
//!
//! let date = convert(GregorianDate::new(2023, 1, 5).unwrap());
//! assert_eq!(date.holyday(), Some(Holyday::Mungday));
//! assert_eq!(
//!     date.to_string(),
//!     "Setting Orange, Chaos 5 in the YOLD 3189 - Celebrate Mungday"
//! );
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `date` | `DiscordianDate` and the `convert` function |
//! | `season` | Season names and their holydays |
//! | `weekday` | Weekday names |
//! | `holyday` | Holyday names and detection |
//! | `report` | Serializable report of all fields |
//! | `error` | Error types |

mod date;
mod error;
mod holyday;
mod report;
mod season;
mod weekday;

pub use date::{DiscordianDate, SEASON_LENGTH, WEEK_LENGTH, YOLD_OFFSET, convert};
pub use error::DiscordianError;
pub use holyday::{APOSTLE_DAY, FLUX_DAY, Holyday, ST_TIBS_DAY, holyday};
pub use report::{DateReport, to_json};
pub use season::Season;
pub use weekday::Weekday;
