//! # eris-calendar
//!
//! Pure date arithmetic for the proleptic Gregorian calendar.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["(year, month, day)"] -->|"GregorianDate::new()"| B["GregorianDate"]
//!     S["&quot;YYYY-MM-DD&quot;"] -->|".parse()"| B
//!     B -->|".doy()"| C["Doy (1..=366)"]
//!     B -->|".roll_days() / .roll_years()"| B
//!     B -->|"gregorian_sequence()"| D["Vec of GregorianDate"]
//!     B <-->|"TryFrom / From"| E["chrono::NaiveDate"]
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use eris_calendar::{GregorianDate, gregorian_sequence, is_leap_year};
//!
//! let date: GregorianDate = "2024-02-29".parse().unwrap();
//! assert_eq!(date.doy().get(), 60);
//! assert_eq!(date.to_string(), "2024-02-29 Thu");
//!
//! let next_year = date.roll_years(1).unwrap(); // 2025-02-28
//! let week = gregorian_sequence(date, 5).unwrap();
//! assert!(is_leap_year(2000) && !is_leap_year(1900));
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `leap` | Leap-year rule and month lengths |
//! | `doy` | Day-of-year newtype |
//! | `date` | Validated Gregorian date, rolling, parsing and display |
//! | `sequence` | Date sequence generation |
//! | `error` | Error types |

mod date;
mod doy;
mod error;
mod leap;
mod sequence;

pub use date::{GregorianDate, MAX_YEAR, MIN_YEAR};
pub use doy::Doy;
pub use error::CalendarError;
pub use leap::{days_in_month, days_in_year, is_leap_year};
pub use sequence::gregorian_sequence;
