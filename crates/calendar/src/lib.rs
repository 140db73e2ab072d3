//! # revive-calendar
//!
//! Hour-of-year arithmetic for 8760- and 8784-hour annual weather records.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["series length"] -->|"YearKind::from_n_hours()"| B["YearKind"]
//!     C["(month, day, hour)"] -->|".hour_of_year()"| D["hour index"]
//!     D -->|"DateHour::from_hour_of_year()"| C
//!     E["Mon D:Mon D"] -->|"AnalysisWindow::from_days()"| F["AnalysisWindow"]
//!     F -->|".expand()"| F
//!     F -->|".pad()"| G["PaddedWindow"]
//!     G -->|".trim()"| F
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use revive_calendar::{AnalysisWindow, YearKind};
//!
//! let year = YearKind::from_n_hours(8760)?;
//! let week = AnalysisWindow::from_days((1, 8), (1, 14), year)?;
//! assert_eq!(week.len(), 168);
//! let padded = week.expand(24, year.n_hours());
//! assert_eq!(padded.len(), 216);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `year` | Year kind, month tables, month abbreviations |
//! | `date_hour` | Calendar position of a single hour |
//! | `window` | Half-open hour-of-year windows and their padded form |
//! | `error` | Error types |

mod date_hour;
mod error;
mod window;
mod year;

pub use date_hour::DateHour;
pub use error::CalendarError;
pub use window::{AnalysisWindow, PaddedWindow};
pub use year::{HOURS_PER_DAY, HOURS_PER_WEEK, YearKind, month_abbr, parse_month_abbr};
