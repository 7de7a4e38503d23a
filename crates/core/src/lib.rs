//! Leibniz Core: pi from the Gregory-Leibniz series, timed and reported
//!
//! π/4 = 1 - 1/3 + 1/5 - 1/7 + ...
//!
//! # Modules
//!
//! - `series`: the partial sum itself
//! - `args`: term count parsing and validation
//! - `clock`: monotonic timing around the evaluation
//! - `metrics`: absolute and relative error against π
//! - `report`: human, CSV and JSON rendering
//! - `driver`: the staged run used by the `pi_approx` binary
//! - `error`: usage and validation errors

pub mod args;
pub mod clock;
pub mod driver;
pub mod error;
pub mod metrics;
pub mod report;
pub mod series;

pub use args::{TermCount, parse_term_count};
pub use clock::{Stopwatch, monotonic_nanos, timed};
pub use driver::{Driver, Stage, usage};
pub use error::{DriverError, ValidationError};
pub use metrics::{ErrorMetrics, REFERENCE_PI};
pub use report::{Report, ReportFormat};
pub use series::{approximate_pi, leibniz_sum};
