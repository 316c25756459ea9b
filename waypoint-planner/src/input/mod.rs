//! Reading cases from the line-based input format.
//!
//! Each case is a line holding the waypoint count `n`, followed by `n` lines
//! of `x y penalty`. A count of zero ends the input.

mod error;
mod reader;

pub use error::InputError;
pub use reader::{CaseWaypoints, WaypointReader, parse_case_size, parse_waypoint};
