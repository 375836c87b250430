//! Platform-side vocabulary: exchanges, intervals, bars and the datafeed interface.

pub mod constant;
pub mod datafeed;
pub mod object;
pub mod utility;

pub use constant::{Exchange, Interval};
pub use datafeed::{stdout_output, Datafeed, Output};
pub use object::{BarData, HistoryRequest};
pub use utility::{china_tz, round_to};
