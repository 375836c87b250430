pub mod time;

pub use time::compact_date;
