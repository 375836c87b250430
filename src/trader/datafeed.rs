use super::object::{BarData, HistoryRequest};

/// Human-readable message sink handed in by the platform.
pub type Output<'a> = &'a mut dyn FnMut(&str);

/// Default sink: print to the console.
pub fn stdout_output(msg: &str) {
    println!("{msg}");
}

/// Interface the platform uses to pull history from a data service.
pub trait Datafeed {
    /// Prepare the service. Returns whether it is ready to serve queries.
    fn init(&mut self, output: Output<'_>) -> bool;

    /// `None` means the request cannot be served by this datafeed at all;
    /// an empty vector means it was attempted and produced no bars.
    fn query_bar_history(
        &mut self,
        req: &HistoryRequest,
        output: Output<'_>,
    ) -> Option<Vec<BarData>>;
}
