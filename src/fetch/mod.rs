use crate::error::Result;
use crate::mapping::QuoteCategory;

pub mod decode;
pub mod eastmoney;
pub mod history;
pub mod request;
pub mod table;

pub use eastmoney::{EastmoneyClient, FuturesQuotes, StockQuotes};
pub use history::build_bars;
pub use table::{VendorRow, VendorTable};

pub type FetchResult<T> = Result<T>;

/// A vendor dataset that serves kline history. `beg` and `end` are `YYYYMMDD`
/// and `klt` is the vendor interval code.
pub trait QuoteSurface {
    fn get_quote_history(
        &self,
        symbol: &str,
        beg: &str,
        end: &str,
        klt: u32,
    ) -> FetchResult<VendorTable>;
}

/// One quote surface per category.
pub struct QuoteSurfaces {
    pub stock: Box<dyn QuoteSurface>,
    pub futures: Box<dyn QuoteSurface>,
}

impl QuoteSurfaces {
    pub fn new(stock: Box<dyn QuoteSurface>, futures: Box<dyn QuoteSurface>) -> Self {
        Self { stock, futures }
    }

    pub fn select(&self, category: QuoteCategory) -> &dyn QuoteSurface {
        match category {
            QuoteCategory::Stock => self.stock.as_ref(),
            QuoteCategory::Futures => self.futures.as_ref(),
        }
    }
}
