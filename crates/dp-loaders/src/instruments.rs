//! The fixed set of instruments tracked by the sentiment pipeline.

/// A tracked stock and the metadata written alongside its sentiment rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instrument {
    /// Exchange ticker, as AlphaVantage expects it
    pub symbol: &'static str,
    /// Company name used as the NewsAPI search query
    pub name: &'static str,
    /// Country of listing
    pub country: &'static str,
}

/// Instruments processed on every run, in order.
pub const TRACKED_INSTRUMENTS: &[Instrument] = &[
    Instrument { symbol: "TSLA", name: "Tesla", country: "United States" },
    Instrument { symbol: "AAPL", name: "Apple", country: "United States" },
    Instrument { symbol: "NVDA", name: "Nvidia", country: "United States" },
    Instrument { symbol: "KO", name: "Coca-Cola", country: "United States" },
    Instrument { symbol: "005930.KQ", name: "Samsung", country: "South Korea" },
];
