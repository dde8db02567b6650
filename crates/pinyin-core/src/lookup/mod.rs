//! Character → reading lookup.
//!
//! `PhoneticLookup` is the seam between the combiner and whatever reading
//! table backs it. `BuiltinLookup` uses the table embedded in the `pinyin`
//! crate, `TableLookup` holds user-supplied readings, and `LayeredLookup`
//! stacks several lookups so user tables can override the builtin one.

mod builtin;
mod layered;
mod table;

pub use builtin::BuiltinLookup;
pub use layered::LayeredLookup;
pub use table::TableLookup;

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("malformed reading {reading:?} for {symbol:?}")]
    Malformed { symbol: char, reading: String },

    #[error("reading source unavailable: {0}")]
    Unavailable(String),
}

pub trait PhoneticLookup: Send + Sync {
    /// Candidate readings for `symbol`, in table order.
    ///
    /// An empty vec means the symbol has no known reading. Implementations
    /// must be deterministic for a given symbol.
    fn readings_for(&self, symbol: char) -> Result<Vec<String>, LookupError>;
}

impl<L: PhoneticLookup + ?Sized> PhoneticLookup for std::sync::Arc<L> {
    fn readings_for(&self, symbol: char) -> Result<Vec<String>, LookupError> {
        (**self).readings_for(symbol)
    }
}
