pub mod combine;
pub mod config;
pub mod lookup;
pub mod settings;
pub mod unicode;

pub use combine::{ReadingCombiner, ReadingSet};
pub use config::{ConfigError, NGramConfig, OutputMode, TransformConfig};
pub use lookup::{BuiltinLookup, LayeredLookup, LookupError, PhoneticLookup, TableLookup};
