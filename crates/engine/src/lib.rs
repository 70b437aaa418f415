pub mod aggregator;
pub mod criteria;
pub mod result;

pub use aggregator::{AggregateError, AggregationSettings, AssetAggregator};
pub use criteria::FilterCriteria;
pub use result::AggregateResult;
