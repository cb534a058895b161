pub mod errors;
pub mod filter;
pub mod http;
pub mod models;
pub mod snapshot;
pub mod stats;
pub mod tasks;
pub mod utils;

pub use errors::DashError;
pub use filter::{
    CatalogFilter,
    FilterOptions,
};
pub use models::{
    Amiibo,
    Region,
    ReleaseDates,
};
pub use snapshot::{
    CatalogSnapshot,
    SummaryCounts,
};
pub use stats::{
    SeriesSlice,
    TimelineBucket,
};
