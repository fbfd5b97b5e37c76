//! Data side of the pipeline: category layout, YAML loading, ordering and typed records.
//! Nothing here writes files or produces markup.

pub mod category;
pub mod loader;
pub mod models;
pub mod record;
pub mod sorter;

pub use category::Category;
pub use loader::{load_category, load_collection, load_singleton};
pub use record::Record;
pub use sorter::sort_by_id_desc;
