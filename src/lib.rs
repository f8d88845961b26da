pub mod boiler;
pub mod cache;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod plate;
pub mod store;
pub mod test_helpers;

pub use boiler::Boiler;
pub use cache::{CacheStats, PlateCache};
pub use error::{BoilError, Result};
pub use models::{GenerateOptions, PlateRequest, Template, DEFAULT_NAME};
pub use plate::Plate;
pub use store::{Catalog, TemplateStore};
