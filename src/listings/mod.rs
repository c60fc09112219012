pub mod mock;
pub mod search;
pub mod traits;
pub mod types;

pub use mock::MockCatalog;
pub use search::{saved_listings, search};
pub use traits::ListingSource;
pub use types::{FilterMode, SortOrder};
