use crate::models::{Property, PropertyDetails};

/// Common trait for all listing sources
/// The coordinator only ever reads listings through this seam
pub trait ListingSource: Send + Sync {
    /// Every listing the source knows about
    fn listings(&self) -> &[Property];

    /// Full details for one listing, if the id is known
    fn details(&self, id: &str) -> Option<PropertyDetails>;

    /// Get the name of the listing source
    fn source_name(&self) -> &'static str;

    fn find(&self, id: &str) -> Option<&Property> {
        self.listings().iter().find(|p| p.id == id)
    }
}
