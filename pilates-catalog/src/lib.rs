pub mod offer;

pub use offer::{OfferCatalog, OfferCatalogItem};
