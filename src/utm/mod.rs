//! UTM parameter model and URL composition

mod composer;
mod params;

pub use composer::{compose, query_block};
pub use params::{UtmField, UtmParams};
