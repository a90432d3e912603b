//! GeoJSON feature collection model for shoreline and transect data.
//!
//! Features carry a free-form property map so shoreline attributes pass
//! through to the output untouched. Geometry is a tagged enum; geometry types
//! this pipeline does not process (points, polygons, anything else) still
//! deserialize, so a mixed collection loads cleanly and the unsupported
//! features are simply skipped downstream.

pub mod collection;
pub mod error;
pub mod feature;

pub use collection::FeatureCollection;
pub use error::{GeoJsonError, GeoJsonResult};
pub use feature::{Feature, Geometry};
