mod dataset;
pub mod projection;
mod resolver;
mod source;

pub use dataset::{BoundaryDataset, BoundaryFeature, DatasetError};
pub use projection::EqualEarth;
pub use resolver::{feature_name, RegionResolver, Resolution};
pub use source::{
    load_dataset, load_with_fallback, spawn_source_probe, BoundaryTransport, GeographyError,
    GeographySource, GeographySources, HttpTransport, SourceProbe, TransportError,
    STATCAN_PROVINCES_URL,
};
