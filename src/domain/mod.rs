pub mod output_artifact;
pub mod raster_image;
pub mod vector_source;

// --- public re-exports ---
pub use output_artifact::write_error::FileWriteError;
pub use output_artifact::OutputArtifact;
pub use raster_image::raster_error::RasterizationError;
pub use raster_image::rasterizer::{Rasterizer, ResvgRasterizer};
pub use raster_image::RasterImage;
pub use vector_source::VectorImageSource;
