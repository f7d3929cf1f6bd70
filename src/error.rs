use crate::domain::output_artifact::write_error::FileWriteError;
use crate::domain::raster_image::raster_error::RasterizationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("ラスタライズエラー: {0}")]
    Rasterization(#[from] RasterizationError),

    #[error("ファイル書き込みエラー: {0}")]
    FileWrite(#[from] FileWriteError),
}
