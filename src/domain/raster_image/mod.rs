pub mod raster_error;
pub mod rasterizer;

use image::{GenericImageView, ImageFormat};
use raster_error::RasterizationError;

/// アイコンの出力解像度（一辺のピクセル数）。
pub const ICON_SIZE: u32 = 1024;

/// PNGファイルの先頭8バイト。
pub const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// メモリ上にエンコード済みのPNG画像。
///
/// `from_png` を通じてのみ作成でき、その際にデータが実際にPNGとしてデコードできること、
/// および幅と高さを確認します。一度作られたら変更されず、出力先への書き込みで読まれるだけです。
#[derive(Debug, Clone, PartialEq)]
pub struct RasterImage {
    png_data: Vec<u8>,
    width: u32,
    height: u32,
}

impl RasterImage {
    /// PNGのバイト列を検証して `RasterImage` を作成します。
    ///
    /// # 戻り値
    /// * `Ok(RasterImage)`: PNGとしてデコードできた場合。
    /// * `Err(RasterizationError::Png)`: PNGではない、または壊れている場合。
    pub fn from_png(png_data: Vec<u8>) -> Result<Self, RasterizationError> {
        let (width, height) = image::load_from_memory_with_format(&png_data, ImageFormat::Png)
            .map_err(RasterizationError::Png)?
            .dimensions();

        Ok(Self {
            png_data,
            width,
            height,
        })
    }

    pub fn png_data(&self) -> &[u8] {
        &self.png_data
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// エンコード済みデータのバイト数。
    pub fn byte_len(&self) -> usize {
        self.png_data.len()
    }
}
