// ベクター画像をPNGに変換するラスタライザ

use super::raster_error::RasterizationError;
use super::RasterImage;
use crate::domain::vector_source::VectorImageSource;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use resvg::{tiny_skia, usvg};

/// ベクター画像を指定サイズの正方形PNGに変換する処理の抽象。
///
/// ソースの組み立てやファイルへの書き込みとは独立しているため、
/// 別の変換ライブラリに差し替える場合もこのトレイトを実装するだけで済みます。
pub trait Rasterizer {
    fn rasterize(
        &self,
        source: &VectorImageSource,
        size: u32,
    ) -> Result<RasterImage, RasterizationError>;
}

/// `resvg` (usvg + tiny-skia) を使ったラスタライザ。
#[derive(Debug, Default, Clone, Copy)]
pub struct ResvgRasterizer;

impl Rasterizer for ResvgRasterizer {
    fn rasterize(
        &self,
        source: &VectorImageSource,
        size: u32,
    ) -> Result<RasterImage, RasterizationError> {
        // 1. SVGの解析
        let tree = usvg::Tree::from_data(source.as_bytes(), &usvg::Options::default())
            .map_err(RasterizationError::InvalidSvg)?;
        log::debug!(
            "SVGを解析しました (キャンバス {}x{})",
            tree.size().width(),
            tree.size().height()
        );

        // 2. 描画。論理キャンバスの一辺を出力サイズに合わせて拡大縮小する。
        // 背景は塗らないので円の外側は透明のまま残る。
        let mut pixmap =
            tiny_skia::Pixmap::new(size, size).ok_or(RasterizationError::InvalidSize(size))?;
        let scale = size as f32 / source.canvas_size() as f32;
        let transform = tiny_skia::Transform::default().pre_scale(scale, scale);
        resvg::render(&tree, transform, &mut pixmap.as_mut());
        log::debug!("{}x{} のピクセルバッファに描画しました", size, size);

        // 3. PNGへのエンコード
        let png_data = encode_png(&pixmap)?;
        log::debug!("PNGにエンコードしました ({} バイト)", png_data.len());

        RasterImage::from_png(png_data)
    }
}

/// tiny-skia のピクセルは乗算済みアルファなので、通常のRGBAに戻してからエンコードする。
fn encode_png(pixmap: &tiny_skia::Pixmap) -> Result<Vec<u8>, RasterizationError> {
    let rgba: Vec<u8> = pixmap
        .pixels()
        .iter()
        .flat_map(|pixel| {
            let color = pixel.demultiply();
            [color.red(), color.green(), color.blue(), color.alpha()]
        })
        .collect();

    let mut png_data = Vec::new();
    PngEncoder::new(&mut png_data)
        .write_image(
            &rgba,
            pixmap.width(),
            pixmap.height(),
            ExtendedColorType::Rgba8,
        )
        .map_err(RasterizationError::Png)?;
    Ok(png_data)
}
