use resvg::usvg;
use std::error::Error;
use std::fmt;

/// ベクター画像からPNGを生成する過程で発生するエラー。
#[derive(Debug)]
pub enum RasterizationError {
    /// SVGとして解析できなかった。組み込みの定義では起こらないはずのプログラミングエラー。
    InvalidSvg(usvg::Error),
    /// 指定された出力サイズでピクセルバッファを確保できなかった（0など）。
    InvalidSize(u32),
    /// PNGのエンコード、またはエンコード結果の検証に失敗した。
    Png(image::ImageError),
}

impl fmt::Display for RasterizationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RasterizationError::InvalidSvg(e) => write!(f, "SVGの解析に失敗しました: {}", e),
            RasterizationError::InvalidSize(size) => {
                write!(f, "{}x{} のピクセルバッファを作成できません。", size, size)
            }
            RasterizationError::Png(e) => write!(f, "PNGデータの処理に失敗しました: {}", e),
        }
    }
}

impl Error for RasterizationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            RasterizationError::InvalidSvg(e) => Some(e),
            RasterizationError::InvalidSize(_) => None,
            RasterizationError::Png(e) => Some(e),
        }
    }
}
