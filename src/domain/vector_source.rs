// アイコンの元になるベクター画像（SVG）の定義

/// アイコンのSVGソース。キャンバスいっぱいの円と、中央の十字（角丸矩形2つ）で構成される。
const ICON_SVG: &str = r##"<svg width="1024" height="1024" viewBox="0 0 1024 1024" fill="none" xmlns="http://www.w3.org/2000/svg">
  <circle cx="512" cy="512" r="512" fill="#393D7E"/>
  <g transform="translate(512, 512)">
    <rect x="-120" y="-30" width="240" height="60" rx="10" fill="#6DC3BB"/>
    <rect x="-30" y="-120" width="60" height="240" rx="10" fill="#6DC3BB"/>
  </g>
</svg>"##;

/// SVGの論理キャンバスサイズ（viewBox の一辺）。
pub const CANVAS_SIZE: u32 = 1024;

/// 円の塗り色。
pub const CIRCLE_COLOR: IconColor = IconColor::new(0x39, 0x3D, 0x7E);

/// 十字の塗り色。
pub const CROSS_COLOR: IconColor = IconColor::new(0x6D, 0xC3, 0xBB);

// --- 構造体定義 ---

/// 不透明なRGBカラー。テストでのピクセル比較にも使う。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconColor {
    red: u8,
    green: u8,
    blue: u8,
}

impl IconColor {
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// `[r, g, b, 255]` の形で返す。
    pub fn to_rgba(self) -> [u8; 4] {
        [self.red, self.green, self.blue, 255]
    }
}

/// 変更不可能なベクター画像の記述。
///
/// [`VectorImageSource::icon`] で組み込みのアイコンを取得します。
/// `canvas_size` はラスタライズ時の拡大率の基準になります。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VectorImageSource {
    svg: &'static str,
    canvas_size: u32,
}

impl VectorImageSource {
    /// 組み込みのアイコン定義を返します。
    pub fn icon() -> Self {
        Self {
            svg: ICON_SVG,
            canvas_size: CANVAS_SIZE,
        }
    }

    /// 任意のSVG文字列と論理キャンバスサイズから作成します。内容の検証は行いません。
    #[cfg(test)]
    pub(crate) fn from_svg(svg: &'static str, canvas_size: u32) -> Self {
        Self { svg, canvas_size }
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.svg.as_bytes()
    }

    pub fn canvas_size(&self) -> u32 {
        self.canvas_size
    }
}
