//! 固定のベクター画像からモバイルアプリ用のアイコンPNGを生成するライブラリ部分。
//!
//! ソースの定義（`domain::vector_source`）、ラスタライズ（`domain::raster_image`）、
//! ファイルへの書き込み（`domain::output_artifact`）をそれぞれ独立したモジュールとして持ちます。

pub mod domain;
pub mod error;
