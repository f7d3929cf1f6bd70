pub mod write_error;

use crate::domain::raster_image::RasterImage;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use write_error::FileWriteError;

/// メインのアイコンの出力先（作業ディレクトリからの相対パス）。
pub const ICON_PATH: &str = "../assets/icon.png";

/// アダプティブアイコン（前景）の出力先。中身は `ICON_PATH` と同じ。
pub const ADAPTIVE_ICON_PATH: &str = "../assets/adaptive-icon.png";

/// PNGの書き込み先を表現し、親ディレクトリが存在することを保証する構造体。
///
/// ディレクトリの作成は行いません。既存のファイルは上書きされます。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputArtifact {
    path: PathBuf,
}

impl OutputArtifact {
    /// 新しい `OutputArtifact` を作成する。
    ///
    /// 親ディレクトリが存在し、ディレクトリであることを検証する。
    /// 親のない相対パス（`icon.png` など）はカレントディレクトリを親とみなす。
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, FileWriteError> {
        let path = path.as_ref();
        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };

        if !parent.is_dir() {
            return Err(FileWriteError::MissingDirectory(parent.to_path_buf()));
        }

        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    /// `base_dir` を作業ディレクトリとみなしたときの、2つのアイコンの出力先を返す。
    pub fn icon_targets(base_dir: &Path) -> Result<[Self; 2], FileWriteError> {
        Ok([
            Self::new(base_dir.join(ICON_PATH))?,
            Self::new(base_dir.join(ADAPTIVE_ICON_PATH))?,
        ])
    }

    pub fn as_path(&self) -> &Path {
        &self.path
    }

    /// 画像データをファイルに書き込む。ファイルがなければ作成し、あれば切り詰めて上書きする。
    pub fn write(&self, image: &RasterImage) -> Result<(), FileWriteError> {
        fs::write(&self.path, image.png_data()).map_err(|source| FileWriteError::Io {
            path: self.path.clone(),
            source,
        })?;
        log::debug!(
            "{} に {} バイト書き込みました",
            self.path.display(),
            image.byte_len()
        );
        Ok(())
    }
}

impl fmt::Display for OutputArtifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}
