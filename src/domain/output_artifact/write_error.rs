use std::error::Error;
use std::fmt;
use std::path::PathBuf;

// 出力ファイルの書き込みに関するエラー
#[derive(Debug)]
pub enum FileWriteError {
    /// 書き込み先の親ディレクトリが存在しない（またはディレクトリではない）。
    MissingDirectory(PathBuf),
    /// ファイルの作成・書き込み自体に失敗した（権限など）。
    Io { path: PathBuf, source: std::io::Error },
}

impl fmt::Display for FileWriteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileWriteError::MissingDirectory(dir) => {
                write!(f, "出力先ディレクトリ '{}' が存在しません。", dir.display())
            }
            FileWriteError::Io { path, source } => {
                write!(f, "'{}' への書き込みに失敗しました: {}", path.display(), source)
            }
        }
    }
}

impl Error for FileWriteError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            FileWriteError::MissingDirectory(_) => None,
            FileWriteError::Io { source, .. } => Some(source),
        }
    }
}
