use clap::Parser;

/// 組み込みのSVGから ../assets/icon.png と ../assets/adaptive-icon.png を生成するツール
///
/// 引数はありません。出力先は実行時のカレントディレクトリからの相対パスです。
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {}
