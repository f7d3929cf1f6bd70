mod cli;
mod workflow;

use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    // RUST_LOG 未指定時はエラーのみ出力する
    env_logger::init();

    // コマンドライン引数を解析します（--help / --version のみ）
    let args = cli::Args::parse();

    match workflow::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("エラー: {}", e);
            ExitCode::FAILURE
        }
    }
}
