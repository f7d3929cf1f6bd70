//! アプリケーションのメインワークフローを定義するモジュール。
//!
//! UI層（`cli`）とドメイン層（`domain`）を仲介し、
//! 「ソースの構築 → ラスタライズ → 2箇所への書き込み」の流れを実装します。

use crate::cli::Args;
use icon_generator::domain::raster_image::ICON_SIZE;
use icon_generator::domain::{OutputArtifact, Rasterizer, ResvgRasterizer, VectorImageSource};
use icon_generator::error::AppError;
use std::path::Path;

// --- public な関数 ---

/// アプリケーションのメインロジックを実行します。
///
/// 出力先はカレントディレクトリからの相対パスのまま扱います。
///
/// # 戻り値
/// * `Ok(())`: 2つのファイルの書き込みが完了し、成功メッセージを表示した場合。
/// * `Err(AppError)`: ラスタライズか書き込みに失敗した場合。リトライはしない。
pub fn run(_args: Args) -> Result<(), AppError> {
    let [icon, adaptive_icon] = generate_icons(&ResvgRasterizer, Path::new(""))?;

    println!(
        "✅ アイコンを生成しました: {}, {}",
        icon.as_path().display(),
        adaptive_icon.as_path().display()
    );
    Ok(())
}

/// アイコンを生成し、`base_dir` を作業ディレクトリとみなして2つのファイルに書き込みます。
///
/// 両方の出力先の親ディレクトリを先に検証するため、ディレクトリがない場合は
/// 1つ目のファイルも作られません。書き込み自体は順番に行い、2つの間の原子性はありません。
///
/// # 戻り値
/// 書き込んだ出力先（`icon.png`, `adaptive-icon.png` の順）。
pub fn generate_icons<R: Rasterizer>(
    rasterizer: &R,
    base_dir: &Path,
) -> Result<[OutputArtifact; 2], AppError> {
    // 1. ベクター画像の定義
    let source = VectorImageSource::icon();

    // 2. ラスタライズ
    let image = rasterizer.rasterize(&source, ICON_SIZE)?;
    log::info!(
        "{}x{} のPNGを生成しました ({} バイト)",
        image.width(),
        image.height(),
        image.byte_len()
    );

    // 3. 出力先の検証
    let targets = OutputArtifact::icon_targets(base_dir)?;

    // 4. 同じバイト列を2箇所に書き込み
    for target in &targets {
        target.write(&image)?;
        log::info!("書き込み完了: {}", target);
    }

    Ok(targets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use icon_generator::domain::raster_image::PNG_SIGNATURE;
    use icon_generator::domain::{FileWriteError, RasterImage, RasterizationError};
    use image::codecs::png::PngEncoder;
    use image::{ExtendedColorType, ImageEncoder};
    use std::fs;
    use std::path::PathBuf;
    use tempfile::{tempdir, TempDir};

    /// `<tmp>/scripts` を作業ディレクトリとし、必要なら `<tmp>/assets` も作る。
    fn workspace(with_assets: bool) -> (TempDir, PathBuf) {
        let root = tempdir().expect("Failed to create temp directory");
        let work = root.path().join("scripts");
        fs::create_dir(&work).expect("Failed to create scripts dir");
        if with_assets {
            fs::create_dir(root.path().join("assets")).expect("Failed to create assets dir");
        }
        (root, work)
    }

    /// 1x1 の固定PNGを返すラスタライザ。差し替えが効くことの確認用。
    struct SinglePixelRasterizer;

    impl Rasterizer for SinglePixelRasterizer {
        fn rasterize(
            &self,
            _source: &VectorImageSource,
            _size: u32,
        ) -> Result<RasterImage, RasterizationError> {
            let mut png = Vec::new();
            PngEncoder::new(&mut png)
                .write_image(&[1, 2, 3, 4], 1, 1, ExtendedColorType::Rgba8)
                .map_err(RasterizationError::Png)?;
            RasterImage::from_png(png)
        }
    }

    /// 常に失敗するラスタライザ。
    struct BrokenRasterizer;

    impl Rasterizer for BrokenRasterizer {
        fn rasterize(
            &self,
            _source: &VectorImageSource,
            size: u32,
        ) -> Result<RasterImage, RasterizationError> {
            Err(RasterizationError::InvalidSize(size))
        }
    }

    #[test]
    fn writes_identical_1024_pngs() {
        let (root, work) = workspace(true);

        let [icon, adaptive] = generate_icons(&ResvgRasterizer, &work).unwrap();

        let icon_bytes = fs::read(icon.as_path()).unwrap();
        let adaptive_bytes = fs::read(adaptive.as_path()).unwrap();
        assert!(icon_bytes.starts_with(&PNG_SIGNATURE));
        assert_eq!(icon_bytes, adaptive_bytes);

        let decoded = image::load_from_memory(&icon_bytes).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (1024, 1024));

        assert!(root.path().join("assets/icon.png").is_file());
        assert!(root.path().join("assets/adaptive-icon.png").is_file());
    }

    #[test]
    fn rerun_produces_same_bytes() {
        let (root, work) = workspace(true);
        let icon_path = root.path().join("assets/icon.png");

        generate_icons(&ResvgRasterizer, &work).unwrap();
        let first = fs::read(&icon_path).unwrap();
        generate_icons(&ResvgRasterizer, &work).unwrap();
        let second = fs::read(&icon_path).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn overwrites_previous_files() {
        let (root, work) = workspace(true);
        let stale = root.path().join("assets/adaptive-icon.png");
        fs::write(&stale, b"stale").unwrap();

        generate_icons(&ResvgRasterizer, &work).unwrap();

        assert!(fs::read(&stale).unwrap().starts_with(&PNG_SIGNATURE));
    }

    #[test]
    fn missing_assets_dir_fails_without_writing() {
        let (root, work) = workspace(false);

        let res = generate_icons(&ResvgRasterizer, &work);

        assert!(matches!(
            res,
            Err(AppError::FileWrite(FileWriteError::MissingDirectory(_)))
        ));
        assert!(!root.path().join("assets").exists());
    }

    /// 2つ目の書き込みだけが失敗した場合、1つ目のファイルは残る（2つの書き込みは原子的ではない）
    #[test]
    fn second_write_failure_keeps_first_file() {
        let (root, work) = workspace(true);
        fs::create_dir(root.path().join("assets/adaptive-icon.png")).unwrap();

        let res = generate_icons(&ResvgRasterizer, &work);

        match res {
            Err(AppError::FileWrite(FileWriteError::Io { path, .. })) => {
                assert_eq!(path, work.join("../assets/adaptive-icon.png"));
            }
            other => panic!("予期せぬ結果: {:?}", other),
        }
        let icon = fs::read(root.path().join("assets/icon.png")).unwrap();
        assert!(icon.starts_with(&PNG_SIGNATURE));
    }

    #[test]
    fn rasterization_failure_writes_nothing() {
        let (root, work) = workspace(true);

        let res = generate_icons(&BrokenRasterizer, &work);

        assert!(matches!(
            res,
            Err(AppError::Rasterization(RasterizationError::InvalidSize(1024)))
        ));
        assert_eq!(fs::read_dir(root.path().join("assets")).unwrap().count(), 0);
    }

    #[test]
    fn rasterizer_can_be_substituted() {
        let (_root, work) = workspace(true);

        let [icon, adaptive] = generate_icons(&SinglePixelRasterizer, &work).unwrap();

        let decoded = image::open(icon.as_path()).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (1, 1));
        assert_eq!(
            fs::read(icon.as_path()).unwrap(),
            fs::read(adaptive.as_path()).unwrap()
        );
    }
}
