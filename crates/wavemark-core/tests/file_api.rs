mod common;

use std::path::Path;

use common::*;
use tempfile::tempdir;
use wavemark_core::media::load_file;
use wavemark_core::{
    commands, mean_absolute_error, ExtractionMode, ExtractionRegion, GrayMatrix, WatermarkOptions,
    WavemarkError,
};

fn save(m: &GrayMatrix, path: &Path) {
    use wavemark_core::Persist;
    m.save_as(path).expect("Failed to write fixture");
}

#[test]
fn should_embed_and_extract_through_files() {
    let temp_dir = tempdir().expect("Failed to create temporary directory");
    let host = temp_dir.path().join("host.png");
    let mark = temp_dir.path().join("mark.png");
    let watermarked = temp_dir.path().join("watermarked.png");
    let extracted = temp_dir.path().join("extracted.png");
    let payload = checkerboard(PAYLOAD, 8);
    save(&textured_host(21), &host);
    save(&payload, &mark);

    commands::embed(&host, &mark, &watermarked, WatermarkOptions::default())
        .expect("Failed to embed watermark");
    let mode = commands::extract(
        &watermarked,
        Some(&host),
        &extracted,
        WatermarkOptions::default(),
        ExtractionRegion::default(),
    )
    .expect("Failed to extract watermark");

    assert_eq!(mode, ExtractionMode::ReferenceAssisted);
    let recovered = load_file(&extracted).unwrap();
    let mae = mean_absolute_error(&as_float(&recovered), &as_float(&payload)).unwrap();
    assert!(mae < 40.0, "mean absolute error {mae}");

    let value = commands::psnr(&host, &watermarked).expect("Failed to calculate PSNR");
    assert!(value > 30.0, "{value} dB");
}

#[test]
fn should_run_a_reproducible_robustness_test() {
    let temp_dir = tempdir().expect("Failed to create temporary directory");
    let image = temp_dir.path().join("watermarked.png");
    save(&midrange_host(22), &image);

    let run = |name: &str| {
        let noisy = temp_dir.path().join(format!("{name}-noisy.png"));
        let report = commands::robustness(
            &image,
            None,
            &temp_dir.path().join(format!("{name}.png")),
            Some(&noisy),
            15.0,
            Some(7),
            WatermarkOptions::default(),
            ExtractionRegion::default(),
        )
        .expect("Failed to run robustness test");
        (report, load_file(&noisy).unwrap())
    };

    let (first, first_noisy) = run("first");
    let (second, second_noisy) = run("second");

    assert_eq!(first.mode, ExtractionMode::Blind);
    assert_eq!(first.sigma, 15.0);
    assert_eq!(first, second);
    assert_eq!(first_noisy, second_noisy);
}

#[test]
fn should_fail_on_unsupported_output_formats() {
    let temp_dir = tempdir().expect("Failed to create temporary directory");
    let host = temp_dir.path().join("host.png");
    save(&textured_host(23), &host);

    let result = commands::embed(
        &host,
        &host,
        &temp_dir.path().join("watermarked.unknown"),
        WatermarkOptions::default(),
    );

    assert!(matches!(result, Err(WavemarkError::ImageEncodingError)));
}

#[test]
fn should_fail_on_missing_inputs() {
    let temp_dir = tempdir().expect("Failed to create temporary directory");
    let missing = temp_dir.path().join("missing.png");

    let err = commands::psnr(&missing, &missing).unwrap_err();

    assert!(err.is_load_error());
}
