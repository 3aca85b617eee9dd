use std::fs;
use std::path::Path;

use image::{DynamicImage, GenericImageView, Rgb, RgbImage, Rgba, RgbaImage};
use image_processor::Dimensions;
use tempfile::TempDir;

use super::*;

const TARGET: Dimensions = Dimensions::new(64, 40);

fn small_config(dir: &Path) -> ResizerConfig {
    ResizerConfig {
        target: TARGET,
        ..ResizerConfig::for_dir(dir)
    }
}

fn save_rgb(dir: &Path, name: &str, width: u32, height: u32) {
    RgbImage::from_pixel(width, height, Rgb([40, 90, 200]))
        .save(dir.join(name))
        .unwrap();
}

fn dims(path: &Path) -> (u32, u32) {
    image::open(path).unwrap().dimensions()
}

/// Run the batch and return the outcome plus the captured report.
fn run(config: ResizerConfig) -> (BatchRun, String) {
    let mut out = Vec::new();
    let result = BatchResizer::new(config).run(&mut out).unwrap();
    (result, String::from_utf8(out).unwrap())
}

#[test]
fn test_png_resized_and_text_file_untouched() {
    let dir = TempDir::new().unwrap();
    save_rgb(dir.path(), "a.png", 80, 60);
    fs::write(dir.path().join("b.txt"), b"leave me alone").unwrap();

    let (result, report) = run(small_config(dir.path()));

    assert_eq!(
        result,
        BatchRun::Completed(BatchSummary {
            succeeded: 1,
            total: 1
        })
    );
    assert_eq!(dims(&dir.path().join("a.png")), (64, 40));
    assert_eq!(fs::read(dir.path().join("b.txt")).unwrap(), b"leave me alone");
    assert!(report.contains("✓ a.png: 80×60 → 64×40"), "{report}");
    assert!(!report.contains("b.txt"));
    assert!(report.ends_with("Completed: 1/1 images resized\n"), "{report}");
}

#[test]
fn test_report_layout() {
    let dir = TempDir::new().unwrap();
    save_rgb(dir.path(), "one.png", 10, 10);
    save_rgb(dir.path(), "two.bmp", 20, 10);

    let (_, report) = run(small_config(dir.path()));

    let expected = "Found 2 image(s)\n\
                    Resizing to 64 × 40px\n\
                    \n\
                    ✓ one.png: 10×10 → 64×40\n\
                    ✓ two.bmp: 20×10 → 64×40\n\
                    \n\
                    Completed: 2/2 images resized\n";
    assert_eq!(report, expected);
}

#[test]
fn test_every_allowed_format_resized_with_extension_kept() {
    let dir = TempDir::new().unwrap();
    for name in ["a.png", "b.jpg", "c.jpeg", "d.gif", "e.bmp"] {
        save_rgb(dir.path(), name, 30, 20);
    }

    let (result, _) = run(small_config(dir.path()));
    assert_eq!(
        result,
        BatchRun::Completed(BatchSummary {
            succeeded: 5,
            total: 5
        })
    );

    for name in ["a.png", "b.jpg", "c.jpeg", "d.gif", "e.bmp"] {
        let path = dir.path().join(name);
        assert_eq!(dims(&path), (64, 40), "{name}");
        let guessed = image::ImageReader::open(&path)
            .unwrap()
            .with_guessed_format()
            .unwrap()
            .format();
        assert_eq!(guessed, image::ImageFormat::from_path(&path).ok(), "{name}");
    }
}

#[test]
fn test_uppercase_extension_is_candidate() {
    let dir = TempDir::new().unwrap();
    save_rgb(dir.path(), "Shot.JPG", 16, 16);

    let (result, _) = run(small_config(dir.path()));
    assert!(matches!(result, BatchRun::Completed(s) if s.succeeded == 1));
    assert_eq!(dims(&dir.path().join("Shot.JPG")), (64, 40));
}

#[test]
fn test_rgba_png_saved_as_jpeg_succeeds() {
    let dir = TempDir::new().unwrap();
    // JPEG name, but RGBA PNG content
    let rgba = RgbaImage::from_pixel(12, 12, Rgba([255, 0, 0, 128]));
    DynamicImage::ImageRgba8(rgba)
        .save_with_format(dir.path().join("alpha.jpg"), image::ImageFormat::Png)
        .unwrap();

    let (result, _) = run(small_config(dir.path()));
    assert!(matches!(result, BatchRun::Completed(s) if s.succeeded == 1));
    assert_eq!(dims(&dir.path().join("alpha.jpg")), (64, 40));
}

#[test]
fn test_missing_directory() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("Screenshots");

    let (result, report) = run(small_config(&missing));

    assert_eq!(result, BatchRun::MissingDirectory(missing.clone()));
    assert_eq!(report, format!("Error: Directory {} not found\n", missing.display()));
}

#[test]
fn test_file_in_place_of_directory_is_missing() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("Screenshots");
    fs::write(&file, b"").unwrap();

    let (result, _) = run(small_config(&file));
    assert_eq!(result, BatchRun::MissingDirectory(file));
}

#[test]
fn test_no_candidates() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("notes.txt"), b"hi").unwrap();
    fs::create_dir(dir.path().join("nested")).unwrap();
    save_rgb(&dir.path().join("nested"), "deep.png", 5, 5);

    let (result, report) = run(small_config(dir.path()));

    assert_eq!(result, BatchRun::NoCandidates(dir.path().to_path_buf()));
    assert_eq!(report, "No image files found\n");
    assert_eq!(dims(&dir.path().join("nested/deep.png")), (5, 5));
}

#[test]
fn test_corrupt_file_reported_and_left_intact() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.png");
    fs::write(&path, b"not really a png").unwrap();

    let (result, report) = run(small_config(dir.path()));

    assert_eq!(
        result,
        BatchRun::Completed(BatchSummary {
            succeeded: 0,
            total: 1
        })
    );
    assert!(report.contains("✗ broken.png: Error - cannot decode image:"), "{report}");
    assert!(report.ends_with("Completed: 0/1 images resized\n"));
    assert_eq!(fs::read(&path).unwrap(), b"not really a png");
}

#[test]
fn test_failure_does_not_stop_batch() {
    let dir = TempDir::new().unwrap();
    save_rgb(dir.path(), "a.png", 10, 10);
    fs::write(dir.path().join("b.gif"), b"garbage").unwrap();
    save_rgb(dir.path(), "c.png", 10, 10);

    let (result, report) = run(small_config(dir.path()));

    let BatchRun::Completed(summary) = result else {
        panic!("expected a completed run, got {result:?}");
    };
    assert_eq!(summary.succeeded, 2);
    assert_eq!(summary.total, 3);
    assert_eq!(summary.failed(), 1);
    assert!(summary.succeeded <= summary.total);

    let lines: Vec<&str> = report.lines().filter(|l| l.starts_with(['✓', '✗'])).collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("✓ a.png"));
    assert!(lines[1].starts_with("✗ b.gif"));
    assert!(lines[2].starts_with("✓ c.png"));
    assert_eq!(dims(&dir.path().join("c.png")), (64, 40));
}

#[test]
fn test_second_run_is_idempotent() {
    let dir = TempDir::new().unwrap();
    save_rgb(dir.path(), "a.png", 100, 30);
    save_rgb(dir.path(), "b.jpg", 7, 90);

    let (first, _) = run(small_config(dir.path()));
    let after_first = (dims(&dir.path().join("a.png")), dims(&dir.path().join("b.jpg")));
    let (second, report) = run(small_config(dir.path()));
    let after_second = (dims(&dir.path().join("a.png")), dims(&dir.path().join("b.jpg")));

    assert_eq!(first, second);
    assert_eq!(after_first, after_second);
    assert!(report.contains("✓ a.png: 64×40 → 64×40"));
}

#[test]
fn test_resize_file_returns_original_dimensions() {
    let dir = TempDir::new().unwrap();
    save_rgb(dir.path(), "shot.png", 33, 21);
    let candidate = find_candidates(dir.path()).unwrap().remove(0);

    let resizer = BatchResizer::new(small_config(dir.path()));
    let original = resizer.resize_file(&candidate).unwrap();

    assert_eq!(original, Dimensions::new(33, 21));
    assert_eq!(dims(&candidate.path), (64, 40));
}

#[test]
fn test_outcome_display() {
    let ok = ResizeOutcome::Resized {
        file_name: "home.png".into(),
        original: Dimensions::new(800, 600),
        target: Dimensions::new(2560, 1600),
    };
    let failed = ResizeOutcome::Failed {
        file_name: "bad.gif".into(),
        error: "boom".into(),
    };
    assert_eq!(ok.to_string(), "✓ home.png: 800×600 → 2560×1600");
    assert_eq!(failed.to_string(), "✗ bad.gif: Error - boom");
    assert!(ok.is_success());
    assert!(!failed.is_success());
}
