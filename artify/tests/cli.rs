use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output},
};

use image::{Rgb, RgbImage};
use libartify::DEFAULT_RAMP;
use tempfile::TempDir;

fn artify(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_artify"))
        .args(args)
        .output()
        .expect("failed to run artify")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn solid(dir: &Path, name: &str, width: u32, height: u32, value: u8) -> PathBuf {
    let path = dir.join(name);
    RgbImage::from_pixel(width, height, Rgb([value; 3]))
        .save(&path)
        .unwrap();
    path
}

fn grid(ch: char, width: usize, height: usize) -> String {
    let row: String = std::iter::repeat_n(ch, width).collect();
    vec![row; height].join("\n")
}

#[test]
fn black_image_uses_first_glyph() {
    let dir = TempDir::new().unwrap();
    let path = solid(dir.path(), "black.png", 10, 10, 0);

    let output = artify(&[path.to_str().unwrap(), "--width", "10"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), grid(' ', 10, 10) + "\n");
}

#[test]
fn white_image_uses_last_glyph() {
    let dir = TempDir::new().unwrap();
    let path = solid(dir.path(), "white.png", 10, 10, 255);

    let output = artify(&[path.to_str().unwrap(), "-w", "10"]);
    assert!(output.status.success());

    let last = DEFAULT_RAMP.chars().last().unwrap();
    assert_eq!(stdout(&output), grid(last, 10, 10) + "\n");
}

#[test]
fn default_width_is_one_hundred() {
    let dir = TempDir::new().unwrap();
    let path = solid(dir.path(), "wide.png", 200, 100, 90);

    let output = artify(&[path.to_str().unwrap()]);
    let text = stdout(&output);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 50);
    assert!(lines.iter().all(|line| line.chars().count() == 100));
}

#[test]
fn custom_ramp_and_invert() {
    let dir = TempDir::new().unwrap();
    let path = solid(dir.path(), "black.png", 6, 3, 0);
    let path = path.to_str().unwrap();

    let plain = artify(&[path, "-w", "6", "--chars", "-+"]);
    assert_eq!(stdout(&plain), "------\n------\n------\n");

    let inverted = artify(&[path, "-w", "6", "--chars", "-+", "--invert"]);
    assert_eq!(stdout(&inverted), "++++++\n++++++\n++++++\n");
}

#[test]
fn repeated_runs_are_identical() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("gradient.png");
    let mut image = RgbImage::new(90, 60);
    for (x, y, pixel) in image.enumerate_pixels_mut() {
        *pixel = Rgb([(x * 2) as u8, (y * 4) as u8, (x + y) as u8]);
    }
    image.save(&path).unwrap();
    let path = path.to_str().unwrap();

    let first = artify(&[path, "-w", "30"]);
    let second = artify(&[path, "-w", "30"]);
    assert_eq!(first.stdout, second.stdout);
    assert_eq!(stdout(&first).lines().count(), 20);
}

#[test]
fn missing_file_reports_and_exits_zero() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.png");
    let missing = missing.to_str().unwrap();

    let output = artify(&[missing]);
    assert!(output.status.success());

    let text = stdout(&output);
    assert!(text.contains(missing), "{text}");
    assert!(text.contains("not found"), "{text}");
}

#[test]
fn invalid_image_reports_and_exits_zero() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("readme.png");
    fs::write(&path, "this is not an image").unwrap();
    let path = path.to_str().unwrap();

    let output = artify(&[path]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        format!("Error: '{path}' is not a valid image file\n")
    );
}

#[test]
fn several_images_print_in_order() {
    let dir = TempDir::new().unwrap();
    let white = solid(dir.path(), "white.png", 4, 2, 255);
    let black = solid(dir.path(), "black.png", 4, 2, 0);
    let missing = dir.path().join("missing.png");

    let output = artify(&[
        white.to_str().unwrap(),
        missing.to_str().unwrap(),
        black.to_str().unwrap(),
        "-w",
        "4",
        "--chars",
        "ab",
    ]);
    assert!(output.status.success());

    let text = stdout(&output);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "bbbb");
    assert_eq!(lines[1], "bbbb");
    assert!(lines[2].contains("not found"));
    assert_eq!(lines[3], "aaaa");
    assert_eq!(lines[4], "aaaa");
}

#[test]
fn output_flag_writes_a_file() {
    let dir = TempDir::new().unwrap();
    let path = solid(dir.path(), "black.png", 4, 4, 0);
    let out = dir.path().join("art.txt");

    let output = artify(&[
        path.to_str().unwrap(),
        "-w",
        "4",
        "--chars",
        "xy",
        "-o",
        out.to_str().unwrap(),
    ]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert_eq!(fs::read_to_string(out).unwrap(), grid('x', 4, 4) + "\n");
}

#[test]
fn zero_width_is_a_usage_error() {
    let output = artify(&["whatever.png", "-w", "0"]);
    assert!(!output.status.success());
}

#[test]
fn sliver_image_reports_an_error() {
    let dir = TempDir::new().unwrap();
    let path = solid(dir.path(), "strip.png", 1000, 1, 0);

    let output = artify(&[path.to_str().unwrap()]);
    assert!(output.status.success());

    let text = stdout(&output);
    assert!(text.starts_with("An error occurred: "), "{text:?}");
    assert_eq!(text.lines().count(), 1);
}

#[test]
fn unwritable_output_still_reports_every_failure() {
    let dir = TempDir::new().unwrap();
    let image = solid(dir.path(), "ok.png", 4, 4, 0);
    let missing = dir.path().join("missing.png");
    let out = dir.path().join("no").join("such").join("out.txt");

    let output = artify(&[
        missing.to_str().unwrap(),
        image.to_str().unwrap(),
        "-w",
        "4",
        "-o",
        out.to_str().unwrap(),
    ]);
    assert!(output.status.success());

    let text = stdout(&output);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2, "{text}");
    assert_eq!(
        lines[0],
        format!("Error: File not found at '{}'", missing.display())
    );
    assert!(lines[1].starts_with("An error occurred: "));
    assert!(lines[1].contains(out.to_str().unwrap()));
}
