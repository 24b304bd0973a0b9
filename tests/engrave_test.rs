//! End-to-end: decoded image through tracing to a G-code file on disk.

use image::{DynamicImage, Rgba, RgbaImage};
use image2gcode::{
    encode, generate_toolpath, raster_from_image, Parameters, ProgressReporter, ScanMode,
};

fn solid_image(width: u32, height: u32, rgba: [u8; 4]) -> DynamicImage {
    DynamicImage::ImageRgba8(RgbaImage::from_pixel(width, height, Rgba(rgba)))
}

#[test]
fn test_black_square_to_gcode_file() {
    let image = solid_image(2, 2, [0, 0, 0, 255]);
    let raster = raster_from_image(&image).unwrap();

    let mut params = Parameters::default();
    params.resolve_target_size(raster.width(), raster.height());
    assert_eq!((params.width, params.height), (100.0, 100.0));

    let toolpath = generate_toolpath(
        &raster,
        &params,
        ScanMode::Regions,
        &mut ProgressReporter::disabled(),
    );
    let gcode = encode(&toolpath);

    assert!(gcode.starts_with("G90\r\nG21\r\n\r\n"));
    assert!(gcode.contains("G0 X0 Y0\r\nM03\r\nG1 X100 Y0\r\nM05\r\n"));
    assert!(gcode.contains("G0 X0 Y100\r\nM03\r\nG1 X100 Y100\r\nM05\r\n"));
    assert!(gcode.ends_with("\r\nG0 X0 Y0\r\nM05\r\n"));

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("square.nc");
    std::fs::write(&path, &gcode).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), gcode);
}

#[test]
fn test_white_and_transparent_pixels_are_background() {
    for rgba in [[255, 255, 255, 255], [0, 0, 0, 128], [10, 20, 30, 0]] {
        let image = solid_image(3, 3, rgba);
        let raster = raster_from_image(&image).unwrap();
        let mut params = Parameters::default();
        params.resolve_target_size(raster.width(), raster.height());
        let toolpath = generate_toolpath(
            &raster,
            &params,
            ScanMode::Regions,
            &mut ProgressReporter::disabled(),
        );
        assert!(toolpath.is_empty(), "pixel {rgba:?} must not engrave");
    }
}

#[test]
fn test_feed_rates_appear_in_output() {
    let image = solid_image(2, 1, [0, 0, 0, 255]);
    let raster = raster_from_image(&image).unwrap();

    let mut params = Parameters {
        cut_feed_rate: Some(300.0),
        move_feed_rate: Some(1500.0),
        ..Parameters::default()
    };
    params.resolve_target_size(raster.width(), raster.height());

    let toolpath = generate_toolpath(
        &raster,
        &params,
        ScanMode::Lines,
        &mut ProgressReporter::disabled(),
    );
    let gcode = encode(&toolpath);

    // Travel at the move rate, then engrave at the cut rate; no rapids.
    assert!(gcode.contains("G1 F1500\r\nG1 X0 Y0\r\nM03\r\nG1 F300\r\n"));
    assert!(!gcode.contains("G0 X0 Y0\r\nM03"));
}
