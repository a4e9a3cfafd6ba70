//! Edge tile extension tests.
//!
//! Tests verify:
//! - Undersized edge tiles are padded to the full tile size
//! - Original pixels stay anchored at the top-left corner
//! - Padding is fully transparent
//! - Disabling extension leaves edge tiles at their natural size

use image::{DynamicImage, ImageBuffer, Rgba};
use tileup::{BitmapError, TileError, TilerOptions};

use super::test_utils::{file_names, read_tile, source_pixel, write_source_png};

fn options(output_dir: &std::path::Path, extend: bool) -> TilerOptions {
    TilerOptions {
        output_dir: output_dir.to_path_buf(),
        extend_incomplete_tiles: extend,
        ..TilerOptions::default()
    }
}

#[test]
fn test_extended_edge_tiles_are_full_size() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_source_png(dir.path(), "world.png", 300, 300);
    let out = dir.path().join("tiles");

    let summary = tileup::run(&source, &options(&out, true)).unwrap();
    assert_eq!(summary.total_tiles(), 4);
    assert_eq!(summary.total_extended(), 3);

    assert_eq!(
        file_names(&out),
        vec![
            "map_tile_0_0.png",
            "map_tile_0_1.png",
            "map_tile_1_0.png",
            "map_tile_1_1.png"
        ]
    );
    for name in file_names(&out) {
        assert_eq!(read_tile(&out.join(name)).dimensions(), (256, 256));
    }
}

#[test]
fn test_extension_anchors_pixels_and_pads_transparent() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_source_png(dir.path(), "world.png", 300, 300);
    let out = dir.path().join("tiles");
    tileup::run(&source, &options(&out, true)).unwrap();

    // column 1, row 0: natural size 44x256
    let right = read_tile(&out.join("map_tile_1_0.png"));
    assert_eq!(*right.get_pixel(0, 0), source_pixel(256, 0));
    assert_eq!(*right.get_pixel(43, 255), source_pixel(299, 255));
    assert_eq!(right.get_pixel(44, 0)[3], 0);
    assert_eq!(right.get_pixel(255, 255)[3], 0);

    // column 0, row 1: natural size 256x44
    let bottom = read_tile(&out.join("map_tile_0_1.png"));
    assert_eq!(*bottom.get_pixel(255, 43), source_pixel(255, 299));
    assert_eq!(bottom.get_pixel(0, 44)[3], 0);

    // corner: natural size 44x44
    let corner = read_tile(&out.join("map_tile_1_1.png"));
    assert_eq!(*corner.get_pixel(43, 43), source_pixel(299, 299));
    for (x, y) in [(44, 0), (0, 44), (44, 44), (255, 255)] {
        assert_eq!(corner.get_pixel(x, y)[3], 0, "pixel ({x}, {y}) should be transparent");
    }

    // the interior tile is untouched
    let inner = read_tile(&out.join("map_tile_0_0.png"));
    assert_eq!(*inner.get_pixel(255, 255), source_pixel(255, 255));
}

#[test]
fn test_disabled_extension_keeps_natural_size() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_source_png(dir.path(), "world.png", 300, 300);
    let out = dir.path().join("tiles");

    let summary = tileup::run(&source, &options(&out, false)).unwrap();
    assert_eq!(summary.total_extended(), 0);

    let size = |name: &str| read_tile(&out.join(name)).dimensions();
    assert_eq!(size("map_tile_0_0.png"), (256, 256));
    assert_eq!(size("map_tile_1_0.png"), (44, 256));
    assert_eq!(size("map_tile_0_1.png"), (256, 44));
    assert_eq!(size("map_tile_1_1.png"), (44, 44));

    let corner = read_tile(&out.join("map_tile_1_1.png"));
    assert_eq!(*corner.get_pixel(0, 0), source_pixel(256, 256));
}

#[test]
fn test_evenly_divided_image_needs_no_extension() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_source_png(dir.path(), "even.png", 128, 64);
    let out = dir.path().join("tiles");
    let options = TilerOptions {
        tile_width: 64,
        tile_height: 32,
        output_dir: out.clone(),
        ..TilerOptions::default()
    };

    let summary = tileup::run(&source, &options).unwrap();
    assert_eq!(summary.total_tiles(), 4);
    assert_eq!(summary.total_extended(), 0);
    assert_eq!(read_tile(&out.join("map_tile_1_1.png")).dimensions(), (64, 32));
}

#[test]
fn test_sixteen_bit_source_keeps_depth_in_edge_tiles() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("deep.png");
    let pixels = ImageBuffer::from_fn(300, 300, |x, y| {
        Rgba([x as u16 * 200, y as u16 * 200, 1234, 65535])
    });
    DynamicImage::ImageRgba16(pixels).save(&source).unwrap();
    let out = dir.path().join("tiles");

    tileup::run(&source, &options(&out, true)).unwrap();

    let inner = image::open(out.join("map_tile_0_0.png")).unwrap();
    let corner = image::open(out.join("map_tile_1_1.png")).unwrap();
    assert_eq!(inner.color(), image::ColorType::Rgba16);
    assert_eq!(corner.color(), image::ColorType::Rgba16);

    let corner = corner.to_rgba16();
    assert_eq!(corner.dimensions(), (256, 256));
    assert_eq!(*corner.get_pixel(43, 43), Rgba([299 * 200, 299 * 200, 1234, 65535]));
    assert_eq!(corner.get_pixel(44, 44)[3], 0);
}

#[test]
fn test_oversized_tile_size_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_source_png(dir.path(), "small.png", 2, 2);
    let out = dir.path().join("tiles");
    let options = TilerOptions {
        tile_width: u32::MAX,
        tile_height: u32::MAX,
        output_dir: out.clone(),
        ..TilerOptions::default()
    };

    let err = tileup::run(&source, &options).unwrap_err();
    assert!(matches!(
        err,
        TileError::Bitmap(BitmapError::Extend { .. })
    ));
    assert!(file_names(&out).is_empty());
}
