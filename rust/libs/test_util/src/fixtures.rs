use std::io::Cursor;

use image::{ImageBuffer, ImageFormat, Rgb};

/// テスト用のPNG画像バイト列を生成する
///
/// ピクセルは座標から決まるグラデーションで、同じ引数なら毎回同じ
/// バイト列になる。
pub fn png_image_bytes(width: u32, height: u32) -> Vec<u8> {
    encode_gradient(width, height, ImageFormat::Png)
}

/// テスト用のJPEG画像バイト列を生成する
pub fn jpeg_image_bytes(width: u32, height: u32) -> Vec<u8> {
    encode_gradient(width, height, ImageFormat::Jpeg)
}

/// シグネチャは有効だが本体が不完全な壊れたPNGバイト列
pub fn truncated_png_bytes() -> Vec<u8> {
    let mut data = png_image_bytes(32, 32);
    data.truncate(24);
    data
}

fn encode_gradient(width: u32, height: u32, format: ImageFormat) -> Vec<u8> {
    let mut img = ImageBuffer::new(width, height);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        *pixel = Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8]);
    }

    let mut data = Vec::new();
    let mut cursor = Cursor::new(&mut data);
    img.write_to(&mut cursor, format)
        .expect("Failed to encode test image");
    data
}
