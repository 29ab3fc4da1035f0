//! Synthetic face photos and cube definitions.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use facelet_vision::{ColorLabel, FaceScan};
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;
use std::io::Cursor;

pub const SOLVED: &str = "UUUUUUUUURRRRRRRRRFFFFFFFFFDDDDDDDDDLLLLLLLLLBBBBBBBBB";

/// A reachable scrambled state.
pub const SCRAMBLED: &str = "DRLUUBFBRBLURRLRUBLRDDFDLFUFUFFDBRDUBRUFLLFDDBFLUBLRBD";

/// Solved cube with the up-right-front corner twisted in place.
///
/// Every code still appears nine times and the centers are intact, but no
/// sequence of moves reaches this state.
pub fn twisted_corner() -> String {
    let mut facelets: Vec<char> = SOLVED.chars().collect();
    facelets[8] = 'F';
    facelets[9] = 'U';
    facelets[20] = 'R';
    facelets.into_iter().collect()
}

/// Split a definition into its six nine-code faces (U, R, F, D, L, B)
pub fn faces_of(definition: &str) -> Vec<String> {
    definition
        .as_bytes()
        .chunks(9)
        .map(|chunk| String::from_utf8_lossy(chunk).to_string())
        .collect()
}

/// Typical printed sticker colors
pub fn sticker_rgb(label: ColorLabel) -> Rgb<u8> {
    match label {
        ColorLabel::Up => Rgb([255, 255, 255]),
        ColorLabel::Right => Rgb([200, 0, 0]),
        ColorLabel::Front => Rgb([0, 155, 72]),
        ColorLabel::Down => Rgb([255, 230, 0]),
        ColorLabel::Left => Rgb([255, 120, 0]),
        ColorLabel::Back => Rgb([0, 69, 173]),
    }
}

/// A 300x300 photo with the face filling the middle half of the frame
pub fn face_image(codes: &str) -> RgbImage {
    let face: FaceScan = codes.parse().expect("nine facelet codes");
    let mut image = RgbImage::from_pixel(300, 300, Rgb([40, 40, 40]));
    for (i, label) in face.labels().iter().enumerate() {
        let (row, col) = ((i / 3) as i32, (i % 3) as i32);
        let rect = Rect::at(75 + col * 50, 75 + row * 50).of_size(50, 50);
        draw_filled_rect_mut(&mut image, rect, sticker_rgb(*label));
    }
    image
}

pub fn png_bytes(image: &RgbImage) -> Vec<u8> {
    let mut bytes = Vec::new();
    DynamicImage::ImageRgb8(image.clone())
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .expect("PNG encoding");
    bytes
}

/// Data-URI payload for a face photo, as a browser would send it
pub fn face_payload(codes: &str) -> String {
    format!(
        "data:image/png;base64,{}",
        STANDARD.encode(png_bytes(&face_image(codes)))
    )
}

/// Bare base64 payload without a data-URI prefix
pub fn bare_face_payload(codes: &str) -> String {
    STANDARD.encode(png_bytes(&face_image(codes)))
}
