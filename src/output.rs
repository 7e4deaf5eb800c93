//! Image serialization as plain-text PPM (`P3`).

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::RgbImage;
use na::Vector3;

use crate::error::OutputError;

/// Pack traced pixels (row-major, top row first) into an 8-bit image.
///
/// Channels are truncated, not rounded. `pixels` must hold exactly
/// `width * height` entries.
pub fn to_image(
    pixels: &[Vector3<f32>],
    dimensions: (usize, usize),
) -> Result<RgbImage, OutputError> {
    let (width, height) = dimensions;
    let size_error = || OutputError::Dimensions {
        width,
        height,
        pixels: pixels.len(),
    };
    let w = u32::try_from(width).map_err(|_| size_error())?;
    let h = u32::try_from(height).map_err(|_| size_error())?;
    if width.checked_mul(height) != Some(pixels.len()) {
        return Err(size_error());
    }

    let mut imgbuf = RgbImage::new(w, h);
    for (x, y, pixel) in imgbuf.enumerate_pixels_mut() {
        let array_index = x as usize + (y as usize * width);
        for (i, channel) in pixels[array_index].iter().enumerate() {
            (*pixel)[i] = *channel as u8;
        }
    }
    Ok(imgbuf)
}

/// Write `image` as ASCII PPM: a three-line header then one `r g b` line per pixel.
pub fn write_ppm<W: Write>(writer: &mut W, image: &RgbImage) -> Result<(), OutputError> {
    write!(writer, "P3\n{} {}\n 255\n", image.width(), image.height())?;
    for pixel in image.pixels() {
        writeln!(writer, "{} {} {}", pixel[0], pixel[1], pixel[2])?;
    }
    writer.flush()?;
    Ok(())
}

/// Save an image to `path`, creating or truncating the file.
pub fn save_ppm<P: AsRef<Path>>(path: P, image: &RgbImage) -> Result<(), OutputError> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| OutputError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    write_ppm(&mut BufWriter::new(file), image)?;
    info!("image saved as {}", path.display());
    Ok(())
}
