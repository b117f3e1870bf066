//! ASCII PPM (`P3`) encoder.
//!
//! Layout:
//!
//! ```text
//! P3
//! <width> <height>
//! <max channel value>
//! R G B        one line per pixel, row-major from the top-left
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use thiserror::Error;

use crate::FrameBuffer;

/// Errors that can occur while encoding a PPM image.
#[derive(Error, Debug)]
pub enum PpmError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Value written on the max-channel line: the brightest channel in the
/// image, never below 1 so an all-black image is still a valid file.
pub fn ppm_max_value(image: &FrameBuffer) -> u8 {
    image.max_channel().max(1)
}

/// Encode `image` as text PPM into `writer`.
pub fn write_ppm<W: Write>(image: &FrameBuffer, mut writer: W) -> Result<(), PpmError> {
    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", image.width, image.height)?;
    writeln!(writer, "{}", ppm_max_value(image))?;

    for row in image.rows() {
        for [r, g, b] in row {
            writeln!(writer, "{r} {g} {b}")?;
        }
    }

    writer.flush()?;
    Ok(())
}

/// Encode `image` as text PPM into a file.
pub fn save_ppm<P: AsRef<Path>>(image: &FrameBuffer, path: P) -> Result<(), PpmError> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write_ppm(image, BufWriter::new(file))?;
    log::info!(
        "Saved {}x{} image to {}",
        image.width,
        image.height,
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Color;
    use umbra_core::ColorWrite;

    fn encode(image: &FrameBuffer) -> String {
        let mut out = Vec::new();
        write_ppm(image, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_header_and_pixel_count() {
        let image = FrameBuffer::new(5, 3);
        let text = encode(&image);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "P3");
        assert_eq!(lines[1], "5 3");
        assert_eq!(lines.len(), 3 + 5 * 3);
        assert!(lines[3..].iter().all(|l| *l == "0 0 0"));
    }

    #[test]
    fn test_all_black_max_value() {
        let image = FrameBuffer::new(2, 2);
        assert_eq!(ppm_max_value(&image), 1);
        assert_eq!(encode(&image).lines().nth(2), Some("1"));
    }

    #[test]
    fn test_max_value_is_brightest_channel() {
        let mut image = FrameBuffer::new(2, 1);
        image.set(0, 0, [12, 200, 7]);
        image.set(1, 0, [147, 0, 0]);

        let text = encode(&image);
        assert_eq!(text.lines().nth(2), Some("200"));
    }

    #[test]
    fn test_orientation_and_channel_order() {
        let mut image = FrameBuffer::new(2, 2);
        // Scene-space top-left pixel is (0, height - 1)
        image.set_pixel(0, 1, Color::new(1.0, 2.0, 3.0), ColorWrite::Clamp);
        image.set_pixel(1, 0, Color::new(4.0, 5.0, 6.0), ColorWrite::Clamp);

        let text = encode(&image);
        let pixels: Vec<&str> = text.lines().skip(3).collect();
        assert_eq!(pixels, vec!["1 2 3", "0 0 0", "0 0 0", "4 5 6"]);
    }

    #[test]
    fn test_save_to_missing_directory_fails() {
        let image = FrameBuffer::new(1, 1);
        let err = save_ppm(&image, "/definitely/not/here/out.ppm").unwrap_err();
        assert!(matches!(err, PpmError::Io(_)));
    }
}
