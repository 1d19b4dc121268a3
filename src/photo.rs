//! Photo to bitmap conversion with EXIF orientation correction.

use crate::{error::Error, report};
use image::{ImageFormat, ImageReader, RgbImage};
use std::{fmt, fs::File, io::BufReader, path::Path};

/// Clockwise correction needed to bring a photo upright.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rotation {
    #[default]
    None,
    Cw90,
    Cw180,
    Cw270,
}

impl Rotation {
    /// Map an EXIF orientation value (tag 0x0112) to a rotation. Mirrored
    /// orientations and unknown values are left alone.
    pub fn from_exif(orientation: u32) -> Rotation {
        match orientation {
            3 => Rotation::Cw180,
            6 => Rotation::Cw90,
            8 => Rotation::Cw270,
            _ => Rotation::None,
        }
    }

    /// Rotate `img`; quarter turns swap width and height.
    pub fn apply(self, img: RgbImage) -> RgbImage {
        match self {
            Rotation::None => img,
            Rotation::Cw90 => image::imageops::rotate90(&img),
            Rotation::Cw180 => image::imageops::rotate180(&img),
            Rotation::Cw270 => image::imageops::rotate270(&img),
        }
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Rotation::None => write!(f, "none"),
            Rotation::Cw90 => write!(f, "90 degrees clockwise"),
            Rotation::Cw180 => write!(f, "180 degrees"),
            Rotation::Cw270 => write!(f, "270 degrees clockwise"),
        }
    }
}

fn exif_orientation(path: &Path) -> Result<Option<u32>, exif::Error> {
    let file: File = File::open(path)?;
    let mut fbuff: BufReader<File> = BufReader::new(file);
    let exif: exif::Exif = exif::Reader::new().read_from_container(&mut fbuff)?;

    Ok(exif
        .get_field(exif::Tag::Orientation, exif::In::PRIMARY)
        .and_then(|field| field.value.get_uint(0)))
}

/// Best-effort lookup of the EXIF orientation of the file at `path`.
/// Missing or unreadable metadata yields `None`.
pub fn read_orientation(path: &Path) -> Option<u32> {
    match exif_orientation(path) {
        Ok(orientation) => orientation,
        Err(err) => {
            log::debug!("no orientation for {}: {}", path.display(), err);
            None
        }
    }
}

/// Decode the image at `path` into three-channel color.
pub fn load_rgb(path: &Path) -> Result<RgbImage, Error> {
    let reader = ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|source| Error::Open {
            path: path.to_path_buf(),
            source,
        })?;

    let img = reader.decode().map_err(|source| Error::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(img.into_rgb8())
}

/// Convert the photo at `input` into an upright BMP at `output`. Nothing is
/// written unless decoding succeeds. Returns the final dimensions.
pub fn convert_photo(input: &Path, output: &Path) -> Result<(u32, u32), Error> {
    let img: RgbImage = load_rgb(input)?;
    report(&format!("original size: {}x{}", img.width(), img.height()));

    let rot: Rotation = read_orientation(input)
        .map(Rotation::from_exif)
        .unwrap_or_default();
    if rot != Rotation::None {
        report(&format!("rotating {}", rot));
    }
    let img: RgbImage = rot.apply(img);

    img.save_with_format(output, ImageFormat::Bmp)
        .map_err(|source| Error::Encode {
            path: output.to_path_buf(),
            source,
        })?;

    Ok(img.dimensions())
}
