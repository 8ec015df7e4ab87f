use std::borrow::Cow;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Cursor, Write};
use std::path::Path;

use image::{ColorType, DynamicImage, ImageFormat};

use super::ImageWriter;
use crate::error::Error;

/// Encodes an image in the format named by the destination's extension.
///
/// The whole file is encoded in memory first, so the destination is only
/// created once encoding has succeeded.
pub struct FileImageWriter<'a> {
    path: &'a Path,
    format: ImageFormat,
}

impl<'a> FileImageWriter<'a> {
    pub fn new(path: &'a Path) -> crate::Result<Self> {
        let format = output_format(path)?;
        Ok(Self { path, format })
    }

    pub fn format(&self) -> ImageFormat {
        self.format
    }

    fn path_string(&self) -> String {
        self.path.display().to_string()
    }

    fn encode(&self, image: &DynamicImage) -> crate::Result<Vec<u8>> {
        let image = adapt_to_format(image, self.format);
        let mut buffer = Cursor::new(Vec::new());
        image
            .write_to(&mut buffer, self.format)
            .map_err(|e| Error::FailedToEncodeImage(self.path_string(), e))?;
        Ok(buffer.into_inner())
    }
}

impl ImageWriter for FileImageWriter<'_> {
    fn write_image(&mut self, image: &DynamicImage) -> crate::Result<()> {
        let encoded = self.encode(image)?;
        log::debug!(
            "Encoded {} bytes of {:?} for '{}'",
            encoded.len(),
            self.format,
            self.path.display()
        );
        let output_file = open_output_file(self.path)?;
        let mut output_file_writer = BufWriter::new(output_file);
        output_file_writer
            .write_all(&encoded)
            .and_then(|_| output_file_writer.flush())
            .map_err(|e| Error::FailedToWriteOutputFile(self.path_string(), e))
    }
}

fn output_format(path: &Path) -> crate::Result<ImageFormat> {
    ImageFormat::from_path(path)
        .ok()
        .filter(ImageFormat::writing_enabled)
        .ok_or_else(|| Error::UnsupportedOutputFormat(path.display().to_string()))
}

fn open_output_file(file_path: &Path) -> crate::Result<File> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(file_path)
        .map_err(|e| Error::UnableToOpenOutputFileForWriting(file_path.display().to_string(), e))
}

/// Narrows the pixel buffer only where `format` cannot store it as is.
fn adapt_to_format(image: &DynamicImage, format: ImageFormat) -> Cow<'_, DynamicImage> {
    match (format, image.color()) {
        // JPEG has neither alpha nor 16-bit samples
        (ImageFormat::Jpeg, ColorType::L8 | ColorType::Rgb8) => Cow::Borrowed(image),
        (ImageFormat::Jpeg, ColorType::L16 | ColorType::La8 | ColorType::La16) => {
            Cow::Owned(DynamicImage::ImageLuma8(image.to_luma8()))
        }
        (ImageFormat::Jpeg, _) => Cow::Owned(DynamicImage::ImageRgb8(image.to_rgb8())),
        (ImageFormat::Png, ColorType::Rgb32F) => {
            Cow::Owned(DynamicImage::ImageRgb16(image.to_rgb16()))
        }
        (ImageFormat::Png, ColorType::Rgba32F) => {
            Cow::Owned(DynamicImage::ImageRgba16(image.to_rgba16()))
        }
        (ImageFormat::Gif | ImageFormat::Qoi, _) => to_rgb8_or_rgba8(image),
        (ImageFormat::Bmp | ImageFormat::Tga | ImageFormat::Ico, _) => to_8_bit(image),
        (ImageFormat::WebP | ImageFormat::Avif, _) => to_8_bit(image),
        (ImageFormat::Farbfeld, ColorType::Rgba16) => Cow::Borrowed(image),
        (ImageFormat::Farbfeld, _) => Cow::Owned(DynamicImage::ImageRgba16(image.to_rgba16())),
        (ImageFormat::Hdr, ColorType::Rgb32F) => Cow::Borrowed(image),
        (ImageFormat::Hdr, _) => Cow::Owned(DynamicImage::ImageRgb32F(image.to_rgb32f())),
        (ImageFormat::OpenExr, ColorType::Rgb32F | ColorType::Rgba32F) => Cow::Borrowed(image),
        (ImageFormat::OpenExr, color) if color.has_alpha() => {
            Cow::Owned(DynamicImage::ImageRgba32F(image.to_rgba32f()))
        }
        (ImageFormat::OpenExr, _) => Cow::Owned(DynamicImage::ImageRgb32F(image.to_rgb32f())),
        _ => Cow::Borrowed(image),
    }
}

fn to_rgb8_or_rgba8(image: &DynamicImage) -> Cow<'_, DynamicImage> {
    match image.color() {
        ColorType::Rgb8 | ColorType::Rgba8 => Cow::Borrowed(image),
        color if color.has_alpha() => Cow::Owned(DynamicImage::ImageRgba8(image.to_rgba8())),
        _ => Cow::Owned(DynamicImage::ImageRgb8(image.to_rgb8())),
    }
}

/// Keeps the channel layout but brings samples down to 8 bits.
fn to_8_bit(image: &DynamicImage) -> Cow<'_, DynamicImage> {
    match image.color() {
        ColorType::L8 | ColorType::La8 | ColorType::Rgb8 | ColorType::Rgba8 => {
            Cow::Borrowed(image)
        }
        ColorType::L16 => Cow::Owned(DynamicImage::ImageLuma8(image.to_luma8())),
        ColorType::La16 => Cow::Owned(DynamicImage::ImageLumaA8(image.to_luma_alpha8())),
        color if color.has_alpha() => Cow::Owned(DynamicImage::ImageRgba8(image.to_rgba8())),
        _ => Cow::Owned(DynamicImage::ImageRgb8(image.to_rgb8())),
    }
}
