use std::io;
use std::path::Path;

use image::DynamicImage;

use super::ImageReader;
use crate::error::Error;

/// Decodes an image from disk. The format is sniffed from the file's
/// leading bytes and falls back to the file extension.
pub struct FileImageReader<'a> {
    path: &'a Path,
}

impl<'a> FileImageReader<'a> {
    pub fn new(path: &'a Path) -> Self {
        Self { path }
    }

    fn path_string(&self) -> String {
        self.path.display().to_string()
    }

    fn open(&self) -> crate::Result<image::ImageReader<io::BufReader<std::fs::File>>> {
        let reader = image::ImageReader::open(self.path).map_err(|e| self.open_error(e))?;
        reader.with_guessed_format().map_err(|e| self.open_error(e))
    }

    fn open_error(&self, error: io::Error) -> Error {
        match error.kind() {
            io::ErrorKind::NotFound => Error::InputFileNotFound(self.path_string()),
            _ => Error::UnableToOpenInputFileForReading(self.path_string(), error),
        }
    }
}

impl ImageReader for FileImageReader<'_> {
    fn read_image(&mut self) -> crate::Result<DynamicImage> {
        let reader = self.open()?;
        let format = reader
            .format()
            .ok_or_else(|| Error::UnrecognizedInputFormat(self.path_string()))?;
        log::debug!("Decoding '{}' as {:?}", self.path.display(), format);
        let image = reader
            .decode()
            .map_err(|e| Error::FailedToDecodeImage(self.path_string(), e))?;
        log::debug!(
            "Decoded {}x{} image with color type {:?}",
            image.width(),
            image.height(),
            image.color()
        );
        Ok(image)
    }
}
