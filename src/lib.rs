use std::path::{Path, PathBuf};

pub use cli::CLIParser;
use crate::image::{FileImageReader, FileImageWriter, ImageReader, ImageWriter};

mod cli;
pub mod error;
mod image;
mod logger;

pub type Result<T> = std::result::Result<T, error::Error>;

/// Extension given to the output when no destination is named.
pub const DEFAULT_OUTPUT_EXTENSION: &str = "png";

pub struct Arguments {
    input_file: PathBuf,
    output_file: Option<PathBuf>,
}

impl Arguments {
    pub fn new(input_file: PathBuf, output_file: Option<PathBuf>) -> Self {
        Self {
            input_file,
            output_file,
        }
    }

    /// The explicit destination, or the input path with a `.png` extension.
    pub fn output_file(&self) -> Result<PathBuf> {
        match &self.output_file {
            Some(output_file) => Ok(output_file.clone()),
            None => derive_output_path(&self.input_file),
        }
    }
}

/// Replaces the extension of the last path component with the default
/// output extension, appending one if there is none. Fails for paths that
/// do not end in a file name, such as `..` or `/`.
pub fn derive_output_path(input_file: &Path) -> Result<PathBuf> {
    if input_file.file_name().is_none() {
        return Err(error::Error::InputPathHasNoFileName(
            input_file.display().to_string(),
        ));
    }
    Ok(input_file.with_extension(DEFAULT_OUTPUT_EXTENSION))
}

/// Decodes `input_file` and writes it to the destination in the format its
/// extension names. Returns the path that was written.
pub fn convert_image(arguments: &Arguments) -> Result<PathBuf> {
    let output_file = arguments.output_file()?;
    let mut writer = FileImageWriter::new(&output_file)?;
    if output_file == arguments.input_file {
        log::warn!(
            "Output '{}' is the input file and will be overwritten",
            output_file.display()
        );
    }
    let image = FileImageReader::new(&arguments.input_file).read_image()?;
    writer.write_image(&image)?;
    log::info!(
        "Converted '{}' to {:?} at '{}'",
        arguments.input_file.display(),
        writer.format(),
        output_file.display()
    );
    Ok(output_file)
}
