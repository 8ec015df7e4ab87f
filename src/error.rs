use std::fmt::Display;

#[derive(Debug)]
pub enum Error {
    InputPathHasNoFileName(String),
    InputFileNotFound(String),
    UnableToOpenInputFileForReading(String, std::io::Error),
    UnrecognizedInputFormat(String),
    FailedToDecodeImage(String, image::ImageError),
    UnsupportedOutputFormat(String),
    FailedToEncodeImage(String, image::ImageError),
    UnableToOpenOutputFileForWriting(String, std::io::Error),
    FailedToWriteOutputFile(String, std::io::Error),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InputPathHasNoFileName(path) => {
                write!(f, "Input path '{}' does not name a file", path)
            }
            Self::InputFileNotFound(path) => {
                write!(f, "Input file '{}' not found", path)
            }
            Self::UnableToOpenInputFileForReading(path, error) => {
                write!(
                    f,
                    "Unable to open input file '{}' for reading: {}",
                    path, error
                )
            }
            Self::UnrecognizedInputFormat(path) => {
                write!(
                    f,
                    "Input file '{}' is not an image in any supported format",
                    path
                )
            }
            Self::FailedToDecodeImage(path, error) => {
                write!(f, "Failed to decode image '{}': {}", path, error)
            }
            Self::UnsupportedOutputFormat(path) => {
                write!(
                    f,
                    "No supported image format can be written for output file '{}'",
                    path
                )
            }
            Self::FailedToEncodeImage(path, error) => {
                write!(f, "Failed to encode image for '{}': {}", path, error)
            }
            Self::UnableToOpenOutputFileForWriting(path, error) => {
                write!(
                    f,
                    "Unable to open output file '{}' for writing: {}",
                    path, error
                )
            }
            Self::FailedToWriteOutputFile(path, error) => {
                write!(f, "Failed to write output file '{}': {}", path, error)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::UnableToOpenInputFileForReading(_, error)
            | Self::UnableToOpenOutputFileForWriting(_, error)
            | Self::FailedToWriteOutputFile(_, error) => Some(error),
            Self::FailedToDecodeImage(_, error) | Self::FailedToEncodeImage(_, error) => {
                Some(error)
            }
            _ => None,
        }
    }
}
