#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    FromUtf8(#[from] std::string::FromUtf8Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Parsing error: {0}")]
    Parse(#[from] mdlite_parser::Error),

    #[error(transparent)]
    Converter(#[from] mdlite_converters_core::Error),

    #[error("input file and output file cannot be the same: {0}")]
    OutputPathSameAsInput(std::path::PathBuf),
}
