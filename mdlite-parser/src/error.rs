/// Errors raised by the parser entry points that touch I/O.
///
/// Markup itself never produces an error: anything the tokenizer cannot resolve as
/// emphasis is kept as literal text.
#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
