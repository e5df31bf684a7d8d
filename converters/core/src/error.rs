use std::fmt;

/// A component a [`Converter`](crate::Converter) cannot run without.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Component {
    /// Turns source text into tokens.
    Tokenizer,
    /// Turns the document tree into output markup.
    Renderer,
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tokenizer => write!(f, "tokenizer"),
            Self::Renderer => write!(f, "renderer"),
        }
    }
}

/// Errors raised while wiring up or driving a converter.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The converter was built without one of its components.
    #[error("converter has no {0} configured")]
    MissingComponent(Component),

    /// Reading the source failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
