//! Document model produced by the parser.
//!
//! The tree is built once per conversion and never mutated afterwards. Every container
//! exclusively owns its children, so plain `Vec` composition is all we need.

use serde::Serialize;

mod token;

pub use token::Token;

/// The root of a parsed document: an ordered list of block nodes.
///
/// There is no wrapping node for the document itself, `nodes` *is* the document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Document {
    pub nodes: Vec<Node>,
}

impl Document {
    #[must_use]
    pub fn new(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// A node of the document tree.
///
/// `Header` and `Paragraph` are block nodes and only appear at the top level. `Bold`,
/// `Italic` and `Text` are inline nodes. A `Bold` may contain `Italic` descendants but an
/// `Italic` never contains a `Bold`: the tokenizer turns such markup into literal text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "name", rename_all = "lowercase")]
pub enum Node {
    Header(Header),
    Paragraph(Paragraph),
    Bold(Bold),
    Italic(Italic),
    Text(Text),
}

impl Node {
    /// Child nodes of a container node. `Text` has none.
    #[must_use]
    pub fn children(&self) -> &[Node] {
        match self {
            Self::Header(Header { content })
            | Self::Paragraph(Paragraph { content })
            | Self::Bold(Bold { content })
            | Self::Italic(Italic { content }) => content,
            Self::Text(_) => &[],
        }
    }

    /// Literal value of a `Text` node. Containers carry no value.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::Text(Text { content }) => Some(content),
            Self::Header(_) | Self::Paragraph(_) | Self::Bold(_) | Self::Italic(_) => None,
        }
    }

    #[must_use]
    pub fn is_block(&self) -> bool {
        matches!(self, Self::Header(_) | Self::Paragraph(_))
    }
}

/// A `Header` is a line introduced by `"# "`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Header {
    #[serde(rename = "inlines")]
    pub content: Vec<Node>,
}

/// A `Paragraph` is any non-blank, non-header line.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Paragraph {
    #[serde(rename = "inlines")]
    pub content: Vec<Node>,
}

/// A `Bold` span, written `__like this__`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Bold {
    #[serde(rename = "inlines")]
    pub content: Vec<Node>,
}

/// An `Italic` span, written `_like this_`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Italic {
    #[serde(rename = "inlines")]
    pub content: Vec<Node>,
}

/// Literal text. Markup characters that did not form emphasis end up here verbatim.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Text {
    pub content: String,
}

impl Text {
    #[must_use]
    pub fn new<S: Into<String>>(content: S) -> Self {
        Self {
            content: content.into(),
        }
    }
}
