//! Recursive-descent parser from a token stream to a [`Document`].
//!
//! Blocks end at the first `Newline`, so every source line becomes its own header or
//! paragraph and blank lines produce nothing. Inline content recurses into bold and
//! italic scopes until their end token or the end of the stream.

use tracing::{instrument, trace};

use crate::{Bold, Document, Header, Italic, Node, Paragraph, Text, Token};

/// Which token closes the inline scope being collected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Scope {
    Block,
    Bold,
    Italic,
}

impl Scope {
    fn is_terminated_by(self, token: &Token) -> bool {
        matches!(
            (self, token),
            (Self::Block, Token::Newline)
                | (Self::Bold, Token::BoldEnd)
                | (Self::Italic, Token::ItalicEnd)
        )
    }
}

#[derive(Debug)]
pub struct Parser<'a> {
    tokens: &'a [Token],
    position: usize,
}

impl<'a> Parser<'a> {
    #[must_use]
    pub fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    /// Parse the whole token stream. Never fails: unexpected tokens are skipped.
    #[must_use]
    #[instrument(level = "trace", skip(self), fields(tokens = self.tokens.len()))]
    pub fn parse(mut self) -> Document {
        let mut nodes = Vec::new();
        while self.position < self.tokens.len() {
            if let Some(node) = self.parse_block() {
                nodes.push(node);
            }
        }
        Document::new(nodes)
    }

    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.position)
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    /// Consume the scope's terminator if it is the next token.
    fn eat(&mut self, scope: Scope) {
        if self.peek().is_some_and(|token| scope.is_terminated_by(token)) {
            self.advance();
        }
    }

    fn parse_block(&mut self) -> Option<Node> {
        match self.peek()? {
            Token::Header => {
                self.advance();
                let content = self.parse_inlines(Scope::Block);
                self.eat(Scope::Block);
                Some(Node::Header(Header { content }))
            }
            Token::Newline => {
                self.advance();
                None
            }
            Token::Text(_)
            | Token::BoldStart
            | Token::BoldEnd
            | Token::ItalicStart
            | Token::ItalicEnd => {
                let content = self.parse_inlines(Scope::Block);
                self.eat(Scope::Block);
                if content.is_empty() {
                    None
                } else {
                    Some(Node::Paragraph(Paragraph { content }))
                }
            }
        }
    }

    /// Collect inline nodes until the scope's terminator (left unconsumed) or the end of
    /// the stream.
    fn parse_inlines(&mut self, scope: Scope) -> Vec<Node> {
        let mut content = Vec::new();
        while let Some(token) = self.peek() {
            if scope.is_terminated_by(token) {
                break;
            }
            if let Some(node) = self.parse_inline() {
                content.push(node);
            }
        }
        content
    }

    fn parse_inline(&mut self) -> Option<Node> {
        let token = self.peek()?;
        self.advance();
        match token {
            Token::BoldStart => {
                let content = self.parse_inlines(Scope::Bold);
                self.eat(Scope::Bold);
                Some(Node::Bold(Bold { content }))
            }
            Token::ItalicStart => {
                let content = self.parse_inlines(Scope::Italic);
                self.eat(Scope::Italic);
                Some(Node::Italic(Italic { content }))
            }
            Token::Text(content) => Some(Node::Text(Text::new(content.as_str()))),
            Token::Newline | Token::Header | Token::BoldEnd | Token::ItalicEnd => {
                trace!(%token, position = self.position - 1, "skipping unexpected token");
                None
            }
        }
    }
}
