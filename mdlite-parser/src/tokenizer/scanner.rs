//! Emphasis resolution over a single line.
//!
//! The scanner walks the line once, left to right. When a span cannot be resolved it is
//! folded back into the caller's text buffer and scanning resumes right where the span
//! was abandoned, so no part of the line is ever scanned twice.

use tracing::trace;

use crate::Token;

const UNDERSCORE: char = '_';
const BACKSLASH: char = '\\';

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Emphasis {
    Bold,
    Italic,
}

impl Emphasis {
    const fn width(self) -> usize {
        match self {
            Self::Bold => 2,
            Self::Italic => 1,
        }
    }

    const fn marker(self) -> &'static str {
        match self {
            Self::Bold => "__",
            Self::Italic => "_",
        }
    }

    const fn start(self) -> Token {
        match self {
            Self::Bold => Token::BoldStart,
            Self::Italic => Token::ItalicStart,
        }
    }

    const fn end(self) -> Token {
        match self {
            Self::Bold => Token::BoldEnd,
            Self::Italic => Token::ItalicEnd,
        }
    }
}

/// Where an italic span is resolved from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Context {
    /// Straight from the line. Inner `__` pairs are kept as literal text inside the
    /// italic; a dangling `__` makes the whole italic literal.
    Outer,
    /// From within a bold span. Any `__` reached here unwinds the italic as literal text,
    /// italic never yields a bold child.
    InsideBold,
}

/// Tokens completed by a scope plus the text it has not flushed yet.
#[derive(Debug, Default)]
pub(crate) struct Output {
    pub(crate) tokens: Vec<Token>,
    pub(crate) buffer: String,
}

impl Output {
    fn flush(&mut self) {
        if !self.buffer.is_empty() {
            self.tokens.push(Token::Text(std::mem::take(&mut self.buffer)));
        }
    }

    fn emit(&mut self, kind: Emphasis, content: Vec<Token>) {
        self.flush();
        self.tokens.push(kind.start());
        self.tokens.extend(content);
        self.tokens.push(kind.end());
    }

    /// Give up on a span: its opening marker and everything it collected become text.
    ///
    /// Emphasis that was completed inside the span (an italic inside an abandoned bold)
    /// is kept, only the text around it is merged into this buffer.
    fn fold_back(&mut self, kind: Emphasis, inner: Output) {
        self.buffer.push_str(kind.marker());
        for token in inner.tokens {
            match token {
                Token::Text(text) => self.buffer.push_str(&text),
                structural @ (Token::Newline
                | Token::Header
                | Token::BoldStart
                | Token::BoldEnd
                | Token::ItalicStart
                | Token::ItalicEnd) => {
                    self.flush();
                    self.tokens.push(structural);
                }
            }
        }
        self.buffer.push_str(&inner.buffer);
    }

    pub(crate) fn finish(mut self) -> Vec<Token> {
        self.flush();
        self.tokens
    }
}

/// Cursor over the characters of one line.
#[derive(Debug)]
pub(crate) struct LineScanner<'a> {
    chars: &'a [char],
    position: usize,
}

impl<'a> LineScanner<'a> {
    pub(crate) fn new(chars: &'a [char]) -> Self {
        Self { chars, position: 0 }
    }

    pub(crate) fn skip(&mut self, count: usize) {
        self.position = (self.position + count).min(self.chars.len());
    }

    fn char_at(&self, index: usize) -> Option<char> {
        self.chars.get(index).copied()
    }

    fn char_before(&self, index: usize) -> Option<char> {
        index.checked_sub(1).and_then(|i| self.char_at(i))
    }

    fn current(&self) -> Option<char> {
        self.char_at(self.position)
    }

    fn is_double_underscore(&self, at: usize) -> bool {
        self.char_at(at) == Some(UNDERSCORE) && self.char_at(at + 1) == Some(UNDERSCORE)
    }

    fn is_single_underscore(&self, at: usize) -> bool {
        self.char_at(at) == Some(UNDERSCORE) && self.char_at(at + 1) != Some(UNDERSCORE)
    }

    /// Digit immediately before the marker or right after its full width.
    fn is_digit_flanked(&self, kind: Emphasis, at: usize) -> bool {
        self.char_before(at).is_some_and(char::is_numeric)
            || self.char_at(at + kind.width()).is_some_and(char::is_numeric)
    }

    /// Letters on both sides of the marker: the span starts in the middle of a word.
    fn is_inside_word(&self, kind: Emphasis, at: usize) -> bool {
        self.char_before(at).is_some_and(char::is_alphabetic)
            && self.char_at(at + kind.width()).is_some_and(char::is_alphabetic)
    }

    fn opens(&self, kind: Emphasis) -> bool {
        let at = self.position;
        let is_marker = match kind {
            Emphasis::Bold => self.is_double_underscore(at),
            Emphasis::Italic => self.is_single_underscore(at),
        };
        // A marker at the very end of the line has nothing to open.
        let followed_by_space = self
            .char_at(at + kind.width())
            .is_none_or(char::is_whitespace);

        is_marker && !followed_by_space && !self.is_digit_flanked(kind, at)
    }

    fn closes(&self, kind: Emphasis) -> bool {
        let at = self.position;
        let after_text = self.char_before(at).is_some_and(|c| !c.is_whitespace());
        match kind {
            Emphasis::Bold => after_text && self.is_double_underscore(at),
            Emphasis::Italic => {
                after_text
                    && self.is_single_underscore(at)
                    && self.char_before(at) != Some(UNDERSCORE)
            }
        }
    }

    /// `\` followed by `_` or `\` yields the next character literally. Any other
    /// backslash is ordinary text.
    fn escape(&mut self, buffer: &mut String) {
        match self.char_at(self.position + 1) {
            Some(escaped @ (UNDERSCORE | BACKSLASH)) => {
                buffer.push(escaped);
                self.position += 2;
            }
            Some(_) | None => {
                buffer.push(BACKSLASH);
                self.position += 1;
            }
        }
    }

    /// Scan the rest of the line into `output`.
    pub(crate) fn scan(&mut self, output: &mut Output) {
        while let Some(current) = self.current() {
            if current == BACKSLASH {
                self.escape(&mut output.buffer);
            } else if self.opens(Emphasis::Bold) {
                self.resolve_bold(output);
            } else if self.opens(Emphasis::Italic) {
                self.resolve_italic(Context::Outer, output);
            } else {
                output.buffer.push(current);
                self.position += 1;
            }
        }
    }

    fn resolve_bold(&mut self, caller: &mut Output) {
        let start = self.position;
        let inside_word = self.is_inside_word(Emphasis::Bold, start);
        self.skip(Emphasis::Bold.width());

        let mut inner = Output::default();
        while let Some(current) = self.current() {
            if self.closes(Emphasis::Bold) {
                if self.position == start + Emphasis::Bold.width() {
                    trace!(offset = start, "empty bold span kept as text");
                    caller.buffer.push_str(Emphasis::Bold.marker());
                    caller.buffer.push_str(Emphasis::Bold.marker());
                } else {
                    caller.emit(Emphasis::Bold, inner.finish());
                }
                self.skip(Emphasis::Bold.width());
                return;
            }

            // Any `_` that does not close the bold starts an inner italic.
            if current == UNDERSCORE {
                self.resolve_italic(Context::InsideBold, &mut inner);
                continue;
            }

            if current.is_whitespace() && inside_word {
                trace!(offset = start, "bold span crosses a word boundary");
                caller.fold_back(Emphasis::Bold, inner);
                return;
            }

            if current == BACKSLASH {
                self.escape(&mut inner.buffer);
                continue;
            }

            inner.buffer.push(current);
            self.position += 1;
        }

        trace!(offset = start, "bold span not closed before end of line");
        caller.fold_back(Emphasis::Bold, inner);
    }

    fn resolve_italic(&mut self, context: Context, caller: &mut Output) {
        let start = self.position;
        let inside_word = self.is_inside_word(Emphasis::Italic, start);
        self.skip(Emphasis::Italic.width());

        let mut inner = Output::default();
        // Toggled by every `__` met in an outer italic; set means a bold marker is dangling.
        let mut dangling_bold = false;
        while let Some(current) = self.current() {
            if self.closes(Emphasis::Italic) {
                if self.position == start + Emphasis::Italic.width() {
                    trace!(offset = start, "empty italic span kept as text");
                    caller.buffer.push_str(Emphasis::Italic.marker());
                    caller.buffer.push_str(Emphasis::Italic.marker());
                    self.skip(Emphasis::Italic.width());
                } else if dangling_bold {
                    trace!(offset = start, "italic span overlaps a bold marker");
                    caller.fold_back(Emphasis::Italic, inner);
                } else {
                    caller.emit(Emphasis::Italic, inner.finish());
                    self.skip(Emphasis::Italic.width());
                }
                return;
            }

            if self.is_double_underscore(self.position) {
                match context {
                    Context::InsideBold => {
                        trace!(offset = start, "italic span contains a bold marker");
                        inner.buffer.push_str(Emphasis::Bold.marker());
                        self.skip(Emphasis::Bold.width());
                        caller.fold_back(Emphasis::Italic, inner);
                        return;
                    }
                    Context::Outer => dangling_bold = !dangling_bold,
                }
            }

            if current.is_whitespace() && inside_word {
                trace!(offset = start, "italic span crosses a word boundary");
                caller.fold_back(Emphasis::Italic, inner);
                return;
            }

            if current == BACKSLASH {
                self.escape(&mut inner.buffer);
                continue;
            }

            inner.buffer.push(current);
            self.position += 1;
        }

        trace!(offset = start, "italic span not closed before end of line");
        caller.fold_back(Emphasis::Italic, inner);
    }
}
