//! Line tokenizer.
//!
//! Each line is turned into a flat list of [`Token`]s. Emphasis is resolved on the spot:
//! only spans with a valid opening and closing marker become `*Start`/`*End` pairs,
//! everything else stays literal text. The rules, in the order they are applied:
//!
//! - `\` followed by `_` or `\` yields that character literally,
//! - `"# "` at the start of the line marks a header,
//! - `__` opens bold, `_` opens italic, unless the marker is followed by whitespace or
//!   has a digit on either side,
//! - a closing marker must follow a non-whitespace character,
//! - a span opened inside a word cannot extend past the end of that word,
//! - empty spans (`____`) stay literal,
//! - bold may contain italic, italic never contains bold.

use tracing::instrument;

use crate::Token;

mod scanner;

use scanner::{LineScanner, Output};

const HEADER_PREFIX: &str = "# ";

/// Split raw input into lines on `'\n'`.
///
/// Empty input yields a single empty line.
pub fn split_lines(input: &str) -> impl Iterator<Item = &str> {
    input.split('\n')
}

/// Turns source text into tokens, one line at a time.
pub trait Tokenize {
    /// Tokenize a single line. The result never contains `Newline`.
    fn tokenize_line(&self, line: &str) -> Vec<Token>;

    /// Tokenize a whole input, appending a `Newline` after every line.
    fn tokenize(&self, input: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        for line in split_lines(input) {
            tokens.extend(self.tokenize_line(line));
            tokens.push(Token::Newline);
        }
        tokens
    }
}

/// Tokenizer for the underscore emphasis dialect.
///
/// Holds no state: every call scans with its own cursor, so one instance can be shared
/// freely between threads.
#[derive(Clone, Copy, Debug, Default)]
pub struct Tokenizer;

impl Tokenize for Tokenizer {
    #[instrument(level = "trace", skip(self))]
    fn tokenize_line(&self, line: &str) -> Vec<Token> {
        let chars: Vec<char> = line.chars().collect();
        let mut scanner = LineScanner::new(&chars);
        let mut output = Output::default();

        if line.starts_with(HEADER_PREFIX) {
            output.tokens.push(Token::Header);
            scanner.skip(HEADER_PREFIX.chars().count());
        }

        scanner.scan(&mut output);
        output.finish()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn text(content: &str) -> Token {
        Token::Text(content.to_string())
    }

    fn tokenize_line(line: &str) -> Vec<Token> {
        Tokenizer.tokenize_line(line)
    }

    #[test]
    fn empty_line_has_no_tokens() {
        assert!(tokenize_line("").is_empty());
    }

    #[test]
    fn italic_surrounded_by_underscores() {
        assert_eq!(
            tokenize_line("Текст, _окруженный с двух сторон_ одинарными символами"),
            vec![
                text("Текст, "),
                Token::ItalicStart,
                text("окруженный с двух сторон"),
                Token::ItalicEnd,
                text(" одинарными символами"),
            ]
        );
    }

    #[test]
    fn italic_in_word_parts() {
        assert_eq!(
            tokenize_line("и в _нач_але, и в сер_еди_не, и в кон_це._"),
            vec![
                text("и в "),
                Token::ItalicStart,
                text("нач"),
                Token::ItalicEnd,
                text("але, и в сер"),
                Token::ItalicStart,
                text("еди"),
                Token::ItalicEnd,
                text("не, и в кон"),
                Token::ItalicStart,
                text("це."),
                Token::ItalicEnd,
            ]
        );
    }

    #[test]
    fn bold_with_nested_italic() {
        assert_eq!(
            tokenize_line("Внутри __двойного выделения _одинарное_ тоже__ работает."),
            vec![
                text("Внутри "),
                Token::BoldStart,
                text("двойного выделения "),
                Token::ItalicStart,
                text("одинарное"),
                Token::ItalicEnd,
                text(" тоже"),
                Token::BoldEnd,
                text(" работает."),
            ]
        );
    }

    #[test]
    fn bold_markers_inside_italic_stay_literal() {
        assert_eq!(
            tokenize_line("внутри _одинарного __двойное__ не_ работает."),
            vec![
                text("внутри "),
                Token::ItalicStart,
                text("одинарного __двойное__ не"),
                Token::ItalicEnd,
                text(" работает."),
            ]
        );
    }

    #[test]
    fn bold_at_line_start() {
        assert_eq!(
            tokenize_line("__Выделенный текст__ должен"),
            vec![
                Token::BoldStart,
                text("Выделенный текст"),
                Token::BoldEnd,
                text(" должен"),
            ]
        );
    }

    #[rstest]
    #[case::italic_across_words("В то же время выделение в ра_зных сл_овах не работает.")]
    #[case::italic_opened_before_space("должен _ следовать_ непробельный символ.")]
    #[case::italic_closed_after_space("Иначе эти _подчерки _не считаются выделением")]
    #[case::bold_opened_before_space("Иначе эти__ подчерки__ не считаются выделением")]
    #[case::bold_closed_after_space("Иначе эти __подчерки __не считаются выделением")]
    #[case::digits("Подчерки внутри текста c цифрами_12_3 не считаются выделением")]
    #[case::double_digits("Цифры__12__3 не должны выделяться")]
    #[case::bold_across_words("раз__ные слова__ не")]
    #[case::bold_with_underscore_before_space("__a_ b__")]
    #[case::bold_with_lone_underscore("__a _ b__")]
    #[case::unpaired("__Непарные_ символы в рамках одного абзаца")]
    #[case::bold_crossing_italic("В случае __пересечения _двойных__ и одинарных_ подчерков")]
    #[case::italic_crossing_bold("В случае _пересечения __двойных_ и одинарных__ подчерков")]
    #[case::empty_bold("Если внутри подчерков пустая строка ____, то они остаются")]
    #[case::only_underscores("____")]
    #[case::unclosed_italic("Текст с _одиночным маркером")]
    #[case::unclosed_bold("Текст с __одиночным маркером")]
    #[case::trailing_marker("text_")]
    #[case::trailing_bold_marker("text __")]
    #[case::header_without_space("#Заголовок без пробела")]
    #[case::header_mid_line("Текст # Заголовок в середине")]
    #[case::plain_backslashes(r"Здесь сим\волы экранирования\ \должны остаться.\")]
    fn stays_literal(#[case] line: &str) {
        assert_eq!(tokenize_line(line), vec![text(line)]);
    }

    #[rstest]
    #[case::escaped_italic(r"\_Вот это\_, не должно выделиться", "_Вот это_, не должно выделиться")]
    #[case::escaped_bold(r"\_\_это не жирный\_\_ текст", "__это не жирный__ текст")]
    #[case::escaped_markers(r"\__это не жирный\__ а _\это не курсив\_", r"__это не жирный__ а _\это не курсив_")]
    #[case::escaped_backslashes(r"\\\", r"\\")]
    fn escapes_fold_into_text(#[case] line: &str, #[case] expected: &str) {
        assert_eq!(tokenize_line(line), vec![text(expected)]);
    }

    #[test]
    fn escaped_backslash_keeps_italic() {
        assert_eq!(
            tokenize_line(r"\\_одинарный экранирование_ и \\\_двойной экранирование_"),
            vec![
                text(r"\"),
                Token::ItalicStart,
                text("одинарный экранирование"),
                Token::ItalicEnd,
                text(r" и \_двойной экранирование_"),
            ]
        );
    }

    #[test]
    fn header_prefix() {
        assert_eq!(
            tokenize_line("# Заголовок __с _разными_ символами__"),
            vec![
                Token::Header,
                text("Заголовок "),
                Token::BoldStart,
                text("с "),
                Token::ItalicStart,
                text("разными"),
                Token::ItalicEnd,
                text(" символами"),
                Token::BoldEnd,
            ]
        );
    }

    #[test]
    fn header_without_content() {
        assert_eq!(tokenize_line("# "), vec![Token::Header]);
    }

    #[test]
    fn bold_in_word_parts() {
        assert_eq!(
            tokenize_line("раз__ны__е"),
            vec![text("раз"), Token::BoldStart, text("ны"), Token::BoldEnd, text("е")]
        );
    }

    #[test]
    fn italic_completed_inside_unclosed_bold_survives() {
        assert_eq!(
            tokenize_line("__a _b_ c"),
            vec![
                text("__a "),
                Token::ItalicStart,
                text("b"),
                Token::ItalicEnd,
                text(" c"),
            ]
        );
    }

    #[test]
    fn abandoned_span_resumes_scanning() {
        // The italic is abandoned at the dangling `__`; the closing underscore then opens
        // a new, in-word italic.
        assert_eq!(
            tokenize_line("_a __b_c_"),
            vec![
                text("_a __b"),
                Token::ItalicStart,
                text("c"),
                Token::ItalicEnd,
            ]
        );
    }

    #[test]
    fn tokenize_appends_newline_after_every_line() {
        assert_eq!(
            Tokenizer.tokenize("line1\n\n_line3_"),
            vec![
                text("line1"),
                Token::Newline,
                Token::Newline,
                Token::ItalicStart,
                text("line3"),
                Token::ItalicEnd,
                Token::Newline,
            ]
        );
    }

    #[test]
    fn empty_input_is_one_empty_line() {
        assert_eq!(split_lines("").collect::<Vec<_>>(), vec![""]);
        assert_eq!(Tokenizer.tokenize(""), vec![Token::Newline]);
    }

    #[test]
    fn split_lines_keeps_order() {
        assert_eq!(
            split_lines("line1\nline2\nline3").collect::<Vec<_>>(),
            vec!["line1", "line2", "line3"]
        );
    }
}
