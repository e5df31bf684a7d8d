//! Invariants that hold for any input to the tokenizer and parser.
//!
//! - P0: nothing ever panics
//! - P1: token stream structure (balanced emphasis, merged text, no lost characters)
//! - P2: document tree structure

use proptest::prelude::*;

use crate::{Node, Token, Tokenize, Tokenizer, parse, split_lines, tokenize};

use super::generators::*;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 1000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // ====================================================================
    // P0: CRITICAL INVARIANTS
    // ====================================================================

    #[test]
    fn parser_never_panics(input in any_document_string()) {
        let _ = parse(&input);
    }

    #[test]
    fn parser_never_panics_on_markup(input in markup_document()) {
        let _ = parse(&input);
    }

    #[test]
    fn parsing_is_deterministic(input in markup_document()) {
        prop_assert_eq!(parse(&input), parse(&input));
    }

    // ====================================================================
    // P1: TOKEN STREAM INVARIANTS
    // ====================================================================

    #[test]
    fn one_newline_per_line(input in markup_document()) {
        let newlines = tokenize(&input).iter().filter(|t| **t == Token::Newline).count();
        prop_assert_eq!(newlines, split_lines(&input).count());
    }

    #[test]
    fn emphasis_is_balanced_within_each_line(input in markup_document()) {
        for line in split_lines(&input) {
            verify_balanced(&Tokenizer.tokenize_line(line))?;
        }
    }

    #[test]
    fn text_tokens_are_merged_and_non_empty(input in markup_document()) {
        let tokens = tokenize(&input);
        for token in &tokens {
            if let Some(text) = token.text() {
                prop_assert!(!text.is_empty());
            }
        }
        for pair in tokens.windows(2) {
            if let [Token::Text(_), Token::Text(_)] = pair {
                prop_assert!(false, "adjacent text tokens in {:?}", tokens);
            }
        }
    }

    /// Without escapes every source character survives, either as text or as a marker.
    #[test]
    fn no_characters_are_lost(input in markup_document()) {
        let input = input.replace('\\', "");
        for line in split_lines(&input) {
            prop_assert_eq!(reconstruct(&Tokenizer.tokenize_line(line)), line);
        }
    }

    #[test]
    fn plain_text_is_a_single_token(line in plain_text()) {
        let tokens = Tokenizer.tokenize_line(&line);
        if line.is_empty() {
            prop_assert!(tokens.is_empty());
        } else {
            prop_assert_eq!(tokens, vec![Token::Text(line)]);
        }
    }

    // ====================================================================
    // P2: DOCUMENT TREE INVARIANTS
    // ====================================================================

    #[test]
    fn blocks_only_at_top_level(input in markup_document()) {
        let document = parse(&input);
        for node in &document.nodes {
            prop_assert!(node.is_block());
            for child in node.children() {
                verify_inline(child, false)?;
            }
        }
    }

    #[test]
    fn at_most_one_block_per_line(input in markup_document()) {
        prop_assert!(parse(&input).nodes.len() <= split_lines(&input).count());
    }
}

// ====================================================================
// Helper functions for invariant verification
// ====================================================================

fn verify_balanced(tokens: &[Token]) -> Result<(), TestCaseError> {
    let mut open: Vec<&Token> = Vec::new();
    for token in tokens {
        match token {
            Token::BoldStart => {
                prop_assert!(open.is_empty(), "bold opened inside {:?}", open);
                open.push(token);
            }
            Token::ItalicStart => {
                prop_assert!(
                    !open.contains(&&Token::ItalicStart),
                    "italic opened inside italic"
                );
                open.push(token);
            }
            Token::BoldEnd => {
                prop_assert_eq!(open.pop(), Some(&Token::BoldStart));
            }
            Token::ItalicEnd => {
                prop_assert_eq!(open.pop(), Some(&Token::ItalicStart));
            }
            Token::Newline => {
                prop_assert!(false, "newline inside a line");
            }
            Token::Header | Token::Text(_) => {}
        }
    }
    prop_assert!(open.is_empty(), "unclosed {:?}", open);
    Ok(())
}

fn reconstruct(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|token| match token {
            Token::Text(content) => content.as_str(),
            Token::Header => "# ",
            Token::BoldStart | Token::BoldEnd => "__",
            Token::ItalicStart | Token::ItalicEnd => "_",
            Token::Newline => "\n",
        })
        .collect()
}

fn verify_inline(node: &Node, inside_italic: bool) -> Result<(), TestCaseError> {
    match node {
        Node::Header(_) | Node::Paragraph(_) => {
            prop_assert!(false, "block node nested in inline content: {:?}", node);
        }
        Node::Bold(bold) => {
            prop_assert!(!inside_italic, "bold inside italic: {:?}", node);
            for child in &bold.content {
                verify_inline(child, inside_italic)?;
            }
        }
        Node::Italic(italic) => {
            prop_assert!(!inside_italic, "italic inside italic: {:?}", node);
            for child in &italic.content {
                verify_inline(child, true)?;
            }
        }
        Node::Text(_) => {}
    }
    Ok(())
}
