use std::{
    fs,
    io::{self, IsTerminal, Write},
    path::PathBuf,
};

use crossterm::style::Stylize;
use mdlite_converters_core::visitor::Visitor;
use mdlite_parser::{Bold, Document, Header, Italic, Node, Paragraph, Token};
use miette::IntoDiagnostic;

use crate::error;

/// Inspect the token stream or the document tree of a file
#[derive(clap::Args, Debug)]
pub struct Args {
    /// Input file
    pub file: PathBuf,

    /// Print the token stream instead of the document tree
    #[arg(long)]
    pub tokens: bool,

    /// Print as JSON
    #[arg(long)]
    pub json: bool,
}

const MAX_TEXT_LEN: usize = 60;

pub fn run(args: &Args) -> miette::Result<()> {
    let input = fs::read_to_string(&args.file).map_err(|e| error::display(&e))?;
    let stdout = io::stdout();
    let color = stdout.is_terminal();
    let mut out = stdout.lock();

    if args.tokens {
        let tokens = mdlite_parser::tokenize(&input);
        if args.json {
            serde_json::to_writer_pretty(&mut out, &tokens).into_diagnostic()?;
            writeln!(out).into_diagnostic()?;
        } else {
            print_tokens(&mut out, &tokens).into_diagnostic()?;
        }
        return Ok(());
    }

    let doc = mdlite_parser::parse(&input);
    if args.json {
        serde_json::to_writer_pretty(&mut out, &doc).into_diagnostic()?;
        writeln!(out).into_diagnostic()?;
    } else {
        TreeVisitor::new(&mut out, color)
            .visit_document(&doc)
            .into_diagnostic()?;
    }
    Ok(())
}

fn print_tokens<W: Write>(mut writer: W, tokens: &[Token]) -> io::Result<()> {
    for token in tokens {
        writeln!(writer, "{token}")?;
    }
    Ok(())
}

struct TreeVisitor<W: Write> {
    writer: W,
    depth: usize,
    is_last_stack: Vec<bool>,
    color: bool,
}

impl<W: Write> TreeVisitor<W> {
    fn new(writer: W, color: bool) -> Self {
        Self {
            writer,
            depth: 0,
            is_last_stack: Vec::new(),
            color,
        }
    }

    fn print_tree_line(&mut self, name: &str, detail: Option<&str>) -> io::Result<()> {
        // Print tree structure: ├─, └─, │
        for i in 0..self.depth {
            let is_last = self.is_last_stack.get(i) == Some(&true);
            let segment = match (i + 1 == self.depth, is_last) {
                (true, true) => "└─ ",
                (true, false) => "├─ ",
                (false, true) => "   ",
                (false, false) => "│  ",
            };
            write!(self.writer, "{segment}")?;
        }

        if self.color {
            write!(self.writer, "{}", name.cyan().bold())?;
        } else {
            write!(self.writer, "{name}")?;
        }

        if let Some(d) = detail {
            if self.color {
                write!(self.writer, ": {}", d.yellow())?;
            } else {
                write!(self.writer, ": {d}")?;
            }
        }

        writeln!(self.writer)
    }

    fn enter(&mut self, is_last: bool) {
        self.is_last_stack.push(is_last);
        self.depth += 1;
    }

    fn exit(&mut self) {
        self.is_last_stack.pop();
        self.depth -= 1;
    }

    fn with_child<F>(&mut self, is_last: bool, f: F) -> io::Result<()>
    where
        F: FnOnce(&mut Self) -> io::Result<()>,
    {
        self.enter(is_last);
        let result = f(self);
        self.exit();
        result
    }
}

/// Truncate text for display
fn truncate(text: &str, max_chars: usize) -> String {
    let count = text.chars().count();
    if count <= max_chars {
        text.to_string()
    } else {
        let head: String = text.chars().take(max_chars).collect();
        format!("{head}... ({count} chars)")
    }
}

impl<W: Write> Visitor for TreeVisitor<W> {
    type Error = io::Error;

    fn visit_document_start(&mut self, _doc: &Document) -> Result<(), Self::Error> {
        if self.color {
            writeln!(self.writer, "{}", "Document".blue().bold())
        } else {
            writeln!(self.writer, "Document")
        }
    }

    fn visit_nodes(&mut self, nodes: &[Node]) -> Result<(), Self::Error> {
        let last = nodes.len().saturating_sub(1);
        for (i, node) in nodes.iter().enumerate() {
            self.with_child(i == last, |visitor| visitor.visit_node(node))?;
        }
        Ok(())
    }

    fn visit_header(&mut self, header: &Header) -> Result<(), Self::Error> {
        self.print_tree_line("Header", None)?;
        self.visit_nodes(&header.content)
    }

    fn visit_paragraph(&mut self, para: &Paragraph) -> Result<(), Self::Error> {
        self.print_tree_line("Paragraph", None)?;
        self.visit_nodes(&para.content)
    }

    fn visit_bold(&mut self, bold: &Bold) -> Result<(), Self::Error> {
        self.print_tree_line("Bold", None)?;
        self.visit_nodes(&bold.content)
    }

    fn visit_italic(&mut self, italic: &Italic) -> Result<(), Self::Error> {
        self.print_tree_line("Italic", None)?;
        self.visit_nodes(&italic.content)
    }

    fn visit_text(&mut self, text: &str) -> Result<(), Self::Error> {
        let detail = format!("{:?}", truncate(text, MAX_TEXT_LEN));
        self.print_tree_line("Text", Some(&detail))
    }
}
