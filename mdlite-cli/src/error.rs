use std::{error::Error, io};

use mdlite_converters_html::Error as HtmlError;
use miette::Diagnostic;

/// Error report with an optional hint on how to fix it
#[derive(Debug, Diagnostic, thiserror::Error)]
#[error("{message}")]
#[diagnostic(code(mdlite::error))]
pub(crate) struct CliError {
    message: String,

    #[help]
    advice: Option<String>,
}

/// Build a report for `e`, looking through its source chain for something to advise on.
pub(crate) fn display<E: Error + 'static>(e: &E) -> miette::Report {
    miette::Report::new(CliError {
        message: e.to_string(),
        advice: advice(e),
    })
}

fn advice(e: &(dyn Error + 'static)) -> Option<String> {
    let mut current = Some(e);
    while let Some(err) = current {
        let html_error = err.downcast_ref::<HtmlError>();
        if let Some(HtmlError::OutputPathSameAsInput(path)) = html_error {
            return Some(format!(
                "rename {} so that it does not end in `.html`",
                path.display()
            ));
        }

        let io_error = if let Some(HtmlError::Io(io)) = html_error {
            Some(io)
        } else {
            err.downcast_ref::<io::Error>()
        };
        if let Some(io_error) = io_error
            && let Some(advice) = io_advice(io_error.kind())
        {
            return Some(advice.to_string());
        }

        current = err.source();
    }
    None
}

fn io_advice(kind: io::ErrorKind) -> Option<&'static str> {
    if kind == io::ErrorKind::NotFound {
        Some("check that the file exists and the path is spelled correctly")
    } else if kind == io::ErrorKind::InvalidData {
        Some("input must be valid UTF-8")
    } else if kind == io::ErrorKind::PermissionDenied {
        Some("check the permissions of the file and its directory")
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn same_output_path_gets_rename_advice() {
        let e = HtmlError::OutputPathSameAsInput(PathBuf::from("page.html"));
        assert_eq!(
            advice(&e).as_deref(),
            Some("rename page.html so that it does not end in `.html`")
        );
    }

    #[test]
    fn advice_is_found_through_the_source_chain() {
        let parser_error =
            mdlite_parser::Error::from(io::Error::new(io::ErrorKind::NotFound, "gone"));
        let e = HtmlError::Parse(parser_error);
        assert_eq!(
            advice(&e).as_deref(),
            Some("check that the file exists and the path is spelled correctly")
        );
    }

    #[test]
    fn transparent_io_errors_are_inspected() {
        let e = HtmlError::Io(io::Error::new(io::ErrorKind::InvalidData, "bad"));
        assert_eq!(advice(&e).as_deref(), Some("input must be valid UTF-8"));
    }

    #[test]
    fn no_advice_for_unrelated_errors() {
        let e = io::Error::other("boom");
        assert_eq!(advice(&e), None);
        assert_eq!(display(&e).to_string(), "boom");
    }
}
