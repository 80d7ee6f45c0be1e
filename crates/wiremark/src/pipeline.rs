//! High-level pipeline entry points.
//!
//! Every function here follows the same policy as the crates underneath:
//! collect diagnostics, never stop. [`parse`] always returns a best-effort
//! document, [`compile`] always returns SVG markup, and the diagnostics list
//! carries everything that went wrong along the way.

use wiremark_ast::{Diagnostic, DiagnosticKind, Document, SourceLocation, has_errors, walk_document};
use wiremark_render::{RenderOptions, Theme, ThemeChoice};

/// Result of [`parse`]: the document plus everything wrong with it.
#[derive(Clone, Debug)]
pub struct ParseOutcome {
    /// Best-effort document, present even for badly malformed input
    pub document: Document,
    /// All diagnostics found, sorted by source position
    pub errors: Vec<Diagnostic>,
}

/// Parse wiremark source into a document.
pub fn parse(source: &str) -> ParseOutcome {
    let (document, errors) = wiremark_parser::parse(source);
    ParseOutcome { document, errors }
}

/// Result of [`compile`]: SVG markup plus the collected diagnostics.
#[derive(Clone, Debug)]
pub struct CompileOutcome {
    /// Rendered markup; best-effort when diagnostics are present
    pub svg: String,
    /// Parse diagnostics plus option-level problems
    pub errors: Vec<Diagnostic>,
}

/// Parse, lay out and render in one call.
pub fn compile(source: &str, options: &RenderOptions) -> CompileOutcome {
    let ParseOutcome {
        document,
        mut errors,
    } = parse(source);

    if let Some(ThemeChoice::Named(name)) = &options.theme {
        if Theme::named(name).is_none() {
            errors.push(Diagnostic::warning(
                DiagnosticKind::Semantic,
                format!("unknown theme '{name}', using the document style"),
                SourceLocation::origin(),
            ));
        }
    }

    let svg = wiremark_render::render(&document, options);
    let mut elements = 0usize;
    walk_document(&document, &mut |_| elements += 1);
    tracing::debug!(
        bytes = svg.len(),
        elements,
        diagnostics = errors.len(),
        "compiled document"
    );
    CompileOutcome { svg, errors }
}

/// Result of [`validate`].
#[derive(Clone, Debug)]
pub struct Validation {
    /// True when no error-severity diagnostic was found
    pub valid: bool,
    /// All diagnostics, warnings included
    pub errors: Vec<Diagnostic>,
}

/// Check a source without rendering it. Warnings do not invalidate.
pub fn validate(source: &str) -> Validation {
    let ParseOutcome { errors, .. } = parse(source);
    Validation {
        valid: !has_errors(&errors),
        errors,
    }
}
