//! The two-pass package analyzer.
//!
//! Pass one discovers custom validator registrations across every file.
//! Pass two checks the annotation of every field of every struct against
//! the built-ins plus the discovered names.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use syn::spanned::Spanned;
use syn::visit::Visit;
use syn::{Attribute, ItemStruct, LitStr, Meta};
use tracing::{debug, info};

use crate::check::check_annotation;
use crate::config::AnalyzerConfig;
use crate::diagnostic::{Diagnostic, Report};
use crate::discovery::discover;
use crate::error::{AnalyzerError, Result};
use crate::sources;

/// Static analyzer for field annotations.
///
/// Each call starts fresh; nothing is kept between scans.
#[derive(Clone, Debug, Default)]
pub struct Analyzer {
    config: AnalyzerConfig,
}

impl Analyzer {
    /// Creates an analyzer with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an analyzer with the given configuration.
    #[must_use]
    pub const fn with_config(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Analyzes every non-test `.rs` file under `root`.
    ///
    /// # Errors
    /// Returns an [`AnalyzerError`] if `root` is not a directory, or a file
    /// cannot be read or parsed. Annotation problems are diagnostics, not
    /// errors.
    pub fn analyze(&self, root: impl AsRef<Path>) -> Result<Report> {
        let root = root.as_ref();
        if !root.is_dir() {
            return Err(AnalyzerError::NotADirectory(root.to_path_buf()));
        }

        let paths = sources::collect(root, &self.config)?;
        debug!(root = %root.display(), files = paths.len(), "collected sources");

        let files = paths
            .into_iter()
            .map(|path| sources::parse_file(&path).map(|file| (path, file)))
            .collect::<Result<Vec<_>>>()?;
        Ok(self.analyze_parsed(&files))
    }

    /// Analyzes a single in-memory source file named `name`.
    ///
    /// # Errors
    /// Returns [`AnalyzerError::Syntax`] if `text` is not valid Rust.
    pub fn analyze_source(&self, name: impl Into<PathBuf>, text: &str) -> Result<Report> {
        let path = name.into();
        let file = sources::parse_source(&path, text)?;
        Ok(self.analyze_parsed(&[(path, file)]))
    }

    fn analyze_parsed(&self, files: &[(PathBuf, syn::File)]) -> Report {
        let custom = discover(files.iter().map(|(_, file)| file), &self.config);
        for name in &custom {
            debug!(validator = %name, "discovered custom validator");
        }

        let mut diagnostics = Vec::new();
        for (path, file) in files {
            let mut collector = TagCollector {
                config: &self.config,
                path,
                custom: &custom,
                diagnostics: &mut diagnostics,
            };
            collector.visit_file(file);
        }
        diagnostics.sort();

        info!(
            files = files.len(),
            diagnostics = diagnostics.len(),
            "tag analysis finished"
        );
        Report {
            files_scanned: files.len(),
            custom_validators: custom.into_iter().collect(),
            diagnostics,
        }
    }
}

/// Walks struct declarations and checks their field annotations.
struct TagCollector<'a> {
    config: &'a AnalyzerConfig,
    path: &'a Path,
    custom: &'a BTreeSet<String>,
    diagnostics: &'a mut Vec<Diagnostic>,
}

impl TagCollector<'_> {
    fn check_struct(&mut self, item: &ItemStruct) {
        let record = item.ident.to_string();
        for (index, field) in item.fields.iter().enumerate() {
            let (name, start) = match &field.ident {
                Some(ident) => {
                    let name = ident.to_string();
                    let name = name.strip_prefix("r#").unwrap_or(&name).to_string();
                    (name, ident.span().start())
                }
                None => (index.to_string(), field.ty.span().start()),
            };

            for attr in field.attrs.iter().filter(|a| a.path().is_ident(&self.config.attribute)) {
                let (annotation, messages) = match annotation_literal(attr) {
                    Ok(literal) => {
                        let annotation = literal.value();
                        let messages = check_annotation(&annotation, self.custom);
                        (annotation, messages)
                    }
                    Err(raw) => (
                        raw,
                        vec![format!(
                            "`{}` attribute expects a single string literal",
                            self.config.attribute
                        )],
                    ),
                };
                for message in messages {
                    self.diagnostics.push(Diagnostic {
                        file: self.path.to_path_buf(),
                        line: start.line,
                        column: start.column + 1,
                        record: record.clone(),
                        field: name.clone(),
                        annotation: annotation.clone(),
                        message,
                    });
                }
            }
        }
    }
}

/// Extracts the string literal argument, or returns the raw argument text.
fn annotation_literal(attr: &Attribute) -> std::result::Result<LitStr, String> {
    match &attr.meta {
        Meta::List(list) => list.parse_args::<LitStr>().map_err(|_| list.tokens.to_string()),
        _ => Err(String::new()),
    }
}

impl<'ast> Visit<'ast> for TagCollector<'_> {
    fn visit_item_struct(&mut self, item: &'ast ItemStruct) {
        self.check_struct(item);
        syn::visit::visit_item_struct(self, item);
    }
}
