//! Discovery of custom validator registrations.
//!
//! Best-effort: only calls of the form `.register("literal", ...)` are
//! recognized. Names passed through variables, constants, or helper
//! functions are not seen.

use std::collections::BTreeSet;

use syn::visit::{self, Visit};
use syn::{Expr, ExprLit, ExprMethodCall, Lit};

use crate::config::AnalyzerConfig;

/// Collects registered validator names from one parsed file.
pub struct RegistrationFinder<'a> {
    config: &'a AnalyzerConfig,
    names: &'a mut BTreeSet<String>,
}

impl<'a> RegistrationFinder<'a> {
    /// Creates a finder that adds discovered names to `names`.
    #[must_use]
    pub fn new(config: &'a AnalyzerConfig, names: &'a mut BTreeSet<String>) -> Self {
        Self { config, names }
    }

    /// Scans one file.
    pub fn scan(&mut self, file: &syn::File) {
        self.visit_file(file);
    }
}

impl<'ast> Visit<'ast> for RegistrationFinder<'_> {
    fn visit_expr_method_call(&mut self, call: &'ast ExprMethodCall) {
        if self.config.is_register_method(&call.method.to_string()) {
            if let Some(Expr::Lit(ExprLit {
                lit: Lit::Str(name), ..
            })) = call.args.first()
            {
                self.names.insert(name.value());
            }
        }
        visit::visit_expr_method_call(self, call);
    }
}

/// Returns the names registered in `files`.
#[must_use]
pub fn discover<'f>(
    files: impl IntoIterator<Item = &'f syn::File>,
    config: &AnalyzerConfig,
) -> BTreeSet<String> {
    let mut names = BTreeSet::new();
    let mut finder = RegistrationFinder::new(config, &mut names);
    for file in files {
        finder.scan(file);
    }
    names
}
