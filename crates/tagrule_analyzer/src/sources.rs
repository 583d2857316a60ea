//! Source collection and test-code pruning.
//!
//! Test-only code is removed before any pass runs: whole files by location
//! and name, and individual items marked `#[test]` or `#[cfg(test)]`.

use std::fs;
use std::path::{Path, PathBuf};

use syn::punctuated::Punctuated;
use syn::visit_mut::{self, VisitMut};
use syn::{Attribute, ImplItem, Item, Meta, Stmt, Token};
use tracing::trace;

use crate::config::AnalyzerConfig;
use crate::error::{AnalyzerError, Result};

/// Recursively collects the non-test `.rs` files under `root`, sorted.
///
/// # Errors
/// Returns [`AnalyzerError::Io`] if a directory cannot be listed.
pub fn collect(root: &Path, config: &AnalyzerConfig) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    walk(root, config, &mut files)?;
    files.sort();
    Ok(files)
}

fn walk(dir: &Path, config: &AnalyzerConfig, files: &mut Vec<PathBuf>) -> Result<()> {
    let entries = fs::read_dir(dir).map_err(|e| AnalyzerError::io(dir, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| AnalyzerError::io(dir, e))?;
        let path = entry.path();
        let file_type = entry.file_type().map_err(|e| AnalyzerError::io(&path, e))?;
        let name = entry.file_name();
        let name = name.to_string_lossy();

        if file_type.is_dir() {
            if config.skips_dir(&name) {
                trace!(dir = %path.display(), "skipping directory");
            } else {
                walk(&path, config, files)?;
            }
        } else if file_type.is_file()
            && path.extension().is_some_and(|ext| ext == "rs")
            && !config.is_test_file(&name)
        {
            files.push(path);
        }
    }
    Ok(())
}

/// Reads and parses one source file.
///
/// # Errors
/// Returns [`AnalyzerError::Io`] or [`AnalyzerError::Syntax`].
pub fn parse_file(path: &Path) -> Result<syn::File> {
    let text = fs::read_to_string(path).map_err(|e| AnalyzerError::io(path, e))?;
    parse_source(path, &text)
}

/// Parses source text, attributing errors to `path`.
///
/// # Errors
/// Returns [`AnalyzerError::Syntax`] if `text` is not valid Rust.
pub fn parse_source(path: &Path, text: &str) -> Result<syn::File> {
    let mut file = syn::parse_file(text).map_err(|e| {
        let start = e.span().start();
        AnalyzerError::Syntax {
            path: path.to_path_buf(),
            message: format!("{}:{}: {e}", start.line, start.column + 1),
        }
    })?;
    strip_test_items(&mut file);
    Ok(file)
}

/// Returns true if the attributes mark an item as test-only.
#[must_use]
pub fn is_test_only(attrs: &[Attribute]) -> bool {
    attrs.iter().any(|attr| {
        let path = attr.path();
        if path.is_ident("test") {
            return true;
        }
        path.is_ident("cfg")
            && attr
                .parse_args::<Meta>()
                .is_ok_and(|meta| cfg_requires_test(&meta))
    })
}

/// `test`, or `all(..)` containing `test`.
fn cfg_requires_test(meta: &Meta) -> bool {
    match meta {
        Meta::Path(path) => path.is_ident("test"),
        Meta::List(list) if list.path.is_ident("all") => list
            .parse_args_with(Punctuated::<Meta, Token![,]>::parse_terminated)
            .is_ok_and(|nested| nested.iter().any(cfg_requires_test)),
        _ => false,
    }
}

fn item_attrs(item: &Item) -> &[Attribute] {
    match item {
        Item::Const(item) => &item.attrs,
        Item::Enum(item) => &item.attrs,
        Item::ExternCrate(item) => &item.attrs,
        Item::Fn(item) => &item.attrs,
        Item::ForeignMod(item) => &item.attrs,
        Item::Impl(item) => &item.attrs,
        Item::Macro(item) => &item.attrs,
        Item::Mod(item) => &item.attrs,
        Item::Static(item) => &item.attrs,
        Item::Struct(item) => &item.attrs,
        Item::Trait(item) => &item.attrs,
        Item::TraitAlias(item) => &item.attrs,
        Item::Type(item) => &item.attrs,
        Item::Union(item) => &item.attrs,
        Item::Use(item) => &item.attrs,
        _ => &[],
    }
}

struct TestStripper;

impl VisitMut for TestStripper {
    fn visit_file_mut(&mut self, file: &mut syn::File) {
        file.items.retain(|item| !is_test_only(item_attrs(item)));
        visit_mut::visit_file_mut(self, file);
    }

    fn visit_item_mod_mut(&mut self, module: &mut syn::ItemMod) {
        if let Some((_, items)) = &mut module.content {
            items.retain(|item| !is_test_only(item_attrs(item)));
        }
        visit_mut::visit_item_mod_mut(self, module);
    }

    fn visit_item_impl_mut(&mut self, item: &mut syn::ItemImpl) {
        item.items.retain(|item| match item {
            ImplItem::Fn(method) => !is_test_only(&method.attrs),
            _ => true,
        });
        visit_mut::visit_item_impl_mut(self, item);
    }

    fn visit_block_mut(&mut self, block: &mut syn::Block) {
        block.stmts.retain(|stmt| match stmt {
            Stmt::Item(item) => !is_test_only(item_attrs(item)),
            _ => true,
        });
        visit_mut::visit_block_mut(self, block);
    }
}

/// Removes every item marked `#[test]` or `#[cfg(test)]`, at any depth.
pub fn strip_test_items(file: &mut syn::File) {
    TestStripper.visit_file_mut(file);
}
