//! Configuration for the static analyzer.

use std::env;

/// Environment variable that disables the build-script validation pass.
pub const SKIP_ENV: &str = "TAGRULE_SKIP_CHECK";

/// Configuration for the static analyzer.
///
/// Controls which attribute carries annotations, how custom validator
/// registrations are recognized, and which sources count as test-only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnalyzerConfig {
    /// Name of the field attribute carrying an annotation.
    pub attribute: String,

    /// Method names whose first string-literal argument registers a custom
    /// validator.
    pub register_methods: Vec<String>,

    /// Directory names never descended into.
    pub skip_dirs: Vec<String>,

    /// File names treated as test-only.
    pub test_files: Vec<String>,

    /// File name suffixes treated as test-only.
    pub test_suffixes: Vec<String>,

    /// Skip the build-script validation pass entirely.
    pub skip: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            attribute: "tag".to_string(),
            register_methods: vec!["register".to_string(), "register_validator".to_string()],
            skip_dirs: vec![
                "tests".to_string(),
                "benches".to_string(),
                "target".to_string(),
            ],
            test_files: vec!["tests.rs".to_string()],
            test_suffixes: vec!["_test.rs".to_string(), "_tests.rs".to_string()],
            skip: false,
        }
    }
}

impl AnalyzerConfig {
    /// Creates the default configuration with the skip flag read from
    /// [`SKIP_ENV`].
    #[must_use]
    pub fn from_env() -> Self {
        let skip = env::var(SKIP_ENV).is_ok_and(|value| is_truthy(&value));
        Self::default().with_skip(skip)
    }

    /// Builder method to set the annotation attribute name.
    #[must_use]
    pub fn with_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.attribute = attribute.into();
        self
    }

    /// Builder method to replace the registration method names.
    #[must_use]
    pub fn with_register_methods<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.register_methods = methods.into_iter().map(Into::into).collect();
        self
    }

    /// Builder method to add a directory name to skip.
    #[must_use]
    pub fn with_skip_dir(mut self, dir: impl Into<String>) -> Self {
        self.skip_dirs.push(dir.into());
        self
    }

    /// Builder method to set the skip flag.
    #[must_use]
    pub fn with_skip(mut self, skip: bool) -> Self {
        self.skip = skip;
        self
    }

    /// Returns true if a directory with this name is not scanned.
    #[must_use]
    pub fn skips_dir(&self, name: &str) -> bool {
        name.starts_with('.') || self.skip_dirs.iter().any(|dir| dir == name)
    }

    /// Returns true if a file with this name is test-only.
    #[must_use]
    pub fn is_test_file(&self, name: &str) -> bool {
        self.test_files.iter().any(|file| file == name)
            || self.test_suffixes.iter().any(|suffix| name.ends_with(suffix.as_str()))
    }

    /// Returns true if `name` is a registration method.
    #[must_use]
    pub fn is_register_method(&self, name: &str) -> bool {
        self.register_methods.iter().any(|method| method == name)
    }
}

/// Interprets an environment flag value.
fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes"
    )
}
