//! The ordered list of library sources handed to the external tools.

use std::collections::HashSet;

use camino::{Utf8Path, Utf8PathBuf};

use crate::error::BuildError;

/// Sources of the `nerdy` library in the order they are concatenated.
pub const DEFAULT_MODULES: [&str; 10] = [
    "./src/nerdy.js",
    "./src/hclust.js",
    "./src/kmeans.js",
    "./src/knn.js",
    "./src/linreg.js",
    "./src/logreg.js",
    "./src/nbayes.js",
    "./src/neural.js",
    "./src/pca.js",
    "./src/svm.js",
];

/// Non-empty, duplicate-free sequence of module paths.
///
/// Paths are kept exactly as written; `./src/a.js` and `src/a.js` are
/// distinct entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleList(Vec<Utf8PathBuf>);

impl ModuleList {
    /// Builds a module list, preserving the given order.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::EmptyModuleList`] when `paths` yields nothing and
    /// [`BuildError::DuplicateModule`] for the first repeated path.
    pub fn new<I, P>(paths: I) -> Result<Self, BuildError>
    where
        I: IntoIterator<Item = P>,
        P: Into<Utf8PathBuf>,
    {
        let entries: Vec<Utf8PathBuf> = paths.into_iter().map(Into::into).collect();
        if entries.is_empty() {
            return Err(BuildError::EmptyModuleList);
        }

        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if !seen.insert(entry.as_str()) {
                return Err(BuildError::DuplicateModule(entry.clone()));
            }
        }

        Ok(Self(entries))
    }

    /// Iterates the module paths in list order.
    pub fn iter(&self) -> impl Iterator<Item = &Utf8Path> {
        self.0.iter().map(Utf8PathBuf::as_path)
    }

    /// Returns the module paths as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Utf8PathBuf] {
        &self.0
    }
}

impl Default for ModuleList {
    fn default() -> Self {
        Self(DEFAULT_MODULES.iter().map(|path| Utf8PathBuf::from(*path)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn default_list_keeps_library_order() {
        let modules = ModuleList::default();
        let paths: Vec<&str> = modules.iter().map(Utf8Path::as_str).collect();
        assert_eq!(paths, DEFAULT_MODULES);
    }

    #[test]
    fn default_list_satisfies_invariants() {
        let rebuilt = ModuleList::new(DEFAULT_MODULES).expect("default modules are valid");
        assert_eq!(rebuilt, ModuleList::default());
    }

    #[test]
    fn new_preserves_insertion_order() {
        let modules = ModuleList::new(["b.js", "a.js", "c.js"]).expect("valid list");
        let paths: Vec<&str> = modules.iter().map(Utf8Path::as_str).collect();
        assert_eq!(paths, ["b.js", "a.js", "c.js"]);
    }

    #[test]
    fn new_rejects_empty_list() {
        let err = ModuleList::new(Vec::<String>::new()).expect_err("empty list rejected");
        assert!(matches!(err, BuildError::EmptyModuleList));
    }

    #[rstest]
    #[case(&["a.js", "a.js"], "a.js")]
    #[case(&["a.js", "b.js", "c.js", "b.js"], "b.js")]
    #[case(&["x y.js", "z.js", "x y.js"], "x y.js")]
    fn new_rejects_duplicates(#[case] paths: &[&str], #[case] duplicate: &str) {
        let err = ModuleList::new(paths.iter().copied()).expect_err("duplicate rejected");
        match err {
            BuildError::DuplicateModule(path) => assert_eq!(path, duplicate),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn paths_are_not_normalised() {
        let modules = ModuleList::new(["./src/a.js", "src/a.js"]).expect("distinct spellings");
        assert_eq!(modules.as_slice().len(), 2);
    }
}
