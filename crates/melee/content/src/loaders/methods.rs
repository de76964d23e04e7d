//! RON loader for blow method definitions.
//!
//! A method file is a RON list of method definitions; unspecified
//! fields take their defaults:
//!
//! ```ron
//! [
//!     (name: "BITE", act_msg: Some("bites you."), phys: true),
//!     (name: "INSULT", flavor: Insult),
//! ]
//! ```

use std::path::Path;

use anyhow::Context;
use melee_core::BlowMethod;
use tracing::debug;

use crate::loaders::{LoadResult, read_file};
use crate::methods::MethodRegistry;

/// Loader for blow method data files.
pub struct MethodLoader;

impl MethodLoader {
    /// Parse a RON method list into a registry.
    pub fn parse(text: &str) -> LoadResult<MethodRegistry> {
        let methods: Vec<BlowMethod> =
            ron::from_str(text).context("Failed to parse blow methods")?;
        let registry = MethodRegistry::from_methods(methods)?;

        debug!(count = registry.len(), "loaded blow methods");

        Ok(registry)
    }

    /// Load a registry from a RON file.
    pub fn load(path: &Path) -> LoadResult<MethodRegistry> {
        Self::parse(&read_file(path)?)
            .with_context(|| format!("Failed to load blow methods from {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use melee_core::{BlowMethodOracle, MethodFlavor};

    const METHODS_RON: &str = r#"
[
    (name: "HIT", act_msg: Some("hits you."), phys: true),
    (name: "GAZE", act_msg: Some("gazes at you.")),
    (name: "INSULT", flavor: Insult),
]
"#;

    #[test]
    fn parses_a_method_list() {
        let registry = MethodLoader::parse(METHODS_RON).unwrap();
        assert_eq!(registry.len(), 3);

        let hit = registry.method("HIT").unwrap();
        assert!(hit.phys);
        assert_eq!(hit.act_msg.as_deref(), Some("hits you."));

        let gaze = registry.method("GAZE").unwrap();
        assert!(!gaze.phys, "phys defaults to false");

        let insult = registry.method("INSULT").unwrap();
        assert_eq!(insult.flavor, MethodFlavor::Insult);
        assert_eq!(insult.act_msg, None);
    }

    #[test]
    fn rejects_duplicate_names() {
        let text = r#"[(name: "HIT"), (name: "hit")]"#;
        assert!(MethodLoader::parse(text).is_err());
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(MethodLoader::parse("not ron at all").is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(MethodLoader::load(Path::new("/nonexistent/methods.ron")).is_err());
    }
}
