//! Blow method registry with the built-in default table.

use melee_core::{BlowMethod, BlowMethodOracle, MethodFlavor};

/// Errors building a method registry.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ContentError {
    /// Two method definitions share a name.
    #[error("duplicate blow method name: {0}")]
    DuplicateMethod(String),
}

/// Lookup table of blow method definitions.
///
/// Built once at startup, either from [`MethodRegistry::builtin`] or a
/// data file, and treated as read-only afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MethodRegistry {
    methods: Vec<BlowMethod>,
}

impl MethodRegistry {
    /// Build a registry, rejecting duplicate names.
    pub fn from_methods(methods: Vec<BlowMethod>) -> Result<Self, ContentError> {
        for (i, method) in methods.iter().enumerate() {
            if methods[..i]
                .iter()
                .any(|m| m.name.eq_ignore_ascii_case(&method.name))
            {
                return Err(ContentError::DuplicateMethod(method.name.clone()));
            }
        }
        Ok(Self { methods })
    }

    /// The default method table.
    pub fn builtin() -> Self {
        let methods = vec![
            BlowMethod::new("HIT", true).with_message("hits you."),
            BlowMethod::new("TOUCH", false).with_message("touches you."),
            BlowMethod::new("PUNCH", true).with_message("punches you."),
            BlowMethod::new("KICK", true).with_message("kicks you."),
            BlowMethod::new("CLAW", true).with_message("claws you."),
            BlowMethod::new("BITE", true).with_message("bites you."),
            BlowMethod::new("STING", true).with_message("stings you."),
            BlowMethod::new("BUTT", true).with_message("butts you."),
            BlowMethod::new("CRUSH", true).with_message("crushes you."),
            BlowMethod::new("ENGULF", true).with_message("engulfs you."),
            BlowMethod::new("CRAWL", true).with_message("crawls on you."),
            BlowMethod::new("DROOL", false).with_message("drools on you."),
            BlowMethod::new("SPIT", false).with_message("spits on you."),
            BlowMethod::new("GAZE", false).with_message("gazes at you."),
            BlowMethod::new("WAIL", false).with_message("wails at you."),
            BlowMethod::new("SPORE", false).with_message("releases spores at you."),
            BlowMethod::new("BEG", false).with_message("begs you for money."),
            BlowMethod::new("INSULT", false).with_flavor(MethodFlavor::Insult),
            BlowMethod::new("MOAN", false).with_flavor(MethodFlavor::Moan),
        ];

        // The built-in table has no duplicates.
        Self { methods }
    }

    pub fn len(&self) -> usize {
        self.methods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }
}

impl BlowMethodOracle for MethodRegistry {
    fn method(&self, name: &str) -> Option<&BlowMethod> {
        self.methods
            .iter()
            .find(|m| m.name.eq_ignore_ascii_case(name))
    }
}
