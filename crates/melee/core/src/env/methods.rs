/// How a method without a literal action message picks its flavor text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MethodFlavor {
    /// No flavor pool; the method either has a literal message or none.
    #[default]
    None,
    /// Random insult from the fixed insult pool.
    Insult,
    /// Random moan from the fixed moan pool.
    Moan,
}

/// Static definition of an attack delivery method (bite, claw, gaze, ...).
///
/// Loaded once at startup and looked up by name at resolution time.
/// Only the fields the resolution engine consumes are kept here: the
/// presentation layer owns everything else about a method.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlowMethod {
    /// Symbolic name, matched case-insensitively.
    pub name: String,

    /// Literal action message ("bites you."). When absent, the flavor
    /// pool (if any) supplies one at random.
    #[cfg_attr(feature = "serde", serde(default))]
    pub act_msg: Option<String>,

    #[cfg_attr(feature = "serde", serde(default))]
    pub flavor: MethodFlavor,

    /// Whether the method itself carries physical force. Non-physical
    /// delivery (gaze, drool) bypasses armor entirely for elemental
    /// blows.
    #[cfg_attr(feature = "serde", serde(default))]
    pub phys: bool,
}

impl BlowMethod {
    pub fn new(name: impl Into<String>, phys: bool) -> Self {
        Self {
            name: name.into(),
            act_msg: None,
            flavor: MethodFlavor::None,
            phys,
        }
    }

    pub fn with_message(mut self, act_msg: impl Into<String>) -> Self {
        self.act_msg = Some(act_msg.into());
        self
    }

    pub fn with_flavor(mut self, flavor: MethodFlavor) -> Self {
        self.flavor = flavor;
        self
    }
}

/// Read-only lookup of blow method definitions by name.
pub trait BlowMethodOracle: Send + Sync + core::fmt::Debug {
    /// Case-insensitive exact-name lookup.
    fn method(&self, name: &str) -> Option<&BlowMethod>;
}
