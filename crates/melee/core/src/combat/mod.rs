//! Damage adjustment math shared by the blow effect handlers.

mod damage;

pub use damage::{adjust_dam_armor, adjust_dam_elemental};
