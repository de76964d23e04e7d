//! Action-message selection for blow methods.

use crate::env::{BlowMethod, DiceRoller, MethodFlavor};

const DESC_INSULT: [&str; 8] = [
    "insults you!",
    "insults your mother!",
    "gives you the finger!",
    "humiliates you!",
    "defiles you!",
    "dances around you!",
    "makes obscene gestures!",
    "moons you!!!",
];

const DESC_MOAN: [&str; 8] = [
    "wants his mushrooms back.",
    "tells you to get off his land.",
    "looks for his dogs. ",
    "says 'Did you kill my Fang?' ",
    "asks 'Do you want to buy any mushrooms?' ",
    "seems sad about something.",
    "asks if you have seen his dogs.",
    "mumbles something about mushrooms.",
];

/// Return the action string to be appended to the attack message.
///
/// A literal message on the method wins; otherwise the flavor pool (if
/// any) supplies one uniformly at random.
pub fn blow_method_action(method: &BlowMethod, dice: &mut DiceRoller) -> Option<String> {
    if let Some(act_msg) = &method.act_msg {
        return Some(act_msg.clone());
    }
    match method.flavor {
        MethodFlavor::Insult => {
            Some(DESC_INSULT[dice.randint0(DESC_INSULT.len() as i32) as usize].to_string())
        }
        MethodFlavor::Moan => {
            Some(DESC_MOAN[dice.randint0(DESC_MOAN.len() as i32) as usize].to_string())
        }
        MethodFlavor::None => None,
    }
}
