//! Which physical camera the controller opens next.

use serde::{Deserialize, Serialize};

/// Physical camera orientation.
///
/// Exactly one facing is selected at a time; the selection is mutated only
/// by the switch-camera action and read only when opening a device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Facing {
    /// World-facing camera.
    Back,
    /// User-facing camera.
    Front,
}

impl Facing {
    /// Returns the opposite facing.
    pub fn toggled(self) -> Self {
        match self {
            Facing::Back => Facing::Front,
            Facing::Front => Facing::Back,
        }
    }
}

impl Default for Facing {
    fn default() -> Self {
        Facing::Back
    }
}

impl std::fmt::Display for Facing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Facing::Back => write!(f, "back"),
            Facing::Front => write!(f, "front"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trips() {
        assert_eq!(Facing::Back.toggled(), Facing::Front);
        assert_eq!(Facing::Back.toggled().toggled(), Facing::Back);
    }

    #[test]
    fn test_default_is_back() {
        assert_eq!(Facing::default(), Facing::Back);
    }
}
