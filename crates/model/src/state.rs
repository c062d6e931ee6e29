use serde::{Deserialize, Serialize};
use std::fmt;

use crate::match_label;

/// Registration state or union territory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum State {
    Delhi,
    Haryana,
    Maharashtra,
    Karnataka,
    Telangana,
    TamilNadu,
    UttarPradesh,
    Gujarat,
    Rajasthan,
    Punjab,
    WestBengal,
    Kerala,
    MadhyaPradesh,
    Bihar,
    Odisha,
    AndhraPradesh,
    Jharkhand,
    Chhattisgarh,
    Uttarakhand,
    HimachalPradesh,
    Assam,
    Goa,
    Chandigarh,
}

impl State {
    pub const ALL: [State; 23] = [
        Self::Delhi,
        Self::Haryana,
        Self::Maharashtra,
        Self::Karnataka,
        Self::Telangana,
        Self::TamilNadu,
        Self::UttarPradesh,
        Self::Gujarat,
        Self::Rajasthan,
        Self::Punjab,
        Self::WestBengal,
        Self::Kerala,
        Self::MadhyaPradesh,
        Self::Bihar,
        Self::Odisha,
        Self::AndhraPradesh,
        Self::Jharkhand,
        Self::Chhattisgarh,
        Self::Uttarakhand,
        Self::HimachalPradesh,
        Self::Assam,
        Self::Goa,
        Self::Chandigarh,
    ];

    /// State whose tax table is used when a name is not recognized.
    pub const DEFAULT: State = State::Maharashtra;

    pub fn label(self) -> &'static str {
        match self {
            Self::Delhi => "Delhi",
            Self::Haryana => "Haryana",
            Self::Maharashtra => "Maharashtra",
            Self::Karnataka => "Karnataka",
            Self::Telangana => "Telangana",
            Self::TamilNadu => "Tamil Nadu",
            Self::UttarPradesh => "Uttar Pradesh",
            Self::Gujarat => "Gujarat",
            Self::Rajasthan => "Rajasthan",
            Self::Punjab => "Punjab",
            Self::WestBengal => "West Bengal",
            Self::Kerala => "Kerala",
            Self::MadhyaPradesh => "Madhya Pradesh",
            Self::Bihar => "Bihar",
            Self::Odisha => "Odisha",
            Self::AndhraPradesh => "Andhra Pradesh",
            Self::Jharkhand => "Jharkhand",
            Self::Chhattisgarh => "Chhattisgarh",
            Self::Uttarakhand => "Uttarakhand",
            Self::HimachalPradesh => "Himachal Pradesh",
            Self::Assam => "Assam",
            Self::Goa => "Goa",
            Self::Chandigarh => "Chandigarh",
        }
    }

    /// Strict lookup by display label (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        match_label(name, &Self::ALL, Self::label)
    }
}

impl Default for State {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Unknown names resolve to [`State::DEFAULT`].
impl From<&str> for State {
    fn from(s: &str) -> Self {
        Self::from_name(s).unwrap_or_default()
    }
}

impl From<String> for State {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<State> for &'static str {
    fn from(state: State) -> Self {
        state.label()
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_lookup() {
        assert_eq!(State::from_name("tamil nadu"), Some(State::TamilNadu));
        assert_eq!(State::from_name("Atlantis"), None);
        assert_eq!(State::from("Atlantis"), State::Maharashtra);
    }

    #[test]
    fn test_labels_unique() {
        for (i, a) in State::ALL.iter().enumerate() {
            for b in &State::ALL[i + 1..] {
                assert_ne!(a.label(), b.label());
            }
        }
    }
}
