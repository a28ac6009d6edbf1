//! Enumerated field types

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use super::Value;

macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $wire:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            /// All variants in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Returns the wire name of this variant.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }

            /// Parses a wire name, ignoring case.
            pub fn parse(raw: &str) -> Option<Self> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str().eq_ignore_ascii_case(raw.trim()))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl From<$name> for Value {
            fn from(v: $name) -> Self {
                Value::Text(v.as_str().to_string())
            }
        }
    };
}

wire_enum! {
    /// Eye and hair colors.
    Color {
        Green => "GREEN",
        Red => "RED",
        White => "WHITE",
        Brown => "BROWN",
    }
}

wire_enum! {
    /// Nationalities.
    Country {
        UnitedKingdom => "UNITED_KINGDOM",
        Germany => "GERMANY",
        India => "INDIA",
    }
}

wire_enum! {
    /// Lab work difficulty, ordered from easiest to hardest.
    Difficulty {
        VeryEasy => "VERY_EASY",
        Easy => "EASY",
        Insane => "INSANE",
        Hopeless => "HOPELESS",
    }
}

impl Difficulty {
    /// Position in the difficulty scale, `0` being the easiest.
    pub fn rank(&self) -> u8 {
        match self {
            Difficulty::VeryEasy => 0,
            Difficulty::Easy => 1,
            Difficulty::Insane => 2,
            Difficulty::Hopeless => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names() {
        assert_eq!(
            serde_json::to_string(&Country::UnitedKingdom).unwrap(),
            "\"UNITED_KINGDOM\""
        );
        let d: Difficulty = serde_json::from_str("\"VERY_EASY\"").unwrap();
        assert_eq!(d, Difficulty::VeryEasy);
    }

    #[test]
    fn test_parse_ignores_case() {
        assert_eq!(Color::parse("brown"), Some(Color::Brown));
        assert_eq!(Color::parse("purple"), None);
    }

    #[test]
    fn test_difficulty_rank_follows_scale() {
        let ranks: Vec<u8> = Difficulty::ALL.iter().map(Difficulty::rank).collect();
        assert_eq!(ranks, [0, 1, 2, 3]);
    }
}
