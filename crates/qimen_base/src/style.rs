//! Board style and dun polarity.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::QimenError;
use crate::topology::Direction;

/// How the outer layers move.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoardStyle {
    /// Zhuanpan: layers turn around the eight outer palaces, the center lodges in Kun.
    #[default]
    #[serde(alias = "zhuan")]
    Rotary,
    /// Feipan: layers fly through palaces 1-9 in numeric order, center included.
    #[serde(alias = "fei")]
    Flying,
}

impl BoardStyle {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rotary => "rotary",
            Self::Flying => "flying",
        }
    }
}

impl Display for BoardStyle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BoardStyle {
    type Err = QimenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rotary" | "zhuan" => Ok(Self::Rotary),
            "flying" | "fei" => Ok(Self::Flying),
            _ => Err(QimenError::UnknownSymbol {
                kind: "board style",
                label: s.to_string(),
            }),
        }
    }
}

/// Dun polarity: yang boards count forward, yin boards backward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DunType {
    #[default]
    Yang,
    Yin,
}

impl DunType {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Yang => "yang",
            Self::Yin => "yin",
        }
    }

    /// Direction in which yang/yin boards deal symbols.
    pub const fn direction(self) -> Direction {
        match self {
            Self::Yang => Direction::Forward,
            Self::Yin => Direction::Backward,
        }
    }
}

impl Display for DunType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DunType {
    type Err = QimenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "yang" | "阳" => Ok(Self::Yang),
            "yin" | "阴" => Ok(Self::Yin),
            _ => Err(QimenError::UnknownSymbol {
                kind: "dun type",
                label: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_style_aliases() {
        assert_eq!("zhuan".parse::<BoardStyle>().unwrap(), BoardStyle::Rotary);
        assert_eq!("Flying".parse::<BoardStyle>().unwrap(), BoardStyle::Flying);
        assert_eq!("fei".parse::<BoardStyle>().unwrap(), BoardStyle::Flying);
        assert!("spiral".parse::<BoardStyle>().is_err());
    }

    #[test]
    fn parse_dun() {
        assert_eq!("YIN".parse::<DunType>().unwrap(), DunType::Yin);
        assert_eq!("阳".parse::<DunType>().unwrap(), DunType::Yang);
    }

    #[test]
    fn dun_direction() {
        assert_eq!(DunType::Yang.direction(), Direction::Forward);
        assert_eq!(DunType::Yin.direction(), Direction::Backward);
    }

    #[test]
    fn display_round_trips_through_parse() {
        for style in [BoardStyle::Rotary, BoardStyle::Flying] {
            assert_eq!(style.to_string().parse::<BoardStyle>().unwrap(), style);
        }
        for dun in [DunType::Yang, DunType::Yin] {
            assert_eq!(dun.to_string().parse::<DunType>().unwrap(), dun);
        }
    }
}
