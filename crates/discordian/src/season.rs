//! The five Discordian seasons.

use std::fmt;

use crate::holyday::Holyday;

/// One of the five 73-day seasons of the Discordian year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Season {
    Chaos,
    Discord,
    Confusion,
    Bureaucracy,
    TheAftermath,
}

impl Season {
    /// All seasons in calendar order.
    pub const ALL: [Season; 5] = [
        Season::Chaos,
        Season::Discord,
        Season::Confusion,
        Season::Bureaucracy,
        Season::TheAftermath,
    ];

    /// Returns the season at 0-based position `index`, or `None` if `index >= 5`.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Returns the 0-based position of the season within the year.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns the full season name, e.g. `"The Aftermath"`.
    pub fn name(self) -> &'static str {
        match self {
            Season::Chaos => "Chaos",
            Season::Discord => "Discord",
            Season::Confusion => "Confusion",
            Season::Bureaucracy => "Bureaucracy",
            Season::TheAftermath => "The Aftermath",
        }
    }

    /// Returns the three-letter abbreviation, e.g. `"Afm"`.
    pub fn short_name(self) -> &'static str {
        match self {
            Season::Chaos => "Chs",
            Season::Discord => "Dsc",
            Season::Confusion => "Cfn",
            Season::Bureaucracy => "Bcy",
            Season::TheAftermath => "Afm",
        }
    }

    /// Returns the apostle holyday celebrated on day 5 of this season.
    pub fn apostle_holyday(self) -> Holyday {
        Holyday::APOSTLE[self.index()]
    }

    /// Returns the season holyday celebrated on day 50 of this season.
    pub fn flux_holyday(self) -> Holyday {
        Holyday::FLUX[self.index()]
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
