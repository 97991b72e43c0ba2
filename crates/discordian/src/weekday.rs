//! The five days of the Discordian week.

use std::fmt;

/// A day of the 5-day Discordian week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Weekday {
    Sweetmorn,
    Boomtime,
    Pungenday,
    PricklePrickle,
    SettingOrange,
}

impl Weekday {
    /// All weekdays in order, starting with the first day of every year.
    pub const ALL: [Weekday; 5] = [
        Weekday::Sweetmorn,
        Weekday::Boomtime,
        Weekday::Pungenday,
        Weekday::PricklePrickle,
        Weekday::SettingOrange,
    ];

    /// Returns the weekday at 0-based position `index`, or `None` if `index >= 5`.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Returns the 0-based position within the week.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns the weekday name, e.g. `"Prickle-Prickle"`.
    pub fn name(self) -> &'static str {
        match self {
            Weekday::Sweetmorn => "Sweetmorn",
            Weekday::Boomtime => "Boomtime",
            Weekday::Pungenday => "Pungenday",
            Weekday::PricklePrickle => "Prickle-Prickle",
            Weekday::SettingOrange => "Setting Orange",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
