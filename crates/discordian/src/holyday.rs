//! Discordian holydays.

use std::fmt;

use crate::date::DiscordianDate;

/// Label used both as the weekday and the holyday of the intercalary day.
pub const ST_TIBS_DAY: &str = "St. Tib's Day";

/// Day of each season on which its apostle holyday falls.
pub const APOSTLE_DAY: u8 = 5;

/// Day of each season on which its season holyday falls.
pub const FLUX_DAY: u8 = 50;

/// A Discordian holyday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Holyday {
    Mungday,
    Mojoday,
    Syaday,
    Zaraday,
    Maladay,
    Chaoflux,
    Discoflux,
    Confuflux,
    Bureflux,
    Afflux,
    StTibsDay,
}

impl Holyday {
    /// Apostle holydays, indexed by season.
    pub const APOSTLE: [Holyday; 5] = [
        Holyday::Mungday,
        Holyday::Mojoday,
        Holyday::Syaday,
        Holyday::Zaraday,
        Holyday::Maladay,
    ];

    /// Season holydays, indexed by season.
    pub const FLUX: [Holyday; 5] = [
        Holyday::Chaoflux,
        Holyday::Discoflux,
        Holyday::Confuflux,
        Holyday::Bureflux,
        Holyday::Afflux,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Holyday::Mungday => "Mungday",
            Holyday::Mojoday => "Mojoday",
            Holyday::Syaday => "Syaday",
            Holyday::Zaraday => "Zaraday",
            Holyday::Maladay => "Maladay",
            Holyday::Chaoflux => "Chaoflux",
            Holyday::Discoflux => "Discoflux",
            Holyday::Confuflux => "Confuflux",
            Holyday::Bureflux => "Bureflux",
            Holyday::Afflux => "Afflux",
            Holyday::StTibsDay => ST_TIBS_DAY,
        }
    }
}

impl fmt::Display for Holyday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returns the holyday celebrated on `date`, if any.
///
/// St. Tib's Day is its own holyday. Otherwise day 5 of a season is that
/// season's apostle holyday and day 50 its season holyday.
pub fn holyday(date: &DiscordianDate) -> Option<Holyday> {
    if date.is_st_tibs_day() {
        return Some(Holyday::StTibsDay);
    }
    match date.day_of_season()? {
        APOSTLE_DAY => Some(date.season().apostle_holyday()),
        FLUX_DAY => Some(date.season().flux_holyday()),
        _ => None,
    }
}
