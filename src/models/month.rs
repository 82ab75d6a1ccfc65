use chrono::Datelike;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) enum Month {
    Jan,
    Feb,
    Mar,
    Apr,
    May,
    Jun,
    Jul,
    Aug,
    Sep,
    Oct,
    Nov,
    Dec,
}

impl Month {
    pub(crate) fn all() -> &'static [Month] {
        &[
            Self::Jan,
            Self::Feb,
            Self::Mar,
            Self::Apr,
            Self::May,
            Self::Jun,
            Self::Jul,
            Self::Aug,
            Self::Sep,
            Self::Oct,
            Self::Nov,
            Self::Dec,
        ]
    }

    /// Token written to the ledger's `month` column.
    pub(crate) fn label(&self) -> &'static str {
        match self {
            Self::Jan => "Jan",
            Self::Feb => "Feb",
            Self::Mar => "Mar",
            Self::Apr => "Apr",
            Self::May => "May",
            Self::Jun => "Jun",
            Self::Jul => "Jul",
            Self::Aug => "Aug",
            Self::Sep => "Sep",
            Self::Oct => "Oct",
            Self::Nov => "Nov",
            Self::Dec => "Dec",
        }
    }

    /// 1-based calendar number.
    pub(crate) fn number(&self) -> u32 {
        *self as u32 + 1
    }

    pub(crate) fn from_number(n: u32) -> Option<Self> {
        n.checked_sub(1)
            .and_then(|i| Self::all().get(i as usize))
            .copied()
    }

    /// Accepts the ledger token, the full English name, `1`..`12`, or `N월`.
    pub(crate) fn parse(s: &str) -> Option<Self> {
        let trimmed = s.trim();
        let numeric = trimmed.strip_suffix('월').unwrap_or(trimmed);
        if let Ok(n) = numeric.parse::<u32>() {
            return Self::from_number(n);
        }
        let lower = trimmed.to_lowercase();
        Self::all().iter().copied().find(|m| {
            let label = m.label().to_lowercase();
            lower == label || (lower.len() > 3 && full_name(*m).to_lowercase() == lower)
        })
    }

    pub(crate) fn current() -> Self {
        Self::from_number(chrono::Local::now().month()).unwrap_or(Self::Jan)
    }

    pub(crate) fn next(&self) -> Self {
        Self::from_number(self.number() % 12 + 1).unwrap_or(Self::Jan)
    }

    pub(crate) fn prev(&self) -> Self {
        Self::from_number((self.number() + 10) % 12 + 1).unwrap_or(Self::Dec)
    }
}

fn full_name(month: Month) -> &'static str {
    match month {
        Month::Jan => "January",
        Month::Feb => "February",
        Month::Mar => "March",
        Month::Apr => "April",
        Month::May => "May",
        Month::Jun => "June",
        Month::Jul => "July",
        Month::Aug => "August",
        Month::Sep => "September",
        Month::Oct => "October",
        Month::Nov => "November",
        Month::Dec => "December",
    }
}

impl std::fmt::Display for Month {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
