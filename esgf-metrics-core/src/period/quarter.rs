use chrono::{DateTime, Datelike, TimeZone};
use serde::{Serialize, Serializer};
use std::fmt;

/// First calendar month of the fiscal year (July).
pub const FISCAL_YEAR_START_MONTH: u32 = 7;

/// A calendar quarter. Orders chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Quarter {
    year: i32,
    quarter: u8,
}

impl Quarter {
    pub fn new(year: i32, quarter: u8) -> Option<Self> {
        (1..=4).contains(&quarter).then_some(Self { year, quarter })
    }

    pub fn containing<Tz: TimeZone>(ts: &DateTime<Tz>) -> Self {
        Self {
            year: ts.year(),
            quarter: ((ts.month0() / 3) + 1) as u8,
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn quarter(&self) -> u8 {
        self.quarter
    }

    pub fn next(&self) -> Self {
        if self.quarter == 4 {
            Self {
                year: self.year + 1,
                quarter: 1,
            }
        } else {
            Self {
                year: self.year,
                quarter: self.quarter + 1,
            }
        }
    }

    /// Fiscal quarter for a July–June fiscal year named after the calendar
    /// year it ends in: July–September 2019 is FY2020 Q1.
    pub fn fiscal(&self) -> FiscalQuarter {
        let first_month = u32::from(self.quarter - 1) * 3 + 1;
        let shifted = (first_month + 12 - FISCAL_YEAR_START_MONTH) % 12;
        let fiscal_year = if first_month >= FISCAL_YEAR_START_MONTH {
            self.year + 1
        } else {
            self.year
        };

        FiscalQuarter {
            fiscal_year,
            quarter: (shifted / 3 + 1) as u8,
        }
    }
}

impl fmt::Display for Quarter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-Q{}", self.year, self.quarter)
    }
}

impl Serialize for Quarter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FiscalQuarter {
    pub fiscal_year: i32,
    pub quarter: u8,
}

impl fmt::Display for FiscalQuarter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FY{} Q{}", self.fiscal_year, self.quarter)
    }
}
