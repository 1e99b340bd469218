//! Seasons and the effect keywords each one favors

use chrono::{Datelike, NaiveDate};

/// Calendar season used for the seasonal slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Season {
    /// March to May
    Spring,
    /// June to August
    Summer,
    /// September to November
    Autumn,
    /// December to February
    Winter,
}

impl Season {
    /// Season for a month number (1-12)
    pub fn from_month(month: u32) -> Self {
        match month {
            3..=5 => Season::Spring,
            6..=8 => Season::Summer,
            9..=11 => Season::Autumn,
            _ => Season::Winter,
        }
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self::from_month(date.month())
    }

    /// Effect keywords a seasonal pick must contain one of
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Season::Spring => &["养肝", "疏肝", "补血", "柔肝"],
            Season::Summer => &["清热", "解暑", "利湿", "生津"],
            Season::Autumn => &["润肺", "养阴", "生津", "润燥"],
            Season::Winter => &["温阳", "补肾", "驱寒", "补阳"],
        }
    }

    /// Reason shown with the seasonal pick
    pub fn reason(self) -> &'static str {
        match self {
            Season::Spring => "春季养肝正当时，疏肝补血宜常用",
            Season::Summer => "夏季暑热易伤津，清热解暑是良方",
            Season::Autumn => "秋燥伤肺需滋润，养阴润肺保健康",
            Season::Winter => "冬季寒邪易伤阳，温补肾阳御寒冷",
        }
    }
}
