use serde::{Deserialize, Serialize};

/// Insets applied around a chart's plotting area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margin {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

impl Margin {
    /// Same inset on every side.
    pub const fn uniform(v: f64) -> Self {
        Self {
            top: v,
            left: v,
            bottom: v,
            right: v,
        }
    }
}

impl Default for Margin {
    /// 40px on every side.
    fn default() -> Self {
        Self::uniform(40.0)
    }
}

impl std::str::FromStr for Margin {
    type Err = String;

    /// Parse either a single value (`"20"`) or four comma-separated values
    /// in `top,left,bottom,right` order.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<f64> = s
            .split(',')
            .map(|p| p.trim().parse::<f64>())
            .collect::<Result<_, _>>()
            .map_err(|e| format!("invalid margin `{s}`: {e}"))?;
        match parts.as_slice() {
            [v] => Ok(Self::uniform(*v)),
            [top, left, bottom, right] => Ok(Self {
                top: *top,
                left: *left,
                bottom: *bottom,
                right: *right,
            }),
            _ => Err(format!(
                "invalid margin `{s}`: expected 1 or 4 values (top,left,bottom,right)"
            )),
        }
    }
}

/// One timestamped observation (e.g. a friendship or an event).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimestampedRecord {
    /// Unix time in seconds.
    pub timestamp: i64,
    /// Display name, when the source provides one. Not used for bucketing.
    #[serde(default)]
    pub name: Option<String>,
}

impl TimestampedRecord {
    pub fn new(timestamp: i64) -> Self {
        Self {
            timestamp,
            name: None,
        }
    }
}

/// Number of records falling into one calendar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct YearCount {
    pub year: i32,
    pub count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn margin_parses_one_or_four_values() {
        assert_eq!("12".parse::<Margin>().unwrap(), Margin::uniform(12.0));
        let m: Margin = "1, 2,3,4".parse().unwrap();
        assert_eq!(
            m,
            Margin {
                top: 1.0,
                left: 2.0,
                bottom: 3.0,
                right: 4.0
            }
        );
        assert!("1,2".parse::<Margin>().is_err());
        assert!("a".parse::<Margin>().is_err());
    }

    #[test]
    fn record_name_is_optional_in_json() {
        let r: TimestampedRecord = serde_json::from_str(r#"{"timestamp": 1546300800}"#).unwrap();
        assert_eq!(r, TimestampedRecord::new(1_546_300_800));
    }
}
