//! Per-day schedules, holidays and highlights supplied by the caller
use crate::calendar::{format_date_key, parse_date_key, CalendarDate, InvalidDateKeyError};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// One schedule badge shown on a day
#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct ScheduleItem {
    /// Identifier, unique among the schedules of a single day
    pub id: String,
    /// Text shown on the badge, e.g. `10:00~18:00`
    pub label: String,
    /// Badge background color; the front end's default badge color is used
    /// when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl ScheduleItem {
    pub fn new<I: Into<String>, L: Into<String>>(id: I, label: L) -> ScheduleItem {
        ScheduleItem {
            id: id.into(),
            label: label.into(),
            color: None,
        }
    }

    pub fn color<S: Into<String>>(mut self, color: S) -> ScheduleItem {
        self.color = Some(color.into());
        self
    }
}

/// Everything attached to a single day.  All fields are optional in the
/// serialized form.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct DayData {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub schedules: Vec<ScheduleItem>,
    /// Name of a holiday or anniversary falling on this day
    #[serde(skip_serializing_if = "Option::is_none")]
    pub holiday: Option<String>,
    /// Whether to draw the day with a highlighted background
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub highlight: bool,
}

impl DayData {
    pub fn has_schedule(&self) -> bool {
        !self.schedules.is_empty()
    }
}

/// A mapping from date keys (see [`format_date_key`]) to [`DayData`]
///
/// Keys are stored in canonical `YYYY-MM-DD` form.  When deserializing, keys
/// are accepted in any form that [`parse_date_key`] understands and are
/// normalized; two keys naming the same day are an error.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(try_from = "HashMap<String, DayData>")]
pub struct CalendarData(HashMap<String, DayData>);

impl CalendarData {
    pub fn new() -> CalendarData {
        CalendarData::default()
    }

    pub fn from_json(s: &str) -> Result<CalendarData, DataError> {
        let data = serde_json::from_str::<CalendarData>(s)?;
        data.check_schedule_ids();
        Ok(data)
    }

    /// Load a JSON object mapping date keys to day data from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<CalendarData, DataError> {
        let path = path.as_ref();
        let src = fs::read_to_string(path).map_err(|source| DataError::Read {
            path: path.to_owned(),
            source,
        })?;
        let data = CalendarData::from_json(&src)?;
        tracing::info!(path = %path.display(), days = data.len(), "Loaded calendar data");
        Ok(data)
    }

    pub fn get<D: CalendarDate>(&self, date: D) -> Option<&DayData> {
        self.0.get(&format_date_key(date))
    }

    /// Look up a day by date key.  The key must be in canonical form.
    pub fn get_key(&self, key: &str) -> Option<&DayData> {
        self.0.get(key)
    }

    pub fn insert<D: CalendarDate>(&mut self, date: D, day: DayData) -> Option<DayData> {
        self.0.insert(format_date_key(date), day)
    }

    pub fn remove<D: CalendarDate>(&mut self, date: D) -> Option<DayData> {
        self.0.remove(&format_date_key(date))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::collections::hash_map::Iter<'_, String, DayData> {
        self.0.iter()
    }

    fn check_schedule_ids(&self) {
        for (key, day) in &self.0 {
            let mut seen = HashSet::new();
            for item in &day.schedules {
                if !seen.insert(item.id.as_str()) {
                    tracing::warn!(date = %key, id = %item.id, "Duplicate schedule ID");
                }
            }
        }
    }
}

impl TryFrom<HashMap<String, DayData>> for CalendarData {
    type Error = DataError;

    fn try_from(raw: HashMap<String, DayData>) -> Result<CalendarData, DataError> {
        let mut data = HashMap::with_capacity(raw.len());
        for (key, day) in raw {
            let canonical = format_date_key(parse_date_key(&key)?);
            if canonical != key {
                tracing::debug!(%key, %canonical, "Normalized date key");
            }
            if data.contains_key(&canonical) {
                return Err(DataError::DuplicateDate(canonical));
            }
            data.insert(canonical, day);
        }
        Ok(CalendarData(data))
    }
}

impl<D: CalendarDate> FromIterator<(D, DayData)> for CalendarData {
    fn from_iter<I: IntoIterator<Item = (D, DayData)>>(iter: I) -> CalendarData {
        CalendarData(
            iter.into_iter()
                .map(|(date, day)| (format_date_key(date), day))
                .collect(),
        )
    }
}

impl<'a> IntoIterator for &'a CalendarData {
    type Item = (&'a String, &'a DayData);
    type IntoIter = std::collections::hash_map::Iter<'a, String, DayData>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse calendar data")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Key(#[from] InvalidDateKeyError),
    #[error("more than one entry for {0}")]
    DuplicateDate(String),
}
