//! The calendar event wire type.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::category::Category;

/// A calendar entry with a date range and category.
///
/// Field names follow the JSON wire shape calendar frontends expect:
/// `allDay`, `extendedProps`, `backgroundColor`, `borderColor`. Dates are
/// day-granularity and serialize as `YYYY-MM-DD`. The id is absent on
/// freshly drafted events; the agenda assigns one on insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub all_day: bool,
    pub extended_props: ExtendedProps,
    pub background_color: String,
    pub border_color: String,
}

/// Extra event properties nested under `extendedProps` on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtendedProps {
    #[serde(rename = "type")]
    pub kind: Category,
}

impl Event {
    /// Draft a new all-day event with fill and border colors derived from
    /// the category. The id is left unset.
    pub fn new(
        title: impl Into<String>,
        start: NaiveDate,
        end: NaiveDate,
        category: Category,
    ) -> Self {
        let color = category.color();
        Event {
            id: None,
            title: title.into(),
            start,
            end,
            all_day: true,
            extended_props: ExtendedProps { kind: category },
            background_color: color.to_string(),
            border_color: color.to_string(),
        }
    }

    pub fn category(&self) -> Category {
        self.extended_props.kind
    }
}
