//! Master data rows.

use serde::Serialize;

use super::{first_text, text_or, Normalize, Record};

const AREA_ID: &[&str] = &["id", "areaid", "area_id"];
const AREA_NAME: &[&str] = &["name", "areaname", "area_name"];

pub const UNKNOWN_AREA: &str = "Unknown Area";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Area {
    pub id: Option<String>,
    pub name: String,
}

impl Normalize for Area {
    const PAYLOAD: &'static [&'static str] = &["areas", "data"];

    fn from_record(record: &Record) -> Self {
        Self {
            id: first_text(record, AREA_ID),
            name: text_or(record, AREA_NAME, UNKNOWN_AREA),
        }
    }
}
