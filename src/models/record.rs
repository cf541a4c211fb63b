use crate::utils::date::format_date;
use crate::utils::time::decimal_to_clock;
use chrono::NaiveDate;

/// One day of worked hours.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub id: i64,         // ⇔ registros.id (INTEGER PRIMARY KEY AUTOINCREMENT)
    pub date: NaiveDate, // ⇔ registros.Data (TEXT "DD/MM/YYYY")
    pub hours: f64,      // ⇔ registros.Horas (FLOAT, may be negative)
}

impl Record {
    pub fn date_str(&self) -> String {
        format_date(&self.date)
    }

    pub fn hours_str(&self) -> String {
        decimal_to_clock(self.hours)
    }
}
