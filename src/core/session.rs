use crate::store::RecordStore;
use chrono::NaiveDate;

/// The date currently being worked on and the storage unit backing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionContext {
    pub selected_date: NaiveDate,
    pub file_name: String,
}

impl SessionContext {
    pub fn new<S: RecordStore>(selected_date: NaiveDate, store: &S) -> Self {
        Self {
            selected_date,
            file_name: store.locate(selected_date),
        }
    }

    pub fn date_str(&self) -> String {
        self.selected_date.format("%Y-%m-%d").to_string()
    }
}
