//! Case-insensitive substring search over cached records.

use crate::model::Student;

/// Records that can be filtered by a free-text query.
pub trait Searchable {
    /// The field values a query is matched against.
    fn search_fields(&self) -> Vec<&str>;

    /// Returns `true` if any field contains `query`, ignoring case.
    ///
    /// An empty query matches everything.
    fn matches(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        self.search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

impl Searchable for Student {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.student_number.as_str(),
            self.first_name.as_str(),
            self.last_name.as_str(),
            self.section_code.as_deref().unwrap_or(""),
        ]
    }
}
