use std::fmt;

use super::store::Record;

#[derive(Debug, PartialEq, PartialOrd, Clone)]
pub(crate) struct Course {
    id: String,
    title: String,
    /// Credit hours used as the weight in the GPA. Expected to be positive but not checked.
    credit: f64,
}

impl Course {
    pub fn new(id: impl Into<String>, title: impl Into<String>, credit: f64) -> Course {
        Course {
            id: id.into(),
            title: title.into(),
            credit,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn credit(&self) -> f64 {
        self.credit
    }
}

impl Record for Course {
    fn id(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {} | Title: {} | Credit: {}",
            self.id, self.title, self.credit
        )
    }
}
