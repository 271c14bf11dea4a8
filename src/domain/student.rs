use std::fmt;

use super::store::Record;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Student {
    id: String,
    name: String,
}

impl Student {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Student {
        Student {
            id: id.into(),
            name: name.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Record for Student {
    fn id(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ID: {} | Name: {}", self.id, self.name)
    }
}
