use std::fmt;

/// A contact: the name it is stored under and a phone number.
///
/// The number is the only part that ever changes, when the same name is inserted again.
#[derive(Debug, PartialEq, Clone)]
pub struct Record {
    pub name: String,
    pub number: String,
}

impl Record {
    pub fn new(name: &str, number: &str) -> Record {
        Record {
            name: name.to_string(),
            number: number.to_string(),
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.number)
    }
}
