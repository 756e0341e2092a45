use crate::debugln;
use crate::table::HashTable;
use itertools::Itertools;
use std::fmt;
use strum_macros::{Display, EnumIter};

// The pieces a bucket line is built from, e.g.
//   Index 9: John: 555-1234 -> Mary: 222-1111 -> None
#[derive(Debug, Copy, Clone, Display, EnumIter, PartialEq)]
pub enum ChainMarker {
    #[strum(to_string = "Empty")]
    Empty,
    #[strum(to_string = " -> ")]
    Link,
    #[strum(to_string = "None")]
    End,
}

/// One bucket as a single line, without the trailing newline.
pub fn render_bucket(table: &HashTable, index: usize) -> String {
    let mut line = format!("Index {}: ", index);
    let mut records = table.bucket(index).peekable();
    if records.peek().is_none() {
        line.push_str(&ChainMarker::Empty.to_string());
    } else {
        // every record, including the last, is followed by a link marker before the end marker
        for record in records {
            line.push_str(&format!("{}{}", record, ChainMarker::Link));
        }
        line.push_str(&ChainMarker::End.to_string());
    }
    line
}

/// Every bucket in index order, one line each.
pub fn render_table(table: &HashTable) -> String {
    let lines = (0..table.capacity()).map(|idx| render_bucket(table, idx)).join("\n");
    lines + "\n"
}

impl HashTable {
    pub fn render_bucket(&self, index: usize) -> String {
        render_bucket(self, index)
    }

    pub fn render(&self) -> String {
        render_table(self)
    }

    pub fn print(&self) {
        debugln!("== {} buckets, {} records ==", self.capacity(), self.len());
        print!("{}", self.render());
    }
}

impl fmt::Display for HashTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}
