pub mod debug;
mod hash;
pub mod record;
pub mod table;

pub use record::Record;
pub use table::{HashTable, TableError, DEFAULT_CAPACITY};

pub type Result<T> = std::result::Result<T, TableError>;

// Flip on with `--features trace` to see every insert and render.
pub const DEBUG: bool = cfg!(feature = "trace");

#[macro_export]
macro_rules! debugln {
     ($($arg:tt)*) => {
         {
             if $crate::DEBUG {
                println!($($arg)*);
             }
         }
    };
}

#[macro_export]
macro_rules! debug {
     ($($arg:tt)*) => {
         {
            if $crate::DEBUG {
                print!($($arg)*);
            }
         }
    };
}
