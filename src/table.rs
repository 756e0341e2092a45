use crate::hash::char_sum;
use crate::record::Record;
use crate::Result;
use crate::{debug, debugln};
use std::fmt;

pub const DEFAULT_CAPACITY: usize = 10;

#[derive(PartialEq, Debug)]
pub enum TableError {
    ZeroCapacity,
}
impl std::error::Error for TableError {}
impl std::fmt::Display for TableError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            TableError::ZeroCapacity => write!(f, "Hash table capacity must be at least 1"),
        }
    }
}

type Link = Option<Box<Entry>>;

// A node in a bucket chain. The key is what gets hashed and compared; it is always equal to
// value.name, but kept apart so the chain walk never has to look inside the record.
struct Entry {
    key: String,
    value: Record,
    next: Link,
}

impl Entry {
    fn new(key: &str, number: &str) -> Entry {
        Entry {
            key: key.to_string(),
            value: Record::new(key, number),
            next: None,
        }
    }
}

// A fixed number of buckets, each the head of a singly linked chain. Entries are appended at
// the tail, so walking a chain from its head visits keys in the order they were first inserted.
//
// No resize: the bucket a key lands in never changes for the life of the table, and `print`
// shows exactly that layout. Many collisions under a small capacity make chains (and
// insert/search) grow linearly.
pub struct HashTable {
    buckets: Vec<Link>,
    len: usize,
}

impl HashTable {
    pub fn new(capacity: usize) -> Result<HashTable> {
        if capacity == 0 {
            return Err(TableError::ZeroCapacity);
        }
        Ok(HashTable::with_buckets(capacity))
    }

    fn with_buckets(capacity: usize) -> HashTable {
        let mut buckets = Vec::with_capacity(capacity);
        buckets.resize_with(capacity, || None);
        HashTable { buckets, len: 0 }
    }

    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Number of distinct keys stored.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn hash(&self, key: &str) -> usize {
        char_sum(key, self.capacity())
    }

    /// Store `number` under `key`.
    ///
    /// A key already in its chain has its number overwritten in place and keeps its position;
    /// a new key is appended to the tail of its bucket's chain. Never fails.
    pub fn insert(&mut self, key: &str, number: &str) {
        let index = self.hash(key);
        let mut link = &mut self.buckets[index];
        let mut depth = 0;
        debug!("insert {:?} -> bucket {}: ", key, index);
        while let Some(entry) = link {
            if entry.key == key {
                debugln!("update at depth {}", depth);
                entry.value.number = number.to_string();
                return;
            }
            link = &mut entry.next;
            depth += 1;
        }
        debugln!("append at depth {}", depth);
        *link = Some(Box::new(Entry::new(key, number)));
        self.len += 1;
    }

    /// Look up the record stored under `key`. Absence is `None`, not an error.
    pub fn search(&self, key: &str) -> Option<&Record> {
        self.chain(self.hash(key)).find(|entry| entry.key == key).map(|entry| &entry.value)
    }

    /// Records in bucket `index`, head first. An index outside the table yields nothing.
    pub fn bucket(&self, index: usize) -> impl Iterator<Item = &Record> {
        self.chain(index).map(|entry| &entry.value)
    }

    pub fn chain_len(&self, index: usize) -> usize {
        self.chain(index).count()
    }

    fn chain(&self, index: usize) -> Chain<'_> {
        Chain {
            next: self.buckets.get(index).and_then(|head| head.as_deref()),
        }
    }
}

impl Default for HashTable {
    fn default() -> Self {
        HashTable::with_buckets(DEFAULT_CAPACITY)
    }
}

// Chains are unlinked one entry at a time; the default drop would recurse once per entry and
// can run out of stack on a long chain.
impl Drop for HashTable {
    fn drop(&mut self) {
        for head in self.buckets.iter_mut() {
            let mut link = head.take();
            while let Some(mut entry) = link {
                link = entry.next.take();
            }
        }
    }
}

impl fmt::Debug for HashTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buckets = f.debug_map();
        for idx in 0..self.capacity() {
            buckets.entry(&idx, &self.bucket(idx).collect::<Vec<_>>());
        }
        buckets.finish()
    }
}

struct Chain<'a> {
    next: Option<&'a Entry>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a Entry;

    fn next(&mut self) -> Option<&'a Entry> {
        self.next.map(|entry| {
            self.next = entry.next.as_deref();
            entry
        })
    }
}
