use chaintable::{HashTable, DEFAULT_CAPACITY};
use itertools::Itertools;
use std::env;
use std::error::Error;
use std::process;

const DEMO_CONTACTS: [(&str, &str); 3] = [
    ("John", "555-1234"),
    ("Rebecca", "111-555-0002"),
    ("Mary", "222-1111"),
];
const UPDATED_NUMBER: &str = "999-9999";

#[derive(Debug, PartialEq)]
pub struct Config {
    pub capacity: usize,
    pub contacts: Vec<(String, String)>,
}

impl Config {
    // contacts [CAPACITY] [NAME=NUMBER ...]
    pub fn new(args: &[String]) -> Result<Config, &'static str> {
        let mut rest = args.iter().skip(1).peekable();
        let mut capacity = DEFAULT_CAPACITY;
        if let Some(first) = rest.peek() {
            if !first.contains('=') {
                capacity = first.parse().map_err(|_| "capacity must be a positive integer")?;
                rest.next();
            }
        }
        let mut contacts = Vec::new();
        for arg in rest {
            let mut parts = arg.splitn(2, '=');
            match (parts.next(), parts.next()) {
                (Some(name), Some(number)) => contacts.push((name.to_string(), number.to_string())),
                _ => return Err("contacts must be given as NAME=NUMBER"),
            }
        }
        if contacts.is_empty() {
            contacts = DEMO_CONTACTS
                .iter()
                .map(|(name, number)| (name.to_string(), number.to_string()))
                .collect();
        }
        Ok(Config { capacity, contacts })
    }
}

fn run(cfg: Config) -> Result<(), Box<dyn Error>> {
    let mut table = HashTable::new(cfg.capacity)?;
    for (name, number) in cfg.contacts.iter() {
        table.insert(name, number);
    }
    table.print();

    let (first, _) = &cfg.contacts[0];
    print!("{}", lookup_and_update(&mut table, first));
    Ok(())
}

// Search for `name`, overwrite its number, search again, then summarise the longest chain.
fn lookup_and_update(table: &mut HashTable, name: &str) -> String {
    let mut out = format!("\nSearch for {}:\n{}\n", name, report(table, name));

    out.push_str(&format!("\nDuplicate test (update {}):\n", name));
    table.insert(name, UPDATED_NUMBER);
    out.push_str(&format!("{}\n", report(table, name)));

    let busiest = (0..table.capacity()).max_by_key(|idx| table.chain_len(*idx)).unwrap_or(0);
    out.push_str(&format!(
        "\nLongest chain: index {} [{}]\n",
        busiest,
        table.bucket(busiest).map(|r| &r.name).join(", ")
    ));
    out
}

fn report(table: &HashTable, name: &str) -> String {
    match table.search(name) {
        Some(record) => record.to_string(),
        None => "None".to_string(),
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let cfg = Config::new(&args).unwrap_or_else(|err| {
        eprintln!("Error parsing arguments: {}\n", err);
        process::exit(1)
    });
    if let Err(err) = run(cfg) {
        eprintln!("Error running demo: {}", err);
        process::exit(1)
    }
}
