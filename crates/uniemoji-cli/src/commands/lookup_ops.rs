use uniemoji_engine::lookup::LookupError;
use uniemoji_engine::{Candidate, CharacterLookup, TableLookup};

pub fn open_table(table_file: &str) -> Result<TableLookup, LookupError> {
    TableLookup::from_path(table_file)
}

pub fn info(table_file: &str) {
    let table = die!(open_table(table_file), "Error opening table {table_file}: {}");
    println!("{table_file}: {} entries", table.len());
}

pub fn lookup(table_file: &str, query: &str, prefixes: &[String], n: usize, json: bool) {
    let table = die!(open_table(table_file), "Error opening table {table_file}: {}");
    let candidates = find(&table, query, prefixes, n);
    if json {
        let out = die!(
            serde_json::to_string_pretty(&candidates),
            "Error encoding JSON: {}"
        );
        println!("{out}");
        return;
    }
    if candidates.is_empty() {
        println!("(no candidates)");
        return;
    }
    for (i, c) in candidates.iter().enumerate() {
        println!("#{:>2}: {}", i + 1, c.display);
    }
}

pub fn find(
    lookup: &dyn CharacterLookup,
    query: &str,
    prefixes: &[String],
    n: usize,
) -> Vec<Candidate> {
    let mut candidates = lookup.find_characters(query, prefixes);
    candidates.truncate(n);
    candidates
}
