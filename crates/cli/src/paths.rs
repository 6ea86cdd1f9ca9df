use respath_core::{LocationKind, SourceResolver};
use serde::Serialize;
use std::process::ExitCode;
use tabled::{Table, Tabled};

#[derive(Tabled, Serialize)]
struct LocationRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Kind")]
    kind: String,
    #[tabled(rename = "Path")]
    path: String,
    #[tabled(rename = "Exists")]
    exists: bool,
}

pub fn run(resolver: &SourceResolver, json: bool) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let rows: Vec<LocationRow> = resolver
        .registry()
        .iter()
        .enumerate()
        .map(|(index, location)| LocationRow {
            index,
            kind: match location.kind {
                LocationKind::Archive => "jar".to_string(),
                LocationKind::Directory => "dir".to_string(),
            },
            path: location.path.display().to_string(),
            exists: location.path.exists(),
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else if rows.is_empty() {
        println!("No source locations registered.");
    } else {
        println!("{}", Table::new(rows));
    }
    Ok(ExitCode::SUCCESS)
}
