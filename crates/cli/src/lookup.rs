use respath_core::SourceResolver;
use std::path::Path;
use std::process::ExitCode;

/// Exit status when a name resolves nowhere
const NOT_FOUND: u8 = 1;

pub fn resolve(
    resolver: &SourceResolver,
    name: &str,
    json: bool,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let Some(descriptor) = resolver.resolve(name) else {
        if json {
            println!("null");
        } else {
            eprintln!("{name}: not found");
        }
        return Ok(ExitCode::from(NOT_FOUND));
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&descriptor)?);
    } else {
        println!("{descriptor}");
    }
    Ok(ExitCode::SUCCESS)
}

pub fn cat(
    resolver: &SourceResolver,
    name: &str,
    json: bool,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    match resolver.load(name)? {
        Some(content) if json => {
            println!("{}", serde_json::to_string_pretty(&content)?);
            Ok(ExitCode::SUCCESS)
        }
        Some(content) => {
            print!("{}", content.text);
            Ok(ExitCode::SUCCESS)
        }
        None => {
            eprintln!("{name}: not found");
            Ok(ExitCode::from(NOT_FOUND))
        }
    }
}

pub fn ls(
    resolver: &SourceResolver,
    archive: &Path,
    prefix: &str,
    json: bool,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let entries = resolver.list_archive_entries(archive, prefix)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        for entry in entries {
            println!("{entry}");
        }
    }
    Ok(ExitCode::SUCCESS)
}
