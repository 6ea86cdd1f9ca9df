use respath_core::SourceResolver;
use std::process::ExitCode;

pub fn run(
    resolver: &SourceResolver,
    filenames: &[String],
    json: bool,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let matches = resolver.collect_manifest(filenames);

    if json {
        println!("{}", serde_json::to_string_pretty(&matches)?);
        return Ok(ExitCode::SUCCESS);
    }

    if matches.is_empty() {
        println!("No manifest files found.");
    }
    for m in &matches {
        println!(";; {}", m.url().display());
        println!("{}", m.text.trim_end());
    }
    Ok(ExitCode::SUCCESS)
}
