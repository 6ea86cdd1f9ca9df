use std::process::ExitCode;

fn main() -> ExitCode {
    match respath_cli::run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
