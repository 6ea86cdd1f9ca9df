//! Bridge to a host-provided completion engine for the interactive prompt.

/// Host completion engine: candidates for a partial expression.
pub trait CompletionEngine {
    fn complete(&self, partial: &str) -> Vec<String>;
}

impl<F> CompletionEngine for F
where
    F: Fn(&str) -> Vec<String>,
{
    fn complete(&self, partial: &str) -> Vec<String> {
        self(partial)
    }
}

/// Ask `engine` to complete `matched` (the trailing part of `line`) and
/// return full replacement lines. Empty candidates are dropped.
pub fn complete_line(line: &str, matched: &str, engine: &dyn CompletionEngine) -> Vec<String> {
    let head = line
        .len()
        .checked_sub(matched.len())
        .and_then(|n| line.get(..n))
        .unwrap_or("");

    engine
        .complete(matched)
        .into_iter()
        .filter(|c| !c.is_empty())
        .map(|c| format!("{head}{c}"))
        .collect()
}
