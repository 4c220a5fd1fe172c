//! Pipe mode: one JSON request per stdin line, one JSON reply per stdout line.

use std::io::{self, BufRead, Write};

use benchplot_executor::Executor;

/// Serve requests from `input` until EOF.
///
/// Returns the process exit code: 1 if any request failed.
pub fn run_pipe<R: BufRead, W: Write>(executor: &Executor, input: R, mut output: W) -> i32 {
    let mut had_error = false;

    for line in input.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                eprintln!("(error) {}", e);
                return 1;
            }
        };
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let reply = executor.handle_json(trimmed);
        had_error |= !reply.is_success();
        let encoded = serde_json::to_string(&reply).unwrap_or_else(|_| "null".to_string());
        if writeln!(output, "{}", encoded).is_err() {
            return 1;
        }
    }

    i32::from(had_error)
}

/// [`run_pipe`] over the process stdin/stdout.
pub fn run_stdio(executor: &Executor) -> i32 {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_pipe(executor, stdin.lock(), stdout.lock())
}
