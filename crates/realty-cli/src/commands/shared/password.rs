use std::io::{BufRead, IsTerminal};

use anyhow::Context;

use crate::cli::subcommands::PasswordArgs;

/// The password from `--password`, a hidden prompt, or the first line of piped stdin.
pub fn resolve(args: &PasswordArgs) -> anyhow::Result<String> {
    if let Some(password) = &args.password {
        return Ok(password.clone());
    }
    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        return dialoguer::Password::new()
            .with_prompt("Password")
            .interact()
            .context("failed to read password from terminal");
    }
    first_line(stdin.lock())
}

fn first_line(mut reader: impl BufRead) -> anyhow::Result<String> {
    let mut line = String::new();
    reader
        .read_line(&mut line)
        .context("failed to read password from stdin")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
