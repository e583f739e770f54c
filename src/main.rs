use colored::*;
use std::process;

mod cli;
mod yaml;

fn main() {
    #[cfg(unix)]
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }

    match cli::run() {
        Ok(()) => process::exit(0),
        Err(e) => {
            eprintln!("{}: {}", "Error".bright_red(), e);
            process::exit(1);
        }
    }
}
