//! CLI command messaging
//!
//! Tagged, colored status lines for the one-shot subcommands.

const LIGHT_RED: &str = "\x1b[1;91m";
const RED: &str = "\x1b[1;31m";
const GREEN: &str = "\x1b[1;32m";
const RESET: &str = "\x1b[0m";

fn print_tagged(color: &str, tag: &str, title: &str, details: &str) {
    if details.is_empty() {
        println!("{}[{}]{} {}", color, tag, RESET, title);
    } else {
        println!("{}[{}]{} {}\t {}", color, tag, RESET, title, details);
    }
}

pub fn print_warn(title: &str, details: &str) {
    print_tagged(LIGHT_RED, "WARN", title, details);
}

/// Errors go to stderr, with optional details on a second line.
pub fn print_error(title: &str, details: Option<&str>) {
    eprintln!("{}[ERROR]{} {}", RED, RESET, title);
    if let Some(details) = details {
        eprintln!("{}[ERROR]{} Details: {}", RED, RESET, details);
    }
}

pub fn print_success(title: &str, details: &str) {
    print_tagged(GREEN, "SUCCESS", title, details);
}

#[macro_export]
macro_rules! print_cmd_warn {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_warn($title, &format!($($details)*))
    };
}

#[macro_export]
macro_rules! print_cmd_error {
    ($title:expr) => {
        $crate::cli_messages::print_error($title, None)
    };
    ($title:expr, $details:expr) => {
        $crate::cli_messages::print_error($title, Some($details))
    };
}

#[macro_export]
macro_rules! print_cmd_success {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_success($title, &format!($($details)*))
    };
}
