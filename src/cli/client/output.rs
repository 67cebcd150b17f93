//! Console rendering helpers for the client

use colored::Colorize;
use serde::Serialize;

const RULE_WIDTH: usize = 60;

pub fn rule(ch: char) -> String {
    ch.to_string().repeat(RULE_WIDTH)
}

/// Banner for a top-level mode
pub fn banner(title: &str) {
    println!("\n{}", rule('='));
    println!("{}", title.bold());
    println!("{}\n", rule('='));
}

/// Heading for one step of a workflow
pub fn step(number: usize, title: &str) {
    println!("\n{} {}", format!("Step {}:", number).cyan().bold(), title);
    println!("{}", rule('-'));
}

/// Pretty-print a serializable value with an optional title
pub fn print_json<T: Serialize>(value: &T, title: Option<&str>) {
    if let Some(title) = title {
        println!("\n{}", rule('='));
        println!("{}", title.bold());
        println!("{}", rule('='));
    }

    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}\n", json),
        Err(e) => println!("{} {}\n", "Could not render response:".red(), e),
    }
}

pub fn success(message: &str) {
    println!("{} {}", "✔".green().bold(), message.green());
}

pub fn failure(message: &str) {
    println!("{} {}", "✖".red().bold(), message.red());
}
