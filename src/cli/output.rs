//! Output formatting and progress bars for CLI

use indicatif::{ProgressBar, ProgressStyle};

use crate::identifiers::NodeId;

/// Create a progress bar for a sweep
pub fn create_sweep_progress(total_runs: u64) -> ProgressBar {
    let pb = ProgressBar::new(total_runs);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} runs ({msg})")
    {
        pb.set_style(style.progress_chars("=>-"));
    }
    pb
}

/// Create a spinner for single-tree work
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a subsection header
pub fn print_subsection(title: &str) {
    println!("\n{title}");
    println!("{}", "-".repeat(40));
}

/// Format a number with thousands separators
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i.is_multiple_of(3) {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    result
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// `1 -> 2 -> 4`
pub fn format_path(path: &[NodeId]) -> String {
    path.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" -> ")
}

/// `[1, 2, 4]`
pub fn format_node_list(nodes: &[NodeId]) -> String {
    let items: Vec<String> = nodes.iter().map(ToString::to_string).collect();
    format!("[{}]", items.join(", "))
}

/// Bound or cost, with `inf` for "no solution yet".
pub fn format_bound(bound: Option<u64>) -> String {
    bound.map_or_else(|| "inf".to_string(), |b| b.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_numbers_with_separators() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1_234_567), "1,234,567");
    }

    #[test]
    fn formats_paths() {
        let path = [NodeId::new(1), NodeId::new(2), NodeId::new(4)];
        assert_eq!(format_path(&path), "1 -> 2 -> 4");
        assert_eq!(format_node_list(&path), "[1, 2, 4]");
        assert_eq!(format_bound(None), "inf");
        assert_eq!(format_bound(Some(3)), "3");
    }
}
