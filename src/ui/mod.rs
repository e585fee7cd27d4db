//! Leveled status output for installer steps
//!
//! Every step prints a status line before or after the action so failures are
//! traceable to the exact step (info/success/warning/error).

use console::Style;

/// Print an informational status line
pub fn info(message: &str) {
    println!("{} {}", Style::new().cyan().bold().apply_to("[INFO]"), message);
}

/// Print a success status line
pub fn success(message: &str) {
    println!("{} {}", Style::new().green().bold().apply_to("[OK]"), message);
}

/// Print a warning status line
pub fn warning(message: &str) {
    println!(
        "{} {}",
        Style::new().yellow().bold().apply_to("[WARN]"),
        message
    );
}

/// Print an error status line
pub fn error(message: &str) {
    eprintln!("{} {}", Style::new().red().bold().apply_to("[ERROR]"), message);
}

/// Print a single pass/fail checklist line
pub fn check(label: &str, ok: bool) {
    if ok {
        println!("  {} {}", Style::new().green().apply_to("✓"), label);
    } else {
        println!("  {} {}", Style::new().red().apply_to("✗"), label);
    }
}

/// Print a section heading
pub fn heading(title: &str) {
    println!("\n{}", Style::new().bold().apply_to(title));
}
