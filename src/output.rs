//! Table and JSON output formatting for CLI commands.

use tabled::{Table, Tabled};

use tabletmgr_core::types::hook::HookResult;

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// JSON output
    Json,
}

/// One hook result rendered as a table row
#[derive(Debug, Tabled)]
struct HookResultRow {
    #[tabled(rename = "Exit Status")]
    exit_status: String,
    #[tabled(rename = "Stdout")]
    stdout: String,
    #[tabled(rename = "Stderr")]
    stderr: String,
}

impl From<&HookResult> for HookResultRow {
    fn from(result: &HookResult) -> Self {
        Self {
            exit_status: result.exit_status.to_string(),
            stdout: result.stdout.trim_end().to_string(),
            stderr: result.stderr.trim_end().to_string(),
        }
    }
}

/// Print a hook result in the selected format
pub fn print_hook_result(result: &HookResult, format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            let table = Table::new([HookResultRow::from(result)]).to_string();
            println!("{}", table);
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(result).unwrap_or_else(|_| "{}".to_string());
            println!("{}", json);
        }
    }
}

/// Print a success message
pub fn print_success(msg: &str) {
    println!("✓ {}", msg);
}

/// Print an error message
pub fn print_error(msg: &str) {
    eprintln!("✗ {}", msg);
}
