// src/commands/mod.rs
//! Command handlers for the Larder CLI

mod check;
mod generate;

pub use check::cmd_check;
pub use generate::cmd_generate;

use larder::CatalogScan;

/// Print every validation error as `path: message`, followed by a summary
fn print_report(scan: &CatalogScan) {
    for error in &scan.errors {
        println!("  {}", error);
    }
    println!(
        "\n[FAILED] {} validation error(s) in {} of {} recipe file(s)",
        scan.errors.len(),
        scan.rejected_files(),
        scan.files_scanned
    );
}
