//! Build script for vlanport-cli.
//!
//! This script generates a man page at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("vlanport")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Allocate device ports on VLANs")
        .long_about(
            "Command-line tool that serves primary and redundant port requests \
             from an inventory of VLANs and devices",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Read configuration from this file instead of the user config")
                .value_name("PATH")
                .global(true)
                .env("VLANPORT_CONFIG"),
        )
        .arg(
            Arg::new("delimiter")
                .long("delimiter")
                .help("Field delimiter for all inputs and the output")
                .value_name("CHAR")
                .global(true),
        )
        .subcommands(vec![
            Command::new("run")
                .about("Serve allocation requests and write the reservations")
                .long_about(
                    "Build the inventory from an availability file, serve every request in \
                     order, and write one row per reserved port",
                ),
            Command::new("inventory")
                .about("Show the inventory built from an availability file")
                .long_about("Display VLANs and devices with free ports, in allocation order"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("vlanport.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
