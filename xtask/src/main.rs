//! Build automation tasks for the rover-kit project.
//!
//! Run with: `cargo xtask <command>`

use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitCode};

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build automation for the rover-kit project", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run all checks: build lib + demos for the board, run host tests, docs
    CheckAll,
    /// Build the library for a board
    Build {
        #[arg(long, default_value = "pico1")]
        board: Board,
    },
    /// Build a demo program for the rover board (Pico 1)
    Demo {
        /// Demo name (e.g., behaviors)
        name: String,
    },
    /// Run host-side tests (no hardware needed)
    Test,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum Board {
    Pico1,
    Pico2,
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Board::Pico1 => write!(f, "pico1"),
            Board::Pico2 => write!(f, "pico2"),
        }
    }
}

impl Board {
    fn target(self) -> &'static str {
        match self {
            Board::Pico1 => "thumbv6m-none-eabi",
            Board::Pico2 => "thumbv8m.main-none-eabihf",
        }
    }

    fn features(self) -> &'static str {
        match self {
            Board::Pico1 => "defmt,pico1,arm",
            Board::Pico2 => "defmt,pico2,arm",
        }
    }
}

const DEMOS: &[&str] = &["behaviors", "sonar_range", "rainbow_pixel"];

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::CheckAll => check_all(),
        Commands::Build { board } => build_lib(board),
        Commands::Demo { name } => build_demo(&name, Board::Pico1),
        Commands::Test => run_host_tests(),
    }
}

fn check_all() -> ExitCode {
    let workspace_root = workspace_root();
    let board = Board::Pico1;
    let target = board.target();
    let features = board.features();

    println!("{}", "==> Building library...".cyan());
    if !run_command(Command::new("cargo").current_dir(&workspace_root).args([
        "build",
        "--lib",
        "--target",
        target,
        "--features",
        features,
        "--no-default-features",
    ])) {
        return ExitCode::FAILURE;
    }

    println!("\n{}", "==> Building demos...".cyan());
    for demo in DEMOS {
        println!("  {}", format!("- {demo}").bright_black());
        if !run_command(Command::new("cargo").current_dir(&workspace_root).args([
            "build",
            "--bin",
            demo,
            "--target",
            target,
            "--features",
            features,
            "--no-default-features",
        ])) {
            return ExitCode::FAILURE;
        }
    }

    println!("\n{}", "==> Running host tests...".cyan());
    if run_host_tests_in(&workspace_root) == ExitCode::FAILURE {
        return ExitCode::FAILURE;
    }

    println!("\n{}", "==> Building documentation...".cyan());
    if !run_command(Command::new("cargo").current_dir(&workspace_root).args([
        "doc",
        "--target",
        target,
        "--no-deps",
        "--features",
        features,
        "--no-default-features",
    ])) {
        return ExitCode::FAILURE;
    }

    println!("\n{}", "==> All checks passed!".green().bold());
    ExitCode::SUCCESS
}

fn build_lib(board: Board) -> ExitCode {
    let workspace_root = workspace_root();
    println!(
        "{}",
        format!("==> Building library ({board})...").cyan()
    );
    if run_command(Command::new("cargo").current_dir(&workspace_root).args([
        "build",
        "--lib",
        "--target",
        board.target(),
        "--features",
        board.features(),
        "--no-default-features",
    ])) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn build_demo(name: &str, board: Board) -> ExitCode {
    let workspace_root = workspace_root();
    println!(
        "{}",
        format!("==> Building demo {name} ({board})...").cyan()
    );
    if run_command(Command::new("cargo").current_dir(&workspace_root).args([
        "build",
        "--bin",
        name,
        "--target",
        board.target(),
        "--features",
        board.features(),
        "--no-default-features",
    ])) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn run_host_tests() -> ExitCode {
    let workspace_root = workspace_root();
    println!("{}", "==> Running host tests...".cyan());
    run_host_tests_in(&workspace_root)
}

fn run_host_tests_in(workspace_root: &Path) -> ExitCode {
    let host_target = host_target();
    match host_target.as_deref() {
        Some(target) => {
            println!(
                "  {}",
                format!("Using host target: {target}").bright_black()
            );
        }
        None => {
            println!(
                "{}",
                "  Unable to detect host target; relying on cargo default.".bright_black()
            );
        }
    }

    let mut test_cmd = Command::new("cargo");
    test_cmd.current_dir(workspace_root).arg("test");

    if let Some(target) = host_target {
        test_cmd.arg("--target").arg(target);
    }

    test_cmd.args(["--no-default-features", "--features", "host"]);

    if run_command(&mut test_cmd) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn workspace_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("xtask has a parent directory")
        .to_path_buf()
}

fn host_target() -> Option<String> {
    let output = Command::new("rustc").arg("-vV").output().ok()?;
    if !output.status.success() {
        return None;
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    for line in stdout.lines() {
        if let Some(host) = line.strip_prefix("host: ") {
            return Some(host.trim().to_string());
        }
    }
    None
}

fn run_command(cmd: &mut Command) -> bool {
    match cmd.status() {
        Ok(status) => status.success(),
        Err(e) => {
            eprintln!("{}", format!("Failed to execute command: {e}").red());
            false
        }
    }
}
