//! `aacboard` command-line entry point

fn main() -> anyhow::Result<()> {
    aacboard::cli::run_cli()
}
