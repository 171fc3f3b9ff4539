use anyhow::Result;
use clap::{ArgAction, Parser};
use display_mode::filter::Criteria;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "display-mode",
    about = "List and switch the main display's resolution and refresh rate",
    long_about = "List and switch the main display's resolution and refresh rate.\n\n\
        Modes matching every given filter are listed best first. When exactly one \
        mode matches it becomes the new display mode.",
    version,
    disable_help_flag = true
)]
struct Cli {
    /// Logical width in points
    #[arg(short, long)]
    width: Option<u64>,
    /// Logical height in points
    #[arg(short, long)]
    height: Option<u64>,
    /// Width in physical pixels
    #[arg(long = "px-width")]
    pixel_width: Option<u64>,
    /// Height in physical pixels
    #[arg(long = "px-height")]
    pixel_height: Option<u64>,
    /// Minimum refresh rate in Hz (a mode within 1 Hz below still matches)
    #[arg(short, long)]
    rate: Option<f64>,
    /// Mode index as printed in a listing
    #[arg(short, long, allow_negative_numbers = true)]
    mode: Option<i64>,
    /// Print the matching mode instead of applying it
    #[arg(short = 'n', long)]
    dry_run: bool,
    /// Output debug info
    #[arg(short, long)]
    verbose: bool,
    /// Print help
    #[arg(long, action = ArgAction::Help)]
    help: Option<bool>,
}

impl Cli {
    const fn criteria(&self) -> Criteria {
        Criteria {
            index: self.mode,
            width: self.width,
            height: self.height,
            pixel_width: self.pixel_width,
            pixel_height: self.pixel_height,
            rate: self.rate,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("Parsed arguments: {cli:?}");
    run(&cli)
}

#[cfg(target_os = "macos")]
fn run(cli: &Cli) -> Result<()> {
    use display_mode::macos::CoreGraphics;
    use display_mode::select::select;

    let outcome = select(&CoreGraphics, &cli.criteria(), cli.dry_run, &mut std::io::stdout())?;
    tracing::debug!(?outcome, "Done");
    Ok(())
}

#[cfg(not(target_os = "macos"))]
fn run(cli: &Cli) -> Result<()> {
    tracing::debug!(criteria = ?cli.criteria(), "No display backend for this platform");
    anyhow::bail!("Unsupported platform: display modes can only be changed on macOS")
}
