mod app;
mod clipboard;
mod config;
mod export;
mod input;
mod palette;
mod tui;

use anyhow::Context;
use clap::{Parser, Subcommand};
use palette::{HexColor, Palette};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

#[derive(Debug, Parser)]
#[command(name = "coloraid", version, about = "Random color palettes in the terminal")]
struct Cli {
    /// Override config file path.
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the interactive TUI (default).
    Tui,
    /// Print a random palette to stdout (headless).
    Generate {
        /// Number of colors; defaults to the configured palette size.
        #[arg(long)]
        size: Option<usize>,
        /// Seed for a reproducible palette.
        #[arg(long)]
        seed: Option<u64>,
        /// Print JSON instead of one color per line.
        #[arg(long)]
        json: bool,
    },
    /// Write a palette PNG without opening the TUI.
    Export {
        #[arg(long)]
        size: Option<usize>,
        #[arg(long)]
        seed: Option<u64>,
        /// Explicit colors (#rrggbb, at most 9); replaces the random palette.
        #[arg(long = "color", value_name = "HEX", conflicts_with_all = ["size", "seed"])]
        colors: Vec<HexColor>,
        /// Output directory; defaults to the configured export dir.
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = config::load(cli.config.as_deref()).context("load config")?;
    let command = cli.command.unwrap_or(Command::Tui);

    init_logging(&cfg, matches!(command, Command::Tui)).context("init logging")?;

    match command {
        Command::Tui => {
            let mut terminal = tui::TerminalGuard::enter(cfg.ui.mouse).context("init terminal")?;
            let mut app = app::App::new(cfg, Box::new(clipboard::SystemClipboard::new()));
            app.run(terminal.terminal_mut()).await?;
        }
        Command::Generate { size, seed, json } => {
            let palette = make_palette(size.unwrap_or(cfg.palette.size), seed);
            if json {
                println!("{}", serde_json::to_string_pretty(&palette)?);
            } else {
                for color in palette.colors() {
                    println!("{color}");
                }
            }
        }
        Command::Export {
            size,
            seed,
            colors,
            out,
        } => {
            let palette = if colors.is_empty() {
                make_palette(size.unwrap_or(cfg.palette.size), seed)
            } else {
                palette_from_colors(colors)?
            };
            let mut export_cfg = cfg.export.clone();
            if let Some(dir) = out {
                export_cfg.dir = dir;
            }
            let path = export::export_png(&palette, &export_cfg).context("export palette")?;
            println!("{}", path.display());
        }
    }

    Ok(())
}

fn make_palette(size: usize, seed: Option<u64>) -> Palette {
    let size = size.clamp(1, palette::MAX_SIZE);
    match seed {
        Some(seed) => Palette::random_with(size, &mut StdRng::seed_from_u64(seed)),
        None => Palette::random(size),
    }
}

fn palette_from_colors(colors: Vec<HexColor>) -> anyhow::Result<Palette> {
    if colors.len() > palette::MAX_SIZE {
        anyhow::bail!(
            "too many colors: {} given, at most {} allowed",
            colors.len(),
            palette::MAX_SIZE
        );
    }
    Ok(Palette::from_colors(colors))
}

/// The TUI owns stdout, so its logs go to a file in the data dir. Headless
/// commands log to stderr.
fn init_logging(cfg: &config::Config, to_file: bool) -> anyhow::Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .with_max_level(cfg.log_level());

    if to_file {
        let dir = &cfg.paths.data_dir;
        std::fs::create_dir_all(dir).with_context(|| format!("create dir {}", dir.display()))?;
        let path = dir.join("coloraid.log");
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("open {}", path.display()))?;
        builder.with_ansi(false).with_writer(Mutex::new(file)).init();
    } else {
        builder.with_writer(std::io::stderr).init();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_colors_conflict_with_random_flags() {
        let with = |extra: &[&'static str]| {
            let mut args = vec!["coloraid", "export", "--color", "#a1b2c3"];
            args.extend_from_slice(extra);
            Cli::try_parse_from(args)
        };
        assert!(with(&["--size", "3"]).is_err());
        assert!(with(&["--seed", "1"]).is_err());

        let cli = with(&["--color", "000000"]).unwrap();
        let Some(Command::Export { colors, .. }) = cli.command else {
            panic!("expected export command");
        };
        assert_eq!(colors, vec![HexColor::new(0xa1, 0xb2, 0xc3), HexColor::new(0, 0, 0)]);
    }

    #[test]
    fn test_palette_from_colors_caps_size() {
        let nine = vec![HexColor::new(1, 2, 3); palette::MAX_SIZE];
        assert_eq!(palette_from_colors(nine).unwrap().len(), palette::MAX_SIZE);

        let ten = vec![HexColor::new(1, 2, 3); palette::MAX_SIZE + 1];
        assert!(palette_from_colors(ten).is_err());
    }
}
