use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use photobook_core::{BookOptions, calculate_statistics};
use std::path::{Path, PathBuf};
use tokio::io::{AsyncBufReadExt, BufReader};

mod logger;
mod session;

use session::{apply, parse_command, render_view};

#[derive(Parser)]
#[command(name = "photobook", about = "Photo book reader CLI", version)]
struct Cli {
    /// Log engine decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the default book configuration
    Init {
        /// Output JSON file
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Show statistics for a book
    Stats {
        /// Book config JSON file
        #[arg(short, long)]
        config: PathBuf,
    },

    /// Print the view after jumping to a page
    Show {
        /// Book config JSON file
        #[arg(short, long)]
        config: PathBuf,

        /// Viewport width in pixels (decides spread or single layout)
        #[arg(short, long, default_value = "1280")]
        width: f32,

        /// Page to jump to, parsed the same way as the page field
        #[arg(short, long)]
        page: Option<String>,
    },

    /// Interactive session driven by commands on stdin
    Read {
        /// Book config JSON file
        #[arg(short, long)]
        config: PathBuf,

        /// Initial viewport width in pixels
        #[arg(short, long, default_value = "1280")]
        width: f32,
    },
}

async fn load_options(config: &Path) -> Result<BookOptions> {
    BookOptions::load(config)
        .await
        .with_context(|| format!("Failed to load {}", config.display()))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::StderrLogger::init(cli.verbose)?;

    match cli.command {
        Commands::Init { output } => {
            let options = BookOptions::default();
            options.save(&output).await?;
            println!(
                "Wrote default book ({} pages) → {}",
                options.page_count,
                output.display()
            );
        }

        Commands::Stats { config } => {
            let options = load_options(&config).await?;
            let stats = calculate_statistics(&options)?;
            println!("Book Statistics:");
            println!("  Pages: {}", stats.pages);
            println!("  Spread positions: {}", stats.spread_positions);
            println!("  Single-page positions: {}", stats.single_positions);
            println!(
                "  Last page: {}",
                if stats.unpaired_last {
                    "alone"
                } else {
                    "paired"
                }
            );
            println!("  Bookmarks: {}", stats.bookmarks);
            println!(
                "  Pages covered by bookmarks: {}",
                stats.pages_covered_by_bookmarks
            );
            println!("  Uncovered pages: {}", stats.uncovered_pages);
        }

        Commands::Show {
            config,
            width,
            page,
        } => {
            let options = load_options(&config).await?;
            let viewport = options.viewport_mode(width);
            let mut engine = options.build()?.into_engine(&viewport);
            if let Some(page) = page {
                engine.jump_to(page);
            }
            print!("{}", render_view(&engine));
        }

        Commands::Read { config, width } => {
            let options = load_options(&config).await?;
            let viewport = options.viewport_mode(width);
            let mut engine = options.build()?.into_engine(&viewport);
            print!("{}", render_view(&engine));

            let mut lines = BufReader::new(tokio::io::stdin()).lines();
            while let Some(line) = lines.next_line().await? {
                let command = match parse_command(&line) {
                    Ok(Some(command)) => command,
                    Ok(None) => continue,
                    Err(e) => {
                        eprintln!("{e:#}");
                        continue;
                    }
                };
                match apply(command, &mut engine, &viewport) {
                    Ok(true) => print!("{}", render_view(&engine)),
                    Ok(false) => break,
                    Err(e) => eprintln!("{e:#}"),
                }
            }
        }
    }

    Ok(())
}
