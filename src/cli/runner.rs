//! CLI runner
//!
//! Drives the viewer from stdin and renders snapshots to stdout. This file
//! is the presentation layer: it owns the "scrollable view" (the terminal)
//! and hands the core a scroll capability that just prints a marker.

use super::commands::{Cli, Commands, OutputFormat};
use crate::error::Result;
use crate::fetch::{FetcherConfig, PageFetcher};
use crate::pager::Pager;
use crate::scroll::ScrollTarget;
use crate::viewer::{NavEvent, Snapshot, Viewer};
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};

/// Scroll capability for a dumb terminal: emit a visual break
struct TerminalScroll;

impl ScrollTarget for TerminalScroll {
    fn scroll_to_top(&mut self, _animated: bool) {
        println!("\n========================================");
    }
}

/// Executes CLI commands
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner from parsed arguments
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the selected command
    pub async fn run(&self) -> Result<()> {
        match self.cli.command {
            Commands::Fetch { page } => self.run_fetch(page).await,
            Commands::Browse { page } => self.run_browse(page).await,
        }
    }

    fn fetcher(&self) -> Result<PageFetcher> {
        let config = FetcherConfig::builder()
            .base_url(self.cli.base_url.as_str())
            .timeout(Duration::from_secs(self.cli.timeout))
            .build();
        PageFetcher::with_config(config)
    }

    async fn run_fetch(&self, page: u32) -> Result<()> {
        let fetcher = self.fetcher()?;
        let fetched = fetcher.fetch_page(page).await?;
        match self.cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&fetched.results)
                    .map_err(|e| crate::error::Error::decode(e.to_string()))?);
            }
            OutputFormat::Plain => {
                println!(
                    "page {page}/{} ({} records)",
                    fetched.info.pages,
                    fetched.len()
                );
                for character in &fetched.results {
                    print_record(character);
                }
            }
        }
        Ok(())
    }

    async fn run_browse(&self, page: u32) -> Result<()> {
        let mut viewer = Viewer::starting_at(self.fetcher()?, Pager::starting_at(page));
        viewer.mount_scroll(Box::new(TerminalScroll));

        viewer.start();
        viewer.settle().await?;
        self.render(&viewer.snapshot());

        let stdin = BufReader::new(tokio::io::stdin());
        let mut lines = stdin.lines();

        println!("\n[n]ext, [p]rev, [r]efresh, [q]uit");
        while let Some(line) = lines.next_line().await? {
            let before = viewer.page();
            match line.trim() {
                "n" | "next" => viewer.handle(NavEvent::Next),
                "p" | "prev" => viewer.handle(NavEvent::Prev),
                "r" | "refresh" => viewer.refresh(),
                "q" | "quit" => break,
                "" => continue,
                other => {
                    println!("unknown command: {other}");
                    continue;
                }
            }
            // A Prev at the floor dispatches nothing; don't wait for it
            if viewer.page() == before && line.trim().starts_with('p') {
                println!("already at the first page");
                continue;
            }
            viewer.settle().await?;
            self.render(&viewer.snapshot());
            println!("\n[n]ext, [p]rev, [r]efresh, [q]uit");
        }

        Ok(())
    }

    fn render(&self, snapshot: &Snapshot) {
        // Error takes display priority over the (possibly stale) list
        if let Some(error) = &snapshot.error {
            println!("error: {error}");
            println!("(navigate or refresh to retry)");
            return;
        }

        match self.cli.format {
            OutputFormat::Json => match serde_json::to_string_pretty(&snapshot.records) {
                Ok(json) => println!("{json}"),
                Err(e) => println!("error: failed to render records: {e}"),
            },
            OutputFormat::Plain => {
                let pages = snapshot
                    .total_pages
                    .map_or_else(|| "?".to_string(), |p| p.to_string());
                println!("page {}/{} ({} records)", snapshot.page, pages, snapshot.records.len());
                for character in &snapshot.records {
                    print_record(character);
                }
            }
        }
    }
}

fn print_record(character: &crate::entity::Character) {
    println!(
        "  [{}] {} - {} {} - from {}, seen at {}",
        character.id,
        character.name,
        character.status,
        character.species,
        character.origin.name,
        character.location.name
    );
}
