//! Command handler implementations
//!
//! This module contains the implementation of all CLI commands.

use crate::cli::output::render_palette;
use crate::cli::{Args, Commands};
use crate::core::config::{get_config_path, Config};
use crate::palette::{
    Catalog, CatalogFile, CommandPalette, Item, ItemId, PaletteEvent, PaletteOptions,
    QUICK_SELECT_SLOTS,
};
use anyhow::{Context, Result};
use log::{debug, info};
use std::cell::RefCell;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Run the command selected on the command line
pub fn run_command(args: &Args, config: &Config) -> Result<()> {
    match &args.command {
        Some(Commands::Query {
            catalog,
            match_subtitle,
            all,
            query,
        }) => run_query(config, catalog, *match_subtitle, *all, query),
        Some(Commands::Demo) => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            run_demo(config, stdin.lock(), &mut stdout.lock())
        }
        Some(Commands::ShowConfig) => {
            show_config(config);
            Ok(())
        }
        Some(Commands::GenerateConfig { output }) => generate_config_file(output.clone()),
        None => {
            println!("No command given. Run with --help to see the available commands.");
            Ok(())
        }
    }
}

// =============================================================================
// query
// =============================================================================

/// Build a palette over a catalog file; activating an item just logs it
pub fn palette_from_file(path: &Path, options: PaletteOptions) -> Result<CommandPalette> {
    let file = CatalogFile::load(path)?;

    let to_items = |entries: &[crate::palette::CatalogEntry]| -> Vec<Item> {
        entries
            .iter()
            .map(|entry| {
                let title = entry.title.clone();
                entry
                    .to_item()
                    .action(move || info!("selected {:?}", title))
            })
            .collect()
    };

    let items = to_items(&file.items);
    let defaults = to_items(&file.default_items);
    debug!(
        "loaded {} item(s) and {} default item(s) from {}",
        items.len(),
        defaults.len(),
        path.display()
    );

    Ok(CommandPalette::new(
        Catalog::new(items),
        options.default_items(defaults),
    ))
}

fn run_query(
    config: &Config,
    catalog: &Path,
    match_subtitle: bool,
    all: bool,
    query: &str,
) -> Result<()> {
    let mut options = PaletteOptions::from_settings(&config.palette)?;
    if match_subtitle {
        options.match_subtitle = true;
    }

    let mut palette = palette_from_file(catalog, options)
        .with_context(|| format!("loading catalog {}", catalog.display()))?;
    palette.open();
    palette.set_query(query);

    println!("{}", render_palette(&palette, all));
    Ok(())
}

// =============================================================================
// demo
// =============================================================================

/// One line of demo input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DemoInput {
    Event(PaletteEvent),
    /// Hover or tap the n-th visible row (0-based)
    Hover(usize),
    Tap(usize),
    Quit,
    Unknown(String),
}

/// Parse a demo line: plain text is a query, ':' starts a command
pub fn parse_demo_line(line: &str) -> DemoInput {
    let Some(command) = line.strip_prefix(':') else {
        return DemoInput::Event(PaletteEvent::QueryChanged(line.to_string()));
    };

    let mut parts = command.split_whitespace();
    let name = parts.next().unwrap_or("");
    let index = parts.next().and_then(|n| n.parse::<usize>().ok());

    match (name, index) {
        ("open", _) => DemoInput::Event(PaletteEvent::Open),
        ("up", _) => DemoInput::Event(PaletteEvent::SelectPrevious),
        ("down", _) => DemoInput::Event(PaletteEvent::SelectNext),
        ("enter", _) => DemoInput::Event(PaletteEvent::Commit),
        ("esc", _) => DemoInput::Event(PaletteEvent::Cancel),
        ("dismiss", _) => DemoInput::Event(PaletteEvent::Dismiss),
        ("hover", Some(n)) => DemoInput::Hover(n),
        ("tap", Some(n)) => DemoInput::Tap(n),
        ("quit", _) | ("q", _) => DemoInput::Quit,
        (digit, None) => match digit.parse::<usize>() {
            Ok(n) if (1..=QUICK_SELECT_SLOTS).contains(&n) => {
                DemoInput::Event(PaletteEvent::QuickSelect(n - 1))
            }
            _ => DemoInput::Unknown(line.to_string()),
        },
        _ => DemoInput::Unknown(line.to_string()),
    }
}

/// Favorite numbers picked so far
type Favorites = Rc<RefCell<Vec<u32>>>;

fn favorite_items(favorites: &Favorites) -> Vec<Item> {
    let picked = favorites.borrow();
    if picked.is_empty() {
        return Vec::new();
    }

    let numbers = picked
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    let favorites = Rc::clone(favorites);

    vec![Item::new("Remove All Favorites")
        .subtitle(numbers)
        .image("trash.fill")
        .action(move || favorites.borrow_mut().clear())]
}

/// Numbers 0..100 plus a custom entry for any typed number of 100 or more
pub fn demo_palette(options: PaletteOptions, favorites: &Favorites) -> CommandPalette {
    let items = (0..100u32)
        .map(|n| {
            let favorites = Rc::clone(favorites);
            Item::new(n.to_string())
                .subtitle("Pick This")
                .badge("#")
                .action(move || favorites.borrow_mut().push(n))
        })
        .collect();

    let provider_favorites = Rc::clone(favorites);
    let catalog = Catalog::new(items).with_provider(move |query| match query.parse::<u32>() {
        Ok(n) if n >= 100 => {
            let favorites = Rc::clone(&provider_favorites);
            vec![Item::new(query)
                .subtitle("Custom")
                .badge("#")
                .action(move || favorites.borrow_mut().push(n))]
        }
        _ => Vec::new(),
    });

    CommandPalette::new(catalog, options.default_items(favorite_items(favorites)))
}

/// Run the favorite-numbers demo over `input`, writing the palette to `out`
pub fn run_demo<R: BufRead, W: Write>(config: &Config, input: R, out: &mut W) -> Result<()> {
    let options = PaletteOptions::from_settings(&config.palette)?
        .placeholder("Type a number to get started")
        .max_items_shown(5)
        .show_images(false);
    let favorites: Favorites = Rc::new(RefCell::new(Vec::new()));
    let mut palette = demo_palette(options, &favorites);

    writeln!(out, "What are your favorite numbers? Type :open to start, :quit to leave.")?;

    for line in input.lines() {
        let line = line.context("reading demo input")?;

        let activation = match parse_demo_line(&line) {
            DemoInput::Quit => break,
            DemoInput::Event(event) => palette.dispatch(event),
            DemoInput::Hover(n) => {
                if let Some(id) = visible_id(&palette, n) {
                    palette.hover(id);
                }
                None
            }
            DemoInput::Tap(n) => visible_id(&palette, n).and_then(|id| palette.tap(id)),
            DemoInput::Unknown(text) => {
                writeln!(out, "unknown command: {text}")?;
                continue;
            }
        };

        if let Some(activation) = activation {
            writeln!(out, "activated: {}", activation.title)?;
            palette.set_default_items(favorite_items(&favorites));
        }

        if palette.is_open() {
            writeln!(out, "{}", render_palette(&palette, false))?;
        } else {
            writeln!(out, "favorites: {}", format_favorites(&favorites))?;
        }
    }

    Ok(())
}

fn visible_id(palette: &CommandPalette, index: usize) -> Option<ItemId> {
    palette.visible().get(index).map(Item::id)
}

fn format_favorites(favorites: &Favorites) -> String {
    let mut numbers = favorites.borrow().clone();
    if numbers.is_empty() {
        return "(none)".to_string();
    }
    numbers.sort_unstable();
    numbers
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

// =============================================================================
// config commands
// =============================================================================

/// Print the effective configuration
pub fn show_config(config: &Config) {
    println!("Config file: {}", Config::get_active_config_path().display());
    println!();
    println!("[palette]");
    println!("  max_items_shown  = {}", config.palette.max_items_shown);
    println!("  placeholder_text = {:?}", config.palette.placeholder_text);
    println!("  show_images      = {}", config.palette.show_images);
    println!("  default_image    = {:?}", config.palette.default_image);
    println!("  activation_key   = {:?}", config.palette.activation_key);
    println!("  match_subtitle   = {}", config.palette.match_subtitle);
    println!();
    println!("[logging]");
    println!("  level       = {}", config.logging.level);
    println!("  log_to_file = {}", config.logging.log_to_file);
    println!("  log_file    = {}", config.logging.log_file.display());
}

/// Write the commented default config to `output` or the standard location
pub fn generate_config_file(output: Option<PathBuf>) -> Result<()> {
    let path = match output {
        Some(path) => path,
        None => get_config_path().context("could not determine the config directory")?,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }

    fs::write(&path, Config::generate_default_config())
        .with_context(|| format!("writing {}", path.display()))?;

    println!("Configuration written to {}", path.display());
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
