//! Command line interface.
//!
//! `open` and `demo` browse a table in the terminal and print the final
//! selection as JSON on exit; `print` renders one page as plain text;
//! `config` shows the effective settings.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing::info;

use crate::app::App;
use crate::config::{Config, ConfigError, TableSettings};
use crate::dataset::Dataset;
use crate::error::{AppError, Result};
use crate::events::KeyBindings;
use crate::farm::{FarmTable, Movement, Pig, PigGroup, RecordSet, Supplier};
use crate::logging;
use crate::report;
use crate::table::{Column, SelectableTable, SelectionMode, SortConfig, TableOptions, TableRow};
use crate::tui;
use crate::ui::Theme;

#[derive(Parser, Debug)]
#[command(name = "pigpen", version, about = "Browse and select farm records in the terminal")]
pub struct Cli {
    /// Log debug output to the log file
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Browse a JSON dataset file
    Open {
        /// Dataset file
        file: PathBuf,
        #[command(flatten)]
        table: TableArgs,
    },
    /// Browse a built-in sample record set
    Demo {
        /// pigs, groups, suppliers or movements
        kind: RecordSet,
        #[command(flatten)]
        table: TableArgs,
    },
    /// Print one page of a dataset file or record set as text
    Print(PrintArgs),
    /// Show the effective configuration and where it is read from
    Config {
        /// Write the effective configuration to the file if it does not exist
        #[arg(long)]
        init: bool,
    },
}

/// Table options that override the configuration file.
#[derive(Args, Debug, Default, Clone)]
pub struct TableArgs {
    /// Selection mode: single or multiple
    #[arg(long)]
    pub mode: Option<SelectionMode>,

    /// Rows per page
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub rows_per_page: Option<u32>,

    /// Hide the filter bar
    #[arg(long)]
    pub no_search: bool,

    /// Show every row on one page
    #[arg(long)]
    pub no_pagination: bool,

    /// Show the data read only
    #[arg(long)]
    pub disabled: bool,

    /// Enter opens the row instead of selecting it
    #[arg(long)]
    pub clickable: bool,
}

impl TableArgs {
    /// Layer these flags over the configured table settings.
    pub fn options(&self, settings: &TableSettings) -> TableOptions {
        let mut options = settings.to_options();
        if let Some(mode) = self.mode {
            options.selection_mode = mode;
        }
        if let Some(rows) = self.rows_per_page {
            options.rows_per_page = rows as usize;
        }
        if self.no_search {
            options.show_search_and_filter = false;
        }
        if self.no_pagination {
            options.show_pagination = false;
        }
        options.disabled = self.disabled;
        options.row_clickable = self.clickable;
        options
    }
}

#[derive(Args, Debug)]
pub struct PrintArgs {
    /// Dataset file, or the name of a built-in record set
    pub source: String,

    /// Filter text
    #[arg(long)]
    pub filter: Option<String>,

    /// Accessor of the column to sort by
    #[arg(long)]
    pub sort: Option<String>,

    /// Sort descending
    #[arg(long, requires = "sort")]
    pub desc: bool,

    /// Page to print
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    #[command(flatten)]
    pub table: TableArgs,
}

/// Run a parsed command line.
pub fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    info!(command = ?cli.command, "Running command");

    match cli.command {
        Commands::Open { file, table } => {
            let dataset = Dataset::load(&file)?;
            let columns = dataset.table_columns();
            browse(dataset.title, columns, dataset.rows, &table, &config)
        }
        Commands::Demo { kind, table } => match kind {
            RecordSet::Pigs => browse_samples::<Pig>(&table, &config),
            RecordSet::Groups => browse_samples::<PigGroup>(&table, &config),
            RecordSet::Suppliers => browse_samples::<Supplier>(&table, &config),
            RecordSet::Movements => browse_samples::<Movement>(&table, &config),
        },
        Commands::Print(args) => {
            let text = print(&args, &config)?;
            io::stdout().write_all(text.as_bytes())?;
            Ok(())
        }
        Commands::Config { init } => {
            let path = Config::config_path()?;
            if init && !path.exists() {
                config.save_to(&path)?;
                println!("Wrote {}", path.display());
            }
            let shown = toml::to_string_pretty(&config).map_err(ConfigError::from)?;
            println!("# {}", path.display());
            if let Some(logs) = logging::log_directory() {
                println!("# logs: {}", logs.display());
            }
            print!("{}", shown);
            Ok(())
        }
    }
}

fn browse_samples<R: FarmTable>(args: &TableArgs, config: &Config) -> Result<()> {
    browse(R::TITLE.to_string(), R::columns(), R::samples(), args, config)
}

fn browse<R: TableRow + Clone + Serialize + 'static>(
    title: String,
    columns: Vec<Column<R>>,
    rows: Vec<R>,
    args: &TableArgs,
    config: &Config,
) -> Result<()> {
    let options = args.options(&config.table);
    let mut app = App::new(
        title,
        columns,
        rows,
        options,
        KeyBindings::new(config.ui.vim_mode),
        Theme::named(&config.ui.theme),
    );
    tui::run(&mut app)?;

    let selection = serde_json::to_string_pretty(&app.selection())
        .map_err(|e| AppError::other(format!("Could not encode the selection: {}", e)))?;
    println!("{}", selection);
    Ok(())
}

/// Render the requested page of `args.source` as text.
pub fn print(args: &PrintArgs, config: &Config) -> Result<String> {
    let path = Path::new(&args.source);
    if path.exists() {
        let dataset = Dataset::load(path)?;
        let columns = dataset.table_columns();
        return Ok(print_table(columns, dataset.rows, args, config));
    }

    let text = match args.source.parse::<RecordSet>()? {
        RecordSet::Pigs => print_samples::<Pig>(args, config),
        RecordSet::Groups => print_samples::<PigGroup>(args, config),
        RecordSet::Suppliers => print_samples::<Supplier>(args, config),
        RecordSet::Movements => print_samples::<Movement>(args, config),
    };
    Ok(text)
}

fn print_samples<R: FarmTable>(args: &PrintArgs, config: &Config) -> String {
    print_table(R::columns(), R::samples(), args, config)
}

fn print_table<R: TableRow + Clone>(
    columns: Vec<Column<R>>,
    rows: Vec<R>,
    args: &PrintArgs,
    config: &Config,
) -> String {
    let mut table = SelectableTable::with_options(columns, rows, args.table.options(&config.table));
    if let Some(filter) = &args.filter {
        table.set_filter_text(filter.as_str());
    }
    if let Some(key) = &args.sort {
        let sort = if args.desc {
            SortConfig::descending(key.as_str())
        } else {
            SortConfig::ascending(key.as_str())
        };
        table.set_sort(Some(sort));
    }
    table.go_to_page(args.page);
    report::render_page(&table)
}
