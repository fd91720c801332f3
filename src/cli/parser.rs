use crate::core::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rreading
#[derive(Parser)]
#[command(
    name = "rreading",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track reading sessions, notes and errata for one book",
    long_about = None
)]
pub struct Cli {
    /// Data directory holding the configuration and the collections
    #[arg(global = true, long = "dir", value_name = "DIR")]
    pub dir: Option<String>,

    /// Answer yes to every confirmation
    #[arg(global = true, long = "yes", short = 'y')]
    pub yes: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the data directory, configuration and collection files
    Init {
        #[arg(long = "book-name")]
        book_name: String,

        /// Book file, absolute or relative to the data directory
        #[arg(long = "book-file")]
        book_file: String,

        /// Last page number of the book
        #[arg(long = "last-page")]
        last_page: i64,

        /// Physical page number carrying the printed label "1"
        #[arg(long = "first-page-label", default_value_t = 1)]
        first_page_label: i64,

        #[arg(long = "pages-per-day", default_value_t = crate::config::default_page_per_day())]
        pages_per_day: i64,

        /// Log file maintained by the viewer program
        #[arg(long = "viewer-log")]
        viewer_log: Option<String>,

        #[arg(long = "log-file")]
        log_file: Option<String>,

        #[arg(long = "note-file")]
        note_file: Option<String>,

        #[arg(long = "errata-file")]
        errata_file: Option<String>,

        /// Overwrite an existing configuration
        #[arg(long = "force", short = 'f')]
        force: bool,
    },

    /// Print or update the configuration
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "book-name")]
        book_name: Option<String>,

        #[arg(long = "book-file")]
        book_file: Option<String>,

        #[arg(long = "last-page")]
        last_page: Option<i64>,

        #[arg(long = "first-page-label")]
        first_page_label: Option<i64>,

        #[arg(long = "pages-per-day")]
        pages_per_day: Option<i64>,

        #[arg(long = "viewer-log")]
        viewer_log: Option<String>,
    },

    /// Start a reading session: `read [page] [nolog]`
    Read {
        /// Optional start page and/or the word `nolog`
        #[arg(value_name = "ARGS")]
        args: Vec<String>,

        /// Do not record a session
        #[arg(long = "nolog")]
        nolog: bool,
    },

    /// Complete a temporary session, or add a complete one with --start
    Log {
        /// Key of the temporary session (default: the latest one)
        #[arg(long = "key", conflicts_with = "start")]
        key: Option<String>,

        /// Session start (YYYY-MM-DD HH:MM[:SS]); adds a new complete entry
        #[arg(long = "start", requires_all = ["end", "start_page", "end_page"])]
        start: Option<String>,

        /// Session end (YYYY-MM-DD HH:MM[:SS]) for a new entry
        #[arg(long = "end", requires = "start")]
        end: Option<String>,

        #[arg(long = "start-page", requires = "start")]
        start_page: Option<i64>,

        /// End page; read from the viewer log when omitted
        #[arg(long = "end-page")]
        end_page: Option<i64>,

        /// End time when completing (default: recorded end, or now)
        #[arg(long = "end-time", conflicts_with = "start")]
        end_time: Option<String>,
    },

    /// List reading sessions
    Ll,

    /// Delete the last complete session
    Dellast,

    /// Per-day summary of minutes and pages
    Days,

    /// Clear temporary sessions
    Cl,

    /// Notes
    Note {
        #[command(subcommand)]
        action: NoteAction,
    },

    /// Errata
    Errata {
        #[command(subcommand)]
        action: ErrataAction,
    },

    /// Show today's statistics
    Today,

    /// Copy new records to the collection files in DSTDIR
    Sync {
        dstdir: String,
    },

    /// Show the reading plan: `plan [date start end perday]`
    Plan {
        /// First day of the plan (YYYY-MM-DD, default today)
        date: Option<String>,
        /// First page (default: where the last session stopped)
        start: Option<i64>,
        /// Last page (default: the book's last page)
        end: Option<i64>,
        /// Pages per day (default from config)
        perday: Option<i64>,
    },

    /// Export complete sessions
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the internal audit trail of the reading log
    Audit,
}

#[derive(Subcommand)]
pub enum NoteAction {
    Add {
        #[arg(long)]
        chapter: i64,
        #[arg(long)]
        subject: String,
        #[arg(long)]
        content: String,
    },
    List,
    Show {
        key: String,
    },
    Edit {
        key: String,
        #[arg(long)]
        chapter: Option<i64>,
        #[arg(long)]
        subject: Option<String>,
        #[arg(long)]
        content: Option<String>,
    },
    Delete {
        key: String,
    },
}

#[derive(Subcommand)]
pub enum ErrataAction {
    Add {
        #[arg(long)]
        page: String,
        #[arg(long)]
        content: String,
    },
    List,
    Show {
        key: String,
    },
    Delete {
        key: String,
    },
}
