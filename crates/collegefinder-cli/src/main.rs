//! collegefinder CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "collegefinder",
    version,
    about = "Search, compare, and bookmark colleges; take the career quiz"
)]
struct Cli {
    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the college catalog
    Search {
        /// Text matched against name, city, and courses
        #[arg(long, default_value = "")]
        query: String,

        /// Exact city
        #[arg(long)]
        location: Option<String>,

        /// Institution type: government, private, central, deemed, autonomous
        #[arg(long = "type")]
        institution_type: Option<String>,

        /// Maximum annual fee in rupees (default from config: 500000)
        #[arg(long)]
        max_fee: Option<u64>,

        /// Sort order: rank, fee, name (default from config)
        #[arg(long)]
        sort: Option<String>,

        /// Output format: table, json
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// Show full details for one college
    Show {
        /// College id
        id: String,
    },

    /// Compare up to three colleges side by side
    Compare {
        /// College ids (e.g. "1,5,9")
        #[arg(long, value_delimiter = ',', required = true)]
        ids: Vec<String>,

        /// Output format: table, json
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// Take the career quiz
    Quiz {
        /// Zero-based option per question (e.g. "0,4,1,0,4"); prompts on stdin if omitted
        #[arg(long, value_delimiter = ',')]
        answers: Option<Vec<usize>>,
    },

    /// Manage bookmarked colleges
    Bookmark {
        #[command(subcommand)]
        action: BookmarkAction,
    },

    /// Search scholarships
    Scholarships {
        /// Text matched against name and provider
        #[arg(long, default_value = "")]
        query: String,

        /// Scholarship type: merit, need, minority, sports, research
        #[arg(long = "type")]
        scholarship_type: Option<String>,

        /// Field of study (e.g. "Engineering")
        #[arg(long)]
        category: Option<String>,
    },

    /// Sign in and show saved colleges
    Dashboard {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,
    },

    /// Validate catalog and quiz TOML files (the built-in data if none given)
    Validate {
        /// Catalog TOML file
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Quiz TOML file
        #[arg(long)]
        quiz: Option<PathBuf>,
    },

    /// Create a starter config file
    Init,
}

#[derive(Subcommand)]
enum BookmarkAction {
    /// Bookmark a college, or remove it if already bookmarked
    Toggle {
        /// College id
        id: String,
    },
    /// List bookmarked colleges
    List,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("collegefinder=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();
    let config = cli.config;

    let result = match cli.command {
        Commands::Search {
            query,
            location,
            institution_type,
            max_fee,
            sort,
            format,
        } => commands::search::execute(
            query,
            location,
            institution_type,
            max_fee,
            sort,
            format,
            config,
        ),
        Commands::Show { id } => commands::show::execute(id, config),
        Commands::Compare { ids, format } => commands::compare::execute(ids, format, config),
        Commands::Quiz { answers } => commands::quiz::execute(answers),
        Commands::Bookmark { action } => match action {
            BookmarkAction::Toggle { id } => commands::bookmark::toggle(id, config),
            BookmarkAction::List => commands::bookmark::list(config),
        },
        Commands::Scholarships {
            query,
            scholarship_type,
            category,
        } => commands::scholarships::execute(query, scholarship_type, category),
        Commands::Dashboard { email, password } => {
            commands::dashboard::execute(email, password, config)
        }
        Commands::Validate { catalog, quiz } => commands::validate::execute(catalog, quiz),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
