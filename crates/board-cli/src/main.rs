// Rust guideline compliant 2026-10-19

//! Issue Board CLI Application
//!
//! Command-line interface for the issue board.

use board_app::{AppError, RepoContext};
use board_cli::commands;
use board_cli::commands::create::CreateArgs;
use board_cli::{create_formatter, init_tracing, should_use_color};
use board_core::OutputFormat as ConfigFormat;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "brd",
    version,
    about = "Issue board with duplicate detection and a guarded status workflow",
    long_about = "A small issue board. New issues are compared against recent ones to catch duplicates, and status changes follow Open -> In Progress -> Done.",
    after_help = "Examples:\n  brd init\n  brd signup dev@example.com --password secret123\n  brd create \"Login broken\" --description \"Clicking login does nothing\" --priority high\n  brd list --status open --limit 20\n  brd status iss-abc123 \"in progress\"\n"
)]
struct Cli {
    /// Enable JSON output
    #[arg(long, global = true)]
    json: bool,

    /// Output format
    #[arg(long, value_enum, global = true)]
    format: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Log level (error, warn, info, debug)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Clone, clap::ValueEnum)]
enum OutputFormat {
    Json,
    Table,
    Plain,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Initialize a new issue board
    Init,

    /// Create an account and sign in
    Signup {
        /// Account email
        email: String,

        /// Password (read from stdin when omitted)
        #[arg(long)]
        password: Option<String>,
    },

    /// Sign in
    Login {
        /// Account email
        email: String,

        /// Password (read from stdin when omitted)
        #[arg(long)]
        password: Option<String>,
    },

    /// Sign out
    Logout,

    /// Show the signed-in user
    Whoami,

    /// Create a new issue
    Create {
        /// Title of the issue
        title: String,

        /// Description of the issue
        #[arg(long, short)]
        description: Option<String>,

        /// Priority (low, medium, high)
        #[arg(long)]
        priority: Option<String>,

        /// Assignee
        #[arg(long)]
        assign: Option<String>,

        /// Create even if similar issues exist
        #[arg(long)]
        force: bool,
    },

    /// List issues, newest first
    List {
        /// Filter by status
        #[arg(long)]
        status: Option<String>,

        /// Filter by priority
        #[arg(long)]
        priority: Option<String>,

        /// Filter by assignee
        #[arg(long)]
        assigned_to: Option<String>,

        /// Filter by creator email
        #[arg(long)]
        created_by: Option<String>,

        /// Maximum number of recent issues to read
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Show details of an issue
    Show {
        /// Issue ID (full or partial)
        id: String,
    },

    /// Change the status of an issue
    Status {
        /// Issue ID (full or partial)
        id: String,

        /// New status (open, "in progress", done)
        status: String,
    },

    /// Find issues similar to a title and description
    Similar {
        /// Candidate title
        title: String,

        /// Candidate description
        #[arg(default_value = "")]
        description: String,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let _guard = init_tracing(&cli.log_level, cli.log_file.as_deref())?;

    let root = std::env::current_dir()?;

    // Explicit flags win over the board's configured default.
    let format = match cli.format {
        Some(OutputFormat::Json) => ConfigFormat::Json,
        Some(OutputFormat::Table) => ConfigFormat::Table,
        Some(OutputFormat::Plain) => ConfigFormat::Plain,
        None if cli.json => ConfigFormat::Json,
        None => RepoContext::discover(Some(&root))
            .and_then(|context| context.load_config())
            .map(|config| config.output_format)
            .unwrap_or_default(),
    };
    let use_color = !cli.no_color && should_use_color();
    let formatter = create_formatter(format, use_color);

    let Some(command) = cli.command else {
        println!("Use --help for usage information");
        return Ok(ExitCode::SUCCESS);
    };

    let result: Result<String, AppError> = match command {
        Commands::Init => commands::init::execute(&root, formatter.as_ref()),
        Commands::Signup { email, password } => {
            commands::account::signup(&root, &email, password, formatter.as_ref())
        }
        Commands::Login { email, password } => {
            commands::account::login(&root, &email, password, formatter.as_ref())
        }
        Commands::Logout => commands::account::logout(&root, formatter.as_ref()),
        Commands::Whoami => commands::account::whoami(&root, formatter.as_ref()),
        Commands::Create {
            title,
            description,
            priority,
            assign,
            force,
        } => commands::create::execute(
            &root,
            CreateArgs {
                title,
                description,
                priority,
                assign,
                force,
            },
            formatter.as_ref(),
        ),
        Commands::List {
            status,
            priority,
            assigned_to,
            created_by,
            limit,
        } => commands::list::execute(
            &root,
            status,
            priority,
            assigned_to,
            created_by,
            limit,
            formatter.as_ref(),
        ),
        Commands::Show { id } => commands::show::execute(&root, &id, formatter.as_ref()),
        Commands::Status { id, status } => {
            commands::status::execute(&root, &id, &status, formatter.as_ref())
        }
        Commands::Similar { title, description } => {
            commands::similar::execute(&root, &title, &description, formatter.as_ref())
        }
    };

    match result {
        Ok(output) => {
            println!("{}", output);
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => {
            tracing::debug!(error = ?error, "command failed");
            if format == ConfigFormat::Json {
                println!("{}", formatter.format_error(&error));
            } else {
                eprintln!("{}", formatter.format_error(&error));
            }
            Ok(ExitCode::FAILURE)
        }
    }
}
