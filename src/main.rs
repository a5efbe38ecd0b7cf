use anyhow::Result;
use clap::{Parser, Subcommand};

use vacations_cli::auth::require_admin;
use vacations_cli::cli::{
    handle_employee_command, handle_report_command, handle_user_command,
    handle_vacation_command, login, Credentials, EmployeeCommands, ReportCommands, UserCommands,
    VacationCommands,
};
use vacations_cli::config::{Settings, VacationPaths};
use vacations_cli::storage::Storage;
use vacations_cli::{telemetry, VacationResult};

#[derive(Parser)]
#[command(
    name = "vacations",
    version,
    about = "Employee vacation accrual and approval manager",
    long_about = "Vacations CLI keeps track of employees, the vacation days they \
                  accrue for every full month worked, and the requests operators \
                  approve or reject. Approved vacations can be exported per month."
)]
struct Cli {
    /// Operator username
    #[arg(short, long, global = true, env = "VACATIONS_USER")]
    user: Option<String>,

    /// Operator password (prompted when omitted)
    #[arg(long, global = true, env = "VACATIONS_PASSWORD", hide = true, hide_env_values = true)]
    password: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the data directory
    Init,

    /// Show current configuration and paths
    Config,

    /// Employee management commands
    #[command(subcommand, alias = "emp")]
    Employee(EmployeeCommands),

    /// Vacation balance, request and approval commands
    #[command(subcommand, alias = "vac")]
    Vacation(VacationCommands),

    /// Report commands
    #[command(subcommand)]
    Report(ReportCommands),

    /// Operator account commands
    #[command(subcommand)]
    User(UserCommands),

    /// Show recent audit log entries
    Audit {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = VacationPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    telemetry::init(&settings.log_level)?;

    // Data files are loaded by the commands that need them
    let mut storage = Storage::new(paths.clone())?;

    let credentials = Credentials::new(cli.user, cli.password);

    match run(cli.command, &paths, &settings, &mut storage, credentials) {
        Ok(()) => Ok(()),
        Err(e) if e.is_request_rejection() => {
            eprintln!("Request rejected: {}", e);
            std::process::exit(2);
        }
        Err(e) => Err(e.into()),
    }
}

fn run(
    command: Option<Commands>,
    paths: &VacationPaths,
    settings: &Settings,
    storage: &mut Storage,
    credentials: Credentials,
) -> VacationResult<()> {
    match command {
        Some(Commands::Init) => {
            if paths.is_initialized() {
                println!("Vacations CLI already initialized at: {}", paths.base_dir().display());
            } else {
                println!("Initializing Vacations CLI at: {}", paths.base_dir().display());
                settings.save(paths)?;
            }
            for path in storage.create_missing_files()? {
                println!("  created {}", path.display());
            }
            println!("Initialization complete!");

            match storage.users.load() {
                Ok(()) if storage.users.is_empty() => {
                    println!();
                    println!("Create the first operator account with:");
                    println!("  vacations user add <username>");
                }
                Ok(()) => {}
                Err(e) => eprintln!("Warning: operator accounts could not be read: {}", e),
            }
        }

        Some(Commands::Config) => {
            println!("Vacations CLI Configuration");
            println!("===========================");
            println!(
                "Initialized:       {}",
                if paths.is_initialized() { "yes" } else { "no (run 'vacations init')" }
            );
            println!("Base directory:    {}", paths.base_dir().display());
            println!("Data directory:    {}", paths.data_dir().display());
            println!("Reports directory: {}", paths.reports_dir().display());
            println!("Audit log:         {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Log level:             {}", settings.log_level);
            println!("  Report file prefix:    {}", settings.report_file_prefix);
            println!("  Default report format: {}", settings.default_report_format);
        }

        Some(Commands::Employee(cmd)) => {
            load_data(storage)?;
            let operator = login(storage, credentials)?;
            handle_employee_command(storage, &operator, cmd)?;
        }

        Some(Commands::Vacation(cmd)) => {
            load_data(storage)?;
            let operator = login(storage, credentials)?;
            handle_vacation_command(storage, &operator, cmd)?;
        }

        Some(Commands::Report(cmd)) => {
            load_data(storage)?;
            login(storage, credentials)?;
            handle_report_command(storage, settings, cmd)?;
        }

        Some(Commands::User(cmd)) => {
            load_data(storage)?;
            let bootstrap = storage.users.is_empty() && matches!(cmd, UserCommands::Add { .. });
            if bootstrap {
                handle_user_command(storage, None, cmd)?;
            } else {
                let operator = login(storage, credentials)?;
                if matches!(cmd, UserCommands::Add { .. }) {
                    require_admin(&operator)?;
                }
                handle_user_command(storage, Some(&operator), cmd)?;
            }
        }

        Some(Commands::Audit { limit }) => {
            load_data(storage)?;
            login(storage, credentials)?;
            let entries = storage.audit().read_recent(limit)?;
            if entries.is_empty() {
                println!("Audit log is empty.");
            }
            for entry in entries {
                println!("{}", entry.format_human_readable());
            }
        }

        None => {
            println!("Vacations CLI - employee vacation manager");
            println!();
            println!("Run 'vacations --help' for usage information.");
        }
    }

    Ok(())
}

/// Load every data file, warning about rows that had to be skipped
fn load_data(storage: &mut Storage) -> VacationResult<()> {
    storage.load_all()?;
    let skipped = storage.skipped_rows();
    if skipped > 0 {
        eprintln!("Warning: invalid rows skipped while loading data: {}", skipped);
    }
    Ok(())
}
