use std::io;
use std::path::PathBuf;

use clap::Parser;
use configs::JsonLayout;
use service::file::employee_store::EmployeeStore;
use tracing::error;

#[derive(Parser, Debug)]
#[command(name = "menu", version, about = "Interactive employee records menu")]
struct Cli {
    /// Record file; falls back to EMPLOYEES_FILE, then employees.json
    #[arg(long, value_name = "FILE", env = "EMPLOYEES_FILE", default_value = configs::DEFAULT_DATA_FILE)]
    data_file: PathBuf,
    /// Rewrite the file with 4-space indentation instead of a single line
    #[arg(long)]
    pretty: bool,
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    common::env::ensure_data_dir(&cli.data_file).await?;
    let layout = if cli.pretty { JsonLayout::Pretty } else { JsonLayout::Compact };
    let store = EmployeeStore::new(cli.data_file, layout).await?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    menu::Menu::new(store.as_ref(), stdin.lock(), stdout.lock()).run().await?;
    Ok(())
}

fn main() -> std::process::ExitCode {
    dotenvy::dotenv().ok();
    common::utils::logging::init_logging_interactive();
    let cli = Cli::parse();

    let rt = match tokio::runtime::Builder::new_current_thread().enable_all().build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(error = %e, "failed to build tokio runtime");
            return std::process::ExitCode::FAILURE;
        }
    };

    match rt.block_on(run(cli)) {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "menu exited with error");
            eprintln!("error: {e}");
            std::process::ExitCode::FAILURE
        }
    }
}
