use clap::Parser;
use connectus::cli::{print_person_list, run_menu, ui, BookOrigin, Cli, Session};
use connectus::{Config, Database};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match cli.config {
        Some(ref path) => {
            let default_data_file = Database::default_path()
                .ok_or_else(|| anyhow::anyhow!("Could not find data directory"))?;
            Config::load_from(path, default_data_file)?
        }
        None => Config::load()?,
    }
    .with_overrides(cli.data_file.clone(), cli.log_level.clone());

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();
    log::info!("Using data file {}", config.data_file.display());

    let mut session = Session::open(Database::open_at(&config.data_file))?;
    if session.origin() == BookOrigin::EmptyAfterLoadError {
        ui::warning("The data file could not be read. Starting with an empty address book.");
    }

    match cli.command_line() {
        Some(line) => {
            // One-shot: run the line and report failures through the exit code
            let result = session.execute(&line)?;
            ui::status(&result.feedback);
            if !result.show_help && !result.exit {
                println!();
                print_person_list(session.model());
            }
        }
        None => run_menu(&mut session)?,
    }

    Ok(())
}
