use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use course_registration::{logging, App, AppConfig, Console};

#[derive(Parser)]
#[command(name = "course-registration")]
#[command(version = "0.1.0")]
#[command(about = "Register students for courses and keep the roster on disk", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "PATH",
        help = "Enrollment file to load and save (default: Enrollments.json)"
    )]
    file: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::new(cli.file, cli.verbose);
    logging::init_logging(config.verbose)?;

    tracing::debug!(data_file = %config.data_file.display(), "Starting course registration");

    let mut app = App::new(&config, Console::stdio());
    app.run()?;

    Ok(())
}
