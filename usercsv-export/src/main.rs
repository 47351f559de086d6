//! CLI-утилита для выгрузки пользователей из JSON в CSV (name, email, password).

use clap::Parser;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

/// Usercsv Export - выгрузка пользователей в CSV.
///
/// Создает рядом с входным файлом CSV `<имя>_name_email_passwords.csv`
/// в UTF-8 с BOM, чтобы Excel корректно открывал кириллицу.
#[derive(Parser)]
#[command(name = "usercsv-export")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON-файл со списком пользователей
    input: PathBuf,

    /// Подробный вывод
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    match usercsv::run(&args.input) {
        Ok(summary) => {
            tracing::info!("Строк данных: {}", summary.rows);
            println!(
                "Создан CSV файл с полями name, email, password: {}",
                summary.output_path.display()
            );
        }
        Err(e) => {
            eprintln!("Ошибка: {}", e);
            process::exit(1);
        }
    }
}
