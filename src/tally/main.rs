use clap::Parser;
use directories::ProjectDirs;
use std::io;
use std::path::PathBuf;
use tally::api::{NewProduct, TallyApi};
use tally::config::TallyConfig;
use tally::error::{Result, TallyError};
use tally::store::fs::FileStore;

mod args;
mod print;
mod shell;

use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Some(Commands::Config { key, value }) = &cli.command {
        return handle_config(key.as_deref(), value.as_deref());
    }

    let data_file = resolve_data_file(&cli)?;
    let mut api = TallyApi::load(FileStore::new(data_file))?;

    match cli.command {
        Some(Commands::Add {
            id,
            name,
            price,
            quantity,
        }) => {
            let result = api.add_product(NewProduct {
                id,
                name,
                price,
                quantity,
            })?;
            print::print_messages(&mut io::stdout(), &result.messages)?;
            api.save()
        }
        Some(Commands::List) => {
            let result = api.list_products()?;
            print::print_messages(&mut io::stdout(), &result.messages)?;
            if !result.listed.is_empty() {
                print::print_products(&mut io::stdout(), &result.listed, result.total_revenue)?;
            }
            Ok(())
        }
        Some(Commands::Stock { id, quantity }) => {
            let result = api.update_stock(id, quantity)?;
            print::print_messages(&mut io::stdout(), &result.messages)?;
            api.save()
        }
        Some(Commands::Sell { id, quantity }) => {
            let result = api.record_sale(id, quantity)?;
            print::print_messages(&mut io::stdout(), &result.messages)?;
            api.save()
        }
        Some(Commands::Find { id }) => {
            let result = api.search_product(id)?;
            print::print_product_details(&mut io::stdout(), &result.listed[0])?;
            Ok(())
        }
        Some(Commands::Config { .. }) => unreachable!("handled above"),
        None => {
            let stdin = io::stdin();
            shell::run(&mut api, &mut stdin.lock(), &mut io::stdout())
        }
    }
}

/// The data file lives in the platform data directory unless `--file`
/// overrides it; the file name inside that directory comes from config.
fn resolve_data_file(cli: &Cli) -> Result<PathBuf> {
    if let Some(file) = &cli.file {
        return Ok(file.clone());
    }
    let dir = data_dir();
    let config = TallyConfig::load(&dir)?;
    Ok(dir.join(config.data_file))
}

fn data_dir() -> PathBuf {
    let proj_dirs =
        ProjectDirs::from("com", "tally", "tally").expect("Could not determine data dir");
    proj_dirs.data_dir().to_path_buf()
}

fn handle_config(key: Option<&str>, value: Option<&str>) -> Result<()> {
    let dir = data_dir();
    let mut config = TallyConfig::load(&dir)?;

    match (key, value) {
        (None, _) => {
            println!("data-file: {}", config.data_file);
            Ok(())
        }
        (Some("data-file"), None) => {
            println!("{}", config.data_file);
            Ok(())
        }
        (Some("data-file"), Some(name)) => {
            config.set_data_file(name)?;
            config.save(&dir)?;
            println!("data-file set to {}", name);
            Ok(())
        }
        (Some(other), _) => Err(TallyError::InvalidInput(format!(
            "Unknown config key: {}",
            other
        ))),
    }
}
