use anyhow::Result;
use coursedeck::cli::{self, Command};
use coursedeck::config::Config;
use coursedeck::context::{AppContext, StandardContext};
use std::env;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    let argv: Vec<String> = env::args().collect();
    let binary_name = argv
        .first()
        .and_then(|p| std::path::Path::new(p).file_name())
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "coursedeck".to_string());

    let args = match cli::parse_args(argv.iter().skip(1)) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Run '{} --help' for usage.", binary_name);
            std::process::exit(2);
        }
    };

    if args.command == Command::Help {
        cli::print_help(&binary_name);
        return Ok(());
    }

    let ctx: Arc<dyn AppContext> = Arc::new(StandardContext::new(args.root.clone()));

    // A broken config is reported, not silently replaced by defaults.
    let config = match Config::load_or_default(ctx.as_ref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading configuration:\n{}", e);
            std::process::exit(1);
        }
    };

    coursedeck::logging::install_panic_hook(ctx.as_ref());
    if let Err(e) = coursedeck::logging::init(ctx.as_ref(), config.log_level_filter()) {
        eprintln!("Warning: logging disabled: {:#}", e);
    }

    match args.command {
        Command::Import(path) => {
            let count = cli::import_file(ctx.as_ref(), &path)?;
            println!("Imported {} courses from {}", count, path.display());
        }
        Command::List => {
            for line in cli::list_lines(&cli::load_courses(ctx.as_ref())?) {
                println!("{}", line);
            }
        }
        Command::Export => {
            println!("{}", cli::export_string(ctx.as_ref())?);
        }
        Command::Tui => coursedeck::tui::run(ctx, config).await?,
        Command::Help => {}
    }
    Ok(())
}
