use std::io::Write;
use std::path::Path;

use clap::Parser;

use layout_guard::cli::Cli;
use layout_guard::config::{Config, ConfigLoader, FileConfigLoader};
use layout_guard::dispatch::Dispatcher;
use layout_guard::document::DocumentScanner;
use layout_guard::rules::RuleRegistry;
use layout_guard::{EXIT_ERROR, EXIT_SUCCESS};

fn main() {
    let cli = Cli::parse();
    std::process::exit(run(&cli));
}

fn run(cli: &Cli) -> i32 {
    match run_impl(cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_ERROR
        }
    }
}

fn run_impl(cli: &Cli) -> layout_guard::Result<()> {
    // 1. Load configuration (built-in defaults when no file is given)
    let config = load_config(cli.config.as_deref())?;

    // 2. Build the rule registry and validate the configuration against it
    let registry = RuleRegistry::builtin()?;
    let dispatcher = Dispatcher::new(&config, registry, cli.verbose)?;

    // 3. Discover and parse every HTML file under the source root
    let documents = DocumentScanner::new().scan(&cli.source)?;

    // 4. Run every matching rule against every document
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    dispatcher.dispatch(&documents, &mut out)?;
    out.flush()?;

    // Violations are advisory; reaching this point is a successful run.
    Ok(())
}

fn load_config(config_path: Option<&Path>) -> layout_guard::Result<Config> {
    config_path.map_or_else(
        || Ok(Config::default()),
        |path| FileConfigLoader::new().load_from_path(path),
    )
}
