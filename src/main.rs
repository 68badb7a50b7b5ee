use clap::Parser;

use wordpane_audit::cli::{self, Cli, Commands};

fn main() {
    let args = Cli::parse();

    let result = match &args.command {
        Commands::Last { n } => cli::commands::last::execute(*n, args.content_dir.as_deref()),
    };

    if let Err(e) = result {
        cli::output::error(&format!("Error: {e}"));
        std::process::exit(1);
    }
}
