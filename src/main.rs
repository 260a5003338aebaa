use backlog::cli::commands::Cli;
use backlog::cli::handlers;
use clap::Parser;

fn main() {
    let cli = Cli::parse();

    match cli.command {
        None => {
            // No subcommand → launch TUI
            let data_dir = handlers::resolve_data_dir(cli.data_dir.as_deref());
            if let Err(e) = backlog::tui::run(&data_dir) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
        Some(_) => {
            if let Err(e) = handlers::dispatch(cli) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
    }
}
