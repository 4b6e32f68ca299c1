use clap::Parser;

use glyphcam::cli::{self, Args, Command};

/// Default log filter for a given `-v` count. `RUST_LOG` still wins.
fn default_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

fn main() {
    let args = Args::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_filter(args.verbose)),
    )
    .init();

    let config_path = args.config.as_deref();
    let result = match args.command {
        Command::Render(render_args) => cli::render(&render_args, config_path),
        Command::Ramps => {
            cli::list_ramps();
            Ok(())
        }
        Command::Config { action } => cli::handle_config_action(action, config_path),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
