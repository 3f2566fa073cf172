use std::env;

mod cli;
mod entropy;
mod error;
mod exits;
mod pass;
mod settings;
mod terminal;
mod tui;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    exits::reset_terminal();
    exits::install_handlers();
    exits::disable_core_dumps();

    let args: Vec<String> = env::args().collect();

    match args.len() {
        1 => tui::run(),
        _ => cli::run(args),
    }
}
