mod context;
mod flags;
mod parse;
pub mod prompts;
pub mod quiet;

pub use context::Context;
pub use flags::CliFlags;
pub use parse::parse;

use log::debug;

/// Run flag mode. Any failure prints a red message and exits with status 1.
pub fn run(args: Vec<String>) {
    let result = Context::new(&args).and_then(|mut ctx| {
        debug!("settings: {:?}", ctx.settings);
        ctx.run()
    });

    if let Err(e) = result {
        prompts::error(&format!("Error: {e}"));
        std::process::exit(1);
    }
}
