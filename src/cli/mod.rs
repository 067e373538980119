//! Command-line front end.

mod context;
mod flags;
mod parse;
mod prompts;

use context::Context;

/// Parse arguments and run a single CLI invocation.
pub fn run(args: Vec<String>) {
    let mut ctx = match Context::new(args) {
        Ok(ctx) => ctx,
        Err(e) => {
            prompts::error(&e);
            std::process::exit(2);
        }
    };

    // Err(Done) is an early exit (help, version, user abort), not a failure.
    let _ = ctx.run();
}
