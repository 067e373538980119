use std::env;

mod cli;
mod clipboard;
mod pass;
mod store;

fn main() {
    // Passwords transit this process; keep it out of core dumps.
    #[cfg(target_os = "linux")]
    unsafe {
        libc::prctl(libc::PR_SET_DUMPABLE, 0)
    };

    cli::run(env::args().collect());
}
