//! Version and usage output.

/// The current version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Binary name used in version and usage output.
pub const BIN_NAME: &str = "trivia-insights";

pub fn version_line() -> String {
    format!("{} {}", BIN_NAME, VERSION)
}

pub fn usage() -> String {
    format!(
        "{bin} {version}\n\
         Explore a batch of Open Trivia DB questions by category and difficulty.\n\n\
         USAGE:\n    {bin} [OPTIONS]\n\n\
         OPTIONS:\n\
         \x20   --amount <N>        Questions to fetch (default 50)\n\
         \x20   --api-url <URL>     API base URL (default https://opentdb.com)\n\
         \x20   --page-size <N>     Questions listed before expanding (default 10)\n\
         \x20   --timeout <SECS>    Request timeout in seconds (default 10)\n\
         \x20   -V, --version       Print version\n\
         \x20   -h, --help          Print this help\n\n\
         ENVIRONMENT:\n\
         \x20   TRIVIA_API_URL, TRIVIA_AMOUNT, TRIVIA_TIMEOUT_SECS, TRIVIA_PAGE_SIZE,\n\
         \x20   TRIVIA_COMPACT_LIMIT, TRIVIA_LOG (log filter, default info)",
        bin = BIN_NAME,
        version = VERSION
    )
}
