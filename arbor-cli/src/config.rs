//! The configuration for the preview tool, given from environment variables and lazy
//! initialized when needed.

use std::num::NonZeroUsize;
use std::env;

use once_cell::race::OnceNonZeroUsize;


/// Width and depth of the preview terrain, in blocks.
///
/// Set with `ARBOR_GRID_WIDTH`, defaults to 48.
pub fn grid_width() -> usize {
    static ENV: OnceNonZeroUsize = OnceNonZeroUsize::new();
    ENV.get_or_init(|| parse_env("ARBOR_GRID_WIDTH", 48)).get()
}

/// Height of the preview terrain, in blocks.
///
/// Set with `ARBOR_GRID_HEIGHT`, defaults to 64.
pub fn grid_height() -> usize {
    static ENV: OnceNonZeroUsize = OnceNonZeroUsize::new();
    ENV.get_or_init(|| parse_env("ARBOR_GRID_HEIGHT", 64)).get()
}

fn parse_env(name: &str, default: usize) -> NonZeroUsize {
    env::var(name).ok()
        .and_then(|s| s.trim().parse::<NonZeroUsize>().ok())
        .or(NonZeroUsize::new(default))
        .unwrap_or(NonZeroUsize::MIN)
}
