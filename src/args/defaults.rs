/// Requests issued by each runner when neither the CLI nor config sets a count.
pub const DEFAULT_REQUEST_COUNT: usize = 50;

/// Upper bound on requests per runner; every request is one spawned task.
pub const MAX_REQUEST_COUNT: usize = 1_000_000;

/// Config filenames checked in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILES: [&str; 2] = ["fetchbench.toml", "fetchbench.json"];
