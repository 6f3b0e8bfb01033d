mod entry;
mod logger;

use fetchbench::error::AppResult;

fn main() -> AppResult<()> {
    entry::run()
}
