use std::fs::File;
use std::io;

use simplelog::{Config, LevelFilter, WriteLogger};

/// Set up file logging. Stdout belongs to the terminal UI, so log output
/// goes to a file instead.
pub fn init(path: &str, level: LevelFilter) -> io::Result<()> {
    let file = File::create(path)?;
    WriteLogger::init(level, Config::default(), file)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    Ok(())
}
