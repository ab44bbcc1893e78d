//! File logging.
//!
//! The terminal is owned by the UI, so log lines go to `<cache_dir>/nulai.log`
//! instead of stderr. `NULAI_LOG` takes the usual env_logger filter syntax.

use std::fs::{self, File};
use std::path::PathBuf;

use directories::ProjectDirs;
use env_logger::{Env, Target};

/// Start logging to the cache directory. Returns the log path, or `None` when
/// no log file could be opened (logging is then disabled).
pub fn init() -> Option<PathBuf> {
    let dirs = ProjectDirs::from("app", "nulai", "nulai")?;
    let dir = dirs.cache_dir();
    fs::create_dir_all(dir).ok()?;

    let path = dir.join("nulai.log");
    let file = File::create(&path).ok()?;

    env_logger::Builder::from_env(Env::default().filter_or("NULAI_LOG", "info"))
        .target(Target::Pipe(Box::new(file)))
        .try_init()
        .ok()?;

    Some(path)
}
