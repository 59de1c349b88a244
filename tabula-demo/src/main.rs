mod catalog;
mod config;
mod error;
mod paths;
mod render;
mod stories;

use std::env;
use std::fs::{self, File};
use std::process::ExitCode;

use log::{debug, error, info};
use simplelog::{Config, WriteLogger};

use crate::catalog::StoryContext;
use crate::config::DemoConfig;
use crate::error::DemoError;

/// Start logging to `latest.log` in the cache directory.
fn init_logging(config: &DemoConfig) -> Result<(), DemoError> {
    let Some(path) = paths::log_file() else {
        return Ok(());
    };
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let log_file = File::create(&path)?;
    WriteLogger::init(config.level_filter()?, Config::default(), log_file)?;
    debug!("Logging to {}", path.display());
    Ok(())
}

fn list_stories() -> String {
    let stories = catalog::stories();
    let width = stories.iter().map(|s| s.name.len()).max().unwrap_or(0);
    let mut out = String::from("Stories:\n");
    for story in stories {
        out.push_str(&format!("  {:width$}  {}\n", story.name, story.description));
    }
    out.push_str("\nUsage: tabula-demo <story>");
    out
}

fn run(config: &DemoConfig) -> Result<(), DemoError> {
    let Some(name) = env::args().nth(1).or_else(|| config.story.clone()) else {
        println!("{}", list_stories());
        return Ok(());
    };

    let story = catalog::find(&name).ok_or_else(|| DemoError::UnknownStory(name.clone()))?;
    info!("Rendering story {}", story.name);
    let output = (story.render)(&StoryContext::from(config))?;
    println!("{}", output);
    Ok(())
}

fn main() -> ExitCode {
    paths::rotate_logs();

    let config = match DemoConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = init_logging(&config) {
        eprintln!("Warning: logging disabled: {}", e);
    }

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
