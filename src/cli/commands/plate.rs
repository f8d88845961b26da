use anyhow::{Context, Result};
use clap::ArgMatches;
use std::io;
use std::path::PathBuf;
use tracing::info;

use boil::config::Config;
use boil::{Boiler, GenerateOptions, PlateRequest, TemplateStore};

use crate::cli::output::{make_executable, write_boilerplate};
use crate::cli::utils::split_target;

/// Build the generation request from command-line flags and configured defaults
pub fn build_request(matches: &ArgMatches, config: &Config) -> PlateRequest {
    let file = matches.get_one::<PathBuf>("file");
    let (mut name, mut extension) = file.map(|path| split_target(path)).unwrap_or_default();

    if let Some(ext) = matches.get_one::<String>("ext") {
        extension = Some(ext.clone());
    }

    if let Some(classname) = matches.get_one::<String>("classname") {
        name = Some(classname.clone());
    }

    let functions: Vec<String> = matches
        .get_many::<String>("method")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();

    let options = GenerateOptions {
        name,
        functions,
        newlines: if matches.get_flag("newline") {
            true
        } else if matches.get_flag("no-newline") {
            false
        } else {
            config.generation.newlines
        },
        spaces: matches
            .get_one::<usize>("spaces")
            .copied()
            .unwrap_or(config.generation.spaces),
    };

    PlateRequest {
        language: matches.get_one::<String>("lang").cloned(),
        extension,
        options,
    }
}

pub fn handle_plate(matches: &ArgMatches, store: TemplateStore, config: &Config) -> Result<()> {
    let request = build_request(matches, config);
    let boiler = Boiler::with_cache_capacity(store, config.plates.cache_capacity);
    let text = boiler.plate(&request)?;

    let Some(path) = matches.get_one::<PathBuf>("file") else {
        print!("{}", text);
        return Ok(());
    };

    if let Err(e) = write_boilerplate(path, &text, matches.get_flag("force")) {
        if e.kind() == io::ErrorKind::AlreadyExists {
            return Err(anyhow::Error::new(e)
                .context("File cannot be written because it already exists. Use -f to overwrite"));
        }
        return Err(anyhow::Error::new(e).context(format!("Failed to write {}", path.display())));
    }

    if matches.get_flag("exec") {
        make_executable(path)
            .with_context(|| format!("Failed to make {} executable", path.display()))?;
    }

    info!("Created {}", path.display());
    println!("{}", path.display());
    Ok(())
}
