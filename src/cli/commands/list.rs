use anyhow::Result;
use boil::TemplateStore;
use std::io::{self, Write};

use crate::cli::utils::{pluralize, pretty_list};

pub fn handle_list(store: &TemplateStore) {
    let languages = store.list_languages();
    let extensions = store.list_extensions();

    println!(
        "Supported languages ({}): {}",
        pluralize("language", languages.len()),
        pretty_list(&languages)
    );
    println!(
        "Supported extensions ({}): {}",
        pluralize("extension", extensions.len()),
        pretty_list(&extensions)
    );
}

/// Print one language per line, for piping
pub fn handle_list_languages(store: &TemplateStore) -> Result<()> {
    write_lines(&mut io::stdout().lock(), &store.list_languages())?;
    Ok(())
}

/// Print one extension per line, for piping
pub fn handle_list_extensions(store: &TemplateStore) -> Result<()> {
    write_lines(&mut io::stdout().lock(), &store.list_extensions())?;
    Ok(())
}

fn write_lines(out: &mut impl Write, items: &[String]) -> io::Result<()> {
    for item in items {
        writeln!(out, "{}", item)?;
    }
    out.flush()
}
