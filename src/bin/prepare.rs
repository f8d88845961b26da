use boil::TemplateStore;
use boil::config::Config;
use boil::logging;
use clap::{Arg, ArgAction, Command};
use dotenv::dotenv;
use std::path::PathBuf;
use std::process;

fn main() {
    // Load environment variables from .env file
    dotenv().ok();
    let matches = Command::new("boil-prepare")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Compile a plates directory into a single template catalog")
        .arg(
            Arg::new("plates")
                .help("Directory of plate files named name[,name2].ext1[.ext2]")
                .required(true)
                .index(1)
                .value_parser(clap::value_parser!(PathBuf))
        )
        .arg(
            Arg::new("output")
                .help("Catalog file to write")
                .required(true)
                .index(2)
                .value_parser(clap::value_parser!(PathBuf))
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Verbose output")
                .action(ArgAction::SetTrue)
        )
        .get_matches();

    let verbose = matches.get_flag("verbose");
    let logging_config = Config::load().map(|c| c.logging).unwrap_or_default();
    logging::init(&logging_config, verbose);

    let Some(plates) = matches.get_one::<PathBuf>("plates") else {
        eprintln!("Error: plates directory is required");
        process::exit(1);
    };
    let Some(output) = matches.get_one::<PathBuf>("output") else {
        eprintln!("Error: output path is required");
        process::exit(1);
    };

    let start_time = std::time::Instant::now();

    let store = match TemplateStore::load_dir(plates) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Error loading plates: {}", e);
            process::exit(1);
        }
    };

    if verbose {
        println!("Loaded {} templates in {}ms", store.len(), start_time.elapsed().as_millis());
        println!("  Languages: {}", store.list_languages().join(", "));
        println!("  Extensions: {}", store.list_extensions().join(", "));
    }

    if let Err(e) = store.to_catalog().write(output) {
        eprintln!("Error writing catalog: {}", e);
        process::exit(1);
    }

    println!(
        "Wrote {} templates ({} languages, {} extensions) to {}",
        store.len(),
        store.list_languages().len(),
        store.list_extensions().len(),
        output.display()
    );
}
