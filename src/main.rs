use boil::config::Config;
use boil::logging;
use clap::{Arg, ArgAction, ArgMatches, Command};
use dotenv::dotenv;
use std::path::PathBuf;
use std::process;

mod cli;

fn main() {
    // Load environment variables from .env file
    dotenv().ok();

    let matches = build_cli().get_matches();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(cli::EXIT_FAILURE);
        }
    };

    logging::init(&config.logging, matches.get_flag("verbose"));

    if let Err(e) = run_command(&matches, &config) {
        eprintln!("Error: {:#}", e);
        process::exit(cli::exit_code(&e));
    }
}

fn build_cli() -> Command {
    Command::new("boil")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Simple boilerplate code generator.")
        .long_about(
            "Generates boilerplate source files from language templates. The template is \
             picked by --lang, or else by the extension of FILE.",
        )
        .arg(
            Arg::new("list-languages")
                .short('L')
                .long("list-languages")
                .visible_aliases(["llang", "list-lang"])
                .help("List supported languages, one per line")
                .action(ArgAction::SetTrue)
        )
        .arg(
            Arg::new("list-extensions")
                .short('E')
                .long("list-extensions")
                .visible_aliases(["lext", "list-ext"])
                .help("List supported extensions, one per line")
                .action(ArgAction::SetTrue)
        )
        .arg(
            Arg::new("ext")
                .short('e')
                .long("ext")
                .visible_alias("extension")
                .value_name("EXTENSION")
                .help("Explicitly name an extension to use (default: the extension of FILE)")
        )
        .arg(
            Arg::new("lang")
                .short('l')
                .long("lang")
                .visible_alias("language")
                .value_name("LANGUAGE")
                .help("Explicitly name a language to use (default: search for a file extension match)")
        )
        .arg(
            Arg::new("method")
                .short('m')
                .long("method")
                .visible_alias("meth")
                .value_name("METHOD_NAME")
                .help("Generate an empty method (can be used multiple times)")
                .action(ArgAction::Append)
        )
        .arg(
            Arg::new("newline")
                .short('n')
                .long("newline")
                .visible_alias("line")
                .help("Use a newline after a function declaration (default: single space)")
                .action(ArgAction::SetTrue)
        )
        .arg(
            Arg::new("no-newline")
                .long("no-newline")
                .visible_alias("no-line")
                .help("Keep a single space after a function declaration, even if configured otherwise")
                .action(ArgAction::SetTrue)
                .overrides_with("newline")
        )
        .arg(
            Arg::new("spaces")
                .short('s')
                .long("spaces")
                .visible_alias("tabwidth")
                .value_name("COUNT")
                .help("Expand tabs into COUNT space characters, 4 when COUNT is omitted (default: keep tab characters)")
                .value_parser(clap::value_parser!(usize))
                .num_args(0..=1)
                .default_missing_value("4")
        )
        .arg(
            Arg::new("classname")
                .long("classname")
                .visible_alias("title")
                .value_name("NAME")
                .help("Name for languages that require a boilerplate class (default: FILE without extension)")
        )
        .arg(
            Arg::new("force")
                .short('f')
                .long("force")
                .help("Overwrite FILE if it already exists (default: exit with code 2)")
                .action(ArgAction::SetTrue)
        )
        .arg(
            Arg::new("exec")
                .short('x')
                .long("exec")
                .visible_alias("executable")
                .help("Make FILE executable for the user")
                .action(ArgAction::SetTrue)
        )
        .arg(
            Arg::new("plates")
                .long("plates")
                .value_name("PATH")
                .help("Plates directory or catalog file (default: built-in plates)")
                .value_parser(clap::value_parser!(PathBuf))
        )
        .arg(
            Arg::new("list")
                .long("list")
                .help("List supported languages and extensions")
                .action(ArgAction::SetTrue)
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Verbose logging on stderr")
                .action(ArgAction::SetTrue)
        )
        .arg(
            Arg::new("file")
                .value_name("FILE")
                .help("Boilerplate file to create; its path is printed afterwards (default: print code to stdout)")
                .value_parser(clap::value_parser!(PathBuf))
                .index(1)
        )
}

fn run_command(matches: &ArgMatches, config: &Config) -> anyhow::Result<()> {
    let source = matches
        .get_one::<PathBuf>("plates")
        .or(config.plates.path.as_ref());
    let store = cli::load_store(source.map(PathBuf::as_path))?;

    if matches.get_flag("list-languages") {
        return cli::commands::list::handle_list_languages(&store);
    }
    if matches.get_flag("list-extensions") {
        return cli::commands::list::handle_list_extensions(&store);
    }
    if matches.get_flag("list") {
        cli::commands::list::handle_list(&store);
        return Ok(());
    }

    cli::commands::plate::handle_plate(matches, store, config)
}
