//! Command-line interface for x0-site
//! Renders highlighted code and page fragments for the x0 landing page.
//!
//! Usage:
//!   x0site tokens `<path>` [--format `<format>`]      - Tokenize a source file
//!   x0site highlight `<path>` [--title `<title>`]     - Render a code block fragment
//!   x0site page `<content.yaml>`                    - Render the page fragment
//!   x0site formats                                  - List available token formats

use clap::{Arg, ArgAction, ArgMatches, Command};
use std::time::Instant;
use x0_site::components::CodeBlock;
use x0_site::config::{Loader, SiteConfig};
use x0_site::formats::FormatRegistry;
use x0_site::logging::{init_logging, LogFormat};
use x0_site::site::{render_page, SiteContent};
use x0_site::tokenize_block;

fn main() {
    let matches = Command::new("x0site")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Highlight code and render x0 landing page fragments")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .help("TOML file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("log-format")
                .long("log-format")
                .global(true)
                .default_value("pretty")
                .help("Log output format: 'pretty' or 'json'"),
        )
        .subcommand(
            Command::new("tokens")
                .about("Tokenize a source file")
                .arg(
                    Arg::new("path")
                        .help("Path to the source file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (e.g., 'tag', 'json', 'html')")
                        .default_value("tag"),
                ),
        )
        .subcommand(
            Command::new("highlight")
                .about("Render a source file as a code block fragment")
                .arg(
                    Arg::new("path")
                        .help("Path to the source file")
                        .required(true)
                        .index(1),
                )
                .arg(Arg::new("title").long("title").short('t').help("Title bar text"))
                .arg(
                    Arg::new("language")
                        .long("language")
                        .short('l')
                        .help("Language label shown in the title bar"),
                )
                .arg(
                    Arg::new("no-line-numbers")
                        .long("no-line-numbers")
                        .action(ArgAction::SetTrue)
                        .help("Hide line numbers"),
                ),
        )
        .subcommand(
            Command::new("page")
                .about("Render the page fragment from a content file")
                .arg(
                    Arg::new("content")
                        .help("Path to the YAML content file")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(Command::new("formats").about("List available token formats"))
        .get_matches();

    let log_format = matches
        .get_one::<String>("log-format")
        .map(|s| LogFormat::from_str_lossy(s))
        .unwrap_or(LogFormat::Pretty);
    init_logging("warn", log_format);

    match matches.subcommand() {
        Some(("tokens", sub)) => {
            let config = load_config(&matches, sub);
            let path = required(sub, "path");
            let format = required(sub, "format");
            handle_tokens_command(&config, path, format);
        }
        Some(("highlight", sub)) => {
            let config = load_config(&matches, sub);
            handle_highlight_command(&config, sub);
        }
        Some(("page", sub)) => {
            let config = load_config(&matches, sub);
            handle_page_command(&config, required(sub, "content"));
        }
        Some(("formats", _)) => handle_formats_command(),
        _ => unreachable!(),
    }
}

fn required<'a>(matches: &'a ArgMatches, name: &str) -> &'a str {
    matches
        .get_one::<String>(name)
        .map(String::as_str)
        .unwrap_or_else(|| fail(&format!("missing argument '{}'", name)))
}

fn fail(message: &str) -> ! {
    eprintln!("Error: {}", message);
    std::process::exit(1);
}

/// Build the configuration: defaults, then `--config`, then CLI flags
fn load_config(matches: &ArgMatches, sub: &ArgMatches) -> SiteConfig {
    let mut loader = Loader::new();
    if let Some(path) = sub.get_one::<String>("config").or(matches.get_one::<String>("config")) {
        loader = loader.with_file(path);
    }

    let overrides = || -> Result<Loader, config::ConfigError> {
        let mut loader = loader.clone();
        if sub.try_get_one::<bool>("no-line-numbers").ok().flatten() == Some(&true) {
            loader = loader.set_override("code_block.show_line_numbers", false)?;
        }
        if let Ok(Some(language)) = sub.try_get_one::<String>("language") {
            loader = loader.set_override("code_block.language", language.as_str())?;
        }
        Ok(loader)
    };

    overrides()
        .and_then(Loader::build)
        .unwrap_or_else(|e| fail(&format!("Configuration error: {}", e)))
}

fn read_source(path: &str) -> String {
    std::fs::read_to_string(path).unwrap_or_else(|e| fail(&format!("Error reading file: {}", e)))
}

/// Handle the tokens command
fn handle_tokens_command(config: &SiteConfig, path: &str, format: &str) {
    let source = read_source(path);
    let lines = tokenize_block(&source);
    tracing::debug!(path, lines = lines.len(), format, "tokenized file");

    let registry = FormatRegistry::with_theme(config.theme.to_theme());
    let output = registry
        .serialize(&lines, format)
        .unwrap_or_else(|e| fail(&e.to_string()));

    print!("{}", output);
    if !output.ends_with('\n') {
        println!();
    }
}

/// Handle the highlight command
fn handle_highlight_command(config: &SiteConfig, sub: &ArgMatches) {
    let source = read_source(required(sub, "path"));
    let mut block = CodeBlock::from_config(source, &config.code_block);
    if let Some(title) = sub.get_one::<String>("title") {
        block = block.with_title(title.clone());
    }

    print!("{}", block.render(&config.theme.to_theme(), Instant::now()));
}

/// Handle the page command
fn handle_page_command(config: &SiteConfig, path: &str) {
    let content = SiteContent::load(path).unwrap_or_else(|e| fail(&e.to_string()));
    print!("{}", render_page(&content, config));
}

/// Handle the formats command
fn handle_formats_command() {
    let registry = FormatRegistry::with_defaults();
    println!("Available formats:\n");
    for name in registry.list_formats() {
        let description = registry.get(&name).map(|f| f.description()).unwrap_or("");
        println!("  {}", name);
        println!("    {}", description);
    }
}
