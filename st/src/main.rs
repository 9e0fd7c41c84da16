use std::path::PathBuf;

use chrono::Local;
use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;

use stencil::cli::{Cli, Command};
use stencil::config::Config;
use stencil::templates::embedded;
use stencil::{GenerateRequest, Generator, NameValidator, TemplateKind, TemplateLoader};

fn setup_logging() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();
    Ok(())
}

/// Fill a request from CLI flags, falling back to config values
#[allow(clippy::too_many_arguments)]
fn build_request(
    config: &Config,
    name: String,
    kind: Option<String>,
    description: Option<String>,
    author: Option<String>,
    namespace: Option<String>,
    ext: Option<String>,
    dir: Option<PathBuf>,
) -> GenerateRequest {
    GenerateRequest {
        kind: kind.as_deref().map(TemplateKind::from_name).unwrap_or(TemplateKind::BasicType),
        name,
        description: description.unwrap_or_default(),
        author: author.unwrap_or_else(|| config.author.clone()),
        namespace: namespace.unwrap_or_else(|| config.namespace.clone()),
        link: config.link.clone(),
        out_dir: dir.unwrap_or_else(|| PathBuf::from(".")),
        extension: ext.unwrap_or_else(|| config.extension.clone()),
    }
}

fn generator(config: &Config) -> Generator {
    Generator::new(
        TemplateLoader::new(&config.templates_dir),
        NameValidator::new(&config.reserved_words),
    )
}

fn main() -> Result<()> {
    setup_logging().context("Failed to setup logging")?;

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    info!("stencil starting");

    match cli.command {
        Command::New {
            name,
            kind,
            description,
            author,
            namespace,
            ext,
            dir,
        } => {
            let request = build_request(&config, name, kind, description, author, namespace, ext, dir);
            let path = generator(&config).create(&request, Local::now())?;
            println!("{} Created {}", "✓".green(), path.display().to_string().cyan());
        }
        Command::Preview {
            name,
            kind,
            description,
            author,
            namespace,
            ext,
        } => {
            let request = build_request(&config, name, kind, description, author, namespace, ext, None);
            let rendered = generator(&config).preview(&request, Local::now());
            println!("{}", rendered);
        }
        Command::Kinds => {
            for kind in TemplateKind::ALL {
                println!("{}  ({})", kind.name().cyan(), kind.file_name().dimmed());
            }
        }
        Command::Init { force } => {
            std::fs::create_dir_all(&config.templates_dir)
                .context("Failed to create templates directory")?;
            for kind in TemplateKind::ALL {
                let path = config.templates_dir.join(kind.file_name());
                if path.exists() && !force {
                    println!(
                        "{} {} exists, skipping (use --force to overwrite)",
                        "-".yellow(),
                        path.display()
                    );
                    continue;
                }
                std::fs::write(&path, embedded::get(*kind))
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                println!("{} Wrote {}", "✓".green(), path.display().to_string().cyan());
            }
        }
    }

    Ok(())
}
