use anyhow::Context;
use clap::Parser;
use pageview::script::{self, StepOutcome};
use pageview::{
    default_config_path, init_logging, Cli, DocumentInfo, EventFilter, ViewerConfig,
    ViewerEngine, BUILD_DATE, VERSION,
};
use std::io::Read;
use std::path::Path;

fn load_config(path: Option<&Path>) -> anyhow::Result<ViewerConfig> {
    let config = match path {
        Some(path) => ViewerConfig::load_from_file(path)
            .with_context(|| format!("Failed to load {}", path.display()))?,
        None => ViewerConfig::load_or_default(&default_config_path()?)?,
    };
    Ok(config)
}

fn read_script(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut source = String::new();
            std::io::stdin()
                .read_to_string(&mut source)
                .context("Failed to read stdin")?;
            Ok(source)
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging()?;
    tracing::info!("PageView {} ({})", VERSION, BUILD_DATE);

    let config = load_config(cli.config.as_deref())?;
    let steps = script::parse_script(&read_script(cli.script.as_deref())?)?;

    let mut engine = ViewerEngine::new(config);
    engine.events().subscribe(EventFilter::All, |event| {
        tracing::debug!(category = ?event.category(), "{:?}", event);
    });
    engine.open_document(DocumentInfo::uniform(cli.pages, cli.page_size))?;
    println!("{}", script::status_line(&engine));

    for step in steps {
        match script::apply(&mut engine, step)? {
            StepOutcome::Applied => {
                println!("{:<28} {}", step.to_string(), script::status_line(&engine))
            }
            StepOutcome::Ignored => println!("{:<28} (ignored)", step.to_string()),
        }
    }

    Ok(())
}
