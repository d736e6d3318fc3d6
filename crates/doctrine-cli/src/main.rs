use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use doctrine_core::prelude::*;
use doctrine_core::{doctrine_filename, open_workspace, playbook_filename, twin_draft_filename};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

fn cli() -> Command {
    let export = Arg::new("export")
        .long("export")
        .num_args(0..=1)
        .value_name("FORMAT")
        .help("Also write the document to the export directory (txt or md)");

    let traits = Arg::new("trait")
        .long("trait")
        .action(ArgAction::Append)
        .value_name("NAME=DESCRIPTION")
        .help("Blueprint trait, repeatable");

    Command::new("doctrine")
        .version(doctrine_core::VERSION)
        .about("Founder doctrine generation engine")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("TOML configuration file"),
        )
        .arg(
            Arg::new("date")
                .long("date")
                .global(true)
                .value_parser(value_parser!(NaiveDate))
                .value_name("YYYY-MM-DD")
                .help("Date printed on generated documents"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Output as JSON"),
        )
        .subcommand(
            Command::new("simulate")
                .about("Score assumptions and print outcome branches")
                .arg(
                    Arg::new("assumption")
                        .long("assumption")
                        .action(ArgAction::Append)
                        .required(true)
                        .value_name("NAME=VALUE")
                        .help("Scenario assumption, repeatable"),
                ),
        )
        .subcommand(
            Command::new("doctrine")
                .about("Generate a doctrine manual")
                .arg(Arg::new("name").long("name").help("Blueprint name"))
                .arg(traits.clone())
                .arg(export.clone()),
        )
        .subcommand(
            Command::new("playbook")
                .about("Generate a narrative playbook")
                .arg(Arg::new("title").long("title").required(true))
                .arg(
                    Arg::new("audience")
                        .long("audience")
                        .required(true)
                        .help(audience_help()),
                )
                .arg(Arg::new("constraints").long("constraints"))
                .arg(export.clone()),
        )
        .subcommand(
            Command::new("draft")
                .about("Synthesize a founder-voice draft")
                .arg(
                    Arg::new("mode")
                        .long("mode")
                        .required(true)
                        .help("board-memo, investment-eval or pr-fallout"),
                )
                .arg(Arg::new("prompt").long("prompt").required(true))
                .arg(
                    Arg::new("artifact")
                        .long("artifact")
                        .action(ArgAction::Append)
                        .value_parser(value_parser!(PathBuf))
                        .value_name("FILE")
                        .help("Source artifact text file, repeatable"),
                )
                .arg(traits)
                .arg(export),
        )
        .subcommand(
            Command::new("demo")
                .about("Seed a sample workspace and summarize it"),
        )
}

/// Known audience labels; anything else gets the generic framing
fn audience_help() -> String {
    let known = Audience::KNOWN;
    let labels: Vec<&str> = known.iter().map(Audience::as_str).collect();
    format!(
        "{} (exact match; any other label gets generic framing)",
        labels.join(", ")
    )
}

fn load_config(matches: &ArgMatches) -> Result<EngineConfig> {
    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => EngineConfig::from_file(path)?,
        None => EngineConfig::new(),
    };
    if let Some(date) = matches.get_one::<NaiveDate>("date") {
        config = config.with_fixed_date(*date);
    }
    Ok(config)
}

fn parse_all<T>(args: &ArgMatches, id: &str) -> Result<Vec<T>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    args.get_many::<String>(id)
        .unwrap_or_default()
        .map(|raw| raw.parse::<T>().with_context(|| format!("invalid --{id} '{raw}'")))
        .collect()
}

/// Requested export format, if any; a bare `--export` uses the configured default
fn export_format(args: &ArgMatches, config: &EngineConfig) -> Result<Option<ExportFormat>> {
    if !args.contains_id("export") {
        return Ok(None);
    }
    match args.get_one::<String>("export") {
        Some(raw) => Ok(Some(raw.parse()?)),
        None => Ok(Some(config.default_export_format)),
    }
}

async fn read_artifact(path: &Path) -> Result<Artifact> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read artifact {}", path.display()))?;
    let name = path
        .file_stem()
        .map_or_else(|| path.display().to_string(), |s| s.to_string_lossy().into_owned());
    Ok(Artifact::new(name, content))
}

async fn emit_document(
    config: &EngineConfig,
    json: bool,
    content: &str,
    format: Option<ExportFormat>,
    filename: impl FnOnce(ExportFormat) -> String,
) -> Result<()> {
    let exported = match format {
        Some(format) => Some(
            Exporter::new(&config.export_dir)
                .export(content, &filename(format), format)
                .await?,
        ),
        None => None,
    };

    if json {
        let value = serde_json::json!({
            "content": content,
            "exported_to": exported.as_ref().map(|p| p.display().to_string()),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("{content}");
        if let Some(path) = exported {
            eprintln!("Exported to {}", path.display());
        }
    }
    Ok(())
}

async fn run(matches: ArgMatches) -> Result<()> {
    let config = load_config(&matches)?;
    let json = matches.get_flag("json");
    let engine = GenerationEngine::new(config.clone());
    tracing::debug!(?config, json, "configuration resolved");

    match matches.subcommand() {
        Some(("simulate", args)) => {
            let assumptions: Vec<Assumption> = parse_all(args, "assumption")?;
            let result = engine.simulate(&assumptions).await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("Probability of success: {}%", result.probability);
                println!();
                println!("Key drivers:");
                for driver in &result.drivers {
                    println!("  • {driver}");
                }
                println!();
                println!("Decision branches:");
                for branch in &result.branches {
                    println!("  {}", branch.name);
                    println!("    {}", branch.rationale);
                }
            }
        }
        Some(("doctrine", args)) => {
            let name = args.get_one::<String>("name").map_or("", String::as_str);
            let traits: Vec<Trait> = parse_all(args, "trait")?;
            let manual = engine.doctrine_manual(name, &traits).await?;
            let blueprint = doctrine_core::store::blueprint_name(name);
            emit_document(&config, json, &manual, export_format(args, &config)?, |f| {
                doctrine_filename(&blueprint, f)
            })
            .await?;
        }
        Some(("playbook", args)) => {
            let title = args.get_one::<String>("title").map_or("", String::as_str);
            let audience = Audience::parse(
                args.get_one::<String>("audience").map_or("", String::as_str),
            );
            let constraints = args.get_one::<String>("constraints").map_or("", String::as_str);
            let playbook = engine.playbook(title, &audience, constraints).await?;
            emit_document(&config, json, &playbook, export_format(args, &config)?, |f| {
                playbook_filename(title, f)
            })
            .await?;
        }
        Some(("draft", args)) => {
            let mode: DraftMode = args
                .get_one::<String>("mode")
                .map_or("", String::as_str)
                .parse()?;
            let prompt = args.get_one::<String>("prompt").map_or("", String::as_str);
            let traits: Vec<Trait> = parse_all(args, "trait")?;

            let mut artifacts = Vec::new();
            for path in args.get_many::<PathBuf>("artifact").unwrap_or_default() {
                artifacts.push(read_artifact(path).await?);
            }

            let draft = engine.twin_draft(prompt, mode, &artifacts, &traits).await?;
            emit_document(&config, json, &draft, export_format(args, &config)?, |f| {
                twin_draft_filename(mode, f)
            })
            .await?;
        }
        Some(("demo", _)) => {
            let engine = GenerationEngine::new(config.with_seed_demo_data(true));
            run_demo(&engine, json).await?;
        }
        Some((other, _)) => bail!("unknown command '{other}'"),
        None => bail!("no command given"),
    }
    Ok(())
}

async fn run_demo(engine: &GenerationEngine, json: bool) -> Result<()> {
    let store = open_workspace(engine).await?;

    let blueprints = store.list::<Blueprint>().await?;
    let artifacts = store.list::<StoredArtifact>().await?;
    let scenarios = store.list::<Scenario>().await?;
    let playbooks = store.list::<Playbook>().await?;
    let drafts = store.list::<TwinDraft>().await?;

    if json {
        let value = serde_json::json!({
            "blueprints": blueprints,
            "artifacts": artifacts,
            "scenarios": scenarios,
            "playbooks": playbooks,
            "twin_drafts": drafts,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("Demo workspace");
    println!("==============");
    for blueprint in &blueprints {
        println!(
            "Blueprint  {}  {} ({} traits)",
            blueprint.id,
            blueprint.name,
            blueprint.traits.len()
        );
    }
    for artifact in &artifacts {
        println!("Artifact   {}  {}", artifact.id, artifact.name);
    }
    for scenario in &scenarios {
        println!(
            "Scenario   {}  {}: {}",
            scenario.id, scenario.name, scenario.outcome_summary
        );
    }
    for playbook in &playbooks {
        println!("Playbook   {}  {} for {}", playbook.id, playbook.title, playbook.audience);
    }
    for draft in &drafts {
        println!("Twin draft {}  {}: {}", draft.id, draft.mode.label(), draft.prompt);
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    run(cli().get_matches()).await
}
