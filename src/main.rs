use careers_atlas::core::ContentProvider;
use careers_atlas::utils::error::ErrorSeverity;
use careers_atlas::utils::logger;
use careers_atlas::{
    CliConfig, Command, ContentError, ContentExporter, ContentLoader, ContentStore, LocalStorage,
    RoleQuery, RuntimeConfig, SectorTag,
};
use clap::Parser;
use serde::Serialize;
use serde_json::json;

fn print_json<T: Serialize>(value: &T) -> careers_atlas::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn load_store(config: &RuntimeConfig) -> careers_atlas::Result<ContentStore> {
    match config.content_dir() {
        Some(dir) => {
            tracing::info!("Loading content tables from {}", dir);
            ContentLoader::new(LocalStorage::new(dir))
                .with_builtin_fallback(config.fallback_to_builtin())
                .load()
                .await
        }
        None => {
            tracing::debug!("Using built-in content tables");
            ContentStore::builtin()
        }
    }
}

async fn run(command: Command, config: &RuntimeConfig) -> careers_atlas::Result<()> {
    let store = load_store(config).await?;

    match command {
        Command::Countries => {
            let names: Vec<&str> = store.countries().map(|(name, _)| name).collect();
            print_json(&names)
        }
        Command::Country { name } => print_json(store.require_country(&name)?),
        Command::Sector { sector } => print_json(store.sector_by_name(&sector)?),
        Command::Resolve { country, sector } => {
            store.require_country(&country)?;
            let tag: SectorTag = sector.parse()?;
            print_json(&store.resolve_sector_for_country(&country, tag))
        }
        Command::Occupation { role } => print_json(&store.occupation_detail(&role)),
        Command::Skill { sector, skill } => {
            print_json(&store.skill_detail(sector.parse()?, &skill))
        }
        Command::Ventures { sector } => print_json(&store.venture_playbook(sector.parse()?)),
        Command::Venture { title } => print_json(&json!({
            "title": title,
            "regulations": store.venture_regulations(&title),
            "challenges": store.venture_challenges(&title),
        })),
        Command::Credentials {
            country,
            sector,
            role,
            tags,
        } => {
            store.require_country(&country)?;
            let tag: SectorTag = sector.parse()?;
            let query = if !tags.is_empty() {
                RoleQuery::Tags(tags.into_iter().collect())
            } else {
                match role {
                    Some(role) => RoleQuery::Name(role),
                    None => {
                        return Err(ContentError::MissingConfigError {
                            field: "role or --tags".to_string(),
                        })
                    }
                }
            };
            print_json(&store.evaluate_credential_rules(&country, tag, query))
        }
        Command::Pathway { sector } => print_json(store.pathway(sector.parse()?)),
        Command::Audit => {
            let audit = store.audit();
            tracing::info!("{} content gaps found", audit.gaps.len());
            print_json(&audit)
        }
        Command::Export { .. } => {
            let exporter = ContentExporter::new(LocalStorage::new(config.output_path()));
            let written = exporter.export(&store, &config.export_formats).await?;
            for path in &written {
                println!("{}/{}", config.output_path(), path);
            }
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    let config = match RuntimeConfig::from_cli(&cli) {
        Ok(config) => config,
        Err(e) => {
            logger::init_cli_logger(if cli.verbose { "debug" } else { "info" });
            tracing::error!("Configuration validation failed: {}", e);
            eprintln!("{}", e.user_friendly_message());
            eprintln!("Suggestion: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    if config.json_logs {
        logger::init_json_logger(&config.log_level);
    } else {
        logger::init_cli_logger(&config.log_level);
    }
    tracing::debug!("Runtime config: {:?}", config);

    if let Err(e) = run(cli.command, &config).await {
        tracing::error!(
            "Command failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("{}", e.user_friendly_message());
        eprintln!("Suggestion: {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        std::process::exit(exit_code);
    }
}
