mod cli;

use reelmatch::{
    config,
    parser::{config::ParserConfig, Media, MediaItem, Parser as NameParser},
    LocalMedia, MediaList, MediaScanner,
};

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands, KindFilter};
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "reelmatch=debug,reelmatch_parser=debug".to_string()
        } else {
            "reelmatch=info".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Identify {
            names,
            subtitle,
            json,
        } => identify(&names, subtitle, json, cli.config.as_deref()),
        Commands::Scan {
            dirs,
            modified_within_hours,
            kind,
            json,
        } => scan(&dirs, modified_within_hours, kind, json, cli.config.as_deref()),
        Commands::Version => {
            println!("reelmatch {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn name_parser(config: &config::Config) -> NameParser {
    NameParser::new(ParserConfig::from(&config.parser))
}

fn identify(
    names: &[String],
    subtitle: bool,
    json: bool,
    config_path: Option<&Path>,
) -> Result<()> {
    let config = config::load_config_or_default(config_path)?;
    let parser = name_parser(&config);

    let mut identified = MediaList::<Media>::new();
    let mut failed = 0usize;
    for name in names {
        let result = if subtitle {
            parser.parse_subtitle(name).map(Media::from)
        } else {
            parser.parse_media(name)
        };

        match result {
            Ok(media) => identified.push(media),
            Err(e) => {
                eprintln!("{}: {}", name, e);
                failed += 1;
            }
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&identified)?);
    } else {
        for media in &identified {
            println!("{}\t{}\t{}", media.kind(), media, media.identity());
        }
    }

    if failed > 0 {
        anyhow::bail!("{} of {} names could not be identified", failed, names.len());
    }
    Ok(())
}

fn scan(
    dirs: &[PathBuf],
    modified_within_hours: Option<i64>,
    kind: Option<KindFilter>,
    json: bool,
    config_path: Option<&Path>,
) -> Result<()> {
    let config = config::load_config_or_default(config_path)?;
    let scanner = MediaScanner::new(config.scan.clone(), name_parser(&config));

    let mut found = scanner.scan(dirs)?;

    found = match kind {
        Some(KindFilter::Movie) => found.filter_movies(),
        Some(KindFilter::Episode) => found.filter_episodes(),
        Some(KindFilter::Subtitle) => found.filter_subtitles(),
        Some(KindFilter::Video) => found.filter_video(),
        None => found,
    };

    if let Some(hours) = modified_within_hours {
        let within = chrono::Duration::try_hours(hours)
            .ok_or_else(|| anyhow::anyhow!("Invalid duration: {} hours", hours))?;
        found = found.filter_modified(within);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&found)?);
    } else {
        for local in &found {
            print_local(local);
        }
        tracing::info!("{} media files", found.len());
    }

    Ok(())
}

fn print_local(local: &LocalMedia) {
    println!(
        "{}\t{}\t{}\t{}",
        local.path().display(),
        local.media().kind(),
        local,
        local.identity()
    );
}
