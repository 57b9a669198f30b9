use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use serde_json::json;

use crate::config::{
    ConfigError, Settings, default_config_path, load_settings_or_default, save_settings,
};
use crate::logging;
use crate::paging::{page_count, paginate};
use crate::runtime::{AppContext, AppError, Result};

use super::render;
use super::types::{Cli, Commands, ConfigCommand, HistoryCommand, HistoryStats};

pub fn run_cli() -> std::result::Result<(), String> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    run(cli).map_err(|error| error.to_string())
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::History(command) => run_history(command, cli.config.as_deref(), cli.history),
        Commands::Config { command } => run_config(&command, cli.config.as_deref(), cli.history),
    }
}

fn run_history(
    command: HistoryCommand,
    explicit: Option<&Path>,
    history: Option<PathBuf>,
) -> Result<()> {
    let mut settings = load_settings_or_default(explicit)?;
    if let Some(history) = history {
        settings.history_path = Some(history);
    }
    let app = AppContext::new(settings);
    let mut store = app.open_history()?;
    let mut out = io::stdout().lock();

    match command {
        HistoryCommand::List {
            query,
            page,
            page_size,
            json,
        } => {
            let request = app.view_request(query, page, page_size);
            store.search(request.query());
            let groups = store.prompt_groups();
            let request = request.clamped_to(page_count(groups.len(), request.page_size()));
            let page = paginate(groups, &request);
            if json {
                serde_json::to_writer_pretty(&mut out, &page)?;
                writeln!(out)?;
            } else {
                write!(out, "{}", render::summary(&store, &page))?;
                write!(out, "{}", render::page(&page))?;
            }
        }
        HistoryCommand::Show { job_id, json } => {
            let location = store
                .find_image(&job_id)
                .ok_or_else(|| AppError::UnknownJob(job_id.clone()))?;
            let details = render::image_details(&location);
            if json {
                serde_json::to_writer_pretty(&mut out, &details)?;
                writeln!(out)?;
            } else {
                write!(out, "{}", render::details_table(&details))?;
            }
        }
        HistoryCommand::Delete { job_id, yes } => {
            if !yes {
                let Some(location) = store.find_image(&job_id) else {
                    writeln!(out, "{}", json!({"status": "absent", "job_id": job_id}))?;
                    return Ok(());
                };
                let target = location
                    .image
                    .generated_img()
                    .map(|path| path.display().to_string())
                    .unwrap_or_else(|| "(no file recorded)".to_string());
                let question = format!(
                    "{}\nDon't delete while DiffusionBee is running.\nMove {target} to trash and remove job {job_id} from history?",
                    location.image.caption()
                );
                if !confirm(&question)? {
                    writeln!(out, "{}", json!({"status": "cancelled", "job_id": job_id}))?;
                    return Ok(());
                }
            }
            let outcome = app.deletion_service().delete_image(&mut store, &job_id)?;
            serde_json::to_writer_pretty(&mut out, &outcome)?;
            writeln!(out)?;
        }
        HistoryCommand::Stats { query } => {
            store.search(query.as_deref().unwrap_or_default());
            let stats = HistoryStats {
                source: store.data_path().map(|path| path.display().to_string()),
                query: store.query().to_string(),
                total_images: store.total_images(),
                image_records: store.total_image_records(),
                grouped_prompts: store.total_grouped_prompts(),
                groups_in_file: store.document().group_count(),
            };
            serde_json::to_writer_pretty(&mut out, &stats)?;
            writeln!(out)?;
        }
    }

    Ok(())
}

fn run_config(
    command: &ConfigCommand,
    explicit: Option<&Path>,
    history: Option<PathBuf>,
) -> Result<()> {
    let mut out = io::stdout().lock();
    match command {
        ConfigCommand::Show => {
            let mut settings = load_settings_or_default(explicit)?;
            if let Some(history) = history {
                settings.history_path = Some(history);
            }
            serde_json::to_writer_pretty(&mut out, &settings)?;
            writeln!(out)?;
        }
        ConfigCommand::Init { force } => {
            let path = explicit
                .map(Path::to_path_buf)
                .or_else(default_config_path)
                .ok_or_else(|| {
                    ConfigError::Invalid("no configuration directory available".to_string())
                })?;
            if path.exists() && !force {
                return Err(ConfigError::Invalid(format!(
                    "{} already exists; pass --force to overwrite",
                    path.display()
                ))
                .into());
            }
            let settings = Settings {
                history_path: history,
                ..Settings::default()
            };
            save_settings(&path, &settings)?;
            writeln!(out, "{}", json!({"status": "ok", "config": path}))?;
        }
    }
    Ok(())
}

fn confirm(question: &str) -> io::Result<bool> {
    let mut stderr = io::stderr().lock();
    write!(stderr, "{question} [y/N] ")?;
    stderr.flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}
