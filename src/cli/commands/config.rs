use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{header, info, success};
use crate::utils::time::decimal_to_clock;
use std::path::Path;
use std::process::Command;

/// `$VISUAL`, then `$EDITOR`, then the platform default.
fn pick_editor(requested: Option<&str>) -> String {
    if let Some(e) = requested {
        return e.to_string();
    }
    std::env::var("VISUAL")
        .or_else(|_| std::env::var("EDITOR"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        })
}

/// Settings in effect for this run, after `--db` and path resolution.
fn print_resolved(cfg: &Config, path: &Path) {
    header("Configuration");

    let source = if path.exists() {
        "loaded"
    } else {
        "not found, defaults in use"
    };
    println!("Config file:     {} ({})", path.display(), source);

    let db_state = if Path::new(&cfg.database).exists() {
        ""
    } else {
        " (not created yet)"
    };
    println!("Database:        {}{}", cfg.database, db_state);
    println!(
        "Daily baseline:  {} ({} h)",
        decimal_to_clock(cfg.daily_baseline_hours),
        cfg.daily_baseline_hours
    );
    println!("Separator:       '{}'", cfg.separator());
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    else {
        return Ok(());
    };

    let path = Config::config_file();

    if *print_config {
        print_resolved(cfg, &path);
    }

    if *edit_config {
        if !path.exists() {
            cfg.save()?;
            info(format!("Created {}", path.display()));
        }

        let editor = pick_editor(editor.as_deref());
        let status = Command::new(&editor)
            .arg(&path)
            .status()
            .map_err(|e| AppError::Config(format!("cannot run editor '{}': {}", editor, e)))?;
        if !status.success() {
            return Err(AppError::Config(format!(
                "editor '{}' exited with {}",
                editor, status
            )));
        }

        // Catch a broken file now rather than on the next start.
        let reloaded = Config::load()?;
        success(format!("Configuration saved using '{}'", editor));
        print_resolved(&reloaded, &path);
    }

    if !(*print_config || *edit_config) {
        info("Nothing to do: pass --print or --edit.");
    }

    Ok(())
}
