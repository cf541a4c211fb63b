use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::log;
use crate::db::pool::DbPool;
use crate::db::store::RecordStore;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// This initializes:
///  - the configuration file (skipped in test mode)
///  - the `storage` directory and the SQLite database
///  - the `registros` and `log` tables
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    println!("⚙️  Initializing rHourLog…");

    if !cli.test {
        cfg.save()?;
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Database   : {}", &cfg.database);

    RecordStore::new(&cfg.database).ensure_schema()?;
    println!("✅ Database initialized at {}", &cfg.database);

    let pool = DbPool::new(&cfg.database)?;
    log::ttlog_best_effort(
        &pool.conn,
        "init",
        "",
        &format!("Database initialized at {}", &cfg.database),
    );

    println!("🎉 rHourLog initialization completed!");
    Ok(())
}
