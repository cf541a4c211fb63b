#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rhourlog::core::controller::Controller;
use rhourlog::core::view::View;
use rhourlog::db::store::RecordStore;
use rhourlog::models::record::Record;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rhl() -> Command {
    cargo_bin_cmd!("rhourlog")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rhourlog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Today as the CLI sees it, DD/MM/YYYY.
pub fn today_str() -> String {
    chrono::Local::now().format("%d/%m/%Y").to_string()
}

pub fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .expect("valid date")
        .and_time(NaiveTime::from_hms_opt(h, min, 0).expect("valid time"))
}

/// View that remembers what the controller pushed into it.
#[derive(Default)]
pub struct RecordingView {
    pub opened: bool,
    pub records: Vec<Record>,
    pub summary: Option<String>,
    pub refreshes: usize,
}

impl View for RecordingView {
    fn show_browser(&mut self) {
        self.opened = true;
    }

    fn set_records(&mut self, records: &[Record]) {
        self.records = records.to_vec();
        self.refreshes += 1;
    }

    fn set_summary_label(&mut self, label: &str) {
        self.summary = Some(label.to_string());
    }
}

/// A fresh store with the schema in place.
pub fn fresh_store(name: &str) -> RecordStore {
    let store = RecordStore::new(setup_test_db(name));
    store.ensure_schema().expect("schema");
    store
}

/// Controller over a fresh store with the clock pinned to `now`.
pub fn controller_at(name: &str, now: NaiveDateTime) -> Controller<RecordingView> {
    Controller::new(fresh_store(name), RecordingView::default()).with_clock(move || now)
}

/// A database as the old tool left it: `registros` only, no `log` table.
pub fn legacy_db(name: &str, inserts: &str) -> String {
    let db_path = setup_test_db(name);
    let conn = rusqlite::Connection::open(&db_path).expect("open legacy db");
    conn.execute_batch(&format!(
        "CREATE TABLE registros (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            Data TEXT NOT NULL,
            Horas FLOAT NOT NULL
        );
        {inserts}"
    ))
    .expect("create legacy db");
    db_path
}
