use crate::db::pool::DbPool;
use crate::db::queries::{count_negative, count_records, load_raw_dates, sum_hours};
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RED, RESET, YELLOW, color_for_hours};
use crate::utils::time::decimal_to_clock;
use std::fs;

pub fn print_db_info(pool: &DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) TOTAL RECORDS
    //
    let count = count_records(&pool.conn)?;
    println!(
        "{}• Total records:{} {}{}{}",
        CYAN, RESET, GREEN, count, RESET
    );

    //
    // 3) DATE RANGE (dates are DD/MM/YYYY text, so compare parsed values;
    //    rows `db --check` would flag are left out)
    //
    let dates: Vec<_> = load_raw_dates(&pool.conn)?
        .iter()
        .filter_map(|(_, raw)| crate::utils::date::parse_date(raw))
        .collect();
    let first = dates.iter().min().copied();
    let last = dates.iter().max().copied();

    let fmt = |d: Option<chrono::NaiveDate>| {
        d.map(|d| crate::utils::date::format_date(&d))
            .unwrap_or_else(|| format!("{GREY}--{RESET}"))
    };

    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", fmt(first));
    println!("    to:   {}", fmt(last));

    //
    // 4) HOUR BANK
    //
    let total = sum_hours(&pool.conn)?;
    let negatives = count_negative(&pool.conn)?;
    println!(
        "{}• Total hours:{} {}{}{}",
        CYAN,
        RESET,
        color_for_hours(total),
        decimal_to_clock(total),
        RESET
    );
    println!(
        "{}• Days below baseline:{} {}{}{}",
        CYAN, RESET, RED, negatives, RESET
    );

    println!();
    Ok(())
}
