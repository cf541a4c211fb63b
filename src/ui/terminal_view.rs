//! Terminal rendering of the record browser.

use crate::core::view::View;
use crate::models::record::Record;
use crate::ui::messages::header;
use crate::utils::table::{Align, Column, Table};

pub struct TerminalView {
    open: bool,
    separator: char,
}

impl TerminalView {
    pub fn new(separator: char) -> Self {
        Self {
            open: false,
            separator,
        }
    }

    fn render_records(&self, records: &[Record]) -> String {
        let mut table = Table::new(
            vec![
                Column::new("ID", 2, Align::Right),
                Column::new("Date", 10, Align::Left),
                Column::new("Hours (HH:MM)", 6, Align::Right),
            ],
            self.separator,
        );

        for r in records {
            table.add_row(vec![r.id.to_string(), r.date_str(), r.hours_str()]);
        }

        table.render()
    }
}

impl View for TerminalView {
    fn show_browser(&mut self) {
        self.open = true;
    }

    fn set_records(&mut self, records: &[Record]) {
        if !self.open {
            return;
        }

        println!();
        header("Records");
        if records.is_empty() {
            println!("No records yet.");
        } else {
            print!("{}", self.render_records(records));
        }
    }

    fn set_summary_label(&mut self, label: &str) {
        if self.open {
            println!("\x1b[1m{}\x1b[0m\n", label);
        }
    }
}
