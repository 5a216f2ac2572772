use plastrack_core::LeaderboardEntry;
use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};
use tabled::{Table, Tabled};

// Helper struct for Table Row
#[derive(Tabled)]
struct BoardRow {
    #[tabled(rename = "Rank")]
    rank: String,
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Username")]
    username: String,
    #[tabled(rename = "Per Day (g)")]
    per_day: String,
    #[tabled(rename = "Per Year (g)")]
    per_year: String,
    #[tabled(rename = "Per Year (kg)")]
    per_year_kg: String,
}

pub fn show_board(entries: &[LeaderboardEntry]) {
    if entries.is_empty() {
        println!("No entries yet. Submit one with `plastrack submit`.");
        return;
    }

    let rows: Vec<BoardRow> = entries
        .iter()
        .enumerate()
        .map(|(i, entry)| BoardRow {
            rank: format!("#{}", i + 1),
            id: entry.id,
            name: entry.name.clone(),
            username: entry.username.clone(),
            per_day: format!("{:.2}", entry.per_day),
            per_year: format!("{:.2}", entry.per_year),
            per_year_kg: format!("{:.2}", entry.per_year_kg),
        })
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN)); // Header color

    println!("{}", table);
}
