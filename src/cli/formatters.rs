//! Output formatting module for CLI display
//!
//! This module handles all terminal output formatting, separating
//! the concerns of scraping and computing from presentation.

use anyhow::Context;
use colored::Colorize;
use serde::Serialize;
use tabled::{
    settings::{object::Columns, Alignment, Style},
    Table, Tabled,
};

use scratchpad::error::Result;
use scratchpad::exercises::Exercise;
use scratchpad::scraping::{ClubLink, ProductListing, SquadReport};

/// Pretty JSON for any serializable result
pub fn format_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("JSON serialization failed")
}

/// Format a scraped product for terminal output
pub fn format_product(product: &ProductListing) -> String {
    format!(
        "{}\n{} {}  ({})\n",
        product.title.bold(),
        "Price:".bright_black(),
        product.whole_price.to_string().green().bold(),
        product.raw_price
    )
}

/// Format the clubs index as a table
pub fn format_clubs_table(clubs: &[ClubLink]) -> String {
    if clubs.is_empty() {
        return format!("{} No clubs found on the page\n", "ℹ".blue().bold());
    }

    #[derive(Tabled)]
    struct ClubRow {
        #[tabled(rename = "#")]
        index: usize,
        #[tabled(rename = "Club")]
        name: String,
        #[tabled(rename = "Link")]
        href: String,
    }

    let rows: Vec<ClubRow> = clubs
        .iter()
        .enumerate()
        .map(|(index, club)| ClubRow {
            index,
            name: club.name.clone().unwrap_or_else(|| "-".to_string()),
            href: club.href.clone(),
        })
        .collect();

    let mut table = Table::new(&rows);
    table.with(Style::rounded());
    table.modify(Columns::new(0..1), Alignment::right());
    format!("{}\n", table)
}

#[derive(Tabled)]
struct PlayerRow {
    #[tabled(rename = "Player")]
    name: String,
    #[tabled(rename = "Country")]
    country: String,
    #[tabled(rename = "Age")]
    age: String,
    #[tabled(rename = "Appearances")]
    appearances: String,
}

/// Format a squad report as a table
pub fn format_squad_table(report: &SquadReport) -> String {
    let mut output = String::new();
    let club = report.club.name.as_deref().unwrap_or(&report.club.href);
    output.push_str(&format!(
        "\n{} {}\n{}\n\n",
        "⚽".cyan().bold(),
        club.bold(),
        report.squad_url.bright_black()
    ));

    if report.players.is_empty() {
        output.push_str(&format!("{} No players found\n", "ℹ".blue().bold()));
        return output;
    }

    let rows: Vec<PlayerRow> = report
        .players
        .iter()
        .map(|p| PlayerRow {
            name: p.name.clone(),
            country: p.country.clone().unwrap_or_else(|| "N/A".to_string()),
            age: p.age.map(|a| a.to_string()).unwrap_or_else(|| "N/A".to_string()),
            appearances: p
                .appearances
                .map(|a| a.to_string())
                .unwrap_or_else(|| "N/A".to_string()),
        })
        .collect();

    let mut table = Table::new(&rows);
    table.with(Style::modern());
    table.modify(Columns::new(2..), Alignment::right());
    output.push_str(&table.to_string());
    output.push_str(&format!("\n\n{} player(s)\n", report.players.len()));
    output
}

/// Format a squad report as CSV (header + one row per player)
pub fn format_squad_csv(report: &SquadReport) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["name", "country", "age", "appearances"])?;
    for player in &report.players {
        writer.write_record([
            player.name.clone(),
            player.country.clone().unwrap_or_default(),
            player.age.map(|a| a.to_string()).unwrap_or_default(),
            player.appearances.map(|a| a.to_string()).unwrap_or_default(),
        ])?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Failed to flush CSV output: {}", e.error()))?;
    String::from_utf8(bytes).context("CSV output is not UTF-8")
}

/// Format the list of exercises
pub fn format_exercise_list(exercises: &[Exercise]) -> String {
    #[derive(Tabled)]
    struct ExerciseRow {
        #[tabled(rename = "Name")]
        name: String,
        #[tabled(rename = "Description")]
        summary: String,
        #[tabled(rename = "Sample input")]
        sample: String,
    }

    let rows: Vec<ExerciseRow> = exercises
        .iter()
        .map(|e| ExerciseRow {
            name: e.name.to_string(),
            summary: e.summary.to_string(),
            sample: e.sample.to_string(),
        })
        .collect();

    let mut table = Table::new(&rows);
    table.with(Style::rounded());
    format!("{}\n", table)
}

/// Format one exercise run
pub fn format_exercise_result(exercise: &Exercise, output: &str) -> String {
    format!(
        "{} {}\n  {} {}\n  {} {}\n",
        "▶".cyan().bold(),
        exercise.name.bold(),
        "input: ".bright_black(),
        exercise.sample,
        "output:".bright_black(),
        output.green()
    )
}

#[derive(Serialize)]
pub struct ExerciseOutcome<'a> {
    pub name: &'a str,
    pub sample: &'a str,
    pub output: String,
}
