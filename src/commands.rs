//! Command handlers invoked from `main`

use anyhow::anyhow;
use tracing::info;

use scratchpad::config::Settings;
use scratchpad::error::Result;
use scratchpad::{dashboard, exercises, scraping};

use crate::cli::formatters::{self, ExerciseOutcome};
use crate::cli::ExerciseCommands;

/// Output switches shared by every command
#[derive(Debug, Clone, Copy)]
pub struct OutputOptions {
    pub json: bool,
}

pub async fn amazon(settings: &Settings, url: Option<String>, out: OutputOptions) -> Result<()> {
    let url = url.unwrap_or_else(|| settings.scraper.product_url.clone());
    let client = scraping::build_client(&settings.scraper)?;
    let product = scraping::amazon::fetch_product(&client, &url).await?;

    if out.json {
        println!("{}", formatters::format_json(&product)?);
    } else {
        print!("{}", formatters::format_product(&product));
    }
    Ok(())
}

pub async fn clubs(settings: &Settings, url: Option<String>, out: OutputOptions) -> Result<()> {
    let url = url.unwrap_or_else(|| settings.scraper.clubs_url.clone());
    let client = scraping::build_client(&settings.scraper)?;
    let clubs = scraping::premier_league::fetch_club_links(&client, &url).await?;

    if out.json {
        println!("{}", formatters::format_json(&clubs)?);
    } else {
        print!("{}", formatters::format_clubs_table(&clubs));
    }
    Ok(())
}

pub async fn squad(
    settings: &Settings,
    club: usize,
    url: Option<String>,
    csv: bool,
    out: OutputOptions,
) -> Result<()> {
    let url = url.unwrap_or_else(|| settings.scraper.clubs_url.clone());
    let client = scraping::build_client(&settings.scraper)?;
    let report = scraping::premier_league::scrape_squad(
        &client,
        &url,
        &settings.scraper.site_base_url,
        club,
    )
    .await?;

    if out.json {
        println!("{}", formatters::format_json(&report)?);
    } else if csv {
        print!("{}", formatters::format_squad_csv(&report)?);
    } else {
        print!("{}", formatters::format_squad_table(&report));
    }
    Ok(())
}

pub async fn serve_dashboard(
    settings: &Settings,
    host: Option<String>,
    port: Option<u16>,
) -> Result<()> {
    let mut dashboard_settings = settings.dashboard.clone();
    if let Some(host) = host {
        dashboard_settings.host = host;
    }
    if let Some(port) = port {
        dashboard_settings.port = port;
    }
    info!(
        "Starting dashboard on {}:{}",
        dashboard_settings.host, dashboard_settings.port
    );
    dashboard::serve(dashboard_settings).await
}

pub fn exercise_command(action: &ExerciseCommands, out: OutputOptions) -> Result<()> {
    match action {
        ExerciseCommands::List => {
            if out.json {
                let names: Vec<&str> = exercises::EXERCISES.iter().map(|e| e.name).collect();
                println!("{}", formatters::format_json(&names)?);
            } else {
                print!("{}", formatters::format_exercise_list(exercises::EXERCISES));
            }
            Ok(())
        }
        ExerciseCommands::Run { name } => {
            let exercise = exercises::find(name).ok_or_else(|| {
                anyhow!(
                    "Unknown exercise '{}'. Run `scratchpad exercises list` to see the available ones",
                    name
                )
            })?;
            run_exercises(std::slice::from_ref(exercise), out)
        }
        ExerciseCommands::RunAll => run_exercises(exercises::EXERCISES, out),
    }
}

fn run_exercises(selected: &[exercises::Exercise], out: OutputOptions) -> Result<()> {
    let mut outcomes = Vec::with_capacity(selected.len());
    for exercise in selected {
        let output = exercise.run()?;
        if !out.json {
            print!("{}", formatters::format_exercise_result(exercise, &output));
        }
        outcomes.push(ExerciseOutcome {
            name: exercise.name,
            sample: exercise.sample,
            output,
        });
    }

    if out.json {
        println!("{}", formatters::format_json(&outcomes)?);
    }
    Ok(())
}

pub fn show_config(settings: &Settings, out: OutputOptions) -> Result<()> {
    if out.json {
        println!("{}", formatters::format_json(settings)?);
    } else {
        print!("{}", settings.to_toml()?);
    }
    Ok(())
}
