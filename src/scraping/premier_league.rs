// Scraper for premierleague.com club and squad pages
//
// The clubs index links to one overview page per club; swapping "overview"
// for "squad" in that link gives the squad page, which lists one card per
// player.

use anyhow::Context;
use reqwest::Client;
use scraper::{ElementRef, Html};
use serde::Serialize;
use tracing::{info, warn};

use super::client::{element_text, fetch_html, selector};
use crate::error::{Result, ScratchError};

/// A club entry on the clubs index page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClubLink {
    pub name: Option<String>,
    pub href: String,
}

/// One player card on a squad page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerCard {
    pub name: String,
    /// Every stat value with spaces and newlines removed, in page order
    pub stats: Vec<String>,
    pub country: Option<String>,
    pub age: Option<u32>,
    pub appearances: Option<u32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SquadReport {
    pub club: ClubLink,
    pub overview_url: String,
    pub squad_url: String,
    pub players: Vec<PlayerCard>,
}

/// Fetch the clubs index and return its club links.
pub async fn fetch_club_links(client: &Client, clubs_url: &str) -> Result<Vec<ClubLink>> {
    let html = fetch_html(client, clubs_url).await?;
    parse_club_links(&html)
}

/// Scrape the squad of the `club_index`-th club listed on the clubs page.
pub async fn scrape_squad(
    client: &Client,
    clubs_url: &str,
    site_base_url: &str,
    club_index: usize,
) -> Result<SquadReport> {
    let clubs = fetch_club_links(client, clubs_url).await?;
    let club = clubs.get(club_index).cloned().ok_or_else(|| {
        ScratchError::MissingElement(format!(
            "club #{} (page lists {} clubs)",
            club_index,
            clubs.len()
        ))
    })?;
    info!("Selected club {:?} ({})", club.name, club.href);

    let overview_url = club_overview_url(site_base_url, &club.href);
    let squad_url = squad_url(&overview_url);

    let html = fetch_html(client, &squad_url).await?;
    let players = parse_squad(&html)
        .with_context(|| format!("Failed to parse squad page {}", squad_url))?;

    if players.is_empty() {
        warn!("No player cards found on {}", squad_url);
    } else {
        info!("Parsed {} player(s) from {}", players.len(), squad_url);
    }

    Ok(SquadReport {
        club,
        overview_url,
        squad_url,
        players,
    })
}

/// Every `.indexItem` link on the clubs index page.
pub fn parse_club_links(html: &str) -> Result<Vec<ClubLink>> {
    let document = Html::parse_document(html);
    let item_sel = selector(".indexItem")?;
    let anchor_sel = selector("a[href]")?;
    let name_sel = selector(".clubName")?;

    let mut links = Vec::new();
    for item in document.select(&item_sel) {
        let href = item
            .value()
            .attr("href")
            .or_else(|| {
                item.select(&anchor_sel)
                    .next()
                    .and_then(|a| a.value().attr("href"))
            })
            .map(str::trim)
            .filter(|h| !h.is_empty());

        let Some(href) = href else {
            continue;
        };

        let name = item
            .select(&name_sel)
            .next()
            .map(|el| element_text(&el).trim().to_string())
            .filter(|n| !n.is_empty());

        links.push(ClubLink {
            name,
            href: href.to_string(),
        });
    }

    Ok(links)
}

/// Absolute overview URL for a club link. Absolute hrefs are kept as is.
pub fn club_overview_url(base: &str, href: &str) -> String {
    if href.starts_with("http://") || href.starts_with("https://") {
        return href.to_string();
    }
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        href.trim_start_matches('/')
    )
}

/// Squad page URL for a club overview URL.
pub fn squad_url(overview_url: &str) -> String {
    overview_url.replace("overview", "squad")
}

/// Every player card on a squad page.
pub fn parse_squad(html: &str) -> Result<Vec<PlayerCard>> {
    let document = Html::parse_document(html);
    let card_sel = selector(".playerOverviewCard")?;
    let name_sel = selector(".playerCardInfo .name")?;
    let stats_sel = selector(".squadPlayerStats .info")?;

    let mut players = Vec::new();
    for card in document.select(&card_sel) {
        let name = card
            .select(&name_sel)
            .next()
            .map(|el| element_text(&el).trim().to_string())
            .filter(|n| !n.is_empty());

        let Some(name) = name else {
            warn!("Skipping player card without a name");
            continue;
        };

        let stats: Vec<String> = card
            .select(&stats_sel)
            .map(|el| compact_stat(&el))
            .collect();

        players.push(PlayerCard {
            country: stats.first().filter(|s| !s.is_empty()).cloned(),
            age: stats.get(1).and_then(|s| s.parse().ok()),
            appearances: stats.get(2).and_then(|s| s.parse().ok()),
            name,
            stats,
        });
    }

    Ok(players)
}

fn compact_stat(element: &ElementRef<'_>) -> String {
    element_text(element).replace([' ', '\n'], "")
}
