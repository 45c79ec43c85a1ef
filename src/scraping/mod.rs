// Web scraping module for extracting data from single pages
// Plain HTTP GET + HTML parsing, one request per page

pub mod amazon;
pub mod client;
pub mod premier_league;

pub use amazon::ProductListing;
pub use client::{build_client, fetch_html};
pub use premier_league::{ClubLink, PlayerCard, SquadReport};
