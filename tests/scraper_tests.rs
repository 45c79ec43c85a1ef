use httpmock::prelude::*;
use rust_decimal_macros::dec;
use scratchpad::config::ScraperSettings;
use scratchpad::error::ScratchError;
use scratchpad::scraping::{amazon, build_client, premier_league};

const PRODUCT_PAGE: &str = r#"
<html><body>
  <span id="productTitle">
      Samsung Galaxy S10   Android Smartphone
  </span>
  <span id="priceblock_ourprice">£1,049.99</span>
</body></html>
"#;

const CLUBS_PAGE: &str = r#"
<html><body>
  <ul class="clubList">
    <li><a class="indexItem" href="/clubs/1/Arsenal/overview">
      <h4 class="clubName">Arsenal</h4></a></li>
    <li><a class="indexItem" href="/clubs/2/Aston-Villa/overview">
      <h4 class="clubName">Aston Villa</h4></a></li>
  </ul>
</body></html>
"#;

const SQUAD_PAGE: &str = r#"
<html><body>
  <ul class="squadListContainer">
    <li><a class="playerOverviewCard" href="/players/1">
      <div class="playerCardInfo"><h4 class="name">Bernd Leno</h4></div>
      <ul class="squadPlayerStats">
        <li><span class="info"> Germany </span></li>
        <li><span class="info">28</span></li>
        <li><span class="info">
            33
        </span></li>
      </ul>
    </a></li>
    <li><a class="playerOverviewCard" href="/players/2">
      <div class="playerCardInfo"><h4 class="name">Rob Holding</h4></div>
      <ul class="squadPlayerStats">
        <li><span class="info">England</span></li>
      </ul>
    </a></li>
  </ul>
</body></html>
"#;

fn client() -> reqwest::Client {
    build_client(&ScraperSettings::default()).unwrap()
}

#[tokio::test]
async fn fetch_product_parses_title_and_price() {
    let server = MockServer::start();
    let page = server.mock(|when, then| {
        when.method(GET).path("/dp/B07NWR7QYQ");
        then.status(200)
            .header("content-type", "text/html; charset=utf-8")
            .body(PRODUCT_PAGE);
    });

    let product = amazon::fetch_product(&client(), &server.url("/dp/B07NWR7QYQ"))
        .await
        .unwrap();

    page.assert();
    assert_eq!(product.title, "Samsung Galaxy S10 Android Smartphone");
    assert_eq!(product.raw_price, "£1,049.99");
    assert_eq!(product.whole_price, 1049);
    assert_eq!(product.price, dec!(1049.99));
}

#[tokio::test]
async fn fetch_product_sends_configured_user_agent() {
    let server = MockServer::start();
    let page = server.mock(|when, then| {
        when.method(GET)
            .path("/product")
            .header("user-agent", "scratchpad-test/0.1");
        then.status(200).body(PRODUCT_PAGE);
    });

    let settings = ScraperSettings {
        user_agent: "scratchpad-test/0.1".to_string(),
        ..ScraperSettings::default()
    };
    let client = build_client(&settings).unwrap();
    amazon::fetch_product(&client, &server.url("/product"))
        .await
        .unwrap();

    page.assert();
}

#[tokio::test]
async fn fetch_product_without_price_is_missing_element() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/product");
        then.status(200)
            .body(r#"<span id="productTitle">Phone</span>"#);
    });

    let err = amazon::fetch_product(&client(), &server.url("/product"))
        .await
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<ScratchError>(),
        Some(ScratchError::MissingElement(_))
    ));
}

#[tokio::test]
async fn error_status_is_not_retried() {
    let server = MockServer::start();
    let page = server.mock(|when, then| {
        when.method(GET).path("/product");
        then.status(503);
    });

    let err = amazon::fetch_product(&client(), &server.url("/product"))
        .await
        .unwrap_err();

    page.assert_hits(1);
    match err.downcast_ref::<ScratchError>() {
        Some(ScratchError::HttpStatus { status, .. }) => assert_eq!(*status, 503),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn fetch_club_links_lists_clubs_in_page_order() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/clubs");
        then.status(200).body(CLUBS_PAGE);
    });

    let clubs = premier_league::fetch_club_links(&client(), &server.url("/clubs"))
        .await
        .unwrap();

    assert_eq!(clubs.len(), 2);
    assert_eq!(clubs[0].name.as_deref(), Some("Arsenal"));
    assert_eq!(clubs[1].href, "/clubs/2/Aston-Villa/overview");
}

#[tokio::test]
async fn scrape_squad_follows_club_to_squad_page() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/clubs");
        then.status(200).body(CLUBS_PAGE);
    });
    let squad = server.mock(|when, then| {
        when.method(GET).path("/clubs/1/Arsenal/squad");
        then.status(200).body(SQUAD_PAGE);
    });

    let base = server.base_url();
    let report = premier_league::scrape_squad(&client(), &server.url("/clubs"), &base, 0)
        .await
        .unwrap();

    squad.assert();
    assert_eq!(report.overview_url, format!("{}/clubs/1/Arsenal/overview", base));
    assert_eq!(report.squad_url, format!("{}/clubs/1/Arsenal/squad", base));
    assert_eq!(report.players.len(), 2);

    let leno = &report.players[0];
    assert_eq!(leno.name, "Bernd Leno");
    assert_eq!(leno.stats, vec!["Germany", "28", "33"]);
    assert_eq!(leno.age, Some(28));
    assert_eq!(leno.appearances, Some(33));

    let holding = &report.players[1];
    assert_eq!(holding.country.as_deref(), Some("England"));
    assert_eq!(holding.age, None);
}

#[tokio::test]
async fn scrape_squad_with_out_of_range_club() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/clubs");
        then.status(200).body(CLUBS_PAGE);
    });

    let err = premier_league::scrape_squad(&client(), &server.url("/clubs"), &server.base_url(), 5)
        .await
        .unwrap_err();

    assert!(err.to_string().contains("club #5"));
}
