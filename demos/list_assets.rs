//! Lists the top assets, loads a second page, then runs a debounced search.
//!
//! ```bash
//! RUST_LOG=coincap_sdk=debug cargo run --example list_assets -- eth
//! ```

use coincap_sdk::prelude::*;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

fn print_rows(assets: &[Asset]) {
    for asset in assets {
        let row = AssetRow::from(asset);
        println!(
            "{:<6} {:<24} {:>18} {:>10}",
            row.symbol, row.name, row.price, row.change
        );
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let search = std::env::args().nth(1).unwrap_or_else(|| "bit".to_string());

    let client = CoinCapClient::builder().build()?;
    let store = client.asset_list();

    store.start().await;
    store.load_next_page().await;
    println!("── Top assets ({} loaded) ──", store.len().await);
    print_rows(&store.assets().await);

    if let Some(err) = store.last_error().await {
        eprintln!("last fetch failed: {}", err);
        return Ok(());
    }

    // Simulated typing: only the final text reaches the API.
    let mut updates = store.subscribe();
    for (i, c) in search.char_indices() {
        store.search(&search[..i + c.len_utf8()]).await;
    }
    let waited = tokio::time::timeout(Duration::from_secs(10), async {
        while let Ok(event) = updates.recv().await {
            if matches!(event, StoreEvent::Replaced { .. }) {
                break;
            }
        }
    })
    .await;
    if waited.is_err() {
        eprintln!(
            "search did not complete: {}",
            store.last_error().await.unwrap_or_default()
        );
        return Ok(());
    }

    let results = store.assets().await;
    println!("── Search \"{}\" ({} results) ──", search, results.len());
    print_rows(&results);

    if let Some(first) = results.first() {
        let details = AssetDetails::from(first);
        println!("── {} ──", details.title);
        println!("price       {}", details.price);
        println!("24h change  {}", details.change);
        println!("market cap  {}", details.market_cap);
        println!("supply      {}", details.supply);
        println!("volume 24h  {}", details.volume_24hr);
    }

    Ok(())
}
