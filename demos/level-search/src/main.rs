//! Searches for levels, downloads the first hit and summarizes its
//! geometry.
//!
//! ```text
//! GDLINK_BASE_URL=http://localhost:8080/database/ \
//! RUST_LOG=gdlink=debug,level_search=info \
//!     cargo run -p level-search -- "bloodbath"
//! ```

use std::collections::BTreeMap;

use gdlink::prelude::*;
use tracing_subscriber::EnvFilter;

fn config_from_env() -> ClientConfig {
    let mut config = ClientConfig::default();
    if let Ok(url) = std::env::var("GDLINK_BASE_URL") {
        config = config.base_url(url);
    }
    if let Ok(prefix) = std::env::var("GDLINK_CORS_PREFIX") {
        config = config.cors_prefix(prefix);
    }
    config
}

#[tokio::main]
async fn main() -> Result<(), GdlinkError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let query = std::env::args().nth(1).unwrap_or_else(|| "bloodbath".to_owned());
    let client = Client::new(config_from_env());

    let results = client.search_levels(&query, SearchType::Query, 0).await?;
    tracing::info!(
        %query,
        found = results.page.total,
        shown = results.levels.len(),
        "search finished"
    );
    for level in &results.levels {
        let creator = results.creator_of(level).map_or("-", |c| c.name.as_str());
        tracing::info!(
            id = level.get("1").unwrap_or_default(),
            name = level.get("2").unwrap_or_default(),
            creator,
            "level"
        );
    }

    let Some(level_id) = results.levels.first().and_then(|l| l.parse_field::<u64>("1")) else {
        tracing::warn!(%query, "no levels matched");
        return Ok(());
    };

    let level = client.download_level(level_id).await?;
    let geometry = client.decode_geometry(&level).await?;
    let password = level.password()?;

    // Object id (property 1) → count.
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for object in &geometry.objects {
        let id = object.get(1).map(ToString::to_string).unwrap_or_default();
        *counts.entry(id).or_default() += 1;
    }
    let mut common: Vec<_> = counts.into_iter().collect();
    common.sort_by(|a, b| b.1.cmp(&a.1));

    tracing::info!(
        level_id,
        name = level.name().unwrap_or_default(),
        objects = geometry.objects.len(),
        color_channels = geometry.color_channels().len(),
        password = ?password,
        "geometry decoded"
    );
    for (id, count) in common.iter().take(5) {
        tracing::info!(object_id = %id, count, "most used");
    }
    Ok(())
}
