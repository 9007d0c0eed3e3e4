use anyhow::Context;
use listing_search::autocomplete::{
    AutocompleteController, AutocompleteOutcome, HttpAutocompleteClient,
};
use listing_search::search::{QueryParams, SearchForm};
use listing_search::{Category, Config};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "listing_search=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().context("Failed to load configuration")?;
    info!(api = %config.api_base_url, page = %config.page_url, "Listing search");

    let mut form = SearchForm::hydrate(&QueryParams::parse(&config.page_url));
    let criteria = &form.criteria;
    info!(
        listing_type = %criteria.listing_type(),
        suburbs = ?criteria.suburbs().collect::<Vec<_>>(),
        query = ?criteria.query_text(),
        "Hydrated search form"
    );

    if let Some(term) = config.search_term.as_deref() {
        let client = HttpAutocompleteClient::new(&config).context("Failed to create HTTP client")?;
        let controller = AutocompleteController::new(client);

        match controller.suggest(&form.criteria, term).await.locked_to(&form.criteria) {
            AutocompleteOutcome::Suggestions(results) => {
                info!("Found {} suggestions for {:?}", results.len(), results.term);
                for group in &results.groups {
                    println!("{}:", group.category);
                    for suggestion in &group.suggestions {
                        println!("   {}", suggestion.label);
                    }
                }

                // pick the first suburb, as a user would from the dropdown
                let first_suburb = results
                    .groups
                    .iter()
                    .filter(|g| g.category == Category::Suburbs)
                    .flat_map(|g| g.suggestions.first())
                    .next()
                    .cloned();
                if let Some(suburb) = first_suburb {
                    if let Err(err) = form.criteria.apply_selection(suburb) {
                        warn!("Selection refused: {}", err);
                    }
                }
            }
            AutocompleteOutcome::TooShort => {
                info!("Search term {:?} is too short for suggestions", term)
            }
            AutocompleteOutcome::Superseded => {}
            AutocompleteOutcome::Unavailable(notice) => warn!("{}", notice),
        }
    }

    let submission = form.submit(&config.page_url);
    println!();
    println!("Search URL: {}", submission.to_url());

    Ok(())
}
