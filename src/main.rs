use property_desk::catalog::{JsonFileRepository, PropertyCollectionView, PropertyRepository, SampleRepository};
use property_desk::config::Config;
use property_desk::listings::{sample_listings, ListingBoard};
use property_desk::models::format_price;
use property_desk::nav::AccountMenu;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("🏠 Property Desk");
    info!("================");

    let config = Config::from_env()?;
    let menu = AccountMenu::from_config(&config);
    debug!(?menu, "Account menu ready");

    let repo: Box<dyn PropertyRepository> = match &config.catalog_path {
        Some(path) => Box::new(JsonFileRepository::new(path)),
        None => Box::new(SampleRepository::new()),
    };
    info!("Loading catalog from {}", repo.source_name());

    let mut view = PropertyCollectionView::mount(repo.as_ref(), config.page_size).await?;
    view.set_criteria(config.criteria.clone());
    view.set_sort(config.sort);
    view.go_to_page(config.page);

    let page = view.page();

    // Display results
    match page.showing() {
        Some((first, last)) => {
            info!("\n✅ Showing {}-{} of {} properties\n", first, last, page.total_count);
        }
        None => info!("No properties found. Try adjusting your filters."),
    }

    for (i, property) in page.items.iter().enumerate() {
        println!("{}. {} ({})", i + 1, property.title, format_price(property.price, property.kind));
        println!("   {}, {}", property.address, property.location.city);
        println!(
            "   {} bed, {} bath, {} sq ft",
            property.bedrooms, property.bathrooms, property.area
        );
        println!("   ★ {} ({} reviews)", property.rating, property.reviews);
        println!("   ID: {}", property.id);
        println!();
    }

    if page.total_pages > 1 {
        info!("Page {} of {}", page.page, page.total_pages);
    }

    let stats = ListingBoard::new(sample_listings()).stats();
    info!(
        total = stats.total,
        active = stats.active,
        views = stats.total_views,
        for_sale = stats.for_sale,
        "My listings"
    );

    // Save the displayed page
    let json = serde_json::to_string_pretty(&page)?;
    tokio::fs::write(&config.output_path, json).await?;
    info!("💾 Saved page to {}", config.output_path.display());

    Ok(())
}
