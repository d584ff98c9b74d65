mod models;
mod output;
mod scrapers;

use scrapers::{LinkedInBrowserScraper, SearchParams};
use tracing::{info, Level};
use tracing_subscriber;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    info!("💼 LinkedIn Jobs Scraper");
    info!("========================");
    info!("");

    // Positional words only: the first word that is not "show" overrides the
    // default query, a bare "show" anywhere runs the browser visibly.
    let args: Vec<String> = std::env::args().skip(1).collect();
    let headless = !args.iter().any(|arg| arg == "show");
    let params = match args.into_iter().find(|arg| arg != "show") {
        Some(keywords) => SearchParams { keywords, headless },
        None => SearchParams {
            headless,
            ..SearchParams::default()
        },
    };

    info!("Searching for \"{}\" jobs in Chile", params.keywords);
    info!("");

    // Create browser scraper and run the single pass
    let scraper = LinkedInBrowserScraper::new(params)?;
    let jobs = scraper.scrape()?;

    // Display results
    info!("\n✅ Scraped {} job postings\n", jobs.len());

    for (i, job) in jobs.iter().enumerate() {
        println!("{}. {} at {}", i + 1, job.title, job.company);
        println!("   {} (posted {})", job.location, job.posted);
        if !job.seniority.is_empty() {
            println!("   Level: {}", job.seniority);
        }
        println!("   Link: {}", job.link);
        println!();
    }

    // Save the run artifact
    let path = output::save(&jobs).await?;
    info!("💾 Saved {} postings to {}", jobs.len(), path.display());

    Ok(())
}
