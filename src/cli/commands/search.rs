//! Catalog search command.

use tokio::runtime::Runtime;
use tracing::debug;

use crate::catalog::{Category, NormalizedResult, display};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::search::{SearchController, SearchState};

/// Resolved arguments for one search
pub struct SearchOptions {
    pub term: String,
    pub category: Category,
    pub limit: u32,
    pub country: Option<String>,
    pub json: bool,
}

/// Search the catalog and print the results
pub fn cmd_search(rt: &Runtime, config: &Config, options: &SearchOptions) -> anyhow::Result<()> {
    if options.term.trim().is_empty() {
        anyhow::bail!("Search text is empty");
    }

    rt.block_on(run_search(config, options))
}

async fn run_search(config: &Config, options: &SearchOptions) -> anyhow::Result<()> {
    let mut controller = SearchController::from_config(config)?
        .with_limit(options.limit)
        .with_country(options.country.clone());

    controller.start_search(&options.term, options.category);

    let interrupted = tokio::select! {
        _ = controller.wait_until_settled() => false,
        Ok(()) = tokio::signal::ctrl_c() => true,
    };
    if interrupted {
        debug!("Interrupted, cancelling search");
        controller.cancel();
        controller.wait_until_settled().await;
    }

    let state = controller.state().clone();
    let headline = headline(&options.term, options.category, &state);
    match into_results(state) {
        Ok(results) => {
            if options.json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                println!("{}", headline);
                print_results(&results);
            }
            Ok(())
        }
        Err(Error::Search(e)) => {
            eprintln!("Whoops... {}", e.user_message());
            Err(Error::Search(e).into())
        }
        Err(e) => Err(e.into()),
    }
}

/// Turn a settled state into the results or the reason there are none
fn into_results(state: SearchState) -> Result<Vec<NormalizedResult>> {
    match state {
        SearchState::Succeeded(results) => Ok(results),
        SearchState::Failed(e) => Err(Error::Search(e)),
        SearchState::Cancelled => Err(Error::Cancelled),
        SearchState::Idle | SearchState::Loading => Ok(Vec::new()),
    }
}

/// First line of the text output
fn headline(term: &str, category: Category, state: &SearchState) -> String {
    if state.is_empty_result() {
        return "Nothing Found".to_string();
    }
    format!(
        "Found {} results for {:?} ({})",
        state.results().len(),
        term.trim(),
        category
    )
}

fn print_results(results: &[NormalizedResult]) {
    if results.is_empty() {
        return;
    }

    println!();
    for (i, result) in results.iter().enumerate() {
        println!("{:>4}. {}", i + 1, result.display_name);
        let mut details = vec![display::subtitle(result)];
        if !result.genre.is_empty() {
            details.push(result.genre.clone());
        }
        details.push(display::price_text(result));
        println!("      {}", details.join(" · "));
        if !result.store_url.is_empty() {
            println!("      {}", result.store_url);
        }
    }
}
