use crate::error::CliError;
use connectors::search::{SearchSource, SearchTransport};
use tracing::{error, info};

/// Asks the store for a single document of the source's index. Succeeds
/// when the store answers, even if the index is empty.
pub fn ping<T: SearchTransport>(source: &SearchSource<T>) -> Result<(), CliError> {
    info!("Pinging store for index '{}'", source.index());

    let page = source.fetch_page(1, 0)?;
    if let Some(failure) = page.failure {
        error!("Ping of '{}' failed: {}", source.index(), failure);
        return Err(CliError::Fetch(failure));
    }

    info!(
        "Store answered in {} ms ({} document(s) returned)",
        page.took_ms, page.row_count
    );
    Ok(())
}
