use crate::commands::common::ready_fetcher;
use crate::config::ExportConfig;
use crate::error::CliError;

pub async fn run_notebooks(config: &ExportConfig) -> Result<(), CliError> {
    let fetcher = ready_fetcher(config).await?;
    for name in fetcher.notebook_names() {
        println!("{name}");
    }
    Ok(())
}
