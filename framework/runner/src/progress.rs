use indicatif::{ProgressBar, ProgressStyle};

/// A progress bar that counts completed scenarios.
pub(crate) fn start_progress(scenario_count: usize) -> ProgressBar {
    let pb = ProgressBar::new(scenario_count as u64);
    match ProgressStyle::with_template(
        "{spinner:.green} [{wide_bar:.cyan/blue}] {pos}/{len} scenarios [{elapsed_precise}]",
    ) {
        Ok(style) => pb.set_style(style.progress_chars("#>-")),
        Err(e) => log::warn!("Using the default progress style: {e}"),
    }
    pb
}
