//! Show command implementation

use crate::book::SampleSource;
use crate::config::ViewConfig;
use crate::view::{reduce, render, BookView};
use clap::Args;

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Emit the view as JSON instead of the text ladder
    #[arg(long)]
    pub json: bool,
}

impl ShowArgs {
    pub fn execute(&self, config: &ViewConfig) -> anyhow::Result<()> {
        let view = reduce(&BookView::idle(), true, &SampleSource, config.depth);

        if self.json {
            println!("{}", serde_json::to_string_pretty(&view)?);
        } else {
            print!("{}", render(&view));
        }

        Ok(())
    }
}
