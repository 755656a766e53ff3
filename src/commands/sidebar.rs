use anyhow::Result;
use dashcal_core::preferences::{FileStore, LayoutState};
use owo_colors::OwoColorize;

use crate::config::Config;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SidebarAction {
    Show,
    Collapse,
    Expand,
    Toggle,
}

pub fn run(action: SidebarAction, config: &Config) -> Result<()> {
    let mut store = FileStore::new(config.preferences_path()?);
    let mut layout = LayoutState::load(&store)?;

    match action {
        SidebarAction::Show => {}
        SidebarAction::Collapse => layout.set_sidebar_collapsed(&mut store, true)?,
        SidebarAction::Expand => layout.set_sidebar_collapsed(&mut store, false)?,
        SidebarAction::Toggle => {
            layout.toggle_sidebar(&mut store)?;
        }
    }

    let state = if layout.sidebar_collapsed() {
        "collapsed".yellow().to_string()
    } else {
        "expanded".green().to_string()
    };
    println!("Sidebar: {}", state);

    Ok(())
}
