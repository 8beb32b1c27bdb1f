mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{OutputFormat, parse_cli};
use settings::ResolvedConfig;
use tracing::{error, info};
use workflow::{BrowseWorkflow, list_session};

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in world_analyzer::ui::style::theme::names() {
			println!("{name}");
		}
		return Ok(());
	}

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	let _log_guard = world_analyzer::logging::initialize(&resolved.logging)?;
	info!(version = env!("CARGO_PKG_VERSION"), "starting");

	let result = if cli.list {
		run_list(cli.output, resolved)
	} else {
		run_browser(cli.output, resolved)
	};
	if let Err(err) = &result {
		error!("{err:#}");
	}
	result
}

/// Run the interactive browser and print how the session ended.
fn run_browser(format: OutputFormat, settings: ResolvedConfig) -> Result<()> {
	let outcome = BrowseWorkflow::from_config(settings).run()?;
	println!("{}", format.render_outcome(&outcome)?);
	Ok(())
}

/// Print the filtered display list without opening the terminal UI.
fn run_list(format: OutputFormat, settings: ResolvedConfig) -> Result<()> {
	let session = list_session(settings)?;
	println!("{}", format.render_list(&session.display())?);
	Ok(())
}
