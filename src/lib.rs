pub mod cli;
pub mod config;
pub mod history;
pub mod logging;
pub mod model;
pub mod paging;
pub mod runtime;
pub mod trasher;

pub fn run_cli() -> Result<(), String> {
    cli::run_cli()
}
