use clap::Parser;
use rolodex::api::RolodexApi;
use rolodex::error::Result;
use rolodex::prompt::Prompter;
use rolodex::store::memory::InMemoryStore;
use std::io;

mod cli;
use cli::args::Cli;
use cli::menu::Menu;
use cli::setup::{init_tracing, load_config};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(&cli)?;
    let api = RolodexApi::new(InMemoryStore::new(), config);

    let stdin = io::stdin();
    let mut menu = Menu::new(api, Prompter::new(stdin.lock(), io::stdout()));
    menu.run()
}
