use clap::Parser;
use hymnal_search::config::{Cli, Command};
use hymnal_search::corpus::catalog::{parse_hymn_number, HymnCatalog};
use hymnal_search::corpus::format::{format_hymn, format_listing};
use hymnal_search::corpus::loader::load_hymns;
use hymnal_search::pipeline::controller::SearchController;
use hymnal_search::pipeline::types::SearchState;
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level)
        .with_writer(std::io::stderr)
        .init();

    match &cli.command {
        Command::Search { query } => search_once(&cli, &query.join(" ")).await,
        Command::Show { number } => show(&cli, number),
        Command::List => {
            let hymns = load_hymns(&cli.hymns)?;
            print!("{}", format_listing(&hymns));
            Ok(())
        }
        Command::Interactive => interactive(&cli).await,
    }
}

fn spawn_controller(cli: &Cli) -> SearchController {
    let path = cli.hymns.clone();
    SearchController::spawn(move || load_hymns(&path), cli.search_config())
}

async fn search_once(cli: &Cli, query: &str) -> anyhow::Result<()> {
    let controller = spawn_controller(cli);
    let edit = controller.set_query_text(query);

    let state = controller.wait_for_edit(edit).await?;
    print_results(&state);
    Ok(())
}

fn show(cli: &Cli, entry: &str) -> anyhow::Result<()> {
    let Some(number) = parse_hymn_number(entry) else {
        anyhow::bail!("Invalid hymn number {:?}: expected 1 to 3 digits", entry);
    };

    let catalog = HymnCatalog::new(load_hymns(&cli.hymns)?);
    match catalog.by_number(number) {
        Some(hymn) => {
            print!("{}", format_hymn(hymn));
            Ok(())
        }
        None => anyhow::bail!("No hymn numbered {}", number),
    }
}

async fn interactive(cli: &Cli) -> anyhow::Result<()> {
    let controller = spawn_controller(cli);
    let catalog = controller.wait_until_ready().await;
    tracing::info!("{} hymns ready, type to search", catalog.len());

    let mut updates = controller.subscribe();
    let printer = tokio::spawn(async move {
        let mut printed = 0u64;

        while updates.changed().await.is_ok() {
            let state = updates.borrow_and_update().clone();
            if state.is_loading || state.is_searching {
                continue;
            }
            if state.edit == printed {
                continue;
            }
            print_results(&state);
            printed = state.edit;
        }
    });

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut last_edit = None;
    while let Some(line) = lines.next_line().await? {
        last_edit = Some(controller.set_query_text(line));
    }

    if let Some(edit) = last_edit {
        controller.wait_for_edit(edit).await?;
    }

    drop(controller);
    if let Err(e) = printer.await {
        tracing::warn!("Result printer ended abnormally: {}", e);
    }
    Ok(())
}

fn print_results(state: &SearchState) {
    if state.results.is_empty() {
        if !state.query.trim().is_empty() {
            println!("No results for {:?}", state.query);
        }
        return;
    }

    println!("{} results for {:?}", state.results.len(), state.query);
    for result in state.results.iter() {
        println!("{}. {}", result.hymn.number, result.hymn.title);
        println!("    {}", result.matching_line);
    }
}
