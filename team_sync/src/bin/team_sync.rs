use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use pokeapi_client::paging::{self, DEFAULT_PAGE_SIZE};
use pokeapi_client::source::{CatalogSource, PokeApiSource, SourceError};
use team_sync::team::{Candidate, SubmitOutcome, TeamManager, TeamStore};

#[derive(Parser)]
#[command(version, about = "Pokémon catalog browser and team builder")]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Browse the paged catalog listing
    Browse {
        /// Page index to fetch
        #[arg(long, default_value_t = 0)]
        page: u32,
        /// Items per page
        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
        page_size: u32,
    },
    /// Exact-match search by name
    Search {
        /// Name to look up (case-insensitive)
        query: String,
    },
    /// Show the full record for a Pokémon
    Show {
        /// Name or numeric id
        name_or_id: String,
    },
    /// Manage the local team
    Team(TeamCmd),
}

#[derive(Args)]
struct TeamCmd {
    #[command(subcommand)]
    sub: TeamSub,
}

#[derive(Subcommand)]
enum TeamSub {
    /// Print the six team slots
    Show,
    /// Add a Pokémon to the lowest empty slot
    Add {
        /// Name or numeric id
        name_or_id: String,
    },
    /// Put a Pokémon into a specific slot, evicting its occupant
    Replace {
        /// Slot index (0-5)
        slot: usize,
        /// Name or numeric id
        name_or_id: String,
    },
    /// Clear a slot
    Remove {
        /// Slot index (0-5)
        slot: usize,
    },
    /// Remove a Pokémon by id, wherever it sits
    RemoveId {
        /// Pokémon id
        id: i32,
    },
}

fn db_path() -> String {
    shared_utils::env_var_or("POKE_TEAM_DB", "pokemon_team.db")
}

async fn fetch_detail(
    source: &PokeApiSource,
    name_or_id: &str,
) -> Result<pokeapi_client::models::PokemonDetail> {
    match source.detail(&name_or_id.trim().to_lowercase()).await {
        Ok(detail) => Ok(detail),
        Err(SourceError::NotFound) => bail!("no Pokémon named '{name_or_id}'"),
        Err(e) => Err(e).context("detail fetch failed"),
    }
}

fn print_team(store: &TeamStore) {
    for (i, slot) in store.snapshot().iter().enumerate() {
        match slot {
            Some(m) => println!("slot {i}: {} (#{})", m.name, m.id),
            None => println!("slot {i}: empty"),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let source = PokeApiSource::new()?;

    match cli.cmd {
        Cmd::Browse { page, page_size } => {
            let loaded = paging::load(&source, page, page_size, "").await?;
            for item in &loaded.items {
                match item.id_from_url() {
                    Some(id) => println!("{}  #{id}", item.name),
                    None => println!("{}", item.name),
                }
            }
            if let Some(next) = loaded.next_cursor {
                eprintln!("next page: {next}");
            }
        }

        Cmd::Search { query } => {
            let loaded = paging::load(&source, 0, DEFAULT_PAGE_SIZE, &query).await?;
            if loaded.items.is_empty() {
                println!("no match for '{query}'");
            } else {
                for item in &loaded.items {
                    match item.id_from_url() {
                        Some(id) => println!("{}  #{id}", item.name),
                        None => println!("{}", item.name),
                    }
                }
            }
        }

        Cmd::Show { name_or_id } => {
            let detail = fetch_detail(&source, &name_or_id).await?;
            println!("{}", serde_json::to_string_pretty(&detail)?);
        }

        Cmd::Team(TeamCmd { sub }) => {
            let path = db_path();
            team_sync::db::migrate::run_sqlite(&path).context("migrations")?;
            let mut store = TeamStore::open(&path)?;
            let mut manager = TeamManager::new();

            match sub {
                TeamSub::Show => print_team(&store),

                TeamSub::Add { name_or_id } => {
                    let detail = fetch_detail(&source, &name_or_id).await?;
                    let candidate = Candidate::from_detail(&detail);
                    match manager.submit(&mut store, candidate)? {
                        SubmitOutcome::Inserted(slot) => {
                            println!("added {} to slot {slot}", detail.name);
                        }
                        SubmitOutcome::Duplicate => {
                            println!("{} is already on your team", detail.name);
                        }
                        SubmitOutcome::ReplacementRequired => {
                            println!("team is full; pick a slot to evict:");
                            print_team(&store);
                            println!("then run: team replace <slot> {}", detail.name);
                            manager.cancel_replacement();
                        }
                    }
                }

                TeamSub::Replace { slot, name_or_id } => {
                    let detail = fetch_detail(&source, &name_or_id).await?;
                    let candidate = Candidate::from_detail(&detail);
                    match manager.submit(&mut store, candidate)? {
                        SubmitOutcome::Inserted(placed) => {
                            println!("team had room; added {} to slot {placed}", detail.name);
                        }
                        SubmitOutcome::Duplicate => {
                            println!("{} is already on your team", detail.name);
                        }
                        SubmitOutcome::ReplacementRequired => {
                            manager.confirm_replacement(&mut store, slot)?;
                            println!("replaced slot {slot} with {}", detail.name);
                        }
                    }
                }

                TeamSub::Remove { slot } => {
                    manager.remove_from_slot(&mut store, slot)?;
                    println!("cleared slot {slot}");
                }

                TeamSub::RemoveId { id } => {
                    store.delete_by_key(id)?;
                    println!("removed #{id} (if it was on the team)");
                }
            }
        }
    }

    Ok(())
}
