use anyhow::Result;
use clap::Parser;
use gamedex_core::{Catalog, Entry};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gamedex")]
#[command(about = "Interactive game catalog with price and genre lookup")]
struct Cli {
    /// Preload the demonstration collection before starting the REPL
    #[arg(long)]
    demo: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut catalog = Catalog::new();

    if cli.demo {
        load_demo(&mut catalog)?;
        println!("Demo collection loaded ({} entries)", catalog.len());
    }

    let mut rl = DefaultEditor::new()?;

    println!("gamedex REPL");
    println!("Commands: add, price <p>, range <min> <max>, genre <name>, list, demo, stats, export, help, quit");
    println!();

    loop {
        let readline = rl.readline("gamedex> ");

        match readline {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }

                rl.add_history_entry(line)?;

                if line == "quit" || line == "exit" {
                    break;
                }

                if let Err(e) = handle_command(&mut catalog, &mut rl, line) {
                    eprintln!("Error: {}", e);
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("Interrupted");
                break;
            }
            Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                eprintln!("Error: {}", err);
                break;
            }
        }
    }

    println!("Goodbye");
    Ok(())
}

fn handle_command(catalog: &mut Catalog, rl: &mut DefaultEditor, line: &str) -> Result<()> {
    let parts: Vec<&str> = line.split_whitespace().collect();

    if parts.is_empty() {
        return Ok(());
    }

    match parts[0] {
        "add" => {
            let entry = prompt_entry(catalog, rl)?;
            let id = entry.id;
            catalog.register(entry)?;
            println!("Added entry {}:", id);
            if let Some(entry) = catalog.get(id) {
                println!("{}", entry);
            }
        }

        "price" => {
            if parts.len() != 2 {
                anyhow::bail!("Usage: price <p>");
            }

            let price: i64 = parts[1].parse()?;
            let entries = catalog.find_by_price(price);
            if entries.is_empty() {
                println!("No entries priced {}", price);
            } else {
                println!("Entries priced {}:", price);
                for entry in entries {
                    println!("{}", entry);
                }
            }
        }

        "range" => {
            if parts.len() != 3 {
                anyhow::bail!("Usage: range <min> <max>");
            }

            let min: i64 = parts[1].parse()?;
            let max: i64 = parts[2].parse()?;
            let entries = catalog.find_by_price_range(min, max);
            if entries.is_empty() {
                println!("No entries priced between {} and {}", min, max);
            } else {
                println!("Entries priced between {} and {}:", min, max);
                for entry in entries {
                    println!("{}", entry);
                }
            }
        }

        "genre" => {
            if parts.len() < 2 {
                anyhow::bail!("Usage: genre <name>");
            }

            let genre = parts[1..].join(" ");
            let entries = catalog.find_by_genre(&genre);
            if entries.is_empty() {
                println!("No entries in genre '{}'", genre);
            } else {
                println!("Entries in genre '{}':", genre);
                for entry in entries {
                    println!("{}", entry);
                }
            }
        }

        "list" => {
            let entries = catalog.list_by_price_ascending();
            if entries.is_empty() {
                println!("Catalog is empty");
            } else {
                println!("Entries by ascending price:");
                for entry in entries {
                    println!("{}", entry);
                }
            }
        }

        "demo" => {
            load_demo(catalog)?;
            println!("Demo collection loaded ({} entries total)", catalog.len());
        }

        "stats" => {
            println!("Entries: {}", catalog.len());
            println!("Genres: {}", catalog.genre_count());
        }

        "export" => {
            let entries = catalog.list_by_price_ascending();
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }

        "help" => {
            println!("add                  register a new entry (prompts for fields)");
            println!("price <p>            entries priced exactly p");
            println!("range <min> <max>    entries priced between min and max, inclusive");
            println!("genre <name>         entries carrying the genre (case-sensitive)");
            println!("list                 all entries, ascending by price");
            println!("demo                 load the demonstration collection");
            println!("stats                entry and genre counts");
            println!("export               dump the ascending listing as JSON");
            println!("quit                 leave");
        }

        _ => {
            anyhow::bail!("Unknown command: {}", parts[0]);
        }
    }

    Ok(())
}

fn prompt_entry(catalog: &Catalog, rl: &mut DefaultEditor) -> Result<Entry> {
    let title = rl.readline("Title: ")?.trim().to_string();
    let developer = rl.readline("Developer: ")?.trim().to_string();
    let price: i64 = rl.readline("Price: ")?.trim().parse()?;
    let genres: Vec<String> = rl
        .readline("Genres (comma-separated): ")?
        .split(',')
        .map(|g| g.trim().to_string())
        .filter(|g| !g.is_empty())
        .collect();

    Ok(Entry::new(
        catalog.next_id(),
        title,
        developer,
        price,
        genres,
    ))
}

fn load_demo(catalog: &mut Catalog) -> Result<()> {
    let samples = [
        ("Dark Souls 1", 155, &["Soulslike", "Hard", "RPG", "Action"][..]),
        ("Dark Souls 2", 115, &["Soulslike", "Hard", "Action", "Fantasy"][..]),
        ("Dark Souls 3", 230, &["Soulslike", "Adventure", "Hard", "Fantasy"][..]),
    ];

    for (title, price, genres) in samples {
        let entry = Entry::new(
            catalog.next_id(),
            title,
            "FromSoftware",
            price,
            genres.iter().map(|g| g.to_string()).collect(),
        );
        info!(title, price, "loading demo entry");
        catalog.register(entry)?;
    }

    Ok(())
}
