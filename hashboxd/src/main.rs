use clap::{Parser, Subcommand};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::io::Write;
use table::command::{apply, parse_line};
use table::probe::table::{ProbingTable, SlotView};

#[derive(Parser)]
#[command(name = "hashboxd")]
#[command(about = "HashBox letter-keyed probing table shell and CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    Exec {
        line: String,

        #[arg(long)]
        json: bool,
    },
    Shell,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Exec { line, json }) => {
            execute_line(&line, json)?;
        }
        Some(Commands::Shell) | None => {
            start_interactive_shell()?;
        }
    }

    Ok(())
}

fn execute_line(line: &str, json: bool) -> anyhow::Result<()> {
    let mut table = ProbingTable::new();
    let commands = parse_line(line)?;
    apply(&mut table, &commands)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&table.snapshot_all())?);
    } else {
        display_table(&table);
    }

    Ok(())
}

fn start_interactive_shell() -> anyhow::Result<()> {
    println!("HashBox Interactive Shell");
    println!("Enter command tokens: \"A\" + word adds it, \"D\" + word deletes it");
    println!("Example: \"Aapple Dorange\". Type 'help' for help, 'exit' or 'quit' to quit\n");

    let mut rl = DefaultEditor::new()?;
    let mut table = ProbingTable::new();

    loop {
        let readline = rl.readline("hashbox> ");
        match readline {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }

                rl.add_history_entry(line)?;

                match line {
                    "exit" | "quit" => {
                        println!("Goodbye!");
                        break;
                    }
                    "help" => {
                        print_help();
                    }
                    "clear" | "cls" => {
                        clear_terminal();
                    }
                    _ => match parse_line(line) {
                        Ok(commands) => {
                            if let Err(e) = apply(&mut table, &commands) {
                                println!("Error: {}", e);
                            }
                            display_table(&table);
                        }
                        Err(e) => {
                            println!("Error: {}", e);
                        }
                    },
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("Goodbye!");
                break;
            }
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }

    Ok(())
}

fn display_table(table: &ProbingTable) {
    // Full view first, tombstones rendered as NULL, then the occupied view.
    println!("{}", render_all(&table.snapshot_all()));
    println!();
    println!("{}", table.snapshot_occupied().join(" "));
}

fn render_all(views: &[SlotView]) -> String {
    views
        .iter()
        .map(|view| {
            format!(
                "{}({})",
                view.key.as_deref().unwrap_or("NULL"),
                view.status
            )
        })
        .collect::<Vec<String>>()
        .join(" ")
}

fn clear_terminal() {
    print!("\x1B[2J\x1B[1;1H");
    Write::flush(&mut std::io::stdout()).unwrap();
}

fn print_help() {
    println!("HashBox Help:");
    println!("------------");
    println!();
    println!("  Commands:");
    println!("    Aword   - Add \"word\" to the table");
    println!("    Dword   - Delete \"word\" from the table");
    println!("    help    - Show this help");
    println!("    clear   - Clear the terminal screen");
    println!("    cls     - Clear the terminal screen");
    println!("    exit    - Exit the shell");
    println!("    quit    - Exit the shell");
    println!();
    println!("  After each line the full table is printed (tombstones included),");
    println!("  then the occupied entries only.");
}
