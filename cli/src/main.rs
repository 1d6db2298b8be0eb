//! Casefile CLI: browse case-file records from the terminal
//!
//! Operates on the embedded sample dataset, or on a JSON dataset file.

use casefile::{
    build_indexes, BrowserSession, BrowserView, FilterCriteria, Record, RecordId, RecordStore,
};
use clap::{Parser, Subcommand};
use comfy_table::{ContentArrangement, Table};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "casefile", version, about = "Case-file document browser CLI")]
struct Cli {
    /// JSON dataset file (defaults to the shipped sample records)
    #[arg(long, global = true, env = "CASEFILE_DATASET")]
    dataset: Option<PathBuf>,

    /// Output format
    #[arg(long, default_value = "table", global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, clap::ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Subcommand)]
enum Commands {
    /// List records matching the given filters
    List {
        /// Case-insensitive text matched against person, summary and document type
        #[arg(long, short)]
        search: Option<String>,

        /// Exact person name
        #[arg(long)]
        person: Option<String>,

        /// DECLASSIFIED, PARTIALLY_REDACTED or UNSEALED
        #[arg(long)]
        classification: Option<String>,

        /// Exact role
        #[arg(long)]
        role: Option<String>,
    },
    /// Show one record with its connections
    Show {
        /// Record id
        id: u64,
    },
    /// Print the selector lists
    Indexes,
    /// Start an interactive browsing session
    Shell,
}

fn main() {
    let cli = Cli::parse();

    let store = match &cli.dataset {
        Some(path) => match RecordStore::load(path) {
            Ok(store) => store,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        None => RecordStore::sample(),
    };

    let result = match cli.command {
        Commands::List { search, person, classification, role } => {
            let mut criteria = FilterCriteria::new();
            if let Some(q) = search {
                criteria = criteria.with_search(q);
            }
            if let Some(p) = person {
                criteria = criteria.with_person(p);
            }
            if let Some(c) = classification {
                criteria = criteria.with_classification_raw(&c);
            }
            if let Some(r) = role {
                criteria = criteria.with_role(r);
            }
            let session = BrowserSession::from_parts(criteria, Default::default());
            print_view(&session.view(&store), &cli.format)
        }
        Commands::Show { id } => run_show(&store, id, &cli.format),
        Commands::Indexes => run_indexes(&store, &cli.format),
        Commands::Shell => run_shell(&store, &cli.format),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn print_view(view: &BrowserView<'_>, format: &OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(view)?);
        }
        OutputFormat::Csv => {
            println!("id,person,role,document_type,date,classification,expanded");
            for card in &view.cards {
                let r = card.record;
                let cells = [
                    r.id.to_string(),
                    csv_field(&r.person),
                    csv_field(&r.role),
                    csv_field(&r.document_type),
                    r.date.clone(),
                    r.classification.as_str().to_string(),
                    card.expanded.to_string(),
                ];
                println!("{}", cells.join(","));
            }
        }
        OutputFormat::Table => {
            if view.is_empty {
                println!("[REDACTED] No documents match your current filters.");
                return Ok(());
            }

            let mut table = Table::new();
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(vec!["", "ID", "Classification", "Date", "Person", "Role", "Document"]);

            for card in &view.cards {
                let r = card.record;
                table.add_row(vec![
                    (if card.expanded { "▲" } else { "▼" }).to_string(),
                    r.id.to_string(),
                    r.classification.label().to_string(),
                    r.date.clone(),
                    r.person.clone(),
                    r.role.clone(),
                    r.document_type.clone(),
                ]);
            }

            println!("{}", table);
            println!("{} DOCUMENTS FOUND", view.count);

            if let Some(card) = view.expanded_card() {
                print_details(card.record);
            }
        }
    }

    Ok(())
}

fn print_details(record: &Record) {
    println!();
    println!("{} — {} ({})", record.person, record.document_type, record.date);
    println!("  {}", record.summary);
    println!("  CONNECTED TO: {}", record.connections.join(", "));
}

fn run_show(store: &RecordStore, id: u64, format: &OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let record = store
        .get(RecordId::new(id))
        .ok_or_else(|| format!("Record {} not found", id))?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(record)?),
        _ => {
            println!("[{}] {}", record.classification.label(), record.person);
            println!("Role:     {}", record.role);
            print_details(record);
        }
    }
    Ok(())
}

fn run_indexes(store: &RecordStore, format: &OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let indexes = build_indexes(store.records());

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&indexes)?),
        _ => {
            println!("Persons:");
            for p in &indexes.persons {
                println!("  {}", p);
            }
            println!("Roles:");
            for r in &indexes.roles {
                println!("  {}", r);
            }
            println!("Classifications:");
            for c in &indexes.classifications {
                println!("  {}", c.as_str());
            }
        }
    }
    Ok(())
}

/// A parsed shell line
#[derive(Debug, PartialEq, Eq)]
enum ShellCommand<'a> {
    Quit,
    Help,
    List,
    Clear,
    Search(&'a str),
    Person(&'a str),
    Class(&'a str),
    Role(&'a str),
    Open(RecordId),
    Follow(&'a str),
    Unknown(&'a str),
}

/// Parse one shell line with its line terminator already removed.
///
/// The `:search` argument is taken exactly as typed after the single
/// separator, so a run of spaces stays a literal query.
fn parse_shell_line(line: &str) -> ShellCommand<'_> {
    let (cmd, raw) = match line.split_once(char::is_whitespace) {
        Some((cmd, raw)) => (cmd, raw),
        None => (line, ""),
    };
    let arg = raw.trim();

    match cmd {
        ":quit" | ":exit" | ":q" => ShellCommand::Quit,
        ":help" | ":h" => ShellCommand::Help,
        ":list" | ":ls" => ShellCommand::List,
        ":clear" => ShellCommand::Clear,
        ":search" => ShellCommand::Search(raw),
        ":person" => ShellCommand::Person(arg),
        ":class" => ShellCommand::Class(arg),
        ":role" => ShellCommand::Role(arg),
        ":follow" => ShellCommand::Follow(arg),
        ":open" => match arg.parse::<u64>() {
            Ok(id) => ShellCommand::Open(RecordId::new(id)),
            Err(_) => ShellCommand::Unknown(line),
        },
        _ => ShellCommand::Unknown(line),
    }
}

fn run_shell(store: &RecordStore, format: &OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    println!("Casefile Interactive Shell");
    println!("Type :help for commands. :quit to exit.\n");

    let stdin = std::io::stdin();
    let mut line = String::new();
    let mut session = BrowserSession::new();

    loop {
        eprint!("casefile> ");

        line.clear();
        if stdin.read_line(&mut line)? == 0 {
            break; // EOF
        }

        let entered = line.trim_end_matches(['\n', '\r']).trim_start();
        if entered.trim().is_empty() {
            continue;
        }

        match parse_shell_line(entered) {
            ShellCommand::Quit => break,
            ShellCommand::Help => {
                println!("Commands:");
                println!("  :search TEXT  — Search person, summary and document type");
                println!("  :person NAME  — Filter by person (empty to unset)");
                println!("  :class NAME   — Filter by classification (empty to unset)");
                println!("  :role NAME    — Filter by role (empty to unset)");
                println!("  :clear        — Clear all filters");
                println!("  :open ID      — Expand or collapse a record");
                println!("  :follow NAME  — Filter by a connection of the expanded record");
                println!("  :list         — Show the current results");
                println!("  :quit         — Exit shell");
                continue;
            }
            ShellCommand::List => {}
            ShellCommand::Clear => session.clear_filters(),
            ShellCommand::Search(q) => session.set_search(q),
            ShellCommand::Person(p) => session.set_person(p),
            ShellCommand::Class(c) => session.set_classification_raw(c),
            ShellCommand::Role(r) => session.set_role(r),
            ShellCommand::Open(id) => session.activate_record(id),
            ShellCommand::Follow(name) => {
                if let Err(e) = session.follow_connection(store, name) {
                    eprintln!("Error: {}", e);
                    continue;
                }
            }
            ShellCommand::Unknown(text) => {
                eprintln!("Unknown command: {} (try :help)", text);
                continue;
            }
        }

        if let Err(e) = print_view(&session.view(store), format) {
            eprintln!("Error: {}", e);
        }
    }

    println!("Bye!");
    Ok(())
}

fn csv_field(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
