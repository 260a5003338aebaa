use std::io::{self, Write};
use std::path::PathBuf;

use indexmap::IndexMap;

use crate::cli::commands::*;
use crate::io::storage::{Storage, default_data_dir};
use crate::model::filter::{Filter, status_counts, tier_groups, visible};
use crate::model::store::{TaskDraft, TaskStore};
use crate::model::task::{Priority, Status, Task};

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;
    let data_dir = resolve_data_dir(cli.data_dir.as_deref());
    let store = TaskStore::open(Storage::new(data_dir));

    match cli.command {
        // The bare command launches the TUI from main, not from here
        None => Ok(()),
        Some(Commands::List(args)) => cmd_list(&store, args, json),
        Some(Commands::Add(args)) => cmd_add(store, args, json),
        Some(Commands::Delete(args)) => cmd_delete(store, args),
        Some(Commands::Stats) => cmd_stats(&store, json),
    }
}

/// Resolve the data directory from the -C flag, falling back to the
/// default ($BACKLOG_DIR or ~/.backlog).
pub fn resolve_data_dir(flag: Option<&str>) -> PathBuf {
    match flag {
        Some(dir) => PathBuf::from(dir),
        None => default_data_dir(),
    }
}

fn parse_priority(key: &str) -> Result<Priority, String> {
    Priority::from_key(key)
        .ok_or_else(|| format!("unknown priority '{key}' (urgent, high, medium, longterm)"))
}

// ---------------------------------------------------------------------------
// Read commands
// ---------------------------------------------------------------------------

fn cmd_list(store: &TaskStore, args: ListArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let filter = match args.priority.as_deref() {
        Some(key) => Filter::Tier(parse_priority(key)?),
        None => Filter::All,
    };

    if json {
        let shown: Vec<&Task> = visible(store.tasks(), filter);
        println!("{}", serde_json::to_string_pretty(&shown)?);
        return Ok(());
    }

    for (tier, group) in tier_groups(store.tasks(), filter) {
        if let Filter::Tier(p) = filter {
            if p != tier {
                continue;
            }
        }
        println!("{}", tier.label());
        if group.is_empty() {
            println!("  (no tasks)");
        }
        for task in group {
            let deadline = task
                .deadline
                .as_deref()
                .map(|d| format!("  [{d}]"))
                .unwrap_or_default();
            println!(
                "  {}  {:<15}  {}{}",
                task.id,
                task.status.label(),
                task.title,
                deadline
            );
            if args.expand {
                if let Some(details) = &task.details {
                    println!("      context: {details}");
                }
                if let Some(action) = &task.action {
                    println!("      next: {action}");
                }
            }
        }
        println!();
    }
    Ok(())
}

fn cmd_stats(store: &TaskStore, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let counts = status_counts(store.tasks());

    if json {
        let out: IndexMap<&str, usize> = counts.iter().map(|(s, n)| (s.label(), *n)).collect();
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!("{} tasks", store.len());
    for (status, count) in counts {
        println!("  {:<15}  {}", status.label(), count);
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Write commands
// ---------------------------------------------------------------------------

fn cmd_add(mut store: TaskStore, args: AddArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let priority = parse_priority(&args.priority)?;
    let status = Status::from_label(&args.status)
        .ok_or_else(|| format!("unknown status '{}'", args.status))?;

    let draft = TaskDraft {
        priority,
        status,
        title: args.title,
        deadline: args.deadline.unwrap_or_default(),
        details: args.details.unwrap_or_default(),
        action: args.action.unwrap_or_default(),
    };

    let Some(id) = store.create(&draft) else {
        return Err("title must not be empty".into());
    };

    if json && let Some(task) = store.get(&id) {
        println!("{}", serde_json::to_string_pretty(task)?);
    } else {
        println!("added {id}");
    }
    Ok(())
}

fn cmd_delete(mut store: TaskStore, args: DeleteArgs) -> Result<(), Box<dyn std::error::Error>> {
    let Some(task) = store.get(&args.id) else {
        // Unknown id is a benign no-op in the store; on the CLI, say so.
        println!("no task with id {}", args.id);
        return Ok(());
    };

    if !args.yes && !confirm(&format!("delete \"{}\"? [y/N] ", task.title))? {
        println!("not deleted");
        return Ok(());
    }

    store.delete(&args.id);
    println!("deleted {}", args.id);
    Ok(())
}

/// Prompt on stdout and read one line from stdin.
fn confirm(prompt: &str) -> Result<bool, io::Error> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    let answer = line.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}
