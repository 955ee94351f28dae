use crate::api::{HttpApi, TodoApi};
use crate::cli::commands::*;
use crate::cli::output;
use crate::config;
use crate::model::tag::palette_hex;
use crate::ops::compose;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

type CliResult = Result<(), Box<dyn std::error::Error>>;

pub fn dispatch(cli: Cli) -> CliResult {
    let json = cli.json;
    let config = config::load(cli.config.as_deref())?;
    let server = cli.server.unwrap_or_else(|| config.server.url.clone());
    let api = HttpApi::new(&server)?;
    let session = cli.session.or(config.server.session_id);

    match cli.command {
        None => {
            eprintln!("no subcommand; run `dk` without arguments for the TUI");
            Ok(())
        }
        Some(cmd) => match cmd {
            Commands::List => cmd_list(&api, require_session(session)?, json),
            Commands::Add(args) => cmd_add(&api, require_session(session)?, args, json),
            Commands::Toggle(args) => cmd_toggle(&api, args, json),
            Commands::Rename(args) => cmd_rename(&api, args),
            Commands::Delete(args) => cmd_delete(&api, args),
            Commands::Tags => cmd_tags(&api, json),
            Commands::Tag(args) => match args.command {
                TagCommands::Add { task_id, name } => cmd_tag_add(&api, task_id, &name),
                TagCommands::Rm { task_id, name } => cmd_tag_rm(&api, task_id, &name),
                TagCommands::Color { tag_id, color } => cmd_tag_color(&api, tag_id, &color),
                TagCommands::Delete { tag_id } => cmd_tag_delete(&api, tag_id),
            },
        },
    }
}

fn require_session(session: Option<i64>) -> Result<i64, Box<dyn std::error::Error>> {
    session.ok_or_else(|| {
        "no session id: pass --session or set session_id under [server] in config".into()
    })
}

// ---------------------------------------------------------------------------
// Task commands
// ---------------------------------------------------------------------------

fn cmd_list(api: &HttpApi, session_id: i64, json: bool) -> CliResult {
    let tasks = api.list_tasks(session_id)?;
    if json {
        output::print_json(&tasks)?;
    } else {
        for task in &tasks {
            output::print_task_line(task);
        }
    }
    Ok(())
}

/// The entry string carries the same batch semantics as the TUI entry
/// field: `;` splits, inline `#tag` attaches, parts post strictly in order,
/// and one failed part skips only itself.
fn cmd_add(api: &HttpApi, session_id: i64, args: AddArgs, json: bool) -> CliResult {
    let drafts = compose::split_entry(&args.entry);
    if drafts.is_empty() {
        return Err("nothing to add".into());
    }
    let total = drafts.len();
    let mut created = Vec::new();
    for draft in &drafts {
        match api.add_task(session_id, &draft.description, draft.tag.as_deref()) {
            Ok(task) => created.push(task),
            Err(e) => eprintln!("add \"{}\" failed: {}", draft.description, e),
        }
    }
    if json {
        output::print_json(&created)?;
    } else {
        for task in &created {
            output::print_task_line(task);
        }
    }
    if created.len() < total {
        return Err(format!("{} of {} adds failed", total - created.len(), total).into());
    }
    Ok(())
}

fn cmd_toggle(api: &HttpApi, args: TaskIdArgs, json: bool) -> CliResult {
    let is_completed = api.toggle_task(args.task_id)?;
    if json {
        output::print_json(&serde_json::json!({
            "task_id": args.task_id,
            "is_completed": is_completed,
        }))?;
    } else if is_completed {
        println!("task {} done", args.task_id);
    } else {
        println!("task {} reopened", args.task_id);
    }
    Ok(())
}

fn cmd_rename(api: &HttpApi, args: RenameArgs) -> CliResult {
    let description = args.description.trim();
    if description.is_empty() {
        return Err("empty description".into());
    }
    api.rename_task(args.task_id, description)?;
    println!("renamed task {}", args.task_id);
    Ok(())
}

fn cmd_delete(api: &HttpApi, args: TaskIdArgs) -> CliResult {
    api.delete_task(args.task_id)?;
    println!("deleted task {}", args.task_id);
    Ok(())
}

// ---------------------------------------------------------------------------
// Tag commands
// ---------------------------------------------------------------------------

fn cmd_tags(api: &HttpApi, json: bool) -> CliResult {
    let tags = api.list_tags()?;
    if json {
        output::print_json(&tags)?;
    } else {
        for tag in &tags {
            output::print_tag_line(tag);
        }
    }
    Ok(())
}

fn cmd_tag_add(api: &HttpApi, task_id: i64, name: &str) -> CliResult {
    let name = name.trim();
    if name.is_empty() {
        return Err("empty tag name".into());
    }
    api.add_tag(task_id, name)?;
    println!("tagged task {task_id} with \"{name}\"");
    Ok(())
}

fn cmd_tag_rm(api: &HttpApi, task_id: i64, name: &str) -> CliResult {
    api.remove_tag(task_id, name)?;
    println!("removed \"{name}\" from task {task_id}");
    Ok(())
}

fn cmd_tag_color(api: &HttpApi, tag_id: i64, color: &str) -> CliResult {
    // Accept a palette name or pass a raw color string through
    let resolved = palette_hex(color).unwrap_or(color);
    api.update_tag_color(tag_id, resolved)?;
    println!("tag {tag_id} is now {resolved}");
    Ok(())
}

fn cmd_tag_delete(api: &HttpApi, tag_id: i64) -> CliResult {
    api.delete_tag(tag_id)?;
    println!("deleted tag {tag_id}");
    Ok(())
}
