//! Conversa CLI — drive the client against a configured backend, or browse
//! the built-in seed data offline.

use std::process::ExitCode;

use conversa::api::ApiClient;
use conversa::error::{ApiError, UiError};
use conversa::state::{self, AppState};
use conversa::types::{Config, ConversationListItem};

const USAGE: &str = "\
conversa <command>

Commands:
  people                      list all people
  person <id>                 show one person
  conversations [person-id]   list conversation summaries
  show <conversation-id>      show one conversation in full
  search <query>              search loaded conversations
  toggle <conv-id> <item-id>  flip one action item
  seed                        browse the built-in fixtures offline

Backend base URL comes from ~/.conversa/config.json (apiBaseUrl).";

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: &[String]) -> Result<(), String> {
    let command = args.first().map(String::as_str).unwrap_or("help");
    match command {
        "people" => {
            let client = client()?;
            let people = client.list_people().await.map_err(describe)?;
            for person in people {
                println!("{}  {} — {}", person.id, person.name, person.role);
            }
            Ok(())
        }
        "person" => {
            let id = expect_arg(args, 1, "person <id>")?;
            let client = client()?;
            let person = client.get_person(id).await.map_err(describe)?;
            println!("{} — {}", person.name, person.role);
            if let Some(last_met) = &person.last_met {
                println!("Met {} times, last seen {}", person.met_count, last_met);
            }
            if !person.context.is_empty() {
                println!("{}", person.context);
            }
            for follow_up in &person.open_follow_ups {
                println!("  [ ] {follow_up}");
            }
            Ok(())
        }
        "conversations" => {
            let client = client()?;
            let person_id = args.get(1).map(String::as_str);
            let items = client
                .list_conversations(person_id)
                .await
                .map_err(describe)?;
            print_summaries(&items);
            Ok(())
        }
        "show" => {
            let id = expect_arg(args, 1, "show <conversation-id>")?;
            let client = client()?;
            let conversation = client.get_conversation(id).await.map_err(describe)?;
            println!("{} — {} ({})", conversation.title, conversation.date, conversation.location);
            println!("{}", conversation.summary);
            for point in &conversation.key_points {
                println!("  • {point}");
            }
            for item in &conversation.action_items {
                let mark = if item.completed { "x" } else { " " };
                println!("  [{mark}] {}  ({})", item.text, item.id);
            }
            Ok(())
        }
        "search" => {
            let query = expect_arg(args, 1, "search <query>")?;
            let client = client()?;
            let app = AppState::new();
            app.refresh(&client).await.map_err(describe)?;
            print_summaries(&app.visible_conversations(None, query));
            Ok(())
        }
        "toggle" => {
            let conversation_id = expect_arg(args, 1, "toggle <conv-id> <item-id>")?;
            let item_id = expect_arg(args, 2, "toggle <conv-id> <item-id>")?;
            let client = client()?;
            let app = AppState::new();
            app.refresh(&client).await.map_err(describe)?;
            let updated = app
                .toggle_action_item(&client, conversation_id, item_id)
                .await
                .map_err(describe)?;
            let completed = updated
                .find_item(item_id)
                .map(|item| item.completed)
                .unwrap_or_default();
            println!(
                "{} / {} is now {}",
                updated.title,
                item_id,
                if completed { "completed" } else { "active" }
            );
            Ok(())
        }
        "seed" => {
            let app = AppState::new();
            app.seed();
            print_summaries(&app.visible_conversations(None, ""));
            Ok(())
        }
        _ => {
            println!("{USAGE}");
            Ok(())
        }
    }
}

fn client() -> Result<ApiClient, String> {
    let config = state::load_config().unwrap_or_else(|e| {
        log::info!("{e}; using defaults");
        Config::default()
    });
    ApiClient::from_config(&config).map_err(|e| describe(e))
}

fn expect_arg<'a>(args: &'a [String], index: usize, usage: &str) -> Result<&'a str, String> {
    args.get(index)
        .map(String::as_str)
        .ok_or_else(|| format!("Usage: conversa {usage}"))
}

fn print_summaries(items: &[ConversationListItem]) {
    if items.is_empty() {
        println!("No conversations found.");
        return;
    }
    for item in items {
        let badge = match item.active_action_items_count {
            0 => String::new(),
            n => format!("  [{n} open]"),
        };
        println!("{}  {} — {}{}", item.id, item.title, item.date, badge);
    }
}

fn describe(err: ApiError) -> String {
    let ui = UiError::from(&err);
    format!("{} {}", ui.message, ui.recovery_suggestion)
}
