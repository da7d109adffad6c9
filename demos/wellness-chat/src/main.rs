use anyhow::{Context, Result};
use mindful_rs::completion::provider_from_config;
use mindful_rs::config::MindfulConfig;
use mindful_rs::core::chat::ChatOrchestrator;
use mindful_rs::core::conversations::ConversationStore;
use mindful_rs::core::moods::MoodStore;
use mindful_rs::core::storage::{FileBlobStore, resolve_storage_root};
use mindful_rs::init_logging;
use std::io::{self, BufRead, Write};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let config = MindfulConfig::load_default().context("failed to load config")?;
    let root = resolve_storage_root(&config.storage).context("failed to resolve storage root")?;
    let blob_store = Arc::new(FileBlobStore::new(root).context("failed to open blob store")?);
    let provider =
        provider_from_config(&config.completion).context("failed to build completion provider")?;

    let conversations = ConversationStore::open(Some(blob_store.clone()))
        .context("failed to open conversation store")?;
    let moods = MoodStore::open(Some(blob_store));
    let chat = ChatOrchestrator::new(conversations, provider);

    if let Some(entry) = moods.todays_entry() {
        println!("(today's mood: {})", entry.mood.as_str());
    }
    if let Some(conversation) = chat.conversations().current() {
        for message in &conversation.messages {
            println!("[{}] {}", message.role.as_str(), message.content);
        }
    }

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let Some(line) = stdin.lock().lines().next() else {
            break;
        };
        let line = line?;
        if line.trim() == "/quit" {
            break;
        }
        chat.send_message(&line).await?;

        if let Some(error) = chat.last_error() {
            eprintln!("error: {error}");
        } else if let Some(conversation) = chat.conversations().current()
            && let Some(message) = conversation.messages.last()
        {
            println!("[{}] {}", message.role.as_str(), message.content);
        }
    }

    Ok(())
}
