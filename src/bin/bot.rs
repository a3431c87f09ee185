use anyhow::Result;
use dotenvy::dotenv;
use log::{error, info, warn};
use serenity::async_trait;
use serenity::model::application::interaction::Interaction;
use serenity::model::gateway::Ready;
use serenity::prelude::*;
use std::sync::Arc;

use slash_guard::commands::handlers::builtin_registry;
use slash_guard::commands::{
    dispatch, register_commands, CommandClient, CommandRegistry, InMemoryCooldownStore, Invocation,
    LoggingListener, SerenityInvocation,
};
use slash_guard::core::Config;

struct Handler {
    registry: CommandRegistry,
    client: CommandClient,
    dev_guild: Option<u64>,
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        info!("{} is connected!", ready.user.name);

        if let Err(e) = register_commands(&ctx, &self.registry, self.dev_guild).await {
            error!("Failed to register slash commands: {e}");
        }
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        let Interaction::ApplicationCommand(command) = interaction else {
            return;
        };

        let invocation = SerenityInvocation::new(&ctx, &command);
        let (name, subcommand) = invocation.command_path();

        let Some(slash_command) = self.registry.resolve(&name, subcommand.as_deref()) else {
            warn!("Unknown command: {name}");
            return;
        };

        if let Err(e) = dispatch(slash_command.as_ref(), &invocation, &self.client).await {
            error!("Command /{name} failed: {e:#}");
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    let config = Config::from_env()?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    info!("Starting slash-guard bot...");

    let cooldowns = Arc::new(InMemoryCooldownStore::new());
    let client = CommandClient::from_config(&config)
        .with_cooldown_store(cooldowns.clone())
        .with_listener(Arc::new(LoggingListener));

    // Expired cooldowns are only evicted when read, sweep the rest periodically
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(std::time::Duration::from_secs(300));
        loop {
            interval.tick().await;
            cooldowns.clean();
        }
    });

    let registry = builtin_registry(std::time::Instant::now());
    info!("Loaded {} commands", registry.len());

    let handler = Handler {
        registry,
        client,
        dev_guild: config.discord_guild_id,
    };

    let intents = GatewayIntents::GUILDS | GatewayIntents::GUILD_VOICE_STATES;

    let mut discord = Client::builder(&config.discord_token, intents)
        .event_handler(handler)
        .await
        .map_err(|e| {
            error!("Failed to create Discord client: {e}");
            anyhow::anyhow!("Client creation failed: {}", e)
        })?;

    info!("Bot configured successfully. Connecting to Discord gateway...");

    discord.start().await?;
    Ok(())
}
