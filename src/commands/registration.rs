//! Slash command registration with Discord
//!
//! - **Version**: 2.0.0
//! - **Since**: 0.2.0
//!
//! ## Changelog
//! - 2.0.0: Build commands from the registry; guild-tied commands registered per guild
//! - 1.0.0: Reorganized from monolithic slash_commands.rs

use anyhow::Result;
use log::info;
use serenity::builder::CreateApplicationCommand;
use serenity::model::application::command::Command;
use serenity::model::id::GuildId;
use serenity::prelude::Context;
use std::collections::BTreeMap;

use super::data::build_command_data;
use super::registry::CommandRegistry;

/// Commands split by where they get registered
#[derive(Default)]
pub struct RegistrationPlan {
    pub global: Vec<CreateApplicationCommand>,
    pub per_guild: BTreeMap<u64, Vec<CreateApplicationCommand>>,
}

/// Group registry commands by registration target
///
/// Commands with a `guild_id` go to that guild. With `dev_guild` set, every
/// other command goes to the dev guild instead of globally (guild commands
/// update instantly, global ones can take up to an hour).
pub fn plan_registration(registry: &CommandRegistry, dev_guild: Option<u64>) -> RegistrationPlan {
    let mut plan = RegistrationPlan::default();

    for command in registry.commands() {
        let descriptor = command.descriptor();
        let builder = build_command_data(descriptor).to_create_command();

        match descriptor.guild_id.or(dev_guild) {
            Some(guild_id) => plan.per_guild.entry(guild_id).or_default().push(builder),
            None => plan.global.push(builder),
        }
    }

    plan
}

/// Register every command in the registry
pub async fn register_commands(
    ctx: &Context,
    registry: &CommandRegistry,
    dev_guild: Option<u64>,
) -> Result<()> {
    let plan = plan_registration(registry, dev_guild);

    if !plan.global.is_empty() {
        let count = plan.global.len();
        Command::set_global_application_commands(&ctx.http, |commands| {
            for command in plan.global {
                commands.add_application_command(command);
            }
            commands
        })
        .await?;
        info!("Global slash commands registered successfully ({count} commands)");
    }

    for (guild_id, guild_commands) in plan.per_guild {
        let count = guild_commands.len();
        GuildId(guild_id)
            .set_application_commands(&ctx.http, |commands| {
                for command in guild_commands {
                    commands.add_application_command(command);
                }
                commands
            })
            .await?;
        info!("Guild slash commands registered for guild {guild_id} ({count} commands)");
    }

    Ok(())
}
