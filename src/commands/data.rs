//! # Command Registration Data
//!
//! Turns command descriptors into registrable command metadata, then into
//! serenity builders.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use log::warn;
use serde::Serialize;
use serenity::builder::{CreateApplicationCommand, CreateApplicationCommandOption};
use serenity::model::application::command::CommandOptionType;

use super::descriptor::{CommandDescriptor, OptionData, OptionKind};

/// One `/<parent> <child>` subcommand
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubcommandData {
    pub name: String,
    pub description: String,
    pub options: Vec<OptionData>,
}

/// Registrable metadata for a top-level command
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommandData {
    pub name: String,
    pub description: String,
    pub options: Vec<OptionData>,
    pub subcommands: Vec<SubcommandData>,
}

/// Build the registration metadata for a descriptor
///
/// Pure: the same descriptor always yields the same data. Lists are always
/// present, empty when the command has no options or children.
pub fn build_command_data(descriptor: &CommandDescriptor) -> CommandData {
    CommandData {
        name: descriptor.name.clone(),
        description: descriptor.help.clone(),
        options: descriptor.options.clone(),
        subcommands: descriptor
            .children
            .iter()
            .map(|child| SubcommandData {
                name: child.name.clone(),
                description: child.help.clone(),
                options: child.options.clone(),
            })
            .collect(),
    }
}

impl CommandData {
    /// Convert into a serenity builder for registration
    pub fn to_create_command(&self) -> CreateApplicationCommand {
        let mut cmd = CreateApplicationCommand::default();
        cmd.name(&self.name).description(&self.description);

        // Discord rejects plain options next to subcommands
        if self.subcommands.is_empty() {
            for option in &self.options {
                cmd.add_option(create_option(option));
            }
        } else if !self.options.is_empty() {
            warn!(
                "/{} has subcommands, dropping {} top-level options from registration",
                self.name,
                self.options.len()
            );
        }

        for sub in &self.subcommands {
            let mut subcommand = CreateApplicationCommandOption::default();
            subcommand
                .name(&sub.name)
                .description(&sub.description)
                .kind(CommandOptionType::SubCommand);
            for option in &sub.options {
                subcommand.add_sub_option(create_option(option));
            }
            cmd.add_option(subcommand);
        }

        cmd
    }
}

fn create_option(option: &OptionData) -> CreateApplicationCommandOption {
    let mut o = CreateApplicationCommandOption::default();
    o.name(&option.name)
        .description(&option.description)
        .kind(option.kind.to_serenity())
        .required(option.required);

    for choice in &option.choices {
        match option.kind {
            OptionKind::Integer => match choice.value.parse::<i32>() {
                Ok(val) => {
                    o.add_int_choice(&choice.name, val);
                }
                Err(_) => warn!(
                    "Dropping choice {} of {}: {:?} is not a 32-bit integer",
                    choice.name, option.name, choice.value
                ),
            },
            OptionKind::Number => match choice.value.parse::<f64>() {
                Ok(val) => {
                    o.add_number_choice(&choice.name, val);
                }
                Err(_) => warn!(
                    "Dropping choice {} of {}: {:?} is not a number",
                    choice.name, option.name, choice.value
                ),
            },
            _ => {
                o.add_string_choice(&choice.name, &choice.value);
            }
        }
    }

    o
}
