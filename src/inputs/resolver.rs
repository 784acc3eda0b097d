//! inputs::resolver
//!
//! Non-interactive merge of argument sources into an [`ArgumentBag`].
//!
//! # Priority
//!
//! For each descriptor the first non-empty raw candidate wins:
//!
//! 1. Positional token at the descriptor's index (required descriptors only)
//! 2. Flag with the descriptor's name
//! 3. Settings value with the descriptor's name
//! 4. The descriptor's default
//!
//! The winning candidate is parsed; a parse failure aborts resolution.
//!
//! # Missing Arguments
//!
//! Every required descriptor is evaluated before failing. The error names
//! the first required descriptor (in declaration order) whose resolved
//! value is absent or not truthy. Optional descriptors never fail.

use super::bag::{ArgumentBag, REST_KEY};
use super::descriptor::{ArgDescriptor, ArgSchema, ArgValue};
use super::error::InputError;
use super::FlagOptions;
use crate::core::settings::SettingsSnapshot;
use crate::ui::output::Logger;

const AREA: &str = "inputs";

/// Resolves arguments from positional tokens, flags, settings and defaults.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    logger: &'a Logger,
}

impl<'a> Resolver<'a> {
    pub fn new(logger: &'a Logger) -> Self {
        Self { logger }
    }

    /// Produce the merged bag for one invocation.
    ///
    /// The settings snapshot is copied into the bag first, so keys unknown
    /// to the schema pass through as strings. A saved `_` key is dropped;
    /// that name belongs to the leftover positionals. Positional tokens beyond the
    /// required descriptors end up in [`ArgumentBag::rest`].
    ///
    /// # Errors
    ///
    /// - [`InputError::Parse`] when the winning raw candidate does not parse
    /// - [`InputError::MissingRequired`] for the first unresolved required
    ///   descriptor
    pub fn resolve(
        &self,
        positionals: &[String],
        flags: &FlagOptions,
        settings: &SettingsSnapshot,
        schema: &ArgSchema,
    ) -> Result<ArgumentBag, InputError> {
        self.logger.debug_area(AREA, "inputs.resolve");

        let mut bag = ArgumentBag::new();
        for (name, raw) in settings.iter().filter(|(name, _)| *name != REST_KEY) {
            bag.insert(name, ArgValue::from(raw));
        }

        let mut missing: Option<&ArgDescriptor> = None;
        for (index, descriptor) in schema.required.iter().enumerate() {
            let value = resolve_one(
                descriptor,
                positionals.get(index).map(String::as_str),
                flags,
                settings,
            )?;
            let supplied = value.as_ref().is_some_and(ArgValue::is_truthy);
            store(&mut bag, descriptor, value);

            if !supplied {
                self.logger.debug_area(
                    AREA,
                    format!("Required parameter {} not supplied.", descriptor.name()),
                );
                missing.get_or_insert(descriptor);
            }
        }

        for descriptor in &schema.optional {
            let value = resolve_one(descriptor, None, flags, settings)?;
            store(&mut bag, descriptor, value);
        }

        if let Some(descriptor) = missing {
            return Err(InputError::MissingRequired {
                name: descriptor.name().to_string(),
                label: descriptor.label().to_string(),
            });
        }

        bag.set_rest(
            positionals
                .iter()
                .skip(schema.required.len())
                .cloned()
                .collect(),
        );
        Ok(bag)
    }
}

fn resolve_one(
    descriptor: &ArgDescriptor,
    positional: Option<&str>,
    flags: &FlagOptions,
    settings: &SettingsSnapshot,
) -> Result<Option<ArgValue>, InputError> {
    let name = descriptor.name();
    let candidate = [
        positional,
        flags.get(name).map(String::as_str),
        settings.get(name),
    ]
    .into_iter()
    .flatten()
    .find(|raw| !raw.is_empty());

    match candidate {
        Some(raw) => descriptor.parse(raw).map(Some),
        None => descriptor.resolve_default(),
    }
}

fn store(bag: &mut ArgumentBag, descriptor: &ArgDescriptor, value: Option<ArgValue>) {
    match value {
        Some(v) => bag.insert(descriptor.name(), v),
        None => {
            bag.remove(descriptor.name());
        }
    }
}
