//! inputs
//!
//! Command argument resolution.
//!
//! # Sources
//!
//! A command declares an [`ArgSchema`] of required and optional
//! [`ArgDescriptor`]s. Values come from, in priority order:
//!
//! 1. Positional tokens (required descriptors, by index)
//! 2. `--<name> <value>` flags
//! 3. The persisted settings file
//! 4. Descriptor defaults
//!
//! and, when something required is still missing and the session is
//! interactive, from prompting the user.
//!
//! # Modules
//!
//! - [`descriptor`] - Argument metadata, values and parsers
//! - [`bag`] - The resolved argument bag
//! - [`resolver`] - Non-interactive merge
//! - [`prompt`] - Interactive fill-in
//! - [`channel`] - Input channel abstraction (terminal, scripted)
//! - [`catalog`] - Descriptors shared by commands
//!
//! # Example
//!
//! ```ignore
//! use witx::inputs::{resolve_inputs, Invocation};
//!
//! let bag = resolve_inputs(&invocation, &schema, &store, Some(&mut prompter), &logger).await?;
//! let id = bag.require_int(&catalog::work_item_id())?;
//! ```

pub mod bag;
pub mod catalog;
pub mod channel;
pub mod descriptor;
pub mod error;
pub mod prompt;
pub mod resolver;

pub use bag::ArgumentBag;
pub use channel::{InputChannel, ReadRequest, ScriptedInput, TerminalInput};
pub use descriptor::{ArgDescriptor, ArgKind, ArgSchema, ArgValue, DefaultValue};
pub use error::InputError;
pub use prompt::{prompt_message, Prompter};
pub use resolver::Resolver;

use std::collections::BTreeMap;

use crate::core::settings::{SettingsSnapshot, SettingsStore};
use crate::ui::output::Logger;

/// Raw `--<name> <value>` flags, keyed by argument name.
pub type FlagOptions = BTreeMap<String, String>;

/// What the user typed for one command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Invocation {
    /// Positional tokens, in order.
    pub positionals: Vec<String>,
    /// Named flags.
    pub flags: FlagOptions,
    /// Persist resolved values to the settings store.
    pub save: bool,
    /// The settings path was given explicitly (warn if it does not exist).
    pub explicit_settings: bool,
}

impl Invocation {
    pub fn new(positionals: Vec<String>, flags: FlagOptions) -> Self {
        Self {
            positionals,
            flags,
            ..Self::default()
        }
    }

    /// Add a flag if a value is present.
    pub fn with_flag(mut self, name: &str, value: Option<impl ToString>) -> Self {
        if let Some(v) = value {
            self.flags.insert(name.to_string(), v.to_string());
        }
        self
    }

    pub fn with_save(mut self, save: bool) -> Self {
        self.save = save;
        self
    }

    pub fn with_explicit_settings(mut self, explicit: bool) -> Self {
        self.explicit_settings = explicit;
        self
    }

    /// Values the prompter may treat as already supplied.
    ///
    /// Per descriptor the first non-empty of positional token (required
    /// descriptors only), flag and settings value is taken, and kept only
    /// if it parses to a truthy value. Anything else is left for the
    /// prompter to ask.
    pub fn supplied(&self, schema: &ArgSchema, settings: &SettingsSnapshot) -> FlagOptions {
        let positional = |index: usize| self.positionals.get(index).map(String::as_str);
        let required = schema.required.iter().enumerate().map(|(i, d)| (d, positional(i)));
        let optional = schema.optional.iter().map(|d| (d, None));

        let mut supplied = FlagOptions::new();
        for (descriptor, positional) in required.chain(optional) {
            let name = descriptor.name();
            let raw = [positional, self.flags.get(name).map(String::as_str), settings.get(name)]
                .into_iter()
                .flatten()
                .find(|raw| !raw.is_empty());
            let usable = raw.filter(|raw| {
                descriptor
                    .parse(raw)
                    .is_ok_and(|value| value.is_truthy())
            });
            if let Some(raw) = usable {
                supplied.insert(name.to_string(), raw.to_string());
            }
        }
        supplied
    }

    /// Positional tokens not consumed by required descriptors.
    pub fn rest(&self, schema: &ArgSchema) -> Vec<String> {
        self.positionals
            .iter()
            .skip(schema.required.len())
            .cloned()
            .collect()
    }
}

/// Load settings, resolve, prompt for gaps, and save when asked.
///
/// The prompter is only used when resolution fails with
/// [`InputError::MissingRequired`]; pass `None` for non-interactive runs.
/// When `invocation.save` is set the save completes before this returns,
/// and a failed save is an error.
pub async fn resolve_inputs<C: InputChannel>(
    invocation: &Invocation,
    schema: &ArgSchema,
    store: &dyn SettingsStore,
    prompter: Option<&mut Prompter<'_, C>>,
    logger: &Logger,
) -> Result<ArgumentBag, InputError> {
    logger.debug_area("inputs", "inputs.resolve_inputs");

    if invocation.explicit_settings && !store.exists() {
        logger.warn(format!(
            "settings file {} does not exist; continuing without saved values",
            store.location()
        ));
    }
    let settings = store.load()?;

    let resolved = Resolver::new(logger).resolve(
        &invocation.positionals,
        &invocation.flags,
        &settings,
        schema,
    );

    let bag = match (resolved, prompter) {
        (Ok(bag), _) => bag,
        (Err(InputError::MissingRequired { name, .. }), Some(prompter)) => {
            logger.debug_area("inputs", format!("prompting, {} missing", name));
            let supplied = invocation.supplied(schema, &settings);
            prompter
                .prompt(schema, &supplied, &invocation.rest(schema))
                .await?
        }
        (Err(e), _) => return Err(e),
    };

    if invocation.save {
        store.save(&bag.to_settings())?;
        logger.debug_area("inputs", format!("saved settings to {}", store.location()));
    }

    Ok(bag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_flag_skips_none() {
        let inv = Invocation::default()
            .with_flag("a", Some(1))
            .with_flag("b", None::<String>);
        assert_eq!(inv.flags.get("a").map(String::as_str), Some("1"));
        assert!(!inv.flags.contains_key("b"));
    }

    #[test]
    fn supplied_prefers_positional_then_flag_then_settings() {
        let schema = ArgSchema::new(
            vec![catalog::work_item_id()],
            vec![catalog::project()],
        );
        let inv = Invocation::new(vec!["12".into()], FlagOptions::new())
            .with_flag(catalog::WORK_ITEM_ID, Some("99"));
        let settings: SettingsSnapshot = [(catalog::PROJECT, "Fabrikam")].into_iter().collect();

        let supplied = inv.supplied(&schema, &settings);
        assert_eq!(supplied.get(catalog::WORK_ITEM_ID).map(String::as_str), Some("12"));
        assert_eq!(supplied.get(catalog::PROJECT).map(String::as_str), Some("Fabrikam"));
    }

    #[test]
    fn supplied_drops_falsy_values() {
        let schema = ArgSchema::new(vec![catalog::work_item_id()], vec![]);
        let inv = Invocation::new(vec!["0".into()], FlagOptions::new());
        let settings: SettingsSnapshot = [(catalog::WORK_ITEM_ID, "12")].into_iter().collect();

        assert!(inv.supplied(&schema, &settings).is_empty());
    }

    #[test]
    fn rest_skips_required_positions() {
        let schema = ArgSchema::new(vec![catalog::work_item_id()], vec![]);
        let inv = Invocation::new(vec!["1".into(), "2".into(), "3".into()], FlagOptions::new());
        assert_eq!(inv.rest(&schema), ["2".to_string(), "3".to_string()]);
    }
}
