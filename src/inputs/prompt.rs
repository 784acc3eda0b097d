//! inputs::prompt
//!
//! Interactive, one-at-a-time collection of argument values.
//!
//! # Design
//!
//! Every descriptor in `required ++ optional` is visited in order:
//!
//! - **Skip**: a value for the name was supplied by the caller and parses
//!   to something truthy; it is copied into the result without reading
//!   input. A falsy supplied value (`0`, `false`) is asked for instead
//! - **Prompt**: otherwise one line is read, masked when the descriptor is
//!   masked
//! - **Accept**: an empty answer takes the default, a non-empty answer is
//!   parsed
//!
//! After the last descriptor, the first required descriptor without a
//! truthy value fails the whole operation. A read failure aborts at once.
//! Nothing is retried and no partial bag is returned on error.

use super::bag::ArgumentBag;
use super::channel::{InputChannel, ReadRequest};
use super::descriptor::{ArgDescriptor, ArgSchema, ArgValue};
use super::error::InputError;
use super::FlagOptions;
use crate::ui::output::Logger;

const AREA: &str = "inputs";

/// Prompt text for one descriptor.
///
/// `Enter <label>` followed by ` (enter sets <default>)` when there is a
/// default worth showing, then `  > `.
pub fn prompt_message(descriptor: &ArgDescriptor) -> String {
    let mut msg = format!("Enter {}", descriptor.label());
    if let Some(hint) = descriptor.default_hint() {
        msg.push_str(&format!(" (enter sets {})", hint));
    }
    msg.push_str("  > ");
    msg
}

/// Collects argument values through an [`InputChannel`].
pub struct Prompter<'a, C: InputChannel> {
    channel: C,
    logger: &'a Logger,
}

impl<'a, C: InputChannel> Prompter<'a, C> {
    pub fn new(channel: C, logger: &'a Logger) -> Self {
        Self { channel, logger }
    }

    /// Fill every descriptor of `schema`, prompting for those not in
    /// `supplied`.
    ///
    /// `rest` is carried into the returned bag unchanged.
    ///
    /// # Errors
    ///
    /// - [`InputError::Prompt`] if a read fails
    /// - [`InputError::Parse`] if a supplied value or an answer does not parse
    /// - [`InputError::MissingRequired`] for the first required descriptor
    ///   still without a value
    pub async fn prompt(
        &mut self,
        schema: &ArgSchema,
        supplied: &FlagOptions,
        rest: &[String],
    ) -> Result<ArgumentBag, InputError> {
        self.logger.debug_area(AREA, "inputs.prompt");

        let mut bag = ArgumentBag::new();
        bag.set_rest(rest.to_vec());

        for descriptor in schema.all() {
            if let Some(raw) = supplied.get(descriptor.name()).filter(|r| !r.is_empty()) {
                let value = descriptor.parse(raw)?;
                if value.is_truthy() {
                    bag.insert(descriptor.name(), value);
                    continue;
                }
                self.logger.debug_area(
                    AREA,
                    format!("{} supplied as {}, asking", descriptor.name(), value),
                );
            }

            let value = self.ask(descriptor).await?;
            if let Some(value) = value {
                if descriptor.is_masked() {
                    self.logger.debug_area(AREA, format!("read: {} (masked)", descriptor.name()));
                } else {
                    self.logger.debug_area(AREA, format!("read: {}", value));
                }
                bag.insert(descriptor.name(), value);
            }
        }

        if let Some(descriptor) = bag.first_missing(&schema.required) {
            self.logger
                .debug_area(AREA, format!("{} is required.", descriptor.name()));
            return Err(InputError::MissingRequired {
                name: descriptor.name().to_string(),
                label: descriptor.label().to_string(),
            });
        }

        Ok(bag)
    }

    async fn ask(&mut self, descriptor: &ArgDescriptor) -> Result<Option<ArgValue>, InputError> {
        let request = ReadRequest {
            prompt: prompt_message(descriptor),
            masked: descriptor.is_masked(),
        };

        let answer = self.channel.read_line(&request).await.map_err(|e| {
            self.logger
                .debug_area(AREA, format!("Input reading failed with message: {}", e));
            InputError::Prompt(e)
        })?;

        if answer.is_empty() {
            descriptor.resolve_default()
        } else {
            descriptor.parse(&answer).map(Some)
        }
    }
}
