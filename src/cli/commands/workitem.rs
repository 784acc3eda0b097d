//! workitem command - Show work item details
//!
//! # Arguments
//!
//! Required: work item id (first positional or `--work-item-id`), collection
//! URL (`--service-url`), personal access token (`--token`, masked when
//! prompted). Optional: `--project`.
//!
//! Each may also come from the settings file; with `--save` the resolved
//! values are written back for the next run.

use anyhow::{Context as _, Result};

use crate::cli::args::ShowArgs;
use crate::cli::Context;
use crate::core::settings::SettingsStore;
use crate::inputs::{
    catalog, resolve_inputs, ArgSchema, ArgumentBag, InputChannel, Invocation, Prompter,
    TerminalInput,
};
use crate::tracker::{HttpTracker, WorkItem, WorkItemTracker};
use crate::ui::output::OutputMode;

/// Argument schema for `workitem show`.
pub fn show_schema() -> ArgSchema {
    ArgSchema::new(
        vec![
            catalog::work_item_id(),
            catalog::service_url(),
            catalog::token(),
        ],
        vec![catalog::project()],
    )
}

/// Map parsed CLI flags onto an [`Invocation`].
pub fn show_invocation(ctx: &Context, args: &ShowArgs) -> Invocation {
    Invocation::new(args.args.clone(), Default::default())
        .with_flag(catalog::WORK_ITEM_ID, args.work_item_id.as_ref())
        .with_flag(catalog::SERVICE_URL, args.connection.service_url.as_ref())
        .with_flag(catalog::TOKEN, args.connection.token.as_ref())
        .with_flag(catalog::PROJECT, args.connection.project.as_ref())
        .with_save(ctx.save)
        .with_explicit_settings(ctx.settings.is_explicit())
}

/// Run the `workitem show` command.
pub fn show(ctx: &Context, args: &ShowArgs) -> Result<()> {
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(show_async(ctx, args))
}

async fn show_async(ctx: &Context, args: &ShowArgs) -> Result<()> {
    let store = ctx.settings_store();
    let invocation = show_invocation(ctx, args);

    let bag = if ctx.interactive {
        let mut prompter = Prompter::new(TerminalInput::new(), &ctx.logger);
        resolve_show_inputs(ctx, &invocation, &store, Some(&mut prompter)).await?
    } else {
        resolve_show_inputs::<TerminalInput>(ctx, &invocation, &store, None).await?
    };

    let tracker = HttpTracker::new(
        bag.require_str(&catalog::service_url())?,
        bag.require_str(&catalog::token())?,
    )
    .with_project(bag.str(catalog::PROJECT).map(str::to_string));

    let item = fetch_and_print(ctx, &bag, &tracker).await?;
    ctx.logger
        .debug_area("tracker", format!("fetched work item {} rev {}", item.id, item.rev));
    Ok(())
}

/// Resolve the `workitem show` schema for `invocation`.
pub async fn resolve_show_inputs<C: InputChannel>(
    ctx: &Context,
    invocation: &Invocation,
    store: &dyn SettingsStore,
    prompter: Option<&mut Prompter<'_, C>>,
) -> Result<ArgumentBag> {
    let bag = resolve_inputs(invocation, &show_schema(), store, prompter, &ctx.logger).await?;
    if invocation.save {
        ctx.logger
            .info(format!("Saved settings to {}.", store.location()));
    }
    Ok(bag)
}

/// Fetch the work item named in `bag` and print it.
pub async fn fetch_and_print(
    ctx: &Context,
    bag: &ArgumentBag,
    tracker: &dyn WorkItemTracker,
) -> Result<WorkItem> {
    let id = bag.require_int(&catalog::work_item_id())?;
    let item = tracker
        .get_work_item(id)
        .await
        .with_context(|| {
            format!("Failed to fetch work item {} from {} tracker", id, tracker.name())
        })?;

    match ctx.logger.mode() {
        OutputMode::Json => ctx.logger.json(&serde_json::to_value(&item)?),
        OutputMode::Friendly => ctx.logger.success(friendly_lines(&item)),
    }
    Ok(item)
}

/// Human-readable summary of a work item.
pub fn friendly_lines(item: &WorkItem) -> Vec<String> {
    let mut lines = vec![format!("ID: {}", item.id)];
    if let Some(kind) = item.work_item_type() {
        lines.push(format!("Type: {}", kind));
    }
    lines.push(format!("Title: {}", item.title().unwrap_or("")));
    if let Some(state) = item.state() {
        lines.push(format!("State: {}", state));
    }
    if let Some(who) = item.assigned_to() {
        lines.push(format!("Assigned To: {}", who));
    }
    lines.push(format!("Revision: {}", item.rev));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::paths::SettingsLocation;
    use crate::inputs::ArgValue;
    use crate::tracker::mock::MockTracker;
    use crate::tracker::TrackerError;
    use crate::ui::output::{Logger, Verbosity};

    fn context(mode: OutputMode) -> Context {
        Context {
            logger: Logger::new(Verbosity::Normal, mode),
            interactive: false,
            save: false,
            settings: SettingsLocation::Default("/nonexistent/settings.toml".into()),
        }
    }

    fn bag_for(id: i64) -> ArgumentBag {
        let mut bag = ArgumentBag::new();
        bag.insert(catalog::WORK_ITEM_ID, ArgValue::Int(id));
        bag
    }

    #[test]
    fn schema_shape() {
        let schema = show_schema();
        let required: Vec<_> = schema.required.iter().map(|d| d.name()).collect();
        assert_eq!(
            required,
            [catalog::WORK_ITEM_ID, catalog::SERVICE_URL, catalog::TOKEN]
        );
        assert!(schema.required[2].is_masked());
        assert_eq!(schema.optional[0].name(), catalog::PROJECT);
    }

    #[test]
    fn friendly_lines_skip_absent_fields() {
        let tracker = MockTracker::new();
        tracker.add_item(3, "Fix login", "Resolved");
        let item = tokio_test::block_on(tracker.get_work_item(3)).unwrap();

        assert_eq!(
            friendly_lines(&item),
            [
                "ID: 3",
                "Title: Fix login",
                "State: Resolved",
                "Revision: 1"
            ]
        );
    }

    #[tokio::test]
    async fn fetch_and_print_friendly() {
        let tracker = MockTracker::new();
        tracker.add_item(12, "Crash on save", "Active");

        let item = fetch_and_print(&context(OutputMode::Friendly), &bag_for(12), &tracker)
            .await
            .expect("fetch");

        assert_eq!(item.title(), Some("Crash on save"));
        assert_eq!(tracker.requested_ids(), vec![12]);
    }

    #[tokio::test]
    async fn fetch_and_print_json() {
        let tracker = MockTracker::new();
        tracker.add_item(12, "Crash on save", "Active");

        let item = fetch_and_print(&context(OutputMode::Json), &bag_for(12), &tracker)
            .await
            .expect("fetch");

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["id"], 12);
        assert_eq!(json["fields"]["System.State"], "Active");
    }

    #[tokio::test]
    async fn fetch_failure_names_the_tracker() {
        let tracker = MockTracker::new();
        tracker.fail_with(TrackerError::AuthFailed("expired".into()));

        let err = fetch_and_print(&context(OutputMode::Friendly), &bag_for(3), &tracker)
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Failed to fetch work item 3 from mock tracker");
    }

    #[tokio::test]
    async fn fetch_without_id_is_missing_required() {
        let tracker = MockTracker::new();
        let err = fetch_and_print(&context(OutputMode::Friendly), &ArgumentBag::new(), &tracker)
            .await
            .unwrap_err();

        assert!(err.to_string().starts_with("Required parameter work-item-id not supplied."));
        assert!(tracker.requested_ids().is_empty());
    }
}
