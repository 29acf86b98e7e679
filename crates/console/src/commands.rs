//! Subcommand handlers. Each returns the text to print on stdout.

use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use industrialerp_infra::{CommandDispatcher, InMemoryRecordStore, RecordStore};

use crate::cli::{Command, CreateArgs, ShowArgs};
use crate::config::AppConfig;
use crate::navigation::NavigationState;
use crate::render::{render_modules, render_page, render_receipt};
use crate::views::{build_page, sidebar};

pub fn run(command: &Command, config: &AppConfig) -> Result<String> {
    let store = open_store(config)?;
    match command {
        Command::Show(args) => run_show(&store, args),
        Command::Modules => Ok(run_modules(&store)),
        Command::Create(args) => run_create(store, args, config),
    }
}

pub fn open_store(config: &AppConfig) -> Result<InMemoryRecordStore> {
    let store = InMemoryRecordStore::load(config.data.as_deref()).with_context(|| {
        match &config.data {
            Some(path) => format!("load dataset {}", path.display()),
            None => "load embedded sample dataset".to_string(),
        }
    })?;
    Ok(store)
}

pub fn run_show<S: RecordStore + ?Sized>(store: &S, args: &ShowArgs) -> Result<String> {
    let navigation = args.navigation();
    let span = info_span!("show", module = %navigation.active);
    let _guard = span.enter();

    let page = build_page(store, navigation, &args.query())
        .with_context(|| format!("build the {} page", navigation.active))?;
    debug!(cards = page.view.cards().len(), "page built");

    if args.json {
        let mut json = serde_json::to_string_pretty(&page).context("serialize page")?;
        json.push('\n');
        return Ok(json);
    }
    render_page(&page).context("render page")
}

pub fn run_modules<S: RecordStore + ?Sized>(store: &S) -> String {
    render_modules(&sidebar(store, &NavigationState::default()))
}

pub fn run_create(
    store: InMemoryRecordStore,
    args: &CreateArgs,
    config: &AppConfig,
) -> Result<String> {
    let command = args.to_command();
    let dispatcher = CommandDispatcher::new(store, config.today);
    let receipt = dispatcher
        .dispatch(&command)
        .with_context(|| format!("{} rejected", command.kind()))?;
    info!(kind = receipt.kind, id = %receipt.id, "create command accepted");
    Ok(render_receipt(&receipt))
}
