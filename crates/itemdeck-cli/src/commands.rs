//! Command implementations.
//!
//! Every command opens a fresh [`Store`] over the session file, runs the
//! matching store operation or workflow, and writes the session back when
//! records changed.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use itemdeck_catalog::Catalog;
use itemdeck_model::{FilterConfig, ItemId, Record, SortConfig, SortDirection};
use itemdeck_report::{DashboardStats, items_by_status, value_by_category};
use itemdeck_store::{ItemActions, ItemWorkflow, NotificationChannel, Store, WorkflowError};
use itemdeck_validate::ItemDraft;

use crate::cli::{AddArgs, Cli, Command, ListArgs, UpdateArgs};
use crate::render;
use crate::session::Session;
use crate::settings::{self, Settings};

/// Everything a command needs besides its own arguments.
#[derive(Debug)]
pub struct Environment {
    pub settings: Settings,
    pub catalog: Catalog,
    pub session_path: PathBuf,
}

impl Environment {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let settings = settings::load_settings(cli.config.as_deref())?;
        let catalog = settings.load_catalog()?;
        let session_path = match &cli.session {
            Some(path) => path.clone(),
            None => settings::default_session_path()
                .context("could not determine a session path; pass --session")?,
        };
        Ok(Self {
            settings,
            catalog,
            session_path,
        })
    }

    /// Store holding the saved session, seeded from the catalog when empty.
    pub fn open_store(&self) -> Result<Store> {
        let mut store = Store::new(self.settings.store_config());
        if let Some(session) = Session::load(&self.session_path)? {
            store.set_items(session.items);
        }
        store.seed_if_empty(&self.catalog);
        Ok(store)
    }

    fn save(&self, store: &Store) -> Result<()> {
        let session = Session {
            items: store.state().items.to_vec(),
        };
        session.save(&self.session_path)
    }
}

pub fn run(command: &Command, env: &Environment, out: &mut impl Write) -> Result<()> {
    match command {
        Command::List(args) => run_list(args, env, out),
        Command::Stats => run_stats(env, out),
        Command::Show { id } => run_show(id, env, out),
        Command::Add(args) => run_add(args, env, out),
        Command::Update(args) => run_update(args, env, out),
        Command::Delete { id } => run_delete(id, env, out),
    }
}

fn run_list(args: &ListArgs, env: &Environment, out: &mut impl Write) -> Result<()> {
    let mut store = env.open_store()?;
    let filters = FilterConfig::from_form(
        args.search.as_deref().unwrap_or_default(),
        args.category.as_deref().unwrap_or_default(),
        args.status.as_deref().unwrap_or_default(),
    )?;
    if let Some(category) = &filters.category
        && !env.catalog.contains_category(category.as_str())
    {
        tracing::warn!(%category, "category is not in the catalog");
    }
    store.set_filters(filters);
    store.set_sort(requested_sort(args, store.state().sort));

    let snapshot = store.snapshot();
    writeln!(out, "{}", render::items_table(&snapshot.filtered_items, &snapshot.sort))?;
    writeln!(
        out,
        "{} of {} items",
        snapshot.filtered_items.len(),
        snapshot.items.len()
    )?;
    Ok(())
}

fn requested_sort(args: &ListArgs, current: SortConfig) -> SortConfig {
    match (args.sort, args.direction()) {
        (Some(field), direction) => {
            SortConfig::new(field, direction.unwrap_or(SortDirection::Asc))
        }
        (None, Some(direction)) => SortConfig::new(current.field, direction),
        (None, None) => current,
    }
}

fn run_stats(env: &Environment, out: &mut impl Write) -> Result<()> {
    let store = env.open_store()?;
    let items = &store.state().items;
    writeln!(out, "{}", render::stats_table(&DashboardStats::from_items(items)))?;
    writeln!(
        out,
        "{}",
        render::chart_table("Value by Category", &value_by_category(items), true)
    )?;
    writeln!(
        out,
        "{}",
        render::status_chart_table("Items by Status", &items_by_status(items))
    )?;
    Ok(())
}

fn run_show(id: &str, env: &Environment, out: &mut impl Write) -> Result<()> {
    let store = env.open_store()?;
    let id = ItemId::new(id)?;
    let Some(item) = store.find_item(&id) else {
        bail!("Item {id} not found");
    };
    writeln!(out, "{}", render::detail_table(item))?;
    Ok(())
}

fn run_add(args: &AddArgs, env: &Environment, out: &mut impl Write) -> Result<()> {
    let draft = ItemDraft {
        name: args.name.clone(),
        category: args.category.clone(),
        value: args.value,
        status: args.status.clone(),
        description: args.description.clone(),
    };
    mutate(env, out, |workflow| workflow.create(&draft))
}

fn run_update(args: &UpdateArgs, env: &Environment, out: &mut impl Write) -> Result<()> {
    let id = ItemId::new(&args.id)?;
    mutate(env, out, |workflow| {
        let draft = workflow
            .store()
            .find_item(&id)
            .map(|existing| ItemDraft {
                name: args.name.clone().unwrap_or_else(|| existing.name.clone()),
                category: args
                    .category
                    .clone()
                    .unwrap_or_else(|| existing.category.to_string()),
                value: args.value.unwrap_or(existing.value),
                status: args
                    .status
                    .clone()
                    .unwrap_or_else(|| existing.status.as_str().to_string()),
                description: args
                    .description
                    .clone()
                    .or_else(|| existing.description.clone()),
            })
            .unwrap_or_default();
        workflow.update(&id, &draft)
    })
}

fn run_delete(id: &str, env: &Environment, out: &mut impl Write) -> Result<()> {
    let id = ItemId::new(id)?;
    mutate(env, out, |workflow| workflow.delete(&id))
}

/// Run one workflow, persist on success and print its notification.
fn mutate<F>(env: &Environment, out: &mut impl Write, operation: F) -> Result<()>
where
    F: FnOnce(&mut ItemWorkflow<'_, NotificationChannel>) -> Result<Record, WorkflowError>,
{
    let mut store = env.open_store()?;
    let mut notifications = NotificationChannel::new(store.config().notification_timeout);
    let outcome = {
        let mut workflow = ItemWorkflow::new(&mut store, &mut notifications, &env.catalog);
        operation(&mut workflow)
    };
    let record = outcome?;
    env.save(&store)?;
    if let Some(notification) = notifications.current() {
        writeln!(out, "{}", notification.message)?;
    }
    writeln!(out, "{}", render::detail_table(&record))?;
    Ok(())
}
