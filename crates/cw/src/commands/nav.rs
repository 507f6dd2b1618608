//! `cw nav` command implementations.
//!
//! Unlike the library operations, which ignore ids that do not exist, the
//! CLI reports an unknown id as an error so a typo never looks like success.

use std::fmt::Write as _;
use std::io::{self, Write};

use clap::{Args, Subcommand};
use cw_content::FieldUpdate;
use cw_content::navigation::{self, NavKind, NavPatch, NavTemplate, NavigationItem};
use cw_site::ContentStore;

use super::StoreArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the nav command.
#[derive(Args)]
pub(crate) struct NavArgs {
    #[command(flatten)]
    store: StoreArgs,

    #[command(subcommand)]
    command: NavCommand,
}

/// Navigation menu commands.
#[derive(Subcommand)]
pub(crate) enum NavCommand {
    /// List menu entries with their ids.
    List,
    /// Append a top-level entry.
    Add(EntryArgs),
    /// Change fields of a top-level entry.
    Update {
        /// Entry id.
        id: String,
        #[command(flatten)]
        entry: EntryArgs,
    },
    /// Remove a top-level entry and its children.
    Remove {
        /// Entry id.
        id: String,
    },
    /// Move a top-level entry from one position to another.
    Move {
        /// Current position (0-based).
        from: usize,
        /// New position (0-based).
        to: usize,
    },
    /// Append a child to a dropdown entry.
    AddChild {
        /// Parent entry id.
        parent: String,
        #[command(flatten)]
        entry: EntryArgs,
    },
    /// Change fields of a child entry.
    UpdateChild {
        /// Parent entry id.
        parent: String,
        /// Child entry id.
        child: String,
        #[command(flatten)]
        entry: EntryArgs,
    },
    /// Remove a child entry.
    RemoveChild {
        /// Parent entry id.
        parent: String,
        /// Child entry id.
        child: String,
    },
    /// Move a child entry within its parent.
    MoveChild {
        /// Parent entry id.
        parent: String,
        /// Current position (0-based).
        from: usize,
        /// New position (0-based).
        to: usize,
    },
}

/// Visible fields of a menu entry. Omitted fields keep their value.
#[derive(Args)]
pub(crate) struct EntryArgs {
    /// Display label.
    #[arg(short, long)]
    label: Option<String>,

    /// Link target.
    #[arg(long)]
    href: Option<String>,

    /// Link kind: internal, external or dropdown.
    #[arg(short, long)]
    kind: Option<NavKind>,
}

impl EntryArgs {
    fn patch(&self) -> NavPatch {
        NavPatch {
            label: self.label.clone(),
            href: self.href.clone(),
            kind: self.kind,
        }
    }

    fn template(&self, base: NavTemplate) -> NavTemplate {
        NavTemplate {
            label: self.label.clone().unwrap_or(base.label),
            href: self.href.clone().unwrap_or(base.href),
            kind: self.kind.unwrap_or(base.kind),
        }
    }
}

impl NavArgs {
    /// Execute the nav subcommand.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let (_, mut store) = self.store.open_store()?;

        if matches!(self.command, NavCommand::List) {
            write!(io::stdout(), "{}", list(&store.document().navigation_items))?;
            return Ok(());
        }

        apply(&mut store, &self.command)?;
        Output::new().success("Navigation updated");
        Ok(())
    }
}

/// Apply `command` to the stored menu and write the document.
fn apply(store: &mut ContentStore, command: &NavCommand) -> Result<(), CliError> {
    let items = edit(&store.document().navigation_items, command)?;
    store.apply_transient(FieldUpdate::NavigationItems(items));
    store.save()?;
    Ok(())
}

/// Compute the edited menu, rejecting ids that do not exist.
fn edit(items: &[NavigationItem], command: &NavCommand) -> Result<Vec<NavigationItem>, CliError> {
    let edited = match command {
        NavCommand::List => items.to_vec(),
        NavCommand::Add(entry) => {
            navigation::add_item(items, Some(entry.template(NavTemplate::default())))
        }
        NavCommand::Update { id, entry } => {
            require_item(items, id)?;
            navigation::update_item(items, id, &entry.patch())
        }
        NavCommand::Remove { id } => {
            require_item(items, id)?;
            navigation::remove_item(items, id)
        }
        NavCommand::Move { from, to } => navigation::reorder(items, *from, *to),
        NavCommand::AddChild { parent, entry } => {
            require_item(items, parent)?;
            navigation::add_child(items, parent, Some(entry.template(NavTemplate::child())))
        }
        NavCommand::UpdateChild {
            parent,
            child,
            entry,
        } => {
            require_child(items, parent, child)?;
            navigation::update_child(items, parent, child, &entry.patch())
        }
        NavCommand::RemoveChild { parent, child } => {
            require_child(items, parent, child)?;
            navigation::remove_child(items, parent, child)
        }
        NavCommand::MoveChild { parent, from, to } => {
            require_item(items, parent)?;
            navigation::reorder_children(items, parent, *from, *to)
        }
    };
    Ok(edited)
}

fn require_item<'a>(items: &'a [NavigationItem], id: &str) -> Result<&'a NavigationItem, CliError> {
    items
        .iter()
        .find(|item| item.id == id)
        .ok_or_else(|| CliError::ItemNotFound(id.to_owned()))
}

fn require_child(items: &[NavigationItem], parent: &str, child: &str) -> Result<(), CliError> {
    if require_item(items, parent)?.children.iter().any(|c| c.id == child) {
        Ok(())
    } else {
        Err(CliError::ChildNotFound {
            parent: parent.to_owned(),
            child: child.to_owned(),
        })
    }
}

/// One line per entry, children indented under their parent.
fn list(items: &[NavigationItem]) -> String {
    let mut out = String::new();
    for item in items {
        writeln!(out, "{}\t{}\t{}\t{}", item.id, item.label, item.kind, item.href).unwrap();
        for child in &item.children {
            writeln!(
                out,
                "  {}\t{}\t{}\t{}",
                child.id, child.label, child.kind, child.href
            )
            .unwrap();
        }
    }
    out
}
