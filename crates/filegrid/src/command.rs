//! Commands and the menus that expose them.
//!
//! Hosts compose commands explicitly: they construct a [`Command`] with its
//! collaborators and register it on a [`CommandRegistry`]. Nothing registers
//! itself.
//!
//! # Example
//!
//! ```
//! use filegrid::{
//!     GridBuilder,
//!     command::{self, MenuRegistry},
//!     source::{EntryOrder, FsDirectory},
//! };
//!
//! let dir = std::env::temp_dir();
//! let mut registry = MenuRegistry::new();
//! command::register_file_grid(
//!     &mut registry,
//!     FsDirectory::new(dir, EntryOrder::Name),
//!     GridBuilder::default(),
//! )
//! .expect("first registration");
//!
//! assert_eq!(registry.items(command::FILE_GRID_MENU), ["createFileGrid"]);
//! ```

use indexmap::IndexMap;
use log::{debug, error, info};

use crate::{
    FileGridError, GridBuilder, GridReport, render::DiagramRenderer, source::DirectorySource,
};

/// Menu under which the file grid command is listed.
pub const FILE_GRID_MENU: &str = "File Grid";

/// An invocable action operating on a diagram.
pub trait Command {
    /// Stable identifier, unique within a registry.
    fn id(&self) -> &str;

    /// Text shown in the menu.
    fn label(&self) -> &str;

    /// Runs the command against `renderer`.
    ///
    /// # Errors
    ///
    /// Returns the error that aborted the command. The diagram is left as it
    /// was before the call.
    fn execute(&self, renderer: &mut dyn DiagramRenderer) -> Result<GridReport, FileGridError>;
}

/// Receives commands from the host at composition time.
pub trait CommandRegistry {
    /// Adds `command` to `menu`.
    ///
    /// # Errors
    ///
    /// Returns [`FileGridError::DuplicateCommand`] if a command with the same
    /// id is already registered.
    fn register(&mut self, menu: &str, command: Box<dyn Command>) -> Result<(), FileGridError>;
}

/// A [`CommandRegistry`] grouping commands under named menus.
///
/// Menus and their items keep registration order.
#[derive(Default)]
pub struct MenuRegistry {
    menus: IndexMap<String, Vec<String>>,
    commands: IndexMap<String, Box<dyn Command>>,
}

impl MenuRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Menu names, in registration order.
    pub fn menus(&self) -> impl Iterator<Item = &str> {
        self.menus.keys().map(String::as_str)
    }

    /// Command ids listed under `menu`. Empty for an unknown menu.
    pub fn items(&self, menu: &str) -> &[String] {
        self.menus.get(menu).map(Vec::as_slice).unwrap_or_default()
    }

    /// Looks up a registered command.
    pub fn command(&self, id: &str) -> Option<&dyn Command> {
        self.commands.get(id).map(Box::as_ref)
    }

    /// Executes the command registered as `id`.
    ///
    /// # Errors
    ///
    /// Returns [`FileGridError::UnknownCommand`] for an unregistered id, or
    /// whatever the command itself reports.
    pub fn invoke(
        &self,
        id: &str,
        renderer: &mut dyn DiagramRenderer,
    ) -> Result<GridReport, FileGridError> {
        let command = self
            .command(id)
            .ok_or_else(|| FileGridError::UnknownCommand(id.to_string()))?;

        info!(id, label = command.label(); "Invoking command");
        command.execute(renderer).inspect_err(|err| {
            error!(id, err:%; "Command failed");
        })
    }
}

impl CommandRegistry for MenuRegistry {
    fn register(&mut self, menu: &str, command: Box<dyn Command>) -> Result<(), FileGridError> {
        let id = command.id().to_string();
        if self.commands.contains_key(&id) {
            return Err(FileGridError::DuplicateCommand(id));
        }

        debug!(menu, id = id.as_str(); "Registering command");
        self.menus
            .entry(menu.to_string())
            .or_default()
            .push(id.clone());
        self.commands.insert(id, command);
        Ok(())
    }
}

/// The "create file grid" command.
///
/// Reads its directory source, then lays the files out on the renderer it is
/// executed against.
#[derive(Debug)]
pub struct CreateFileGrid<S> {
    source: S,
    builder: GridBuilder,
}

impl<S: DirectorySource> CreateFileGrid<S> {
    pub const ID: &'static str = "createFileGrid";
    pub const LABEL: &'static str = "Create File Grid";

    pub fn new(source: S, builder: GridBuilder) -> Self {
        Self { source, builder }
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}

impl<S: DirectorySource> Command for CreateFileGrid<S> {
    fn id(&self) -> &str {
        Self::ID
    }

    fn label(&self) -> &str {
        Self::LABEL
    }

    fn execute(&self, renderer: &mut dyn DiagramRenderer) -> Result<GridReport, FileGridError> {
        self.builder.run(&self.source, renderer)
    }
}

/// Registers a [`CreateFileGrid`] command under [`FILE_GRID_MENU`].
///
/// # Errors
///
/// Returns [`FileGridError::DuplicateCommand`] if the registry already holds
/// a file grid command.
pub fn register_file_grid<S>(
    registry: &mut dyn CommandRegistry,
    source: S,
    builder: GridBuilder,
) -> Result<(), FileGridError>
where
    S: DirectorySource + 'static,
{
    registry.register(
        FILE_GRID_MENU,
        Box::new(CreateFileGrid::new(source, builder)),
    )
}
