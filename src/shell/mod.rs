//! Interactive shell
//!
//! The user-facing surface: a line-oriented command loop that invokes the
//! inventory, view, and persistence services and renders their results.
//! Every error is caught here, shown to the user, and logged; none may
//! terminate the process.

pub mod table;

use std::path::{Path, PathBuf};

use rustyline::{error::ReadlineError, DefaultEditor};

use crate::{
    error::AppResult,
    models::{descriptor, Column, ItemType, RecordDraft},
    services::Services,
    settings::Settings,
};

const HELP: &str = "\
Commands:
  add                 Add an item (prompts for type and fields)
  edit <asset>        Edit the item with the given asset number
  delete <asset>      Delete the item with the given asset number
  list                Show the full table
  filter <term>       Show rows matching a term (any field, case-insensitive)
  clear               Remove the filter and show the full table
  sort <column>       Sort by a column; repeat to toggle direction
  save [path]         Save the table to a spreadsheet (.xlsx)
  load [path]         Load the table from a spreadsheet (.xlsx)
  export [path]       Export the table as CSV
  help                Show this help
  quit                Exit (offers to save first)";

pub struct Shell {
    services: Services,
    settings: Settings,
    settings_path: PathBuf,
    editor: DefaultEditor,
}

impl Shell {
    pub fn new(
        services: Services,
        settings: Settings,
        settings_path: PathBuf,
    ) -> rustyline::Result<Self> {
        Ok(Self {
            services,
            settings,
            settings_path,
            editor: DefaultEditor::new()?,
        })
    }

    /// Run the command loop until the user quits
    pub fn run(&mut self) -> anyhow::Result<()> {
        println!("TechWatch inventory - type 'help' for commands");
        loop {
            match self.editor.readline("techwatch> ") {
                Ok(line) => {
                    let line = line.trim().to_string();
                    if line.is_empty() {
                        continue;
                    }
                    let _ = self.editor.add_history_entry(&line);
                    if self.dispatch(&line) {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                    self.offer_save_on_exit();
                    break;
                }
                Err(e) => return Err(e.into()),
            }
        }
        self.shutdown();
        Ok(())
    }

    /// Execute one command line. Returns true when the loop should end.
    fn dispatch(&mut self, line: &str) -> bool {
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        let result = match command {
            "add" => self.cmd_add(),
            "edit" => self.cmd_edit(rest),
            "delete" | "del" => self.cmd_delete(rest),
            "list" | "ls" => self.cmd_list(),
            "filter" => self.cmd_filter(rest),
            "clear" => self.cmd_clear(),
            "sort" => self.cmd_sort(rest),
            "save" => self.cmd_save(rest),
            "load" => self.cmd_load(rest),
            "export" => self.cmd_export(rest),
            "help" => {
                println!("{HELP}");
                Ok(())
            }
            "quit" | "exit" => {
                self.offer_save_on_exit();
                return true;
            }
            _ => {
                println!("Unknown command: {command} (try 'help')");
                Ok(())
            }
        };

        if let Err(e) = result {
            tracing::error!("{e}");
            println!("Error: {e}");
        }
        false
    }

    // -----------------------------------------------------------------------
    // Record commands
    // -----------------------------------------------------------------------

    fn cmd_add(&mut self) -> AppResult<()> {
        let Some(item_type) = self.prompt_item_type() else {
            println!("Cancelled.");
            return Ok(());
        };
        let Some(draft) = self.prompt_form(item_type, RecordDraft::default()) else {
            println!("Cancelled.");
            return Ok(());
        };
        let record = self.services.inventory.add(draft, item_type)?;
        println!("{} '{}' added successfully!", record.item_type, record.name);
        Ok(())
    }

    fn cmd_edit(&mut self, rest: &str) -> AppResult<()> {
        let Some(asset_number) = self.require_asset(rest, "edit") else {
            return Ok(());
        };
        let item_type = self.services.inventory.item_type_of(&asset_number)?;
        let current = self.services.inventory.get(&asset_number)?.clone();
        let Some(draft) = self.prompt_form(item_type, RecordDraft::from_record(&current)) else {
            println!("Cancelled.");
            return Ok(());
        };
        let record = self.services.inventory.update(&asset_number, draft, item_type)?;
        println!("{} '{}' updated successfully!", record.item_type, record.name);
        Ok(())
    }

    fn cmd_delete(&mut self, rest: &str) -> AppResult<()> {
        let Some(asset_number) = self.require_asset(rest, "delete") else {
            return Ok(());
        };
        // Surface a stale reference before asking for confirmation
        let name = self.services.inventory.get(&asset_number)?.name.clone();
        let confirm = self.prompt(&format!("Really delete '{name}' ({asset_number})? [y/N]: "));
        match confirm.as_deref().map(str::trim) {
            Some("y") | Some("Y") => {
                self.services.inventory.remove(&asset_number)?;
                println!("Item deleted.");
            }
            _ => println!("Cancelled."),
        }
        Ok(())
    }

    fn cmd_list(&mut self) -> AppResult<()> {
        if self.services.inventory.is_empty() {
            println!("Inventory is empty.");
            return Ok(());
        }
        print!("{}", table::render(self.services.inventory.records()));
        println!("{} record(s).", self.services.inventory.len());
        Ok(())
    }

    fn cmd_filter(&mut self, term: &str) -> AppResult<()> {
        if term.is_empty() {
            return self.cmd_clear();
        }
        let matches = self
            .services
            .view
            .filter(self.services.inventory.records(), term);
        if matches.is_empty() {
            println!("No records match '{term}'.");
        } else {
            print!("{}", table::render(matches.iter().copied()));
            println!("{} record(s) matching '{term}'.", matches.len());
        }
        Ok(())
    }

    fn cmd_clear(&mut self) -> AppResult<()> {
        println!("Filter removed.");
        self.cmd_list()
    }

    fn cmd_sort(&mut self, rest: &str) -> AppResult<()> {
        if rest.is_empty() {
            println!("Usage: sort <column> (e.g. 'sort Name')");
            return Ok(());
        }
        let column: Column = match rest.parse() {
            Ok(column) => column,
            Err(e) => {
                println!("{e}");
                return Ok(());
            }
        };
        let ascending = self.services.view.toggle_sort(column);
        self.services.inventory.sort(column, ascending);
        let direction = if ascending { "ascending" } else { "descending" };
        println!("Sorted by '{column}' ({direction}).");
        self.cmd_list()
    }

    // -----------------------------------------------------------------------
    // File commands
    // -----------------------------------------------------------------------

    fn cmd_save(&mut self, rest: &str) -> AppResult<()> {
        let Some(path) = self.resolve_path(rest, "inventory.xlsx") else {
            println!("Cancelled.");
            return Ok(());
        };
        println!("Saving...");
        let written = self
            .services
            .persistence
            .save(self.services.inventory.records(), &path)?;
        self.remember(&path);
        println!("Table saved to {} ({written} records).", path.display());
        Ok(())
    }

    fn cmd_load(&mut self, rest: &str) -> AppResult<()> {
        let Some(path) = self.resolve_path(rest, "inventory.xlsx") else {
            println!("Cancelled.");
            return Ok(());
        };
        println!("Loading...");
        let records = self.services.persistence.load(&path)?;
        let count = self.services.inventory.replace_all(records)?;
        self.remember(&path);
        println!("Table loaded from {} ({count} records).", path.display());
        Ok(())
    }

    fn cmd_export(&mut self, rest: &str) -> AppResult<()> {
        let Some(path) = self.resolve_path(rest, "inventory.csv") else {
            println!("Cancelled.");
            return Ok(());
        };
        println!("Exporting...");
        let written = self
            .services
            .persistence
            .export_csv(self.services.inventory.records(), &path)?;
        self.remember(&path);
        println!("Table exported to {} ({written} records).", path.display());
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Prompt helpers
    // -----------------------------------------------------------------------

    /// Read one line; None means the user cancelled (Ctrl-C / Ctrl-D)
    fn prompt(&mut self, label: &str) -> Option<String> {
        match self.editor.readline(label) {
            Ok(line) => Some(line),
            Err(_) => None,
        }
    }

    fn prompt_item_type(&mut self) -> Option<ItemType> {
        loop {
            let line = self.prompt("Item type [notebook/desktop/monitor/other]: ")?;
            match line.parse::<ItemType>() {
                Ok(item_type) => return Some(item_type),
                Err(e) => println!("{e}"),
            }
        }
    }

    /// Walk the form descriptor for `item_type`, prompting for each field.
    /// Empty input keeps the prefilled value.
    fn prompt_form(&mut self, item_type: ItemType, mut draft: RecordDraft) -> Option<RecordDraft> {
        for &column in descriptor(item_type).fields {
            let current = draft.get(column);
            let label = if current.is_empty() {
                format!("{column}: ")
            } else {
                format!("{column} [{current}]: ")
            };
            let input = self.prompt(&label)?;
            let input = input.trim();
            if !input.is_empty() {
                draft.set(column, input.to_string());
            }
        }
        Some(draft)
    }

    fn require_asset(&mut self, rest: &str, verb: &str) -> Option<String> {
        if !rest.is_empty() {
            return Some(rest.to_string());
        }
        let line = self.prompt(&format!("Asset number to {verb}: "))?;
        let line = line.trim().to_string();
        if line.is_empty() {
            println!("No asset number given.");
            return None;
        }
        Some(line)
    }

    /// Resolve a path argument, prompting with a default under the last
    /// used directory when none was given.
    fn resolve_path(&mut self, rest: &str, default_name: &str) -> Option<PathBuf> {
        if !rest.is_empty() {
            return Some(PathBuf::from(rest));
        }
        let default = self.settings.last_dir.join(default_name);
        let line = self.prompt(&format!("Path [{}]: ", default.display()))?;
        let line = line.trim();
        if line.is_empty() {
            Some(default)
        } else {
            Some(PathBuf::from(line))
        }
    }

    /// Track the last used directory after a successful file operation
    fn remember(&mut self, path: &Path) {
        self.settings.remember_dir(path);
        self.settings.save(&self.settings_path);
    }

    // -----------------------------------------------------------------------
    // Shutdown
    // -----------------------------------------------------------------------

    fn offer_save_on_exit(&mut self) {
        if self.services.inventory.is_empty() {
            return;
        }
        if let Some(answer) = self.prompt("Save changes before exiting? [y/N]: ") {
            if matches!(answer.trim(), "y" | "Y") {
                // Shutdown persistence must never prevent exit
                if let Err(e) = self.cmd_save("") {
                    tracing::error!("Save on exit failed: {e}");
                    println!("Error: {e}");
                }
            }
        }
    }

    fn shutdown(&mut self) {
        self.settings.save(&self.settings_path);
        tracing::info!("Application stopped.");
    }
}
