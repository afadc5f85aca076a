//! Interactive menu loop.

use std::io::{BufRead, Write};

use backpack_core::{InventoryError, ValueObject};
use backpack_inventory::item::{MAX_CATEGORY_CHARS, MAX_NAME_CHARS};
use backpack_inventory::{Backpack, Category, Item, ItemName, Quantity};

use crate::error::CliError;
use crate::input::LineReader;
use crate::menu::{MenuChoice, MenuError};
use crate::render;

/// How a session ended.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SessionEnd {
    /// The player picked the exit option.
    Exit,
    /// Input ran out before the player picked exit.
    EndOfInput,
}

enum Step {
    Continue,
    Stop(SessionEnd),
}

#[derive(Clone, Copy)]
enum ReadMode {
    Line(usize),
    Token(usize),
}

/// One console session: owns the backpack for its whole lifetime.
#[derive(Debug)]
pub struct Session<R, W> {
    backpack: Backpack,
    input: LineReader<R>,
    out: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self {
            backpack: Backpack::new(),
            input: LineReader::new(input),
            out,
        }
    }

    pub fn backpack(&self) -> &Backpack {
        &self.backpack
    }

    pub fn into_parts(self) -> (Backpack, W) {
        (self.backpack, self.out)
    }

    /// Run the menu loop until the player exits or input runs out.
    pub fn run(&mut self) -> Result<SessionEnd, CliError> {
        tracing::info!(capacity = self.backpack.capacity(), "session started");
        writeln!(self.out, "{}", render::BANNER)?;

        loop {
            render::write_menu(&mut self.out)?;
            let Some(token) = self.input.read_token(usize::MAX)? else {
                return Ok(self.finish(SessionEnd::EndOfInput));
            };

            let choice = match MenuChoice::parse(&token) {
                Ok(choice) => choice,
                Err(err) => {
                    let reported: InventoryError = err.clone().into();
                    tracing::warn!(input = %token, error = %reported, "menu selection rejected");
                    match err {
                        MenuError::NotANumber => writeln!(self.out, "\nInvalid option. Enter a number.")?,
                        MenuError::UnknownOption(_) => writeln!(self.out, "\nInvalid option. Try again.")?,
                    }
                    continue;
                }
            };

            if let Step::Stop(end) = self.dispatch(choice)? {
                return Ok(self.finish(end));
            }
        }
    }

    fn finish(&self, end: SessionEnd) -> SessionEnd {
        tracing::info!(?end, items = self.backpack.len(), "session finished");
        end
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<Step, CliError> {
        match choice {
            MenuChoice::AddItem => {
                let step = self.add_item()?;
                self.show_listing_unless_stopped(step)
            }
            MenuChoice::RemoveItem => {
                let step = self.remove_item()?;
                self.show_listing_unless_stopped(step)
            }
            MenuChoice::ListItems => {
                render::write_listing(&mut self.out, self.backpack.list())?;
                Ok(Step::Continue)
            }
            MenuChoice::SearchItem => self.search_item(),
            MenuChoice::Exit => {
                writeln!(self.out, "\n{}", render::FAREWELL)?;
                Ok(Step::Stop(SessionEnd::Exit))
            }
        }
    }

    fn show_listing_unless_stopped(&mut self, step: Step) -> Result<Step, CliError> {
        if let Step::Continue = step {
            render::write_listing(&mut self.out, self.backpack.list())?;
        }
        Ok(step)
    }

    fn report(&mut self, action: MenuChoice, err: &InventoryError) -> Result<(), CliError> {
        tracing::debug!(?action, error = %err, recoverable = err.is_recoverable(), "operation rejected");
        writeln!(self.out, "{}", render::rejection(action, err))?;
        Ok(())
    }

    fn add_item(&mut self) -> Result<Step, CliError> {
        if self.backpack.is_full() {
            let err = InventoryError::full(self.backpack.capacity());
            writeln!(self.out)?;
            self.report(MenuChoice::AddItem, &err)?;
            return Ok(Step::Continue);
        }

        writeln!(self.out, "\n--- NEW ITEM REGISTRATION ---")?;

        let Some(name) = self.prompt::<ItemName>(
            &format!("Item name (max {MAX_NAME_CHARS} characters): "),
            "Name cannot be empty. Item name: ",
            ReadMode::Line(MAX_NAME_CHARS),
        )?
        else {
            return Ok(Step::Stop(SessionEnd::EndOfInput));
        };

        // Duplicates are rejected before category and quantity are asked.
        if self.backpack.find(name.as_str()).is_some() {
            self.report(MenuChoice::AddItem, &InventoryError::duplicate(name.as_str()))?;
            return Ok(Step::Continue);
        }

        let Some(category) = self.prompt::<Category>(
            "Item category (e.g. weapon, ammo, healing): ",
            "Invalid category. Item category: ",
            ReadMode::Token(MAX_CATEGORY_CHARS),
        )?
        else {
            return Ok(Step::Stop(SessionEnd::EndOfInput));
        };

        let Some(quantity) = self.prompt::<Quantity>(
            "Quantity: ",
            "Invalid quantity. Enter a positive number: ",
            ReadMode::Token(usize::MAX),
        )?
        else {
            return Ok(Step::Stop(SessionEnd::EndOfInput));
        };

        match self.backpack.insert(Item::new(name, category, quantity)) {
            Ok(item) => writeln!(
                self.out,
                "Item '{}' added to the backpack successfully.",
                item.name()
            )?,
            Err(err) => self.report(MenuChoice::AddItem, &err)?,
        }
        Ok(Step::Continue)
    }

    fn remove_item(&mut self) -> Result<Step, CliError> {
        if self.backpack.is_empty() {
            writeln!(self.out)?;
            self.report(MenuChoice::RemoveItem, &InventoryError::Empty)?;
            return Ok(Step::Continue);
        }

        writeln!(self.out, "\n--- REMOVE ITEM ---")?;
        write!(self.out, "Enter the NAME of the item to remove: ")?;
        self.out.flush()?;
        let Some(name) = self.input.read_token(MAX_NAME_CHARS)? else {
            return Ok(Step::Stop(SessionEnd::EndOfInput));
        };

        match self.backpack.remove(&name) {
            Ok(removed) => writeln!(
                self.out,
                "Item '{}' removed from the backpack successfully.",
                removed.name()
            )?,
            Err(err) => self.report(MenuChoice::RemoveItem, &err)?,
        }
        Ok(Step::Continue)
    }

    fn search_item(&mut self) -> Result<Step, CliError> {
        if self.backpack.is_empty() {
            writeln!(self.out)?;
            self.report(MenuChoice::SearchItem, &InventoryError::Empty)?;
            return Ok(Step::Continue);
        }

        writeln!(self.out, "\n--- SEQUENTIAL ITEM SEARCH ---")?;
        write!(self.out, "Enter the NAME of the item to search for: ")?;
        self.out.flush()?;
        let Some(name) = self.input.read_token(MAX_NAME_CHARS)? else {
            return Ok(Step::Stop(SessionEnd::EndOfInput));
        };

        match self.backpack.lookup(&name) {
            Ok(item) => render::write_item_details(&mut self.out, item)?,
            Err(err) => {
                writeln!(self.out)?;
                self.report(MenuChoice::SearchItem, &err)?;
            }
        }
        Ok(Step::Continue)
    }

    /// Prompt until the raw input parses as `V`; `None` at end of input.
    fn prompt<V: ValueObject>(
        &mut self,
        prompt: &str,
        retry: &str,
        read: ReadMode,
    ) -> Result<Option<V>, CliError> {
        write!(self.out, "{prompt}")?;
        self.out.flush()?;

        loop {
            let raw = match read {
                ReadMode::Line(max) => self.input.read_line(max)?,
                ReadMode::Token(max) => self.input.read_token(max)?,
            };
            let Some(raw) = raw else {
                return Ok(None);
            };

            match V::parse(&raw) {
                Ok(value) => return Ok(Some(value)),
                Err(err) => {
                    tracing::debug!(field = V::LABEL, error = %err, "re-prompting");
                    write!(self.out, "{retry}")?;
                    self.out.flush()?;
                }
            }
        }
    }
}
