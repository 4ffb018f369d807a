//! Interactive console form.
//!
//! Mirrors the desktop form: three input fields (id, name, description), a
//! list display, and four actions that hand the current field values to the
//! presenter. Each command runs to completion before the next prompt.

use std::io::{self, BufRead, Write};

use item_core::{ItemForm, ItemPresenter, Transport};

use crate::console::ConsoleView;

const HELP: &str = "\
Fields:
  id <text>        set the id field
  name <text>      set the name field
  desc <text>      set the description field
  form             show the current field values
  clear            empty all fields
Actions:
  list             fetch and show every item
  add              add an item from name and description
  update           replace the item with the given id
  delete           delete the item with the given id
Other:
  show             reprint the last fetched list
  help             this text
  quit             leave";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Id,
    Name,
    Description,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Add,
    Update,
    Delete,
    Set(Field, String),
    ShowForm,
    ShowList,
    Clear,
    Help,
    Quit,
}

/// Parse one input line. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<Command>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "list" | "l" => Command::List,
        "add" | "a" => Command::Add,
        "update" | "u" => Command::Update,
        "delete" | "d" => Command::Delete,
        "id" => Command::Set(Field::Id, rest.to_string()),
        "name" => Command::Set(Field::Name, rest.to_string()),
        "desc" | "description" => Command::Set(Field::Description, rest.to_string()),
        "form" => Command::ShowForm,
        "show" => Command::ShowList,
        "clear" => Command::Clear,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => return Err(format!("unknown command '{other}', type 'help'")),
    };
    Ok(Some(command))
}

pub struct Shell<T, W: Write> {
    presenter: ItemPresenter<T, ConsoleView<W>>,
    form: ItemForm,
}

impl<T: Transport, W: Write> Shell<T, W> {
    pub fn new(presenter: ItemPresenter<T, ConsoleView<W>>) -> Self {
        Self {
            presenter,
            form: ItemForm::default(),
        }
    }

    /// Read commands until `quit` or end of input.
    pub fn run(&mut self, input: impl BufRead) -> io::Result<()> {
        let banner = format!(
            "item-desk: {} (type 'help')",
            self.presenter.client().base_url()
        );
        writeln!(self.out(), "{banner}")?;
        self.prompt()?;
        for line in input.lines() {
            match parse_command(&line?) {
                Ok(Some(Command::Quit)) => break,
                Ok(Some(command)) => self.dispatch(command)?,
                Ok(None) => {}
                Err(msg) => writeln!(self.out(), "{msg}")?,
            }
            self.prompt()?;
        }
        Ok(())
    }

    fn dispatch(&mut self, command: Command) -> io::Result<()> {
        // Action failures have already been shown by the view.
        match command {
            Command::List => {
                let _ = self.presenter.list();
            }
            Command::Add => {
                let _ = self.presenter.add_from_form(&self.form);
            }
            Command::Update => {
                let _ = self.presenter.update_from_form(&self.form);
            }
            Command::Delete => {
                let _ = self.presenter.delete_from_form(&self.form);
            }
            Command::Set(field, value) => match field {
                Field::Id => self.form.id = value,
                Field::Name => self.form.name = value,
                Field::Description => self.form.description = value,
            },
            Command::ShowForm => {
                let form = self.form.clone();
                writeln!(self.out(), "id:          {}", form.id)?;
                writeln!(self.out(), "name:        {}", form.name)?;
                writeln!(self.out(), "description: {}", form.description)?;
            }
            Command::ShowList => self.presenter.view_mut().print_entries(),
            Command::Clear => self.form.clear(),
            Command::Help => writeln!(self.out(), "{HELP}")?,
            Command::Quit => {}
        }
        Ok(())
    }

    fn prompt(&mut self) -> io::Result<()> {
        let out = self.out();
        write!(out, "> ")?;
        out.flush()
    }

    fn out(&mut self) -> &mut W {
        self.presenter.view_mut().out()
    }

    #[cfg(test)]
    fn into_output(self) -> W {
        let Shell { presenter, .. } = self;
        presenter.into_view().into_out()
    }
}
