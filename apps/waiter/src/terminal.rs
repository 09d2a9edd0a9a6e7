//! # Terminal Driver
//!
//! Line-oriented front end: read a command, run it against the session,
//! print the resulting view.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Read-Eval Loop                                       │
//! │                                                                         │
//! │  stdin ──► "add 2" ──► Input::Add(Some(2)) ──► commands::cart          │
//! │                                                     │                   │
//! │  stdout ◄── view::render_added(..) ◄────────────────┘                   │
//! │                                                                         │
//! │  Errors are printed and the loop continues; `quit` or EOF ends it.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::str::FromStr;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{debug, info};

use bfood_api::MenuApi;

use crate::commands::{cart, catalog, order, table};
use crate::error::{CommandError, CommandResult};
use crate::state::{DisplaySettings, Session};
use crate::view;

// =============================================================================
// Input
// =============================================================================

/// One parsed terminal line. Numbers are 1-based list positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Categories,
    Menu,
    Category(usize),
    Show(usize),
    Close,
    /// `add <n>` from the menu, or bare `add` in the product detail view.
    Add(Option<usize>),
    Decrement(usize),
    NewOrder,
    Table(String),
    Cart,
    Confirm,
    Acknowledge,
    Cancel,
    Help,
    Quit,
}

impl FromStr for Input {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let position = || -> CommandResult<usize> {
            rest.parse::<usize>().map_err(|_| {
                CommandError::invalid_command(format!("`{}` needs a list number", word))
            })
        };

        let input = match word.to_ascii_lowercase().as_str() {
            "categories" => Input::Categories,
            "menu" => Input::Menu,
            "category" => Input::Category(position()?),
            "show" => Input::Show(position()?),
            "close" => Input::Close,
            "add" if rest.is_empty() => Input::Add(None),
            "add" => Input::Add(Some(position()?)),
            "dec" => Input::Decrement(position()?),
            "new" => Input::NewOrder,
            // Empty input is rejected by table validation, not here
            "table" => Input::Table(rest.to_string()),
            "cart" => Input::Cart,
            "confirm" => Input::Confirm,
            "ok" => Input::Acknowledge,
            "cancel" => Input::Cancel,
            "help" | "?" => Input::Help,
            "quit" | "exit" => Input::Quit,
            _ => {
                return Err(CommandError::invalid_command(format!(
                    "Unknown command `{}` (type `help`)",
                    word
                )))
            }
        };
        Ok(input)
    }
}

/// What the loop should do after a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flow {
    Print(String),
    Quit,
}

// =============================================================================
// Terminal
// =============================================================================

pub struct Terminal<A> {
    session: Session,
    api: A,
    display: DisplaySettings,
}

impl<A: MenuApi> Terminal<A> {
    pub fn new(api: A, display: DisplaySettings) -> Self {
        Terminal {
            session: Session::new(),
            api,
            display,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Initial menu fetch; returns the first screen.
    pub async fn start(&mut self) -> String {
        match catalog::load_menu(&mut self.session, &self.api).await {
            Ok(menu) => self.home(&menu),
            Err(err) => format!(
                "{}Type `menu` to try again\n",
                view::render_error(&err)
            ),
        }
    }

    fn home(&self, menu: &catalog::MenuResponse) -> String {
        format!(
            "{}\n{}\n{}",
            view::render_header(&table::get_table(&self.session)),
            view::render_categories(menu),
            view::render_menu(menu, &self.display)
        )
    }

    /// Parses and runs one line. Errors become printed text.
    pub async fn handle_line(&mut self, line: &str) -> Flow {
        let result = match line.parse::<Input>() {
            Ok(input) => self.dispatch(input).await,
            Err(err) => Err(err),
        };

        match result {
            Ok(flow) => flow,
            Err(err) => {
                debug!(code = ?err.code, message = %err.message, "Command failed");
                Flow::Print(view::render_error(&err))
            }
        }
    }

    pub async fn dispatch(&mut self, input: Input) -> CommandResult<Flow> {
        let display = &self.display;
        let text = match input {
            Input::Categories => {
                view::render_categories(&catalog::get_menu(&self.session, &self.api))
            }
            Input::Menu => {
                // Nothing loaded yet means the first fetch failed
                if self.session.categories().is_empty() && self.session.products().is_empty() {
                    let menu = catalog::load_menu(&mut self.session, &self.api).await?;
                    self.home(&menu)
                } else {
                    view::render_menu(&catalog::get_menu(&self.session, &self.api), display)
                }
            }
            Input::Category(position) => {
                let menu = catalog::select_category(&mut self.session, &self.api, position).await?;
                format!(
                    "{}\n{}",
                    view::render_categories(&menu),
                    view::render_menu(&menu, display)
                )
            }
            Input::Show(position) => {
                let detail = catalog::show_product(&mut self.session, &self.api, position)?;
                view::render_product(&detail, display)
            }
            Input::Close => {
                if self.session.product_detail().is_some() {
                    catalog::close_product(&mut self.session);
                } else {
                    table::close_table_prompt(&mut self.session);
                }
                view::render_header(&table::get_table(&self.session))
            }
            Input::Add(None) => view::render_added(&cart::add_shown_product(&mut self.session)?),
            Input::Add(Some(position)) => {
                view::render_added(&cart::add_to_cart(&mut self.session, position)?)
            }
            Input::Decrement(position) => {
                let response = cart::decrement_cart_item(&mut self.session, position)?;
                view::render_cart(&response, display)
            }
            Input::NewOrder => {
                table::new_order(&mut self.session)?;
                view::render_table_prompt()
            }
            Input::Table(id) => {
                let response = table::save_table(&mut self.session, &id)?;
                view::render_header(&response)
            }
            Input::Cart => view::render_cart(&cart::get_cart(&self.session), display),
            Input::Confirm => {
                let confirmed = order::confirm_order(&mut self.session, &self.api).await?;
                view::render_confirmation(&confirmed, display)
            }
            Input::Acknowledge => {
                order::acknowledge_order(&mut self.session);
                view::render_header(&table::get_table(&self.session))
            }
            Input::Cancel => view::render_header(&table::cancel_order(&mut self.session)?),
            Input::Help => view::render_help(),
            Input::Quit => return Ok(Flow::Quit),
        };
        Ok(Flow::Print(text))
    }

    /// Runs the loop over stdin/stdout until `quit` or end of input.
    pub async fn run(mut self) -> std::io::Result<()> {
        let mut stdout = tokio::io::stdout();
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        let first = self.start().await;
        stdout.write_all(first.as_bytes()).await?;

        loop {
            stdout.write_all(b"> ").await?;
            stdout.flush().await?;

            let Some(line) = lines.next_line().await? else {
                break;
            };
            if line.trim().is_empty() {
                continue;
            }

            match self.handle_line(&line).await {
                Flow::Print(text) => stdout.write_all(text.as_bytes()).await?,
                Flow::Quit => break,
            }
        }

        info!("Terminal closed");
        Ok(())
    }
}
