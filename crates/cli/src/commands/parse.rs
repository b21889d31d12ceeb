//! Shell command language.
//!
//! One command per line. Words are separated by whitespace; a word wrapped
//! in double quotes may contain spaces. Blank lines and lines starting with
//! `#` are skipped.

use restaurantly_core::{CustomerDetails, Price};
use restaurantly_storefront::Region;
use thiserror::Error;

/// Errors produced while parsing a command line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command `{0}` (try `help`)")]
    Unknown(String),
    #[error("`{command}` needs a {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },
    #[error("`{command}` got an unexpected argument `{argument}`")]
    UnexpectedArgument {
        command: &'static str,
        argument: String,
    },
    #[error("invalid {argument} `{value}`")]
    InvalidValue {
        argument: &'static str,
        value: String,
    },
    #[error("unterminated quote")]
    UnterminatedQuote,
}

/// A parsed shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add one unit of an arbitrary item.
    Add {
        name: String,
        price: Price,
        image: String,
    },
    /// Add one unit of a dish from the menu.
    Order { name: String },
    /// Change the quantity of the item at a position.
    Quantity { index: usize, delta: i64 },
    /// Increment the named item.
    Increment { name: String },
    /// Decrement the named item.
    Decrement { name: String },
    /// Remove the named item entirely.
    Remove { name: String },
    OpenCart,
    CloseCart,
    Checkout,
    /// Confirm the order, optionally leaving contact details.
    Confirm { customer: Option<CustomerDetails> },
    /// Close the checkout overlay without confirming.
    Dismiss,
    Show,
    /// Print the raw content of a region.
    Html { region: Region },
    Menu,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  add <name> <price> [image]   add one unit of an item
  order <menu item>            add one unit of a dish from the menu
  qty <index> <delta>          change the quantity of the item at <index>
  inc <name> | dec <name>      change the quantity of the named item by one
  remove <name>                remove the named item
  open | close                 open or close the cart overlay
  checkout                     show the checkout summary
  confirm [<name> <phone> <address>]
                               confirm the order and empty the cart
  dismiss                      close the checkout overlay without confirming
  show                         print the cart
  html <region>                print a region (cart-count, cart-items, cart-total,
                               checkout-items, checkout-total)
  menu                         list the menu
  help                         show this help
  quit                         leave the shell
Names containing spaces must be double-quoted, e.g. add \"Nasi Goreng\" 25000";

/// Parse one line. Returns `Ok(None)` for blank lines and comments.
///
/// # Errors
///
/// Returns a `CommandError` describing why the line is not a command.
pub fn parse_line(line: &str) -> Result<Option<Command>, CommandError> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let words = split_words(trimmed)?;
    let mut args = words.into_iter();
    let Some(keyword) = args.next() else {
        return Ok(None);
    };

    let command = match keyword.to_ascii_lowercase().as_str() {
        "add" => {
            let name = required(&mut args, "add", "name")?;
            let price = required(&mut args, "add", "price")?;
            let price = price.parse::<Price>().map_err(|_| CommandError::InvalidValue {
                argument: "price",
                value: price,
            })?;
            let image = args.next().unwrap_or_default();
            finish(args, "add")?;
            Command::Add { name, price, image }
        }
        "order" => {
            // Unquoted menu names may span several words.
            let rest: Vec<String> = args.collect();
            if rest.is_empty() {
                return Err(CommandError::MissingArgument {
                    command: "order",
                    argument: "menu item",
                });
            }
            Command::Order {
                name: rest.join(" "),
            }
        }
        "qty" => {
            let index = required(&mut args, "qty", "index")?;
            let index = index
                .parse::<usize>()
                .map_err(|_| CommandError::InvalidValue {
                    argument: "index",
                    value: index,
                })?;
            let delta = required(&mut args, "qty", "delta")?;
            let delta = delta.parse::<i64>().map_err(|_| CommandError::InvalidValue {
                argument: "delta",
                value: delta,
            })?;
            finish(args, "qty")?;
            Command::Quantity { index, delta }
        }
        "inc" => named(args, "inc").map(|name| Command::Increment { name })?,
        "dec" => named(args, "dec").map(|name| Command::Decrement { name })?,
        "remove" => named(args, "remove").map(|name| Command::Remove { name })?,
        "html" => {
            let region = required(&mut args, "html", "region")?;
            let region = region
                .parse::<Region>()
                .map_err(|_| CommandError::InvalidValue {
                    argument: "region",
                    value: region,
                })?;
            finish(args, "html")?;
            Command::Html { region }
        }
        "open" => bare(args, "open", Command::OpenCart)?,
        "close" => bare(args, "close", Command::CloseCart)?,
        "checkout" => bare(args, "checkout", Command::Checkout)?,
        "confirm" => {
            let customer = match args.next() {
                Some(name) => {
                    let phone = required(&mut args, "confirm", "phone")?;
                    let address = required(&mut args, "confirm", "address")?;
                    finish(args, "confirm")?;
                    Some(CustomerDetails::new(name, phone, address))
                }
                None => None,
            };
            Command::Confirm { customer }
        }
        "dismiss" => bare(args, "dismiss", Command::Dismiss)?,
        "show" => bare(args, "show", Command::Show)?,
        "menu" => bare(args, "menu", Command::Menu)?,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => return Err(CommandError::Unknown(keyword)),
    };

    Ok(Some(command))
}

/// Split a line into words, honouring double quotes.
fn split_words(line: &str) -> Result<Vec<String>, CommandError> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut in_quotes = false;

    for c in line.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                in_word = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            c => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if in_quotes {
        return Err(CommandError::UnterminatedQuote);
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}

fn required(
    args: &mut impl Iterator<Item = String>,
    command: &'static str,
    argument: &'static str,
) -> Result<String, CommandError> {
    args.next()
        .ok_or(CommandError::MissingArgument { command, argument })
}

fn finish(
    mut args: impl Iterator<Item = String>,
    command: &'static str,
) -> Result<(), CommandError> {
    match args.next() {
        Some(argument) => Err(CommandError::UnexpectedArgument { command, argument }),
        None => Ok(()),
    }
}

fn named(
    mut args: impl Iterator<Item = String>,
    command: &'static str,
) -> Result<String, CommandError> {
    let name = required(&mut args, command, "name")?;
    finish(args, command)?;
    Ok(name)
}

fn bare(
    args: impl Iterator<Item = String>,
    command: &'static str,
    parsed: Command,
) -> Result<Command, CommandError> {
    finish(args, command)?;
    Ok(parsed)
}
