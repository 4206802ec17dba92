//! Console commands
//!
//! Each line typed at the storefront prompt maps to one action. Commands that
//! refer to menu items resolve them against the menu that is currently open.

use crate::actions::{
    Action, CartAction, CatalogAction, FilterAction, GlobalAction, OrderAction, SessionAction,
    UiAction,
};
use crate::domain_models::{find_category, CATEGORIES};
use crate::state::{AppState, NewCartLine, PriceRange, SortDirection, SortKey};
use std::str::FromStr;
use storefront_client::{LoginCredentials, OrderStatus, RegisterData};
use thiserror::Error;

/// A single console command, as listed by `help`
#[derive(Debug, Clone, Copy)]
pub struct Command {
    pub name: &'static str,
    pub usage: &'static str,
    pub description: &'static str,
}

pub const COMMANDS: &[Command] = &[
    Command {
        name: "search",
        usage: "search [text]",
        description: "Filter by name or location (no text clears)",
    },
    Command {
        name: "category",
        usage: "category <id>",
        description: "Restrict to a category (all, nearby, discount, ...)",
    },
    Command {
        name: "sort",
        usage: "sort <rating|name|distance|price>",
        description: "Choose the sort field",
    },
    Command {
        name: "order",
        usage: "order [asc|desc]",
        description: "Choose the sort direction (no argument flips it)",
    },
    Command {
        name: "price",
        usage: "price <min> <max> | price any",
        description: "Restrict by average price",
    },
    Command {
        name: "reset",
        usage: "reset",
        description: "Restore default filters",
    },
    Command {
        name: "more",
        usage: "more",
        description: "Toggle showing every matching restaurant",
    },
    Command {
        name: "menu",
        usage: "menu <restaurant-id> | menu close",
        description: "Open or close a restaurant menu",
    },
    Command {
        name: "add",
        usage: "add <item-id> [quantity]",
        description: "Add an item from the open menu to the cart",
    },
    Command {
        name: "qty",
        usage: "qty <item-id> <quantity>",
        description: "Set the quantity of a cart line (0 removes it)",
    },
    Command {
        name: "rm",
        usage: "rm <item-id>",
        description: "Remove a cart line",
    },
    Command {
        name: "note",
        usage: "note <item-id> [text]",
        description: "Set or clear notes on a cart line",
    },
    Command {
        name: "cart",
        usage: "cart",
        description: "Show or hide the cart",
    },
    Command {
        name: "clear",
        usage: "clear",
        description: "Empty the cart",
    },
    Command {
        name: "login",
        usage: "login <email> <password>",
        description: "Sign in",
    },
    Command {
        name: "signup",
        usage: "signup <name>; <email>; <password> [; <phone>; <address>]",
        description: "Create an account and sign in",
    },
    Command {
        name: "logout",
        usage: "logout",
        description: "Sign out",
    },
    Command {
        name: "checkout",
        usage: "checkout <name>; <phone>; <address>",
        description: "Place the order",
    },
    Command {
        name: "orders",
        usage: "orders",
        description: "Show your order history",
    },
    Command {
        name: "track",
        usage: "track <order-id>",
        description: "Refresh the status of an order",
    },
    Command {
        name: "status",
        usage: "status <order-id> <confirmed|preparing|delivered|cancelled>",
        description: "Move an order to a new status",
    },
    Command {
        name: "help",
        usage: "help",
        description: "List commands",
    },
    Command {
        name: "quit",
        usage: "quit",
        description: "Exit the storefront",
    },
];

/// What a console line asks for
#[derive(Debug, Clone, PartialEq)]
pub enum ConsoleInput {
    Dispatch(Action),
    Help,
    /// Blank line
    Nothing,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command '{0}', type 'help' for a list")]
    Unknown(String),
    #[error("usage: {0}")]
    Usage(&'static str),
    #[error("unknown category '{0}', one of: {1}")]
    UnknownCategory(String, String),
    #[error("'{0}' is not on the open menu")]
    NotOnMenu(String),
    #[error("'{0}' is not a number")]
    InvalidNumber(String),
    #[error("unknown order status '{0}'")]
    UnknownStatus(String),
}

fn usage(name: &str) -> CommandError {
    let usage = COMMANDS
        .iter()
        .find(|c| c.name == name)
        .map(|c| c.usage)
        .unwrap_or("help");
    CommandError::Usage(usage)
}

fn parse_number<T: FromStr>(raw: &str) -> Result<T, CommandError> {
    raw.parse()
        .map_err(|_| CommandError::InvalidNumber(raw.to_string()))
}

fn parse_status(raw: &str) -> Result<OrderStatus, CommandError> {
    match raw.to_lowercase().as_str() {
        "pending" => Ok(OrderStatus::Pending),
        "confirmed" => Ok(OrderStatus::Confirmed),
        "preparing" => Ok(OrderStatus::Preparing),
        "delivered" => Ok(OrderStatus::Delivered),
        "cancelled" | "canceled" => Ok(OrderStatus::Cancelled),
        _ => Err(CommandError::UnknownStatus(raw.to_string())),
    }
}

/// Parse one console line against the current state
pub fn parse_command(line: &str, state: &AppState) -> Result<ConsoleInput, CommandError> {
    let line = line.trim();
    let (name, rest) = line
        .split_once(char::is_whitespace)
        .map(|(name, rest)| (name, rest.trim()))
        .unwrap_or((line, ""));
    let args: Vec<&str> = rest.split_whitespace().collect();

    let command = name.to_lowercase();

    let action = match command.as_str() {
        "" => return Ok(ConsoleInput::Nothing),
        "help" | "?" => return Ok(ConsoleInput::Help),
        "quit" | "exit" => Action::Global(GlobalAction::Quit),

        "search" => Action::Filter(FilterAction::SetSearchQuery(rest.to_string())),
        "category" => {
            let [id] = args.as_slice() else {
                return Err(usage(&command));
            };
            let category = find_category(id).ok_or_else(|| {
                let known: Vec<&str> = CATEGORIES.iter().map(|c| c.id).collect();
                CommandError::UnknownCategory(id.to_string(), known.join(", "))
            })?;
            Action::Filter(FilterAction::SetCategory(category.id.to_string()))
        }
        "sort" => {
            let [key] = args.as_slice() else {
                return Err(usage(&command));
            };
            let key = SortKey::from_str(key).map_err(|_| usage(&command))?;
            Action::Filter(FilterAction::SetSortKey(key))
        }
        "order" => {
            let direction = match args.as_slice() {
                [] => state.filters.sort_direction.flipped(),
                [direction] => {
                    SortDirection::from_str(direction).map_err(|_| usage(&command))?
                }
                _ => return Err(usage(&command)),
            };
            Action::Filter(FilterAction::SetSortDirection(direction))
        }
        "price" => match args.as_slice() {
            ["any"] => Action::Filter(FilterAction::SetPriceRange(PriceRange::FULL)),
            [min, max] => Action::Filter(FilterAction::SetPriceRange(PriceRange::new(
                parse_number(min)?,
                parse_number(max)?,
            ))),
            _ => return Err(usage(&command)),
        },
        "reset" => Action::Filter(FilterAction::Reset),
        "more" => Action::Catalog(CatalogAction::ToggleShowAll),

        "menu" => match args.as_slice() {
            ["close"] => Action::Catalog(CatalogAction::CloseMenu),
            [id] => Action::Catalog(CatalogAction::MenuRequested(id.to_string())),
            _ => return Err(usage(&command)),
        },
        "add" => {
            let (id, quantity) = match args.as_slice() {
                [id] => (*id, 1),
                [id, quantity] => (*id, parse_number(quantity)?),
                _ => return Err(usage(&command)),
            };
            let item = state
                .catalog
                .menu_item(id)
                .ok_or_else(|| CommandError::NotOnMenu(id.to_string()))?;
            Action::Cart(CartAction::AddItem {
                line: NewCartLine::from(item),
                quantity,
            })
        }
        "qty" => {
            let [id, quantity] = args.as_slice() else {
                return Err(usage(&command));
            };
            Action::Cart(CartAction::SetQuantity {
                id: id.to_string(),
                quantity: parse_number(quantity)?,
            })
        }
        "rm" => {
            let [id] = args.as_slice() else {
                return Err(usage(&command));
            };
            Action::Cart(CartAction::RemoveItem(id.to_string()))
        }
        "note" => {
            let Some((id, notes)) = rest
                .split_once(char::is_whitespace)
                .or(Some((rest, "")))
                .filter(|(id, _)| !id.is_empty())
            else {
                return Err(usage(&command));
            };
            Action::Cart(CartAction::SetNotes {
                id: id.to_string(),
                notes: notes.trim().to_string(),
            })
        }
        "cart" => Action::Ui(UiAction::ToggleCart),
        "clear" => Action::Cart(CartAction::Clear),

        "login" => {
            let [email, password] = args.as_slice() else {
                return Err(usage(&command));
            };
            Action::Session(SessionAction::LoginRequested(LoginCredentials {
                email: email.to_string(),
                password: password.to_string(),
            }))
        }
        "signup" => {
            let fields: Vec<&str> = rest.split(';').map(str::trim).collect();
            let (name, email, password, contact) = match fields.as_slice() {
                [name, email, password, contact @ ..] if contact.len() <= 2 => {
                    (*name, *email, *password, contact)
                }
                _ => return Err(usage(&command)),
            };
            let optional = |i: usize| {
                contact
                    .get(i)
                    .filter(|v| !v.is_empty())
                    .map(|v| v.to_string())
            };
            Action::Session(SessionAction::RegisterRequested(RegisterData {
                name: name.to_string(),
                email: email.to_string(),
                password: password.to_string(),
                phone: optional(0),
                address: optional(1),
            }))
        }
        "logout" => Action::Session(SessionAction::Logout),
        "checkout" => {
            let fields: Vec<&str> = rest.split(';').map(str::trim).collect();
            let [customer_name, phone, address] = fields.as_slice() else {
                return Err(usage(&command));
            };
            Action::Order(OrderAction::Checkout {
                customer_name: customer_name.to_string(),
                phone: phone.to_string(),
                address: address.to_string(),
            })
        }

        "orders" => Action::Order(OrderAction::HistoryRequested),
        "track" => {
            let [id] = args.as_slice() else {
                return Err(usage(&command));
            };
            Action::Order(OrderAction::TrackRequested(id.to_string()))
        }
        "status" => {
            let [id, status] = args.as_slice() else {
                return Err(usage(&command));
            };
            Action::Order(OrderAction::StatusUpdateRequested {
                id: id.to_string(),
                status: parse_status(status)?,
            })
        }

        _ => return Err(CommandError::Unknown(name.to_string())),
    };

    Ok(ConsoleInput::Dispatch(action))
}

/// Help text listing every command
pub fn help_text() -> String {
    let width = COMMANDS.iter().map(|c| c.usage.len()).max().unwrap_or(0);
    COMMANDS
        .iter()
        .map(|c| format!("  {:<width$}  {}", c.usage, c.description, width = width))
        .collect::<Vec<_>>()
        .join("\n")
}
