//! Mess Menu Common Library
//!
//! CLIとWeb(WASM)で共有される型・ワークシートパーサー・表示状態

pub mod types;
pub mod error;
pub mod worksheet;
pub mod parser;
pub mod selection;
pub mod view;
#[cfg(feature = "xlsx")]
pub mod xlsx;

pub use types::{Day, DayMenu, Location, Meal, MenuCollection, MENU_NOT_AVAILABLE};
pub use error::{Error, Result};
pub use worksheet::Worksheet;
pub use parser::{parse_worksheet, parse_worksheet_strict};
pub use selection::{current_menu_items, lookup_items, MealCard};
pub use view::{ClockTime, LoadStatus, Screen, Selection, ViewModel};
#[cfg(feature = "xlsx")]
pub use xlsx::decode_first_sheet;
