//! # usercsv
//!
//! Библиотека для выгрузки списка пользователей из JSON в CSV
//! с полями `name`, `email`, `password`.
//!
//! ## Формат
//!
//! - **Вход** - JSON-массив объектов, лишние ключи игнорируются
//! - **Выход** - CSV в UTF-8 с BOM (для Excel), разделитель `,`, строки `\r\n`
//!
//! ## Пример использования
//!
//! ```rust,ignore
//! use usercsv::{export, load, resolve_output_path};
//! use std::path::Path;
//!
//! let input = Path::new("dovec_users.json");
//! let output = resolve_output_path(input)?;
//! let records = load(input)?;
//! export(&records, &output)?;
//! ```

pub mod error;
pub mod types;
pub mod json;
pub mod csv;
pub mod export;

pub use error::{Error, Result};
pub use types::*;
pub use json::JsonUsers;
pub use csv::CsvWriter;
pub use export::{export, load, resolve_output_path, run, ExportJob};
