//! Модуль сериализации списка пользователей в CSV.

pub mod writer;

pub use writer::CsvWriter;
