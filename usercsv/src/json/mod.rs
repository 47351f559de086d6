//! Модуль чтения списка пользователей из JSON.

pub mod parser;

pub use parser::JsonUsers;
