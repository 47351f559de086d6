//! Модуль обработки ошибок библиотеки.

use std::path::PathBuf;

use thiserror::Error;

/// Основной тип ошибки библиотеки.
#[derive(Debug, Error)]
pub enum Error {
    /// Входной файл не существует
    #[error("Файл JSON не найден: {}", .0.display())]
    MissingInputFile(PathBuf),
    /// Корень JSON не является массивом
    #[error("Неверный формат: ожидается массив пользователей, получено {found}")]
    InvalidTopLevelShape {
        /// Тип найденного корневого значения.
        found: &'static str,
    },
    /// Элемент массива не является объектом
    #[error("Неверный формат: запись #{index} должна быть объектом, получено {found}")]
    InvalidRecord {
        /// Позиция записи в массиве.
        index: usize,
        /// Тип найденного значения.
        found: &'static str,
    },
    /// Из пути нельзя получить имя выходного файла
    #[error("Некорректный путь к входному файлу: {}", .0.display())]
    InvalidInputPath(PathBuf),
    /// Ошибка ввода/вывода
    #[error("Ошибка ввода/вывода: {0}")]
    Io(#[from] std::io::Error),
    /// Ошибка разбора JSON
    #[error("Ошибка парсинга JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// Ошибка записи CSV
    #[error("Ошибка записи CSV: {0}")]
    Csv(#[from] ::csv::Error),
}

/// Тип Result с ошибкой библиотеки.
pub type Result<T> = std::result::Result<T, Error>;
