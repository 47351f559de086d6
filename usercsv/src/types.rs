//! Базовые типы данных для выгрузки пользователей.

use std::path::PathBuf;

// =============================================================================
// Константы формата выгрузки
// =============================================================================

/// Заголовок выходного CSV.
pub const CSV_HEADER: [&str; 3] = ["name", "email", "password"];

/// Суффикс имени выходного файла, заменяющий расширение входного.
pub const OUTPUT_SUFFIX: &str = "_name_email_passwords.csv";

/// Метка порядка байтов UTF-8, по ней Excel распознает кодировку.
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

// =============================================================================
// Структуры данных
// =============================================================================

/// Запись пользователя из входного JSON.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserRecord {
    /// Имя.
    pub name: Option<String>,
    /// Электронная почта.
    pub email: Option<String>,
    /// Пароль в том виде, в каком он лежит во входном файле.
    pub password: Option<String>,
}

impl UserRecord {
    /// Создает запись со всеми заполненными полями.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
            password: Some(password.into()),
        }
    }

    /// Возвращает строку CSV в порядке заголовка, пустые поля заменяются на "".
    pub fn to_row(&self) -> [&str; 3] {
        [
            self.name.as_deref().unwrap_or(""),
            self.email.as_deref().unwrap_or(""),
            self.password.as_deref().unwrap_or(""),
        ]
    }
}

/// Итог успешной выгрузки.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    /// Путь к созданному CSV.
    pub output_path: PathBuf,
    /// Количество строк данных (без заголовка).
    pub rows: usize,
}
