//! Парсер входного JSON со списком пользователей.

use crate::error::{Error, Result};
use crate::types::UserRecord;
use serde_json::{Map, Value};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Список пользователей, прочитанный из JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JsonUsers {
    /// Записи в порядке следования во входном массиве.
    pub records: Vec<UserRecord>,
}

impl JsonUsers {
    /// Читает и парсит файл. Отсутствующий файл дает `Error::MissingInputFile`.
    pub fn load(path: &Path) -> Result<Self> {
        let mut file = File::open(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => Error::MissingInputFile(path.to_path_buf()),
            _ => Error::Io(e),
        })?;
        tracing::debug!("Чтение пользователей из {}", path.display());
        Self::from_read(&mut file)
    }

    /// Парсит JSON из любого источника, реализующего трейт Read.
    pub fn from_read<R: Read>(reader: &mut R) -> Result<Self> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;
        Self::parse(&content)
    }

    /// Парсит JSON из строки.
    pub fn parse(content: &str) -> Result<Self> {
        let root: Value = serde_json::from_str(content)?;

        let items = match root {
            Value::Array(items) => items,
            other => {
                return Err(Error::InvalidTopLevelShape {
                    found: Self::kind(&other),
                });
            }
        };

        if items.is_empty() {
            tracing::warn!("Входной массив пуст, CSV будет содержать только заголовок");
        }

        let records = items
            .iter()
            .enumerate()
            .map(|(index, item)| match item {
                Value::Object(fields) => Ok(Self::parse_record(index, fields)),
                other => Err(Error::InvalidRecord {
                    index,
                    found: Self::kind(other),
                }),
            })
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!("Загружено записей: {}", records.len());

        Ok(JsonUsers { records })
    }

    fn parse_record(index: usize, fields: &Map<String, Value>) -> UserRecord {
        UserRecord {
            name: Self::field_text(index, fields, "name"),
            email: Self::field_text(index, fields, "email"),
            password: Self::field_text(index, fields, "password"),
        }
    }

    /// Строки берутся как есть, null и отсутствие ключа дают None,
    /// остальные значения записываются их JSON-представлением.
    fn field_text(index: usize, fields: &Map<String, Value>, key: &str) -> Option<String> {
        match fields.get(key)? {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => {
                tracing::warn!(
                    "Запись #{}: поле '{}' не строка ({}), будет записано как есть",
                    index,
                    key,
                    Self::kind(other)
                );
                Some(other.to_string())
            }
        }
    }

    fn kind(value: &Value) -> &'static str {
        match value {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }
}

impl From<JsonUsers> for Vec<UserRecord> {
    fn from(users: JsonUsers) -> Self {
        users.records
    }
}
