//! Задание выгрузки: путь входа, производный путь выхода и загруженные записи.

use crate::csv::CsvWriter;
use crate::error::{Error, Result};
use crate::json::JsonUsers;
use crate::types::{ExportSummary, UserRecord, OUTPUT_SUFFIX};
use std::path::{Path, PathBuf};

/// Одноразовое задание выгрузки.
#[derive(Debug, Clone)]
pub struct ExportJob {
    /// Путь к входному JSON.
    pub input_path: PathBuf,
    /// Путь к выходному CSV (рядом с входным файлом).
    pub output_path: PathBuf,
    /// Записи пользователей в исходном порядке.
    pub records: Vec<UserRecord>,
}

impl ExportJob {
    /// Вычисляет путь выхода и загружает записи. Выходной файл не создается.
    pub fn prepare(input_path: impl AsRef<Path>) -> Result<Self> {
        let input_path = input_path.as_ref();
        let output_path = resolve_output_path(input_path)?;
        let records = load(input_path)?;

        Ok(ExportJob {
            input_path: input_path.to_path_buf(),
            output_path,
            records,
        })
    }

    /// Записывает CSV, перезаписывая существующий файл.
    pub fn execute(self) -> Result<ExportSummary> {
        export(&self.records, &self.output_path)?;

        Ok(ExportSummary {
            rows: self.records.len(),
            output_path: self.output_path,
        })
    }
}

/// Путь выходного файла: тот же каталог, имя = основа входного имени + суффикс.
///
/// `data/dovec_users.json` -> `data/dovec_users_name_email_passwords.csv`
pub fn resolve_output_path(input_path: &Path) -> Result<PathBuf> {
    let stem = input_path
        .file_stem()
        .ok_or_else(|| Error::InvalidInputPath(input_path.to_path_buf()))?;

    let mut file_name = stem.to_os_string();
    file_name.push(OUTPUT_SUFFIX);

    Ok(input_path.with_file_name(file_name))
}

/// Читает записи пользователей из JSON-файла.
pub fn load(input_path: &Path) -> Result<Vec<UserRecord>> {
    JsonUsers::load(input_path).map(Into::into)
}

/// Записывает записи в CSV-файл с BOM.
pub fn export(records: &[UserRecord], output_path: &Path) -> Result<()> {
    CsvWriter::export(records, output_path)
}

/// Полный цикл выгрузки: путь выхода, загрузка, запись.
pub fn run(input_path: impl AsRef<Path>) -> Result<ExportSummary> {
    let job = ExportJob::prepare(input_path)?;
    tracing::debug!(
        "Выгрузка {} -> {}",
        job.input_path.display(),
        job.output_path.display()
    );
    job.execute()
}
