//! Сериализация списка пользователей в CSV.

use crate::error::Result;
use crate::types::{UserRecord, CSV_HEADER, UTF8_BOM};
use ::csv::{QuoteStyle, Terminator, WriterBuilder};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Writer для выходного CSV.
pub struct CsvWriter;

impl CsvWriter {
    /// Создает (или перезаписывает) файл и записывает в него выгрузку.
    pub fn export(records: &[UserRecord], path: &Path) -> Result<()> {
        let mut file = File::create(path)?;
        Self::write_to(records, &mut file)?;
        tracing::debug!("Записано строк: {} в {}", records.len(), path.display());
        Ok(())
    }

    /// Записывает BOM, заголовок и по одной строке на запись в любой приемник,
    /// реализующий трейт Write.
    pub fn write_to<W: Write>(records: &[UserRecord], writer: &mut W) -> Result<()> {
        writer.write_all(UTF8_BOM)?;

        let mut csv = WriterBuilder::new()
            .terminator(Terminator::CRLF)
            .quote_style(QuoteStyle::Necessary)
            .from_writer(writer);

        csv.write_record(CSV_HEADER)?;
        for record in records {
            csv.write_record(record.to_row())?;
        }

        csv.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(records: &[UserRecord]) -> String {
        let mut output = Vec::new();
        CsvWriter::write_to(records, &mut output).unwrap();
        assert!(output.starts_with(UTF8_BOM));
        String::from_utf8(output[UTF8_BOM.len()..].to_vec()).unwrap()
    }

    #[test]
    fn test_write_header_only() {
        assert_eq!(render(&[]), "name,email,password\r\n");
    }

    #[test]
    fn test_write_missing_fields_as_empty() {
        let records = vec![
            UserRecord::new("A", "a@x.com", "p1"),
            UserRecord {
                name: Some("B".to_string()),
                ..Default::default()
            },
        ];

        assert_eq!(
            render(&records),
            "name,email,password\r\nA,a@x.com,p1\r\nB,,\r\n"
        );
    }

    #[test]
    fn test_write_quotes_special_characters() {
        let records = vec![
            UserRecord::new("Doe, John", "say \"hi\"", "line1\nline2"),
            UserRecord::new("carriage\rreturn", "plain", ""),
        ];

        assert_eq!(
            render(&records),
            "name,email,password\r\n\"Doe, John\",\"say \"\"hi\"\"\",\"line1\nline2\"\r\n\
             \"carriage\rreturn\",plain,\r\n"
        );
    }

    #[test]
    fn test_write_non_ascii() {
        let records = vec![UserRecord::new("İrem Su Biçen", "irem@x.com", "şifre")];
        assert!(render(&records).contains("İrem Su Biçen,irem@x.com,şifre\r\n"));
    }
}
