//! Render a classification as a PostgreSQL script.
//!
//! Values are interpolated as literals with single quotes doubled. That is
//! only sound for curated names; identifiers are validated by the config layer.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use time::macros::format_description;
use time::Date;

use crate::classify::{Classification, Rename, Task};

const RULE: &str = "-- =====================================================";

/// Matches Latin-only names for the catch-all `name_en = name` statement.
const LATIN_NAME_PATTERN: &str = r"^[a-zA-Z\s\-'']+$";

#[derive(Debug, Clone)]
pub struct SqlOptions {
    pub table: String,
    pub name_en_type: String,
    pub generated_on: Option<Date>,
    /// Shown in the header, usually the input file name.
    pub source: Option<String>,
    pub select_limit: usize,
}

impl Default for SqlOptions {
    fn default() -> Self {
        Self {
            table: "cities".to_string(),
            name_en_type: "VARCHAR(100)".to_string(),
            generated_on: None,
            source: None,
            select_limit: 50,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SqlDocument {
    lines: Vec<String>,
}

impl SqlDocument {
    fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    fn blank(&mut self) {
        self.lines.push(String::new());
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn render(&self) -> String {
        let mut out = self.lines.join("\n");
        out.push('\n');
        out
    }

    /// Write the whole document in one call, creating parent directories.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create output dir {}", parent.display()))?;
        }
        fs::write(path, self.render())
            .with_context(|| format!("failed to write SQL script to {}", path.display()))
    }
}

/// Double embedded single quotes. No other escaping is performed.
pub fn escape_literal(value: &str) -> String {
    value.replace('\'', "''")
}

/// Flatten text for a `--` comment so line breaks cannot end the comment.
pub fn comment_text(value: &str) -> String {
    value.replace(['\r', '\n'], " ")
}

/// `UPDATE <table> SET <column> = '<new>' WHERE name = '<old>' AND country = '<country>'`,
/// with an optional `AND <column> IS NULL` guard.
pub fn update_statement(table: &str, column: &str, rename: &Rename, guarded: bool) -> String {
    let mut stmt = format!(
        "UPDATE {table} SET {column} = '{}' WHERE name = '{}' AND country = '{}'",
        escape_literal(&rename.new_name),
        escape_literal(&rename.old_name),
        escape_literal(&rename.country),
    );
    if guarded {
        stmt.push_str(&format!(" AND {column} IS NULL"));
    }
    stmt.push(';');
    stmt
}

pub fn build_document(classification: &Classification, options: &SqlOptions) -> SqlDocument {
    let mut doc = SqlDocument::default();
    push_header(&mut doc, classification, options);
    match classification.task {
        Task::NameEn => push_name_en_body(&mut doc, classification, options),
        Task::ToChinese => push_to_chinese_body(&mut doc, classification, options),
    }
    push_unresolved(&mut doc, classification);
    push_spot_check(&mut doc, classification.task, options);
    doc
}

fn push_header(doc: &mut SqlDocument, classification: &Classification, options: &SqlOptions) {
    doc.push(RULE);
    doc.push(format!("-- {}", classification.task.title()));
    if let Some(date) = options.generated_on {
        let formatted = date
            .format(format_description!("[year]-[month]-[day]"))
            .unwrap_or_else(|_| date.to_string());
        doc.push(format!("-- Generated: {formatted}"));
    }
    if let Some(source) = &options.source {
        doc.push(format!("-- Source: {}", comment_text(source)));
    }
    doc.push(format!("-- Total input records: {}", classification.total()));
    doc.push(format!(
        "-- Records needing translation: {}",
        classification.needing_translation()
    ));
    doc.push(format!(
        "-- Translations found: {}",
        classification.resolved_count()
    ));
    doc.push(format!(
        "-- Translations missing: {}",
        classification.unresolved_count()
    ));
    doc.push(format!(
        "-- Already in target script: {}",
        classification.unchanged_count()
    ));
    doc.push(RULE);
    doc.blank();
}

fn push_name_en_body(doc: &mut SqlDocument, classification: &Classification, options: &SqlOptions) {
    let table = &options.table;
    let column = Task::NameEn.target_column();

    doc.push("BEGIN;");
    doc.blank();
    doc.push("-- English name column");
    doc.push(format!("ALTER TABLE {table}"));
    doc.push(format!(
        "ADD COLUMN IF NOT EXISTS {column} {};",
        options.name_en_type
    ));
    doc.blank();
    doc.push(format!(
        "COMMENT ON COLUMN {table}.{column} IS 'City name in English';"
    ));
    doc.blank();

    let mut renames: Vec<&Rename> = classification.resolved().collect();
    renames.sort_by(|a, b| (&a.country, &a.old_name).cmp(&(&b.country, &b.old_name)));
    if !renames.is_empty() {
        doc.push("-- English names for Chinese-script cities");
        for rename in renames {
            doc.push(update_statement(table, column, rename, true));
        }
        doc.blank();
    }

    doc.push("-- Latin-script cities keep their name as the English name");
    doc.push(format!(
        "UPDATE {table} SET {column} = name WHERE {column} IS NULL AND name ~ '{LATIN_NAME_PATTERN}';"
    ));
    doc.blank();
    doc.push("COMMIT;");
    doc.blank();
    doc.push(format!(
        "CREATE INDEX IF NOT EXISTS idx_{table}_{column} ON {table}({column});"
    ));
    doc.blank();
    doc.push(format!("ANALYZE {table};"));
}

fn push_to_chinese_body(
    doc: &mut SqlDocument,
    classification: &Classification,
    options: &SqlOptions,
) {
    let column = Task::ToChinese.target_column();

    doc.push("BEGIN;");
    doc.blank();
    let mut count = 0usize;
    for rename in classification.resolved() {
        doc.push(update_statement(&options.table, column, rename, false));
        count += 1;
    }
    if count > 0 {
        doc.blank();
    }
    doc.push("COMMIT;");
    doc.blank();
    doc.push(format!("-- Generated {count} update statements"));
}

fn push_unresolved(doc: &mut SqlDocument, classification: &Classification) {
    if classification.unresolved_count() == 0 {
        return;
    }
    doc.blank();
    doc.push(RULE);
    doc.push("-- No translation found; add these to the table and rerun:");
    doc.push(RULE);
    for record in classification.unresolved() {
        doc.push(format!(
            "-- {} ({})",
            comment_text(&record.name),
            comment_text(&record.country)
        ));
    }
}

fn push_spot_check(doc: &mut SqlDocument, task: Task, options: &SqlOptions) {
    let table = &options.table;
    doc.blank();
    doc.push("-- Spot-check the result");
    match task {
        Task::NameEn => doc.push(format!(
            "SELECT name, name_en, country FROM {table} ORDER BY country, name LIMIT {};",
            options.select_limit
        )),
        Task::ToChinese => doc.push(format!(
            "SELECT name, country FROM {table} WHERE name ~ '[a-zA-Z]' ORDER BY country, name;"
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::{classify, Translator};
    use crate::loader::CityRecord;
    use crate::table::{CollisionPolicy, TranslationTable};
    use time::macros::date;

    fn run(task: Task, entries: &[(&str, &str)], records: Vec<CityRecord>) -> SqlDocument {
        let forward =
            TranslationTable::from_entries(entries.iter().copied(), CollisionPolicy::LastWins)
                .unwrap();
        let translator = Translator::new(forward, CollisionPolicy::LastWins).unwrap();
        let classification = classify(task, records, &translator);
        build_document(&classification, &SqlOptions::default())
    }

    fn count_updates(doc: &SqlDocument) -> usize {
        doc.lines()
            .iter()
            .filter(|l| l.starts_with("UPDATE ") && l.contains("WHERE name = "))
            .count()
    }

    #[test]
    fn test_escape_literal() {
        assert_eq!(escape_literal("Xi'an"), "Xi''an");
        assert_eq!(escape_literal("O'Brien's City"), "O''Brien''s City");
        assert_eq!(escape_literal("北京"), "北京");
        assert_eq!(escape_literal(r"back\slash"), r"back\slash");
    }

    #[test]
    fn test_name_en_single_record() {
        let doc = run(
            Task::NameEn,
            &[("北京", "Beijing")],
            vec![CityRecord::new("北京", "China")],
        );
        let lines = doc.lines();
        assert!(lines.contains(
            &"UPDATE cities SET name_en = 'Beijing' WHERE name = '北京' AND country = 'China' AND name_en IS NULL;"
                .to_string()
        ));
        assert!(lines.contains(&"-- Records needing translation: 1".to_string()));
        assert!(lines.contains(&"-- Translations found: 1".to_string()));
        assert!(lines.contains(&"-- Translations missing: 0".to_string()));
        assert!(lines.contains(&"BEGIN;".to_string()));
        assert!(lines.contains(&"COMMIT;".to_string()));
        assert!(!doc.render().contains("No translation found"));
    }

    #[test]
    fn test_name_en_layout() {
        let doc = run(
            Task::NameEn,
            &[("北京", "Beijing")],
            vec![CityRecord::new("北京", "China"), CityRecord::new("Tokyo", "Japan")],
        );
        let lines = doc.lines();
        let pos = |needle: &str| {
            lines
                .iter()
                .position(|l| l.starts_with(needle))
                .unwrap_or_else(|| panic!("missing line starting with {needle}"))
        };

        let begin = pos("BEGIN;");
        let alter = pos("ALTER TABLE cities");
        let row = pos("UPDATE cities SET name_en = 'Beijing'");
        let catch_all = pos("UPDATE cities SET name_en = name WHERE name_en IS NULL");
        let commit = pos("COMMIT;");
        let index = pos("CREATE INDEX IF NOT EXISTS idx_cities_name_en ON cities(name_en);");
        let select = pos("SELECT name, name_en, country FROM cities");
        assert!(begin < alter && alter < row && row < catch_all && catch_all < commit);
        assert!(commit < index && index < select);
        assert_eq!(select, lines.len() - 1);

        assert_eq!(
            lines[catch_all],
            r"UPDATE cities SET name_en = name WHERE name_en IS NULL AND name ~ '^[a-zA-Z\s\-'']+$';"
        );
        assert_eq!(lines[alter + 1], "ADD COLUMN IF NOT EXISTS name_en VARCHAR(100);");
        assert!(lines.contains(&"-- Already in target script: 1".to_string()));
    }

    #[test]
    fn test_name_en_sorted_by_country_then_name() {
        let doc = run(
            Task::NameEn,
            &[("曼谷", "Bangkok"), ("上海", "Shanghai"), ("北京", "Beijing")],
            vec![
                CityRecord::new("曼谷", "Thailand"),
                CityRecord::new("上海", "China"),
                CityRecord::new("北京", "China"),
            ],
        );
        let order: Vec<_> = doc
            .lines()
            .iter()
            .filter(|l| l.contains("AND name_en IS NULL;") && l.contains("WHERE name = "))
            .map(|l| l.split('\'').nth(1).unwrap().to_string())
            .collect();
        // "上" (U+4E0A) sorts before "北" (U+5317).
        assert_eq!(order, vec!["Shanghai", "Beijing", "Bangkok"]);
    }

    #[test]
    fn test_to_chinese_document() {
        let doc = run(
            Task::ToChinese,
            &[("Beijing", "北京"), ("Xi'an", "西安")],
            vec![
                CityRecord::new("Xi'an", "China"),
                CityRecord::new("Beijing", "China"),
                CityRecord::new("Gotham", "USA"),
                CityRecord::new("上海", "China"),
            ],
        );
        let text = doc.render();
        let lines = doc.lines();
        assert_eq!(count_updates(&doc), 2);

        let first = lines.iter().position(|l| l.contains("'Xi''an'")).unwrap();
        let second = lines.iter().position(|l| l.contains("'Beijing'")).unwrap();
        assert!(first < second, "input order is preserved");
        assert_eq!(
            lines[first],
            "UPDATE cities SET name = '西安' WHERE name = 'Xi''an' AND country = 'China';"
        );
        assert!(!text.contains("IS NULL"));
        assert!(text.contains("-- Generated 2 update statements"));
        assert!(text.contains("-- Gotham (USA)\n"));
        assert!(!text.contains("-- 上海"));
        assert!(text.ends_with(
            "SELECT name, country FROM cities WHERE name ~ '[a-zA-Z]' ORDER BY country, name;\n"
        ));
    }

    #[test]
    fn test_unresolved_get_no_update() {
        let doc = run(
            Task::NameEn,
            &[("北京", "Beijing")],
            vec![CityRecord::new("某地", "China"), CityRecord::new("北京", "China")],
        );
        let text = doc.render();
        assert_eq!(count_updates(&doc), 1);
        assert!(!text.contains("WHERE name = '某地'"));
        assert!(text.contains("-- 某地 (China)"));
        assert!(text.contains("-- Translations missing: 1"));
        let comment = text.find("-- 某地 (China)").unwrap();
        let select = text.find("SELECT name, name_en").unwrap();
        assert!(comment < select);
    }

    #[test]
    fn test_comment_lines_stay_comments() {
        let doc = run(
            Task::ToChinese,
            &[],
            vec![CityRecord::new("Gotham\nDROP TABLE cities;", "US\r\nA")],
        );
        let executable: Vec<_> = doc
            .lines()
            .iter()
            .filter(|l| l.contains("DROP TABLE"))
            .collect();
        assert_eq!(executable.len(), 1);
        assert_eq!(executable[0], "-- Gotham DROP TABLE cities; (US  A)");
    }

    #[test]
    fn test_source_comment_is_single_line() {
        let translator = Translator::new(TranslationTable::default(), CollisionPolicy::LastWins).unwrap();
        let classification = classify(Task::NameEn, Vec::new(), &translator);
        let options = SqlOptions {
            source: Some("a\nb.json".into()),
            ..SqlOptions::default()
        };
        let doc = build_document(&classification, &options);
        assert!(doc.lines().contains(&"-- Source: a b.json".to_string()));
        assert!(!doc.lines().iter().any(|l| l == "b.json"));
    }

    #[test]
    fn test_quotes_are_doubled_in_both_literals() {
        let doc = run(
            Task::ToChinese,
            &[("O'Brien's City", "O'Brien's City")],
            vec![CityRecord::new("O'Brien's City", "Ire'land")],
        );
        assert!(doc.lines().contains(
            &"UPDATE cities SET name = 'O''Brien''s City' WHERE name = 'O''Brien''s City' AND country = 'Ire''land';"
                .to_string()
        ));
    }

    #[test]
    fn test_same_name_two_countries() {
        let doc = run(
            Task::ToChinese,
            &[("Suzhou", "苏州")],
            vec![CityRecord::new("Suzhou", "China"), CityRecord::new("Suzhou", "Taiwan")],
        );
        let text = doc.render();
        assert!(text.contains("WHERE name = 'Suzhou' AND country = 'China';"));
        assert!(text.contains("WHERE name = 'Suzhou' AND country = 'Taiwan';"));
        assert_eq!(count_updates(&doc), 2);
    }

    #[test]
    fn test_output_is_deterministic() {
        let records = || {
            vec![
                CityRecord::new("北京", "China"),
                CityRecord::new("某地", "China"),
                CityRecord::new("Tokyo", "Japan"),
            ]
        };
        let entries = [("北京", "Beijing"), ("东京", "Tokyo")];
        let a = run(Task::NameEn, &entries, records()).render();
        let b = run(Task::NameEn, &entries, records()).render();
        assert_eq!(a, b);
    }

    #[test]
    fn test_header_metadata() {
        let translator = Translator::new(TranslationTable::default(), CollisionPolicy::LastWins).unwrap();
        let classification = classify(Task::ToChinese, Vec::new(), &translator);
        let options = SqlOptions {
            table: "city_names".into(),
            generated_on: Some(date!(2025 - 11 - 05)),
            source: Some("cities_current.json".into()),
            ..SqlOptions::default()
        };
        let doc = build_document(&classification, &options);
        let lines = doc.lines();
        assert_eq!(lines[0], RULE);
        assert_eq!(lines[1], "-- Rename cities from English to Chinese");
        assert_eq!(lines[2], "-- Generated: 2025-11-05");
        assert_eq!(lines[3], "-- Source: cities_current.json");
        assert_eq!(lines[4], "-- Total input records: 0");
        assert!(doc.render().contains("FROM city_names WHERE"));
        assert!(doc.render().contains("-- Generated 0 update statements"));
    }

    #[test]
    fn test_write_to_creates_parent_dirs() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("migrations").join("out.sql");
        let doc = run(Task::NameEn, &[], vec![]);
        doc.write_to(&path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), doc.render());
    }
}
