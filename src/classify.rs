//! Sort city records into renames, misses, and names already in the target script.

use crate::loader::CityRecord;
use crate::table::{CollisionPolicy, TableError, TranslationTable};
use crate::translit::contains_latin_letters;

/// Which generation run is being performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    /// Fill a new `name_en` column from Chinese names.
    NameEn,
    /// Rewrite Latin-script `name` values to Chinese.
    ToChinese,
}

impl Task {
    pub fn title(&self) -> &'static str {
        match self {
            Task::NameEn => "Add English names to cities",
            Task::ToChinese => "Rename cities from English to Chinese",
        }
    }

    pub fn default_file_name(&self) -> &'static str {
        match self {
            Task::NameEn => "add_name_en_to_cities.sql",
            Task::ToChinese => "update_cities_name_to_chinese.sql",
        }
    }

    /// Column the generated `UPDATE`s write to.
    pub fn target_column(&self) -> &'static str {
        match self {
            Task::NameEn => "name_en",
            Task::ToChinese => "name",
        }
    }

    /// Whether `name` is outside the task's target script and needs a lookup.
    pub fn needs_translation(&self, name: &str) -> bool {
        match self {
            Task::NameEn => !contains_latin_letters(name),
            Task::ToChinese => contains_latin_letters(name),
        }
    }

    fn forward_table(&self, policy: CollisionPolicy) -> Result<TranslationTable, TableError> {
        match self {
            Task::NameEn => TranslationTable::chinese_to_english(policy),
            Task::ToChinese => TranslationTable::english_to_chinese(policy),
        }
    }
}

/// Forward table for lookups plus its derived reverse, used to tell whether a
/// name that needs no translation is a known counterpart.
#[derive(Debug, Clone)]
pub struct Translator {
    pub forward: TranslationTable,
    pub reverse: TranslationTable,
}

impl Translator {
    pub fn new(forward: TranslationTable, policy: CollisionPolicy) -> Result<Self, TableError> {
        let reverse = forward.reversed(policy)?;
        tracing::debug!(
            "translation table: {} entries, {} reverse entries",
            forward.len(),
            reverse.len()
        );
        if reverse.collisions() > 0 {
            tracing::info!(
                "reverse table: {} colliding entries resolved with {}",
                reverse.collisions(),
                policy
            );
        }
        Ok(Self { forward, reverse })
    }

    pub fn for_task(task: Task, policy: CollisionPolicy) -> Result<Self, TableError> {
        Self::new(task.forward_table(policy)?, policy)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rename {
    pub old_name: String,
    pub new_name: String,
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdatePlan {
    Resolved(Rename),
    Unresolved(CityRecord),
    /// Already in the target script. `counterpart` is the reverse-table entry, if any.
    Unchanged {
        record: CityRecord,
        counterpart: Option<String>,
    },
}

#[derive(Debug, Clone)]
pub struct Classification {
    pub task: Task,
    pub plans: Vec<UpdatePlan>,
}

impl Classification {
    pub fn total(&self) -> usize {
        self.plans.len()
    }

    pub fn resolved(&self) -> impl Iterator<Item = &Rename> {
        self.plans.iter().filter_map(|plan| match plan {
            UpdatePlan::Resolved(rename) => Some(rename),
            _ => None,
        })
    }

    pub fn unresolved(&self) -> impl Iterator<Item = &CityRecord> {
        self.plans.iter().filter_map(|plan| match plan {
            UpdatePlan::Unresolved(record) => Some(record),
            _ => None,
        })
    }

    pub fn resolved_count(&self) -> usize {
        self.resolved().count()
    }

    pub fn unresolved_count(&self) -> usize {
        self.unresolved().count()
    }

    pub fn needing_translation(&self) -> usize {
        self.resolved_count() + self.unresolved_count()
    }

    pub fn unchanged_count(&self) -> usize {
        self.total() - self.needing_translation()
    }

    /// Unchanged records whose name appears in the reverse table.
    pub fn known_unchanged_count(&self) -> usize {
        self.plans
            .iter()
            .filter(|plan| {
                matches!(
                    plan,
                    UpdatePlan::Unchanged {
                        counterpart: Some(_),
                        ..
                    }
                )
            })
            .count()
    }
}

/// Classify every record in input order.
pub fn classify(task: Task, records: Vec<CityRecord>, translator: &Translator) -> Classification {
    let plans = records
        .into_iter()
        .map(|record| classify_record(task, record, translator))
        .collect();
    Classification { task, plans }
}

fn classify_record(task: Task, record: CityRecord, translator: &Translator) -> UpdatePlan {
    if !task.needs_translation(&record.name) {
        let counterpart = translator.reverse.translate(&record.name).map(str::to_string);
        tracing::debug!("{} ({}): already in target script", record.name, record.country);
        return UpdatePlan::Unchanged {
            record,
            counterpart,
        };
    }

    match translator.forward.translate(&record.name) {
        Some(translated) => {
            tracing::debug!("{} ({}) -> {}", record.name, record.country, translated);
            UpdatePlan::Resolved(Rename {
                new_name: translated.to_string(),
                old_name: record.name,
                country: record.country,
            })
        }
        None => {
            tracing::debug!("{} ({}): no translation", record.name, record.country);
            UpdatePlan::Unresolved(record)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn translator(entries: &[(&str, &str)]) -> Translator {
        let forward =
            TranslationTable::from_entries(entries.iter().copied(), CollisionPolicy::LastWins)
                .unwrap();
        Translator::new(forward, CollisionPolicy::LastWins).unwrap()
    }

    #[test]
    fn test_name_en_classification() {
        let translator = translator(&[("北京", "Beijing"), ("东京", "Tokyo")]);
        let records = vec![
            CityRecord::new("北京", "China"),
            CityRecord::new("某地", "China"),
            CityRecord::new("Tokyo", "Japan"),
            CityRecord::new("Lisbon", "Portugal"),
        ];
        let result = classify(Task::NameEn, records, &translator);

        assert_eq!(result.total(), 4);
        assert_eq!(result.needing_translation(), 2);
        assert_eq!(result.resolved_count(), 1);
        assert_eq!(result.unresolved_count(), 1);
        assert_eq!(result.unchanged_count(), 2);
        assert_eq!(result.known_unchanged_count(), 1);

        assert_eq!(
            result.plans[0],
            UpdatePlan::Resolved(Rename {
                old_name: "北京".into(),
                new_name: "Beijing".into(),
                country: "China".into(),
            })
        );
        assert_eq!(result.plans[1], UpdatePlan::Unresolved(CityRecord::new("某地", "China")));
        assert_eq!(
            result.plans[2],
            UpdatePlan::Unchanged {
                record: CityRecord::new("Tokyo", "Japan"),
                counterpart: Some("东京".into()),
            }
        );
        assert_eq!(
            result.plans[3],
            UpdatePlan::Unchanged {
                record: CityRecord::new("Lisbon", "Portugal"),
                counterpart: None,
            }
        );
    }

    #[test]
    fn test_to_chinese_classification() {
        let translator = translator(&[("Xi'an", "西安"), ("Xian", "西安")]);
        let records = vec![
            CityRecord::new("Xian", "China"),
            CityRecord::new("西安", "China"),
            CityRecord::new("Atlantis", "Nowhere"),
        ];
        let result = classify(Task::ToChinese, records, &translator);

        assert_eq!(result.resolved_count(), 1);
        assert_eq!(result.unresolved_count(), 1);
        assert_eq!(result.unchanged_count(), 1);
        let rename = result.resolved().next().unwrap();
        assert_eq!(rename.old_name, "Xian");
        assert_eq!(rename.new_name, "西安");
    }

    #[test]
    fn test_same_name_different_countries_are_independent() {
        let translator = translator(&[("Taizhou", "台州")]);
        let records = vec![
            CityRecord::new("Taizhou", "China"),
            CityRecord::new("Taizhou", "Taiwan"),
        ];
        let result = classify(Task::ToChinese, records, &translator);
        let countries: Vec<_> = result.resolved().map(|r| r.country.as_str()).collect();
        assert_eq!(countries, vec!["China", "Taiwan"]);
    }

    #[test]
    fn test_for_task_uses_builtin_tables() {
        let name_en = Translator::for_task(Task::NameEn, CollisionPolicy::LastWins).unwrap();
        assert_eq!(name_en.forward.translate("上海"), Some("Shanghai"));

        let to_cn = Translator::for_task(Task::ToChinese, CollisionPolicy::LastWins).unwrap();
        assert_eq!(to_cn.forward.translate("Shanghai"), Some("上海"));

        assert!(Translator::for_task(Task::ToChinese, CollisionPolicy::Reject).is_err());
    }

    #[test]
    fn test_task_script_rules() {
        assert!(Task::NameEn.needs_translation("北京"));
        assert!(!Task::NameEn.needs_translation("Xi'an"));
        assert!(Task::ToChinese.needs_translation("Xi'an"));
        assert!(!Task::ToChinese.needs_translation("北京"));
    }
}
