//! Individual pigs.

use chrono::{Days, NaiveDate};
use serde::Serialize;

use super::FarmTable;
use crate::table::{CellValue, Column, ColumnType, TableRow};

/// Sex of an animal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Sex {
    Female,
    Male,
}

impl Sex {
    fn as_str(&self) -> &'static str {
        match self {
            Sex::Female => "Female",
            Sex::Male => "Male",
        }
    }
}

/// Production stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Stage {
    Piglet,
    Weaner,
    Grower,
    Finisher,
    Gilt,
    Sow,
    Boar,
}

impl Stage {
    fn as_str(&self) -> &'static str {
        match self {
            Stage::Piglet => "Piglet",
            Stage::Weaner => "Weaner",
            Stage::Grower => "Grower",
            Stage::Finisher => "Finisher",
            Stage::Gilt => "Gilt",
            Stage::Sow => "Sow",
            Stage::Boar => "Boar",
        }
    }
}

/// Where the animal is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PigStatus {
    Active,
    Transferred,
    Discarded,
}

impl PigStatus {
    fn as_str(&self) -> &'static str {
        match self {
            PigStatus::Active => "Active",
            PigStatus::Transferred => "Transferred",
            PigStatus::Discarded => "Discarded",
        }
    }
}

/// One animal, identified by its ear tag.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pig {
    pub ear_tag: String,
    pub breed: String,
    pub sex: Sex,
    pub stage: Stage,
    pub pen: String,
    pub birth_date: NaiveDate,
    pub weight_kg: f64,
    pub status: PigStatus,
}

impl TableRow for Pig {
    fn id(&self) -> &str {
        &self.ear_tag
    }

    fn value(&self, accessor: &str) -> CellValue {
        match accessor {
            "ear_tag" => CellValue::from(self.ear_tag.as_str()),
            "breed" => CellValue::from(self.breed.as_str()),
            "sex" => CellValue::from(self.sex.as_str()),
            "stage" => CellValue::from(self.stage.as_str()),
            "pen" => CellValue::from(self.pen.as_str()),
            "birth_date" => CellValue::from(self.birth_date),
            "weight_kg" => CellValue::from(self.weight_kg),
            "status" => CellValue::from(self.status.as_str()),
            _ => CellValue::Null,
        }
    }
}

const BREEDS: [&str; 5] = ["Landrace", "Yorkshire", "Duroc", "Pietrain", "Hampshire"];
const STAGES: [Stage; 7] = [
    Stage::Piglet,
    Stage::Weaner,
    Stage::Grower,
    Stage::Finisher,
    Stage::Gilt,
    Stage::Sow,
    Stage::Boar,
];

impl FarmTable for Pig {
    const TITLE: &'static str = "Pigs";

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("Ear tag", "ear_tag").filterable(),
            Column::new("Breed", "breed").filterable(),
            Column::new("Sex", "sex").with_render(|value, _| match value {
                CellValue::Text(s) if s == "Female" => "♀ F".to_string(),
                CellValue::Text(s) if s == "Male" => "♂ M".to_string(),
                other => other.to_string(),
            }),
            Column::new("Stage", "stage").filterable(),
            Column::new("Pen", "pen").filterable(),
            Column::new("Born", "birth_date").with_type(ColumnType::Date),
            Column::new("Weight (kg)", "weight_kg").with_type(ColumnType::Number),
            Column::new("Status", "status").filterable(),
        ]
    }

    fn samples() -> Vec<Self> {
        let base = NaiveDate::from_ymd_opt(2024, 1, 8).unwrap_or_default();
        (0..26u32)
            .map(|i| {
                let stage = STAGES[(i as usize * 3) % STAGES.len()];
                let sex = match stage {
                    Stage::Gilt | Stage::Sow => Sex::Female,
                    Stage::Boar => Sex::Male,
                    _ if i % 2 == 0 => Sex::Female,
                    _ => Sex::Male,
                };
                let status = match i % 9 {
                    4 => PigStatus::Transferred,
                    7 => PigStatus::Discarded,
                    _ => PigStatus::Active,
                };
                Pig {
                    ear_tag: format!("P-{:04}", 1001 + i * 7),
                    breed: BREEDS[(i as usize) % BREEDS.len()].to_string(),
                    sex,
                    stage,
                    pen: format!("{}-{}", ['A', 'B', 'C'][(i % 3) as usize], 1 + i % 4),
                    birth_date: base
                        .checked_add_days(Days::new(u64::from(i * 13)))
                        .unwrap_or(base),
                    weight_kg: 1.4 + f64::from((i * 37) % 250) + f64::from(i % 4) * 0.25,
                    status,
                }
            })
            .collect()
    }
}
