use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::error::{Error, Result};

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Composition {
    pub active_ingredient: SmolStr,
    pub strength: SmolStr,
}

/// A single drug entry in the corpus. Only the classification and naming fields are searched;
/// everything else the record store carries is kept in `extra` and passed through untouched.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct DrugRecord {
    pub name: SmolStr,
    pub generic_name: SmolStr,
    pub brands: Vec<SmolStr>,
    pub composition: Vec<Composition>,
    pub category: SmolStr,
    pub therapeutic_class: SmolStr,
    pub pharmacological_class: SmolStr,
    pub indications: Vec<SmolStr>,
    pub side_effects: Vec<SmolStr>,
    pub disorders: Vec<SmolStr>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// The record fields the matcher looks at, in the order they are checked.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Name,
    GenericName,
    Brands,
    ActiveIngredient,
    SideEffects,
    Disorders,
    TherapeuticClass,
    PharmacologicalClass,
    Indications,
    Category,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::GenericName => "genericName",
            Field::Brands => "brands",
            Field::ActiveIngredient => "activeIngredient",
            Field::SideEffects => "sideEffects",
            Field::Disorders => "disorders",
            Field::TherapeuticClass => "therapeuticClass",
            Field::PharmacologicalClass => "pharmacologicalClass",
            Field::Indications => "indications",
            Field::Category => "category",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl DrugRecord {
    pub fn new(name: impl Into<SmolStr>) -> DrugRecord {
        DrugRecord {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_generic_name(mut self, generic_name: impl Into<SmolStr>) -> Self {
        self.generic_name = generic_name.into();
        self
    }

    pub fn with_brands<I, S>(mut self, brands: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SmolStr>,
    {
        self.brands = brands.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_therapeutic_class(mut self, class: impl Into<SmolStr>) -> Self {
        self.therapeutic_class = class.into();
        self
    }

    /// Every searchable value of the record, tagged with the field it came from, in matcher
    /// priority order.
    pub fn searchable_fields(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        std::iter::once((Field::Name, self.name.as_str()))
            .chain(std::iter::once((Field::GenericName, self.generic_name.as_str())))
            .chain(self.brands.iter().map(|b| (Field::Brands, b.as_str())))
            .chain(
                self.composition
                    .iter()
                    .map(|c| (Field::ActiveIngredient, c.active_ingredient.as_str())),
            )
            .chain(self.side_effects.iter().map(|s| (Field::SideEffects, s.as_str())))
            .chain(self.disorders.iter().map(|d| (Field::Disorders, d.as_str())))
            .chain(std::iter::once((
                Field::TherapeuticClass,
                self.therapeutic_class.as_str(),
            )))
            .chain(std::iter::once((
                Field::PharmacologicalClass,
                self.pharmacological_class.as_str(),
            )))
            .chain(self.indications.iter().map(|i| (Field::Indications, i.as_str())))
            .chain(std::iter::once((Field::Category, self.category.as_str())))
    }

    /// The names offered as autocomplete suggestions.
    pub fn suggestion_terms(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        std::iter::once((Field::Name, self.name.as_str()))
            .chain(std::iter::once((Field::GenericName, self.generic_name.as_str())))
            .chain(self.brands.iter().map(|b| (Field::Brands, b.as_str())))
    }

    /// The terms the corrector measures edit distance against. Empty values are skipped so a
    /// short query is never "corrected" to a blank field.
    pub fn correction_terms(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        self.suggestion_terms()
            .chain(std::iter::once((
                Field::TherapeuticClass,
                self.therapeutic_class.as_str(),
            )))
            .filter(|(_, term)| !term.is_empty())
    }
}

/// Every record must have a name. Returns the position of the first one without.
pub fn validate_names(records: &[DrugRecord]) -> Result<()> {
    match records.iter().position(|r| r.name.trim().is_empty()) {
        Some(index) => Err(Error::EmptyName { index }),
        None => Ok(()),
    }
}
