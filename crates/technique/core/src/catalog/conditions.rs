//! Condition table used by condition-passthrough effects.
//!
//! Adding a condition to a technique costs exactly the condition's listed
//! value, independent of tier.

use std::collections::BTreeMap;

use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

use crate::error::CatalogError;

/// Conditions a technique can impose.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    EnumIter,
    EnumString,
    IntoStaticStr,
    Display,
)]
pub enum Condition {
    #[strum(serialize = "agarrado")]
    Grappled,
    #[strum(serialize = "amendrontado")]
    Frightened,
    #[strum(serialize = "atordoado")]
    Stunned,
    #[strum(serialize = "bebado")]
    Drunk,
    #[strum(serialize = "caido")]
    Prone,
    #[strum(serialize = "cego")]
    Blinded,
    #[strum(serialize = "empoderado")]
    Empowered,
    #[strum(serialize = "enfeiticado")]
    Charmed,
    #[strum(serialize = "enfurecido")]
    Enraged,
    #[strum(serialize = "envenenado")]
    Poisoned,
    #[strum(serialize = "estremecido")]
    Shaken,
    #[strum(serialize = "impedido")]
    Restrained,
    #[strum(serialize = "incapacitado")]
    Incapacitated,
    #[strum(serialize = "inconsciente")]
    Unconscious,
    #[strum(serialize = "invisivel")]
    Invisible,
    #[strum(serialize = "letargico")]
    Lethargic,
    #[strum(serialize = "paralisado")]
    Paralyzed,
    #[strum(serialize = "queimado")]
    Burned,
    #[strum(serialize = "sangramento")]
    Bleeding,
    #[strum(serialize = "sonolento")]
    Drowsy,
    #[strum(serialize = "sufocado")]
    Suffocated,
    #[strum(serialize = "surdo")]
    Deafened,
}

impl Condition {
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConditionDefinition {
    pub id: Condition,
    pub label: String,
    pub cost: i32,
}

/// Fixed cost of every condition.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConditionTable {
    entries: BTreeMap<Condition, ConditionDefinition>,
}

impl ConditionTable {
    pub fn from_definitions(
        definitions: impl IntoIterator<Item = ConditionDefinition>,
    ) -> Result<Self, CatalogError> {
        let mut entries = BTreeMap::new();
        for definition in definitions {
            let id = definition.id;
            if entries.insert(id, definition).is_some() {
                return Err(CatalogError::DuplicateEntry {
                    kind: "condition",
                    key: id.as_str(),
                });
            }
        }
        Ok(Self { entries })
    }

    pub fn get(&self, id: Condition) -> Option<&ConditionDefinition> {
        self.entries.get(&id)
    }

    pub fn cost(&self, id: Condition) -> Option<i32> {
        self.get(id).map(|definition| definition.cost)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConditionDefinition> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn builtin() -> Self {
        use Condition::*;

        let rows = [
            (Grappled, "Agarrado", 1),
            (Frightened, "Amedrontado", 2),
            (Stunned, "Atordoado", 4),
            (Drunk, "Bêbado", 1),
            (Prone, "Caído", 1),
            (Blinded, "Cego", 2),
            (Empowered, "Empoderado", 4),
            (Charmed, "Enfeitiçado", 2),
            (Enraged, "Enfurecido", 2),
            (Poisoned, "Envenenado", 1),
            (Shaken, "Estremecido", 2),
            (Restrained, "Impedido", 2),
            (Incapacitated, "Incapacitado", 2),
            (Unconscious, "Inconsciente", 8),
            (Invisible, "Invisível", 5),
            (Lethargic, "Letárgico", 2),
            (Paralyzed, "Paralisado", 6),
            (Burned, "Queimado", 1),
            (Bleeding, "Sangramento", 1),
            (Drowsy, "Sonolento", 3),
            (Suffocated, "Sufocado", 2),
            (Deafened, "Surdo", 1),
        ];

        let entries: BTreeMap<_, _> = rows
            .into_iter()
            .map(|(id, label, cost)| {
                let definition = ConditionDefinition {
                    id,
                    label: label.to_owned(),
                    cost,
                };
                (id, definition)
            })
            .collect();

        debug_assert!(Condition::iter().all(|id| entries.contains_key(&id)));
        Self { entries }
    }
}
