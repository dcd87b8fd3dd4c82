//! Reductions (drawbacks) that lower a technique's cost.

use std::collections::BTreeMap;

use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

use super::MagnitudeBounds;
use crate::error::CatalogError;
use crate::pricing::ReductionPricing;

/// Drawback identifiers.
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
pub enum ReductionId {
    // ========================================================================
    // Fixed & conditional
    // ========================================================================
    /// Requires a turn to charge.
    #[strum(serialize = "tecnica-demorada")]
    SlowTechnique,
    /// Consumes twice the stamina.
    #[strum(serialize = "tecnica-devoradora")]
    StaminaDraining,
    /// Non-offensive technique; value depends on delivery type and damage.
    #[strum(serialize = "tecnica-nao-ofensiva")]
    NonOffensive,

    // ========================================================================
    // Linear & escalating
    // ========================================================================
    #[strum(serialize = "reduzir-area")]
    ReduceArea,
    #[strum(serialize = "tecnica-debilitante")]
    Debilitating,
    #[strum(serialize = "tecnica-exaustiva")]
    Exhausting,
    #[strum(serialize = "concentracao-crucial")]
    CrucialConcentration,

    // ========================================================================
    // Free entry
    // ========================================================================
    #[strum(serialize = "requisito-limitador")]
    LimitingRequirement,
    #[strum(serialize = "efeito-colateral")]
    SideEffect,
    #[strum(serialize = "tecnica-dependente")]
    DependentTechnique,

    // ========================================================================
    // Narrative (listed cost only, never priced)
    // ========================================================================
    #[strum(serialize = "duracao-limitada")]
    LimitedDuration,
    #[strum(serialize = "condicao-especifica")]
    SpecificCondition,
    #[strum(serialize = "carga")]
    Charge,
}

impl ReductionId {
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// Descriptive and pricing metadata for one reduction.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReductionDefinition {
    pub id: ReductionId,
    pub label: String,
    pub description: String,
    /// Cost as listed to the user (≤ 0). Informational; pricing uses `pricing`.
    pub listed_cost: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub bounds: Option<MagnitudeBounds>,
    pub pricing: ReductionPricing,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReductionCatalog {
    entries: BTreeMap<ReductionId, ReductionDefinition>,
}

impl ReductionCatalog {
    pub fn from_definitions(
        definitions: impl IntoIterator<Item = ReductionDefinition>,
    ) -> Result<Self, CatalogError> {
        let mut entries = BTreeMap::new();
        for definition in definitions {
            let id = definition.id;
            if entries.insert(id, definition).is_some() {
                return Err(CatalogError::DuplicateEntry {
                    kind: "reduction",
                    key: id.as_str(),
                });
            }
        }
        Ok(Self { entries })
    }

    pub fn get(&self, id: ReductionId) -> Option<&ReductionDefinition> {
        self.entries.get(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ReductionDefinition> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn builtin() -> Self {
        use ReductionId::*;
        use ReductionPricing::*;

        let up_to = |max: i32| Some(MagnitudeBounds::up_to(max));

        let rows = [
            (
                SlowTechnique,
                "Técnica Demorada",
                "Requer um turno para carregar.",
                -3,
                None,
                Flat { points: 3 },
            ),
            (
                StaminaDraining,
                "Técnica Devoradora",
                "Consome o dobro de estamina.",
                -3,
                None,
                Flat { points: 3 },
            ),
            (
                NonOffensive,
                "Técnica Não Ofensiva",
                "Redução varia se for de Combate (-2) ou Auxiliar (-1).",
                -2,
                None,
                Contextual { combat: 2, auxiliary: 1 },
            ),
            (
                ReduceArea,
                "Reduzir Área",
                "Tira 1 ponto por redução de área.",
                -1,
                up_to(3),
                Linear { unit: 1 },
            ),
            (
                Debilitating,
                "Técnica Debilitante",
                "Tira 3 pontos por nível.",
                -3,
                up_to(2),
                Linear { unit: 3 },
            ),
            (
                Exhausting,
                "Técnica Exaustiva",
                "Tira 4 pontos por nível.",
                -4,
                None,
                Linear { unit: 4 },
            ),
            (
                CrucialConcentration,
                "Concentração Crucial",
                "Tira 2 pontos no primeiro nível e 1 ponto por nível adicional.",
                -2,
                None,
                Escalating { base: 2, increment: 1 },
            ),
            (
                LimitingRequirement,
                "Requisito Limitador",
                "Redução igual ao valor informado.",
                0,
                Some(MagnitudeBounds::new(0, 5)),
                FreeEntry,
            ),
            (
                SideEffect,
                "Efeito Colateral",
                "Redução igual ao valor informado.",
                0,
                Some(MagnitudeBounds::new(0, 8)),
                FreeEntry,
            ),
            (
                DependentTechnique,
                "Técnica Dependente",
                "Redução igual ao valor informado.",
                0,
                Some(MagnitudeBounds::new(0, 3)),
                FreeEntry,
            ),
            (
                LimitedDuration,
                "Duração Limitada",
                "A técnica dura apenas 1 rodada. Tira 2 pontos do custo total.",
                -2,
                None,
                Narrative,
            ),
            (
                SpecificCondition,
                "Condição Específica",
                "Requer uma condição especial para ser usada. Tira 3 pontos do custo total.",
                -3,
                None,
                Narrative,
            ),
            (
                Charge,
                "Carga",
                "Requer um turno para carregar antes de ser usada. Tira 4 pontos do custo total.",
                -4,
                None,
                Narrative,
            ),
        ];

        let entries: BTreeMap<_, _> = rows
            .into_iter()
            .map(|(id, label, description, listed_cost, bounds, pricing)| {
                let definition = ReductionDefinition {
                    id,
                    label: label.to_owned(),
                    description: description.to_owned(),
                    listed_cost,
                    bounds,
                    pricing,
                };
                (id, definition)
            })
            .collect();

        debug_assert!(ReductionId::iter().all(|id| entries.contains_key(&id)));
        Self { entries }
    }
}
