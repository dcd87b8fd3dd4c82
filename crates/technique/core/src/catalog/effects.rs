//! Special effects: identifiers, definitions and the effect catalog.

use std::collections::BTreeMap;
use std::str::FromStr;

use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

use super::MagnitudeBounds;
use super::conditions::Condition;
use crate::error::{CatalogError, ParseIdError};
use crate::pricing::EffectPricing;

/// Prefix shared by every condition-passthrough effect identifier.
pub const CONDITION_EFFECT_PREFIX: &str = "adicionar-condicao-";

/// Catalog effects that can be added to a technique.
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
pub enum SpecialEffect {
    // ========================================================================
    // General & utility
    // ========================================================================
    #[strum(serialize = "adicionar-vantagem")]
    AddAdvantage,
    #[strum(serialize = "tecnica-rapida")]
    QuickTechnique,
    #[strum(serialize = "controle-cirurgico")]
    SurgicalControl,
    #[strum(serialize = "tecnica-dominada")]
    MasteredTechnique,
    #[strum(serialize = "criar-lacaio")]
    CreateMinion,
    #[strum(serialize = "duracao-prolongada")]
    ProlongedDuration,
    #[strum(serialize = "condicao-extra")]
    ExtraCondition,

    // ========================================================================
    // Offense
    // ========================================================================
    #[strum(serialize = "acerto-automatico")]
    AutoHit,
    #[strum(serialize = "ataque-cerco")]
    SiegeAttack,
    #[strum(serialize = "ataques-multiplos")]
    MultiAttack,
    #[strum(serialize = "aumentar-acerto")]
    IncreaseToHit,
    #[strum(serialize = "aumentar-dano")]
    IncreaseDamage,
    #[strum(serialize = "dano-adicional-dado")]
    ExtraDamageDie,
    #[strum(serialize = "criar-arma")]
    CreateWeapon,
    #[strum(serialize = "adicionar-critico-19-20")]
    Critical19,
    #[strum(serialize = "adicionar-critico-18-20")]
    Critical18,
    #[strum(serialize = "dano-continuo")]
    ContinuousDamage,
    #[strum(serialize = "dano-insistente")]
    InsistentDamage,

    // ========================================================================
    // Area & reach
    // ========================================================================
    #[strum(serialize = "condicao-em-area")]
    AreaCondition,
    #[strum(serialize = "aumentar-alcance")]
    IncreaseRange,
    #[strum(serialize = "aumentar-area")]
    IncreaseArea,
    #[strum(serialize = "aumentar-area-largura")]
    IncreaseAreaWidth,
    #[strum(serialize = "aumentar-cd")]
    IncreaseDc,

    // ========================================================================
    // Support & mobility
    // ========================================================================
    #[strum(serialize = "adicionar-cura")]
    AddHealing,
    #[strum(serialize = "adicionar-pv-temporario")]
    AddTemporaryHp,
    #[strum(serialize = "aumentar-cr")]
    IncreaseResistance,
    #[strum(serialize = "adicionar-voo")]
    AddFlight,
    #[strum(serialize = "contencao-dano-coletivo")]
    CollectiveContainment,
    #[strum(serialize = "contencao-dano-individual")]
    IndividualContainment,
    #[strum(serialize = "adicionar-empurrao")]
    AddPush,
    #[strum(serialize = "aumentar-movimento-3m")]
    Movement3m,
    #[strum(serialize = "aumentar-movimento-6m")]
    Movement6m,
    #[strum(serialize = "reducao-movimento-metade")]
    MovementHalved,
    #[strum(serialize = "reducao-movimento-zero")]
    MovementZero,
}

impl SpecialEffect {
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// The mutually exclusive group this effect belongs to, if any.
    pub const fn exclusive_group(self) -> Option<ExclusiveGroup> {
        match self {
            Self::Critical19 | Self::Critical18 => Some(ExclusiveGroup::Critical),
            Self::Movement3m | Self::Movement6m => Some(ExclusiveGroup::MovementIncrease),
            Self::MovementHalved | Self::MovementZero => Some(ExclusiveGroup::MovementReduction),
            _ => None,
        }
    }
}

/// Effects of which at most one member may be selected at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter)]
pub enum ExclusiveGroup {
    /// Expanded critical range (19-20 or 18-20).
    Critical,
    /// Movement increase (+3m or +6m).
    MovementIncrease,
    /// Target movement reduction (halved or zero).
    MovementReduction,
}

impl ExclusiveGroup {
    pub const fn members(self) -> [SpecialEffect; 2] {
        match self {
            Self::Critical => [SpecialEffect::Critical19, SpecialEffect::Critical18],
            Self::MovementIncrease => [SpecialEffect::Movement3m, SpecialEffect::Movement6m],
            Self::MovementReduction => [SpecialEffect::MovementHalved, SpecialEffect::MovementZero],
        }
    }
}

/// Identifier of a selectable effect.
///
/// Catalog effects carry their own pricing model; condition effects are
/// flag-only and price at the condition's fixed cost.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EffectId {
    Special(SpecialEffect),
    Condition(Condition),
}

impl EffectId {
    pub const fn exclusive_group(self) -> Option<ExclusiveGroup> {
        match self {
            Self::Special(effect) => effect.exclusive_group(),
            Self::Condition(_) => None,
        }
    }

    /// Returns true if `other` must be evicted when `self` is selected.
    pub fn conflicts_with(self, other: EffectId) -> bool {
        match (self.exclusive_group(), other.exclusive_group()) {
            (Some(mine), Some(theirs)) => mine == theirs && self != other,
            _ => false,
        }
    }
}

impl From<SpecialEffect> for EffectId {
    fn from(effect: SpecialEffect) -> Self {
        Self::Special(effect)
    }
}

impl From<Condition> for EffectId {
    fn from(condition: Condition) -> Self {
        Self::Condition(condition)
    }
}

impl FromStr for EffectId {
    type Err = ParseIdError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        if let Some(condition) = key.strip_prefix(CONDITION_EFFECT_PREFIX) {
            return Condition::from_str(condition)
                .map(Self::Condition)
                .map_err(|_| ParseIdError::new("effect", key));
        }
        SpecialEffect::from_str(key)
            .map(Self::Special)
            .map_err(|_| ParseIdError::new("effect", key))
    }
}

impl core::fmt::Display for EffectId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Special(effect) => f.write_str(effect.as_str()),
            Self::Condition(condition) => {
                write!(f, "{CONDITION_EFFECT_PREFIX}{}", condition.as_str())
            }
        }
    }
}

/// Descriptive and pricing metadata for one catalog effect.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EffectDefinition {
    pub id: SpecialEffect,
    pub label: String,
    pub description: String,
    /// Base cost as listed to the user. Informational; pricing uses `pricing`.
    pub listed_cost: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub bounds: Option<MagnitudeBounds>,
    pub pricing: EffectPricing,
}

/// Lookup of effect definitions by identifier.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EffectCatalog {
    entries: BTreeMap<SpecialEffect, EffectDefinition>,
}

impl EffectCatalog {
    pub fn from_definitions(
        definitions: impl IntoIterator<Item = EffectDefinition>,
    ) -> Result<Self, CatalogError> {
        let mut entries = BTreeMap::new();
        for definition in definitions {
            let id = definition.id;
            if entries.insert(id, definition).is_some() {
                return Err(CatalogError::DuplicateEntry {
                    kind: "effect",
                    key: id.as_str(),
                });
            }
        }
        Ok(Self { entries })
    }

    pub fn get(&self, id: SpecialEffect) -> Option<&EffectDefinition> {
        self.entries.get(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &EffectDefinition> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn builtin() -> Self {
        use EffectPricing::*;
        use SpecialEffect::*;

        let up_to = |max: i32| Some(MagnitudeBounds::up_to(max));
        let half_tier =
            "Custo Adicional: Valor de PP igual à metade do grau da técnica, arredondado para cima.";

        let rows = [
            (
                AddPush,
                "Adicionar Empurrão",
                "Custo Adicional: 1 PP por seleção (3m).",
                1,
                None,
                Linear { unit: 1 },
            ),
            (
                AddAdvantage,
                "Adicionar Vantagem/Desvantagem",
                "Custo Adicional: 1 PP.",
                0,
                None,
                Flat { cost: 1 },
            ),
            (
                IncreaseRange,
                "Aumentar Alcance",
                "Custo Adicional: 1 PP para cada 6 metros adicionais.",
                1,
                None,
                Linear { unit: 1 },
            ),
            (
                IncreaseArea,
                "Aumentar Área",
                "Custo Adicional: 1 PP para cada 3m adicionais.",
                1,
                None,
                Linear { unit: 1 },
            ),
            (
                IncreaseAreaWidth,
                "Aumentar Área (Largura da Linha)",
                "Custo Adicional: 2 PP para cada 1,5m de largura.",
                2,
                None,
                Linear { unit: 2 },
            ),
            (
                IncreaseDc,
                "Aumentar Classe de Dificuldade",
                "Custo Adicional: 1 PP para cada +1 na CD da técnica (máx. +2).",
                1,
                up_to(2),
                Linear { unit: 1 },
            ),
            (AreaCondition, "Condição/Efeito em Área", half_tier, 0, None, HalfTier),
            (
                ExtraCondition,
                "Condição/Efeito Extra",
                "Custo Adicional: o mesmo valor de PP pertencente a cada condição ou efeito adicionado.",
                0,
                None,
                FreeEntry,
            ),
            (
                SurgicalControl,
                "Controle Cirúrgico",
                "Custo Adicional: 1 PP.",
                1,
                None,
                Flat { cost: 1 },
            ),
            (
                MasteredTechnique,
                "Técnica Dominada",
                "Custo Adicional: 1 PP.",
                1,
                None,
                Flat { cost: 1 },
            ),
            (CreateMinion, "Criar Lacaio", "Custo Adicional: 8 PP.", 8, None, Flat { cost: 8 }),
            (
                ProlongedDuration,
                "Duração Prolongada",
                "Custo Adicional: 4 PP para o 1º minuto e 2 PP para cada minuto posterior.",
                4,
                None,
                Escalating { base: 4, increment: 2 },
            ),
            (QuickTechnique, "Técnica Rápida", "Custo Adicional: 4 PP.", 4, None, Flat { cost: 4 }),
            (AutoHit, "Acerto Automático", "Custo Adicional: 4 PP.", 4, None, Flat { cost: 4 }),
            (
                Critical19,
                "Crítico 19-20",
                "Custo Adicional: 1 PP para crítico em 19-20.",
                1,
                None,
                Mapped { cost: 1 },
            ),
            (
                Critical18,
                "Crítico 18-20",
                "Custo Adicional: 3 PP para crítico em 18-20.",
                3,
                None,
                Mapped { cost: 3 },
            ),
            (SiegeAttack, "Ataque de Cerco", "Custo Adicional: 2 PP.", 2, None, Flat { cost: 2 }),
            (MultiAttack, "Ataques Múltiplos", "Custo Adicional: 6 PP.", 6, None, Flat { cost: 6 }),
            (
                IncreaseToHit,
                "Aumentar Acerto",
                "Custo Adicional: 1 PP por +1 (máx. +3).",
                1,
                up_to(3),
                Linear { unit: 1 },
            ),
            (
                IncreaseDamage,
                "Aumentar Dano",
                "Custo Adicional: 3 PP para +1 de dano, +2 PP por cada +1 extra (máx. +3).",
                3,
                up_to(3),
                Escalating { base: 3, increment: 2 },
            ),
            (
                CreateWeapon,
                "Criar Arma",
                "Custo Adicional: 6 PP para a arma inicial, +2 PP por d8 adicional (máx. 4d8).",
                6,
                up_to(4),
                Escalating { base: 6, increment: 2 },
            ),
            (
                ExtraDamageDie,
                "Dano Adicional",
                "Custo Adicional: 1 PP por dado de dano adicional (máx. 5).",
                1,
                up_to(5),
                Linear { unit: 1 },
            ),
            (ContinuousDamage, "Dano Contínuo", half_tier, 0, None, HalfTier),
            (InsistentDamage, "Dano Insistente", half_tier, 0, None, HalfTier),
            (
                AddHealing,
                "Adicionar Cura",
                "Custo Adicional: 1 PP para cada 1d10 ou 1d6.",
                1,
                None,
                Linear { unit: 1 },
            ),
            (
                AddTemporaryHp,
                "Adicionar Pontos de Vida Temporários",
                "Custo Adicional: 1 PP para cada 1d10 ou 1d4.",
                1,
                None,
                Linear { unit: 1 },
            ),
            (
                AddFlight,
                "Adicionar Voo",
                "Custo Adicional: 2 PP para 9m e +1 PP para cada 3m adicionais (máx. 15m).",
                2,
                up_to(3),
                Escalating { base: 2, increment: 1 },
            ),
            (
                IncreaseResistance,
                "Aumentar Classe de Resistência",
                "Custo Adicional: 2 PP para cada +1 na CR (máx. +3).",
                2,
                up_to(3),
                Linear { unit: 2 },
            ),
            (
                Movement3m,
                "Aumentar Movimento (+3m)",
                "Custo Adicional: 1 PP.",
                1,
                None,
                Mapped { cost: 1 },
            ),
            (
                Movement6m,
                "Aumentar Movimento (+6m)",
                "Custo Adicional: 2 PP.",
                2,
                None,
                Mapped { cost: 2 },
            ),
            (
                CollectiveContainment,
                "Contenção de Dano (Coletivo)",
                "Custo Adicional: 1 PP para cada 1d8 de proteção (máx. 15 dados).",
                1,
                up_to(15),
                Linear { unit: 1 },
            ),
            (
                IndividualContainment,
                "Contenção de Dano (Individual)",
                "Custo Adicional: 1 PP para cada 2d8 de proteção (máx. 30 dados).",
                1,
                up_to(30),
                Linear { unit: 1 },
            ),
            (
                MovementHalved,
                "Redução de Movimento (Metade)",
                "Custo Adicional: 1 PP.",
                1,
                None,
                Mapped { cost: 1 },
            ),
            (
                MovementZero,
                "Redução de Movimento (Zero)",
                "Custo Adicional: 2 PP.",
                2,
                None,
                Mapped { cost: 2 },
            ),
        ];

        let entries: BTreeMap<_, _> = rows
            .into_iter()
            .map(|(id, label, description, listed_cost, bounds, pricing)| {
                let definition = EffectDefinition {
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

        debug_assert!(SpecialEffect::iter().all(|id| entries.contains_key(&id)));
        Self { entries }
    }
}
