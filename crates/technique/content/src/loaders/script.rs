//! Command script loader.
//!
//! A script is a RON list of builder commands replayed in order:
//!
//! ```text
//! [
//!     SetTier(Some(4)),
//!     SetDamage(Some(SingleTarget(dice: 5))),
//!     AddEffect(id: "ataque-cerco"),
//! ]
//! ```

use std::path::Path;

use technique_core::BuilderCommand;

use crate::loaders::{LoadResult, read_file};

pub struct ScriptLoader;

impl ScriptLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<BuilderCommand>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<BuilderCommand>> {
        ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse command script RON: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use technique_core::{
        Condition, DamageSpec, DeliveryType, EffectId, RangeShape, ReductionId, SpecialEffect, Tier,
    };

    use super::*;

    #[test]
    fn parses_every_command_shape() {
        let commands = ScriptLoader::parse(
            r#"[
                SetTier(Some(4)),
                SetDeliveryType(Some("combate")),
                SetRange(Some("linha")),
                SetDamage(Some(SingleTarget(dice: 5))),
                AddEffect(id: "ataque-cerco"),
                UpdateEffect(id: "adicionar-condicao-caido", magnitude: 1),
                RemoveEffect("ataque-cerco"),
                AddReduction(id: "reduzir-area", magnitude: 2),
                UpdateReduction(id: "tecnica-demorada", magnitude: 1),
                RemoveReduction("reduzir-area"),
                SetDamage(None),
                Reset,
            ]"#,
        )
        .unwrap();

        assert_eq!(commands.len(), 12);
        assert_eq!(commands[0], BuilderCommand::SetTier(Tier::new(4).ok()));
        assert_eq!(commands[1], BuilderCommand::SetDeliveryType(Some(DeliveryType::Combat)));
        assert_eq!(commands[2], BuilderCommand::SetRange(Some(RangeShape::Line)));
        assert_eq!(commands[3], BuilderCommand::SetDamage(Some(DamageSpec::single(5))));
        assert_eq!(
            commands[4],
            BuilderCommand::AddEffect {
                id: SpecialEffect::SiegeAttack.into(),
                magnitude: 1
            }
        );
        assert_eq!(
            commands[5],
            BuilderCommand::UpdateEffect {
                id: EffectId::Condition(Condition::Prone),
                magnitude: 1
            }
        );
        assert_eq!(
            commands[7],
            BuilderCommand::AddReduction {
                id: ReductionId::ReduceArea,
                magnitude: 2
            }
        );
        assert_eq!(commands[11], BuilderCommand::Reset);
    }

    #[test]
    fn rejects_invalid_tier() {
        assert!(ScriptLoader::parse("[SetTier(Some(8))]").is_err());
    }

    #[test]
    fn rejects_unknown_effect() {
        let error = ScriptLoader::parse(r#"[AddEffect(id: "raio-laser")]"#).unwrap_err();
        assert!(error.to_string().contains("raio-laser"));
    }
}
