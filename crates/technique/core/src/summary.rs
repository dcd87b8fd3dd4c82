//! Read-only technique sheet assembled from the builder state.

use core::fmt;

use crate::catalog::Catalog;
use crate::store::BuilderState;

/// One effect or reduction row.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SummaryLine {
    pub label: String,
    pub magnitude: i32,
    pub cost: i32,
}

impl fmt::Display for SummaryLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)?;
        if self.magnitude > 1 {
            write!(f, " (x{})", self.magnitude)?;
        }
        write!(f, ": {:+} pts", self.cost)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TechniqueSummary {
    pub name: String,
    pub tier: Option<u8>,
    pub delivery: Option<String>,
    pub range: Option<String>,
    pub range_detail: Option<String>,
    pub damage: String,
    pub effects: Vec<SummaryLine>,
    pub reductions: Vec<SummaryLine>,
    pub points_spent: i32,
    pub max_points: i32,
    pub points_available: i32,
}

impl TechniqueSummary {
    pub fn new(name: impl Into<String>, state: &BuilderState, catalog: &Catalog) -> Self {
        let tier = state.tier();

        let delivery = state.delivery_type().map(|delivery| {
            catalog
                .delivery(delivery)
                .map_or_else(|| delivery.as_str().to_owned(), |def| def.label.clone())
        });

        let range = state.range().map(|shape| shape.label().to_owned());
        let range_detail = state.range().zip(tier).map(|(shape, tier)| shape.detail(tier));

        let damage = state
            .damage()
            .map_or_else(|| "Nenhum".to_owned(), |damage| damage.notation(tier));

        let effects = state
            .effects()
            .iter()
            .map(|effect| SummaryLine {
                label: catalog.effect_label(effect.id),
                magnitude: effect.magnitude,
                cost: effect.cost(),
            })
            .collect();

        let reductions = state
            .reductions()
            .iter()
            .map(|reduction| SummaryLine {
                label: catalog.reduction_label(reduction.id),
                magnitude: reduction.magnitude,
                cost: reduction.cost(),
            })
            .collect();

        Self {
            name: name.into(),
            tier: tier.map(u8::from),
            delivery,
            range,
            range_detail,
            damage,
            effects,
            reductions,
            points_spent: state.points_spent(),
            max_points: state.max_points(),
            points_available: state.points_available(),
        }
    }
}

impl fmt::Display for TechniqueSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dash = || "—".to_owned();

        writeln!(f, "{}", self.name)?;
        writeln!(f, "Grau: {}", self.tier.map_or_else(dash, |tier| tier.to_string()))?;
        writeln!(f, "Tipo: {}", self.delivery.clone().unwrap_or_else(dash))?;
        writeln!(f, "Dano: {}", self.damage)?;
        match (&self.range, &self.range_detail) {
            (Some(range), Some(detail)) => writeln!(f, "Alcance: {range} ({detail})")?,
            (Some(range), None) => writeln!(f, "Alcance: {range}")?,
            _ => writeln!(f, "Alcance: —")?,
        }

        writeln!(f, "Efeitos:")?;
        if self.effects.is_empty() {
            writeln!(f, "  Nenhum efeito adicionado.")?;
        }
        for line in &self.effects {
            writeln!(f, "  {line}")?;
        }

        writeln!(f, "Reduções:")?;
        if self.reductions.is_empty() {
            writeln!(f, "  Nenhuma redução aplicada.")?;
        }
        for line in &self.reductions {
            writeln!(f, "  {line}")?;
        }

        write!(
            f,
            "Máximo: {} | Custo Final: {} | Restantes: {}",
            self.max_points, self.points_spent, self.points_available
        )
    }
}
