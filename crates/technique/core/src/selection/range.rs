use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::tier::Tier;

/// Shape of the technique's area. Descriptive only; costs nothing.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, EnumString, IntoStaticStr, Display,
)]
pub enum RangeShape {
    #[strum(serialize = "esfera")]
    Sphere,
    #[strum(serialize = "cone")]
    Cone,
    #[strum(serialize = "linha")]
    Line,
}

/// Distance a shape reaches at a given tier.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Reach {
    pub meters: f32,
    /// Whether the shape may also be delivered by touch.
    pub touch: bool,
}

impl RangeShape {
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Sphere => "Esfera/Cilindro/Emanação",
            Self::Cone => "Cone",
            Self::Line => "Linha",
        }
    }

    pub fn reach(self, tier: Tier) -> Reach {
        let t = f32::from(tier.get());
        match self {
            Self::Sphere => Reach {
                meters: 1.5 + (t - 1.0) * 1.5,
                touch: false,
            },
            Self::Cone => Reach {
                meters: 12.0 + (t - 1.0) * 3.0,
                touch: false,
            },
            Self::Line => Reach {
                meters: t * 6.0 + 3.0,
                touch: true,
            },
        }
    }

    /// Human-readable reach, e.g. `Até 7.5m de raio`.
    pub fn detail(self, tier: Tier) -> String {
        let Reach { meters, touch } = self.reach(tier);
        match self {
            Self::Sphere => format!("Até {meters}m de raio"),
            _ if touch => format!("Toque ou até {meters}m"),
            _ => format!("Até {meters}m"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reach_scales_with_tier() {
        let t1 = Tier::new(1).unwrap();
        let t5 = Tier::new(5).unwrap();
        assert_eq!(RangeShape::Sphere.reach(t1).meters, 1.5);
        assert_eq!(RangeShape::Sphere.reach(t5).meters, 7.5);
        assert_eq!(RangeShape::Cone.reach(t5).meters, 24.0);
        assert_eq!(RangeShape::Line.reach(t5), Reach { meters: 33.0, touch: true });
    }

    #[test]
    fn detail_text() {
        let t5 = Tier::new(5).unwrap();
        assert_eq!(RangeShape::Sphere.detail(t5), "Até 7.5m de raio");
        assert_eq!(RangeShape::Cone.detail(t5), "Até 24m");
        assert_eq!(RangeShape::Line.detail(t5), "Toque ou até 33m");
    }
}
