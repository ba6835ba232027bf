//! The fixed cylinder catalog.
//!
//! Three canonical cylinder variants exist; weight and price are fixed per
//! variant and never change after a booking captures them.

use crate::domain::foundation::Money;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A refill cylinder variant with its fixed price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cylinder {
    /// Standard 14.2 kg domestic cylinder.
    Domestic14Kg,

    /// Small 5 kg domestic cylinder.
    Domestic5Kg,

    /// 19 kg commercial cylinder.
    Commercial19Kg,
}

impl Cylinder {
    /// The full catalog, in menu order.
    pub const CATALOG: [Cylinder; 3] = [
        Cylinder::Domestic14Kg,
        Cylinder::Domestic5Kg,
        Cylinder::Commercial19Kg,
    ];

    /// Display label for the variant.
    pub fn label(&self) -> &'static str {
        match self {
            Cylinder::Domestic14Kg => "14.2 KG Domestic",
            Cylinder::Domestic5Kg => "5 KG Domestic",
            Cylinder::Commercial19Kg => "19 KG Commercial",
        }
    }

    /// Net weight in kilograms.
    pub fn weight_kg(&self) -> f64 {
        match self {
            Cylinder::Domestic14Kg => 14.2,
            Cylinder::Domestic5Kg => 5.0,
            Cylinder::Commercial19Kg => 19.0,
        }
    }

    /// Fixed refill price.
    pub fn price(&self) -> Money {
        match self {
            Cylinder::Domestic14Kg => Money::from_paise(90_300),
            Cylinder::Domestic5Kg => Money::from_paise(34_900),
            Cylinder::Commercial19Kg => Money::from_paise(185_000),
        }
    }
}

impl fmt::Display for Cylinder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} — {}", self.label(), self.price())
    }
}
