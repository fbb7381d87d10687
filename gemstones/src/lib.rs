#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::perf,
    clippy::cargo,
    clippy::alloc_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::std_instead_of_core,
    clippy::get_unwrap,
    clippy::panic_in_result_fn,
    clippy::todo
)]
#![cfg_attr(not(test), warn(clippy::unwrap_used, clippy::expect_used))]
#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

use core::fmt;

mod errors;
mod kind;

pub use errors::GemstoneError;
pub use kind::{Kind, Tier};

#[derive(Clone, Copy, Debug, PartialEq)]
/// A gemstone with a weight in carats, a price in dollars and a transparency between 0 and 1.
///
/// Two gemstones are equal when they are the same [`Kind`] and every field matches.
pub struct Gemstone {
    kind: Kind,
    weight: f64,
    price: f64,
    transparency: f64,
}

macro_rules! kind_constructor {
    ($($name:ident => $kind:ident),* $(,)?) => {
        $(
            #[doc = concat!("Creates a [`Kind::", stringify!($kind), "`] gemstone.")]
            ///
            /// # Errors
            /// See [`Gemstone::new`].
            pub fn $name(weight: f64, price: f64, transparency: f64) -> Result<Self, GemstoneError> {
                Self::new(Kind::$kind, weight, price, transparency)
            }
        )*
    };
}

impl Gemstone {
    /// Creates a gemstone, checking every field.
    ///
    /// # Errors
    /// - If `weight` is not greater than 0, this will return [`GemstoneError::InvalidWeight`].
    /// - If `price` is not greater than 0, this will return [`GemstoneError::InvalidPrice`].
    /// - If `transparency` is outside `0..=1`, this will return
    ///   [`GemstoneError::InvalidTransparency`].
    pub fn new(
        kind: Kind,
        weight: f64,
        price: f64,
        transparency: f64,
    ) -> Result<Self, GemstoneError> {
        Ok(Self {
            kind,
            weight: check_weight(weight)?,
            price: check_price(price)?,
            transparency: check_transparency(transparency)?,
        })
    }

    kind_constructor! {
        diamond => Diamond,
        emerald => Emerald,
        rubin => Rubin,
        agate => Agate,
        opal => Opal,
        lazurite => Lazurite,
    }

    #[must_use]
    #[inline]
    pub const fn kind(&self) -> Kind {
        self.kind
    }

    #[must_use]
    #[inline]
    pub const fn weight(&self) -> f64 {
        self.weight
    }

    #[must_use]
    #[inline]
    pub const fn price(&self) -> f64 {
        self.price
    }

    #[must_use]
    #[inline]
    pub const fn transparency(&self) -> f64 {
        self.transparency
    }

    /// # Errors
    /// If `weight` is not greater than 0, this will return [`GemstoneError::InvalidWeight`] and
    /// leave the gemstone unchanged.
    pub fn set_weight(&mut self, weight: f64) -> Result<(), GemstoneError> {
        self.weight = check_weight(weight)?;
        Ok(())
    }

    /// # Errors
    /// If `price` is not greater than 0, this will return [`GemstoneError::InvalidPrice`] and
    /// leave the gemstone unchanged.
    pub fn set_price(&mut self, price: f64) -> Result<(), GemstoneError> {
        self.price = check_price(price)?;
        Ok(())
    }

    /// # Errors
    /// If `transparency` is outside `0..=1`, this will return
    /// [`GemstoneError::InvalidTransparency`] and leave the gemstone unchanged.
    pub fn set_transparency(&mut self, transparency: f64) -> Result<(), GemstoneError> {
        self.transparency = check_transparency(transparency)?;
        Ok(())
    }
}

// NaN fails every comparison, so it is rejected too.
fn check_weight(weight: f64) -> Result<f64, GemstoneError> {
    if weight > 0.0 {
        Ok(weight)
    } else {
        Err(GemstoneError::InvalidWeight(weight))
    }
}

fn check_price(price: f64) -> Result<f64, GemstoneError> {
    if price > 0.0 {
        Ok(price)
    } else {
        Err(GemstoneError::InvalidPrice(price))
    }
}

fn check_transparency(transparency: f64) -> Result<f64, GemstoneError> {
    if (0.0..=1.0).contains(&transparency) {
        Ok(transparency)
    } else {
        Err(GemstoneError::InvalidTransparency(transparency))
    }
}

impl fmt::Display for Gemstone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} is a {} with weight {:?} carat, price {:?}$ and transparency {:?}.",
            self.kind,
            self.kind.tier(),
            self.weight,
            self.price,
            self.transparency
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validates_fields() {
        assert_eq!(
            Gemstone::agate(0.0, 1.0, 1.0),
            Err(GemstoneError::InvalidWeight(0.0))
        );
        assert_eq!(
            Gemstone::agate(1.0, -2.0, 1.0),
            Err(GemstoneError::InvalidPrice(-2.0))
        );
        assert_eq!(
            Gemstone::agate(1.0, 1.0, 1.5),
            Err(GemstoneError::InvalidTransparency(1.5))
        );
        assert!(Gemstone::agate(f64::NAN, 1.0, 1.0).is_err());
        assert!(Gemstone::agate(1.0, 1.0, 0.0).is_ok());
        assert!(Gemstone::agate(1.0, 1.0, 1.0).is_ok());
    }

    #[test]
    fn setters_keep_old_value_on_error() {
        let mut opal = Gemstone::opal(2.0, 30.0, 0.4).unwrap();
        assert!(opal.set_weight(-1.0).is_err());
        assert!(opal.set_price(0.0).is_err());
        assert!(opal.set_transparency(-0.1).is_err());
        assert_eq!(opal.weight(), 2.0);
        assert_eq!(opal.price(), 30.0);
        assert_eq!(opal.transparency(), 0.4);

        opal.set_weight(2.5).unwrap();
        opal.set_price(35.0).unwrap();
        opal.set_transparency(0.5).unwrap();
        assert_eq!(opal, Gemstone::opal(2.5, 35.0, 0.5).unwrap());
    }

    #[test]
    fn equality_needs_the_same_kind() {
        let agate = Gemstone::agate(1.0, 1.0, 1.0).unwrap();
        let diamond = Gemstone::diamond(1.0, 1.0, 1.0).unwrap();
        assert_ne!(agate, diamond);
        assert_eq!(agate, Gemstone::new(Kind::Agate, 1.0, 1.0, 1.0).unwrap());
        assert_ne!(agate, Gemstone::agate(1.5, 1.0, 1.0).unwrap());
    }

    #[test]
    fn tiers() {
        let precious: Vec<Kind> = Kind::ALL
            .into_iter()
            .filter(|kind| kind.tier() == Tier::Precious)
            .collect();
        assert_eq!(precious, [Kind::Diamond, Kind::Emerald, Kind::Rubin]);
    }

    #[test]
    fn display() {
        let diamond = Gemstone::diamond(1.0, 1.0, 1.0).unwrap();
        assert_eq!(
            diamond.to_string(),
            "Diamond is a PreciousGemstone with weight 1.0 carat, price 1.0$ and transparency 1.0."
        );
        let opal = Gemstone::opal(0.5, 20.0, 0.25).unwrap();
        assert_eq!(
            opal.to_string(),
            "Opal is a SemiPreciousGemstone with weight 0.5 carat, price 20.0$ and transparency 0.25."
        );
    }
}
