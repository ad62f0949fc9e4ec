//! GF(256) arithmetic through exponent/integer lookup tables.
//!
//! Field elements have two representations here. [`Element`] is the integer value, where
//! addition is XOR. [`Exponent`] is the power of the generator α = 2, where multiplication is
//! addition modulo 255. Converting between them always goes through [`GaloisField`].

use once_cell::sync::Lazy;

use crate::error::EncodeError;

/// x^8 + x^4 + x^3 + x^2 + 1
const PRIMITIVE_POLY: u16 = 0x11d;

/// Order of the multiplicative group.
const ORDER: usize = 255;

/// Integer representation of a field element.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct Element(u8);

impl Element {
    pub const ZERO: Element = Element(0);
    pub const ONE: Element = Element(1);

    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl core::ops::BitXor for Element {
    type Output = Element;

    fn bitxor(self, rhs: Element) -> Element {
        Element(self.0 ^ rhs.0)
    }
}

impl core::ops::BitXorAssign for Element {
    fn bitxor_assign(&mut self, rhs: Element) {
        self.0 ^= rhs.0;
    }
}

/// Exponent representation of a nonzero field element, α^n.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Exponent(u8);

impl Exponent {
    /// α^0 = 1
    pub const ZERO: Exponent = Exponent(0);

    /// Wraps an exponent in the table range 0..=255.
    pub fn new(power: usize) -> Result<Self, EncodeError> {
        u8::try_from(power)
            .map(Exponent)
            .map_err(|_| EncodeError::FieldLookup {
                repr: "exponent",
                value: power,
            })
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    /// Product of the two elements, as a sum of exponents.
    pub fn mul(self, rhs: Exponent) -> Exponent {
        Exponent(((usize::from(self.0) + usize::from(rhs.0)) % ORDER) as u8)
    }
}

/// The 256-entry table pairing each exponent with its integer value.
pub struct GaloisField {
    exp_to_int: [u8; 256],
    int_to_exp: [Option<u8>; 256],
}

static FIELD: Lazy<GaloisField> = Lazy::new(GaloisField::build);

/// The process-wide field table, built on first use.
pub fn field() -> &'static GaloisField {
    &FIELD
}

impl GaloisField {
    fn build() -> Self {
        let mut exp_to_int = [0u8; 256];
        let mut int_to_exp = [None; 256];
        let mut x: u16 = 1;
        for (power, slot) in exp_to_int.iter_mut().enumerate() {
            *slot = x as u8;
            // α^255 wraps back to 1, which keeps exponent 0
            if int_to_exp[usize::from(x)].is_none() {
                int_to_exp[usize::from(x)] = Some(power as u8);
            }
            x <<= 1;
            if x & 0x100 != 0 {
                x ^= PRIMITIVE_POLY;
            }
        }
        Self {
            exp_to_int,
            int_to_exp,
        }
    }

    /// α^e as an integer.
    pub fn to_element(&self, e: Exponent) -> Element {
        Element(self.exp_to_int[usize::from(e.0)])
    }

    /// The exponent of a nonzero integer.
    ///
    /// # Errors
    ///
    /// Zero has no exponent and fails with [`EncodeError::FieldLookup`].
    pub fn to_exponent(&self, v: Element) -> Result<Exponent, EncodeError> {
        self.int_to_exp[usize::from(v.0)]
            .map(Exponent)
            .ok_or(EncodeError::FieldLookup {
                repr: "integer value",
                value: v.0.into(),
            })
    }

    /// Multiplies two integers by adding their exponents.
    pub fn mul(&self, a: Element, b: Element) -> Result<Element, EncodeError> {
        if a.is_zero() || b.is_zero() {
            return Ok(Element::ZERO);
        }
        let product = self.to_exponent(a)?.mul(self.to_exponent(b)?);
        Ok(self.to_element(product))
    }
}
