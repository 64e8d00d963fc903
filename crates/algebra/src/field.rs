use core::fmt::Debug;

use ark_bw6_761::Fq;

use crate::{ChipError, Ext6Chip};

/// Element type of a base-field chip.
pub type Elem<F> = <F as FieldChip>::Element;

/// Modular arithmetic over the BW6-761 base field `Fp`.
///
/// Every operation returns a fresh element and leaves its inputs untouched.
/// `div` and `inverse` are only defined for a nonzero divisor; what happens on
/// zero is up to the implementation (an unsatisfiable constraint in a circuit,
/// a panic natively).
pub trait FieldChip {
    type Element: Clone + Debug;

    fn zero(&self) -> Self::Element;
    fn one(&self) -> Self::Element;
    /// Binds a concrete base-field value.
    fn value_of(&self, value: &Fq) -> Self::Element;

    fn add(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;
    fn sub(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;
    fn neg(&self, a: &Self::Element) -> Self::Element;
    fn mul(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;
    fn mul_const(&self, a: &Self::Element, k: u64) -> Self::Element;
    /// `a * b^-1`
    fn div(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;
    fn inverse(&self, a: &Self::Element) -> Self::Element;
}

/// Handle to the surrounding circuit builder, able to instantiate the base
/// field emulation and the extension tower on top of it.
pub trait CircuitApi {
    type Fp: FieldChip;
    type Ext6: Ext6Chip<Fp = Self::Fp>;

    fn new_base_field(&self) -> Result<Self::Fp, ChipError>;
    fn new_ext6(&self, fp: Self::Fp) -> Self::Ext6;
}
