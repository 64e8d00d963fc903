use core::cell::Cell;
use std::rc::Rc;

use ark_bw6_761::Fq;
use strum::{EnumCount, EnumIter, IntoEnumIterator, IntoStaticStr};

use crate::{ChipError, CircuitApi, Elem, Ext6Chip, FieldChip, E6};

/// Operations whose cost dominates a pairing circuit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumCount, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum Op {
    FpAdd,
    FpSub,
    FpNeg,
    FpMul,
    FpMulConst,
    FpDiv,
    FpInverse,
    Ext6Mul,
    Ext6Square,
    Ext6CyclotomicSquare,
    Ext6Conjugate,
    Ext6Inverse,
    Ext6Frobenius,
    Ext6MulBy014,
    Ext6Expt,
    Ext6Expc1,
    Ext6Expc2,
}

#[derive(Debug)]
pub struct OpCounts {
    counts: [Cell<usize>; Op::COUNT],
}

impl Default for OpCounts {
    fn default() -> Self {
        Self {
            counts: core::array::from_fn(|_| Cell::new(0)),
        }
    }
}

impl OpCounts {
    pub fn record(&self, op: Op) {
        let cell = &self.counts[op as usize];
        cell.set(cell.get() + 1);
    }

    pub fn get(&self, op: Op) -> usize {
        self.counts[op as usize].get()
    }

    pub fn reset(&self) {
        self.counts.iter().for_each(|c| c.set(0));
    }

    pub fn log(&self) {
        for op in Op::iter().filter(|op| self.get(*op) > 0) {
            let name: &'static str = op.into();
            tracing::debug!(op = name, count = self.get(op));
        }
    }
}

/// Wraps a [`CircuitApi`] so every chip it builds records its operations in a
/// shared [`OpCounts`].
#[derive(Clone, Debug)]
pub struct CountingApi<A> {
    inner: A,
    counts: Rc<OpCounts>,
}

impl<A> CountingApi<A> {
    pub fn new(inner: A) -> Self {
        Self {
            inner,
            counts: Rc::default(),
        }
    }

    pub fn counts(&self) -> Rc<OpCounts> {
        self.counts.clone()
    }
}

#[derive(Clone, Debug)]
pub struct CountingFp<F> {
    inner: F,
    counts: Rc<OpCounts>,
}

pub struct CountingExt6<E: Ext6Chip> {
    inner: E,
    fp: CountingFp<E::Fp>,
}

impl<A> CircuitApi for CountingApi<A>
where
    A: CircuitApi,
    A::Fp: Clone,
{
    type Fp = CountingFp<A::Fp>;
    type Ext6 = CountingExt6<A::Ext6>;

    fn new_base_field(&self) -> Result<Self::Fp, ChipError> {
        Ok(CountingFp {
            inner: self.inner.new_base_field()?,
            counts: self.counts.clone(),
        })
    }

    fn new_ext6(&self, fp: Self::Fp) -> Self::Ext6 {
        CountingExt6 {
            inner: self.inner.new_ext6(fp.inner.clone()),
            fp,
        }
    }
}

impl<F: FieldChip> CountingFp<F> {
    fn count(&self, op: Op) -> &F {
        self.counts.record(op);
        &self.inner
    }
}

impl<F: FieldChip> FieldChip for CountingFp<F> {
    type Element = F::Element;

    fn zero(&self) -> F::Element {
        self.inner.zero()
    }

    fn one(&self) -> F::Element {
        self.inner.one()
    }

    fn value_of(&self, value: &Fq) -> F::Element {
        self.inner.value_of(value)
    }

    fn add(&self, a: &F::Element, b: &F::Element) -> F::Element {
        self.count(Op::FpAdd).add(a, b)
    }

    fn sub(&self, a: &F::Element, b: &F::Element) -> F::Element {
        self.count(Op::FpSub).sub(a, b)
    }

    fn neg(&self, a: &F::Element) -> F::Element {
        self.count(Op::FpNeg).neg(a)
    }

    fn mul(&self, a: &F::Element, b: &F::Element) -> F::Element {
        self.count(Op::FpMul).mul(a, b)
    }

    fn mul_const(&self, a: &F::Element, k: u64) -> F::Element {
        self.count(Op::FpMulConst).mul_const(a, k)
    }

    fn div(&self, a: &F::Element, b: &F::Element) -> F::Element {
        self.count(Op::FpDiv).div(a, b)
    }

    fn inverse(&self, a: &F::Element) -> F::Element {
        self.count(Op::FpInverse).inverse(a)
    }
}

impl<E: Ext6Chip> CountingExt6<E> {
    fn count(&self, op: Op) -> &E {
        self.fp.counts.record(op);
        &self.inner
    }
}

impl<E: Ext6Chip> Ext6Chip for CountingExt6<E> {
    type Fp = CountingFp<E::Fp>;

    fn fp(&self) -> &Self::Fp {
        &self.fp
    }

    fn one(&self) -> E6<Elem<E::Fp>> {
        self.inner.one()
    }

    fn set(&self, a: &E6<Elem<E::Fp>>) -> E6<Elem<E::Fp>> {
        self.inner.set(a)
    }

    fn mul(&self, a: &E6<Elem<E::Fp>>, b: &E6<Elem<E::Fp>>) -> E6<Elem<E::Fp>> {
        self.count(Op::Ext6Mul).mul(a, b)
    }

    fn square(&self, a: &E6<Elem<E::Fp>>) -> E6<Elem<E::Fp>> {
        self.count(Op::Ext6Square).square(a)
    }

    fn cyclotomic_square(&self, a: &E6<Elem<E::Fp>>) -> E6<Elem<E::Fp>> {
        self.count(Op::Ext6CyclotomicSquare).cyclotomic_square(a)
    }

    fn conjugate(&self, a: &E6<Elem<E::Fp>>) -> E6<Elem<E::Fp>> {
        self.count(Op::Ext6Conjugate).conjugate(a)
    }

    fn inverse(&self, a: &E6<Elem<E::Fp>>) -> E6<Elem<E::Fp>> {
        self.count(Op::Ext6Inverse).inverse(a)
    }

    fn frobenius(&self, a: &E6<Elem<E::Fp>>) -> E6<Elem<E::Fp>> {
        self.count(Op::Ext6Frobenius).frobenius(a)
    }

    fn mul_by_014(
        &self,
        z: &E6<Elem<E::Fp>>,
        c0: &Elem<E::Fp>,
        c1: &Elem<E::Fp>,
    ) -> E6<Elem<E::Fp>> {
        self.count(Op::Ext6MulBy014).mul_by_014(z, c0, c1)
    }

    fn expt(&self, a: &E6<Elem<E::Fp>>) -> E6<Elem<E::Fp>> {
        self.count(Op::Ext6Expt).expt(a)
    }

    fn expc1(&self, a: &E6<Elem<E::Fp>>) -> E6<Elem<E::Fp>> {
        self.count(Op::Ext6Expc1).expc1(a)
    }

    fn expc2(&self, a: &E6<Elem<E::Fp>>) -> E6<Elem<E::Fp>> {
        self.count(Op::Ext6Expc2).expc2(a)
    }

    fn assert_is_equal(
        &self,
        a: &E6<Elem<E::Fp>>,
        b: &E6<Elem<E::Fp>>,
    ) -> Result<(), ChipError> {
        self.inner.assert_is_equal(a, b)
    }
}
