//! Seed and CM parameters of BW6-761.

/// The curve seed `x₀`.
pub const SEED: u64 = 0x8508c00000000001;
/// CM parameter `ht`.
pub const HT: u64 = 13;
/// CM parameter `hy`.
pub const HY: u64 = 9;
/// Exponent of [`Ext6Chip::expc1`](crate::Ext6Chip::expc1): `ht^2 + 3hy^2`.
pub const EXPC1: u64 = HT * HT + 3 * HY * HY;
/// Exponent of [`Ext6Chip::expc2`](crate::Ext6Chip::expc2): `ht + hy`.
pub const EXPC2: u64 = HT + HY;
