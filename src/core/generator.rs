//! Random order generation

use crate::core::order::{
    MAX_PRICE_CENTS, MIN_PRICE_CENTS, ORDER_ID_RANGE, OrderRecord, PRICE_SCALE, Product,
    QUANTITY_RANGE,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;

/// Anything the stream can pull its next order from
pub trait OrderSource: Send {
    fn next_order(&mut self) -> OrderRecord;
}

/// Draw one random order from `rng`
///
/// Every field is bounded by the distribution it is drawn from, so the
/// result needs no validation.
pub fn generate_order<R: Rng + ?Sized>(rng: &mut R) -> OrderRecord {
    let order_id = rng.gen_range(ORDER_ID_RANGE).to_string();
    let product_name = Product::ALL[rng.gen_range(0..Product::ALL.len())];
    let quantity = rng.gen_range(QUANTITY_RANGE);

    let min = MIN_PRICE_CENTS as f64 / 100.0;
    let max = MAX_PRICE_CENTS as f64 / 100.0;
    let raw: f64 = rng.gen_range(min..=max);
    let cents = ((raw * 100.0).round() as i64).clamp(MIN_PRICE_CENTS, MAX_PRICE_CENTS);
    let price = Decimal::new(cents, PRICE_SCALE).normalize();

    OrderRecord {
        order_id,
        product_name,
        quantity,
        price,
    }
}

/// Order generator owning its own pseudo-random source
#[derive(Debug, Clone)]
pub struct OrderGenerator<R = StdRng> {
    rng: R,
}

impl OrderGenerator<StdRng> {
    /// Generator seeded from the operating system
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Deterministic generator, the same seed replays the same orders
    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> OrderGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn generate(&mut self) -> OrderRecord {
        generate_order(&mut self.rng)
    }
}

impl<R: Rng + Send> OrderSource for OrderGenerator<R> {
    fn next_order(&mut self) -> OrderRecord {
        self.generate()
    }
}
