//! PyO3 Python module definition.
//!
//! Exposes the models with keyword constructors mirroring their Rust
//! builders, the `arbitrage` evaluation and the numeric primitives.
//! Decimals cross the boundary as `decimal.Decimal`; every
//! [`ArbitrageError`] is raised as `ValueError`.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use rust_decimal::Decimal;

use crate::ArbitrageError;
use crate::math;
use crate::models::{
    ArbitragePayload, ArbitrageResult, OrderInfo, OrderPayload, OrderSide, SymbolInfo,
};

impl From<ArbitrageError> for PyErr {
    fn from(err: ArbitrageError) -> Self {
        PyValueError::new_err(err.to_string())
    }
}

// ---------------------------------------------------------------------------
// Constructors
// ---------------------------------------------------------------------------

#[pymethods]
impl SymbolInfo {
    #[new]
    #[pyo3(signature = (
        quantity_increment,
        *,
        min_quantity = Decimal::ZERO,
        max_quantity = None,
        min_notional = Decimal::ZERO,
        fee_in_base_currency = false,
    ))]
    fn py_new(
        quantity_increment: Decimal,
        min_quantity: Decimal,
        max_quantity: Option<Decimal>,
        min_notional: Decimal,
        fee_in_base_currency: bool,
    ) -> Self {
        Self {
            quantity_increment,
            min_quantity,
            max_quantity,
            min_notional,
            fee_in_base_currency,
        }
    }
}

#[pymethods]
impl OrderInfo {
    #[new]
    fn py_new(price: Decimal, quantity: Decimal) -> Self {
        Self::new(price, quantity)
    }
}

#[pymethods]
impl ArbitragePayload {
    #[new]
    #[pyo3(signature = (symbol, order, *, fee = Decimal::ZERO, balance = None))]
    fn py_new(
        symbol: SymbolInfo,
        order: OrderInfo,
        fee: Decimal,
        balance: Option<Decimal>,
    ) -> Self {
        Self {
            symbol,
            order,
            fee,
            balance,
        }
    }
}

// ---------------------------------------------------------------------------
// Functions
// ---------------------------------------------------------------------------

/// Evaluates buying on `ask` and selling on `bid`.
#[pyfunction]
#[pyo3(signature = (ask, bid, *, make_compatible_quantity_increments = true))]
fn arbitrage(
    ask: ArbitragePayload,
    bid: ArbitragePayload,
    make_compatible_quantity_increments: bool,
) -> PyResult<ArbitrageResult> {
    Ok(crate::evaluate_arbitrage(
        &ask,
        &bid,
        make_compatible_quantity_increments,
    )?)
}

#[pyfunction]
fn spread_percent(ask_value: Decimal, bid_value: Decimal) -> PyResult<Decimal> {
    Ok(math::spread_percent(ask_value, bid_value)?)
}

#[pyfunction]
fn quantity_increments_compatible(a: Decimal, b: Decimal) -> bool {
    math::quantity_increments_compatible(a, b)
}

#[pyfunction]
fn to_increment(n: Decimal, increment: Decimal) -> PyResult<Decimal> {
    Ok(math::to_increment(n, increment)?)
}

#[pyfunction]
fn plus_fee(n: Decimal, fee: Decimal) -> PyResult<Decimal> {
    Ok(math::plus_fee(n, fee)?)
}

#[pyfunction]
fn minus_fee(n: Decimal, fee: Decimal) -> PyResult<Decimal> {
    Ok(math::minus_fee(n, fee)?)
}

// ---------------------------------------------------------------------------
// Module registration
// ---------------------------------------------------------------------------

#[pymodule]
fn arbcalc(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Models
    m.add_class::<OrderSide>()?;
    m.add_class::<SymbolInfo>()?;
    m.add_class::<OrderInfo>()?;
    m.add_class::<ArbitragePayload>()?;
    m.add_class::<OrderPayload>()?;
    m.add_class::<ArbitrageResult>()?;

    // Evaluation
    m.add_function(wrap_pyfunction!(arbitrage, m)?)?;

    // Primitives
    m.add_function(wrap_pyfunction!(spread_percent, m)?)?;
    m.add_function(wrap_pyfunction!(quantity_increments_compatible, m)?)?;
    m.add_function(wrap_pyfunction!(to_increment, m)?)?;
    m.add_function(wrap_pyfunction!(plus_fee, m)?)?;
    m.add_function(wrap_pyfunction!(minus_fee, m)?)?;

    Ok(())
}
