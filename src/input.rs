//! Field parsing and validation for user-entered values.
//!
//! Create mode fails fast: the first invalid field aborts the whole
//! operation. Update mode is deliberately softer: a blank field keeps the
//! current value and an invalid price/stock token falls back to the current
//! value while the operation continues. [`FieldUpdate`] encodes that policy.

use std::fmt;

/// A single field failing validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// Name was empty after trimming
    EmptyName,
    /// Price did not parse as a number
    InvalidPrice,
    /// Price parsed but was negative
    NegativePrice,
    /// Stock did not parse as an integer
    InvalidStock,
    /// Stock parsed but was negative
    NegativeStock,
    /// Id did not parse as an integer
    InvalidId,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::EmptyName => write!(f, "The name cannot be empty"),
            FieldError::InvalidPrice => write!(f, "The price must be a valid number"),
            FieldError::NegativePrice => write!(f, "The price cannot be negative"),
            FieldError::InvalidStock => write!(f, "The stock must be a valid integer"),
            FieldError::NegativeStock => write!(f, "The stock cannot be negative"),
            FieldError::InvalidId => write!(f, "The id must be an integer"),
        }
    }
}

/// Validates a product name: non-empty after trimming.
pub fn parse_name(input: &str) -> Result<String, FieldError> {
    let name = input.trim();
    if name.is_empty() {
        return Err(FieldError::EmptyName);
    }
    Ok(name.to_string())
}

/// Parses a price: a non-negative real number.
pub fn parse_price(input: &str) -> Result<f64, FieldError> {
    let price: f64 = input
        .trim()
        .parse()
        .map_err(|_| FieldError::InvalidPrice)?;
    if price < 0.0 {
        return Err(FieldError::NegativePrice);
    }
    Ok(price)
}

/// Parses a stock count: a non-negative integer.
pub fn parse_stock(input: &str) -> Result<i64, FieldError> {
    let stock: i64 = input
        .trim()
        .parse()
        .map_err(|_| FieldError::InvalidStock)?;
    if stock < 0 {
        return Err(FieldError::NegativeStock);
    }
    Ok(stock)
}

/// Parses a product id.
pub fn parse_id(input: &str) -> Result<i64, FieldError> {
    input.trim().parse().map_err(|_| FieldError::InvalidId)
}

/// Outcome of one field prompt in update mode.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldUpdate<T> {
    /// Blank input: keep the current value
    Keep,
    /// Valid input: use the new value
    Set(T),
    /// Invalid input: report, then fall back to the current value
    Rejected(FieldError),
}

impl<T> FieldUpdate<T> {
    /// Resolves the update against the current value. `Rejected` resolves to
    /// the current value, same as `Keep` (the operation does not abort).
    pub fn apply(self, current: T) -> T {
        match self {
            FieldUpdate::Keep | FieldUpdate::Rejected(_) => current,
            FieldUpdate::Set(value) => value,
        }
    }

    /// The rejection, if this field's input was invalid.
    pub fn rejection(&self) -> Option<&FieldError> {
        match self {
            FieldUpdate::Rejected(e) => Some(e),
            _ => None,
        }
    }
}

/// Resolves a name prompt in update mode. Names have no invalid form other
/// than blank, and blank means keep, so this never rejects.
pub fn name_update(input: &str) -> FieldUpdate<String> {
    let name = input.trim();
    if name.is_empty() {
        FieldUpdate::Keep
    } else {
        FieldUpdate::Set(name.to_string())
    }
}

/// Resolves a price prompt in update mode.
pub fn price_update(input: &str) -> FieldUpdate<f64> {
    if input.trim().is_empty() {
        return FieldUpdate::Keep;
    }
    match parse_price(input) {
        Ok(price) => FieldUpdate::Set(price),
        Err(e) => FieldUpdate::Rejected(e),
    }
}

/// Resolves a stock prompt in update mode.
pub fn stock_update(input: &str) -> FieldUpdate<i64> {
    if input.trim().is_empty() {
        return FieldUpdate::Keep;
    }
    match parse_stock(input) {
        Ok(stock) => FieldUpdate::Set(stock),
        Err(e) => FieldUpdate::Rejected(e),
    }
}
