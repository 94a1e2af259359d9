use non_empty_string::NonEmptyString;

/// A single pantry record: an item name, the quantity on hand, and the cost
/// per unit.
///
/// The name acts as the lookup key for the catalog. It is validated on
/// construction so that every provision can survive a round trip through the
/// delimited store format.
#[derive(Debug, Clone, PartialEq)]
pub struct Provision {
    name: NonEmptyString,
    quantity: i64,
    unit_cost: f64,
}

impl Provision {
    /// Creates a new provision.
    ///
    /// The quantity and unit cost are stored as given. A negative quantity or
    /// cost is unusual but not rejected.
    ///
    /// # Errors
    ///
    /// Returns a [`NameError`] if the name is empty, or if it contains a
    /// comma or newline (the store's delimiter characters).
    pub fn new(
        name: impl Into<String>,
        quantity: i64,
        unit_cost: f64,
    ) -> Result<Self, NameError> {
        let name = validate_name(name.into())?;
        Ok(Self {
            name,
            quantity,
            unit_cost,
        })
    }

    /// The item name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Units currently on hand.
    #[must_use]
    pub const fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Cost per unit.
    #[must_use]
    pub const fn unit_cost(&self) -> f64 {
        self.unit_cost
    }

    /// The total cost of the units on hand.
    ///
    /// Derived on demand, never stored.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn total_cost(&self) -> f64 {
        self.quantity as f64 * self.unit_cost
    }

    pub(crate) const fn set_quantity(&mut self, quantity: i64) {
        self.quantity = quantity;
    }

    pub(crate) const fn set_unit_cost(&mut self, unit_cost: f64) {
        self.unit_cost = unit_cost;
    }
}

fn validate_name(name: String) -> Result<NonEmptyString, NameError> {
    if name.contains(',') || name.contains('\n') {
        return Err(NameError::Delimiter(name));
    }
    NonEmptyString::new(name).map_err(|_| NameError::Empty)
}

/// Error returned when a provision name cannot be used.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum NameError {
    /// The name was empty.
    #[error("provision name must not be empty")]
    Empty,
    /// The name contained a comma or newline, which the store format cannot
    /// represent.
    #[error("provision name '{0}' contains a delimiter character")]
    Delimiter(String),
}
