use crate::domain::Provision;

/// An ordered, in-memory collection of provisions.
///
/// The catalog preserves the order in which records were added (which is the
/// order they appear in the backing store). Names are treated as unique keys
/// on lookup, but uniqueness is not enforced on insert; where duplicates
/// exist, the first match wins, mirroring the store's read semantics.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    provisions: Vec<Provision>,
}

impl Catalog {
    /// Creates an empty catalog.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            provisions: Vec::new(),
        }
    }

    /// Creates a catalog from an ordered sequence of provisions.
    #[must_use]
    pub fn from_provisions(provisions: Vec<Provision>) -> Self {
        Self { provisions }
    }

    /// Appends a provision to the end of the catalog.
    pub fn push(&mut self, provision: Provision) {
        self.provisions.push(provision);
    }

    /// The number of provisions in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.provisions.len()
    }

    /// Whether the catalog holds no provisions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.provisions.is_empty()
    }

    /// The provisions, in catalog order.
    #[must_use]
    pub fn provisions(&self) -> &[Provision] {
        &self.provisions
    }

    /// Looks up a provision by exact, case-sensitive name.
    ///
    /// Unlike [`in_stock`](Self::in_stock), this finds the record regardless
    /// of its quantity.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Provision> {
        self.provisions.iter().find(|p| p.name() == name)
    }

    /// Reports whether an item is in stock.
    ///
    /// True iff a provision with an exact, case-sensitive name match exists
    /// *and* its quantity is greater than zero. A record that exists with a
    /// quantity of zero is reported as not in stock; callers that need to
    /// distinguish "absent" from "run out" should use [`get`](Self::get).
    #[must_use]
    pub fn in_stock(&self, name: &str) -> bool {
        self.get(name).is_some_and(|p| p.quantity() > 0)
    }

    /// Sets the quantity on hand for the first provision matching `name`.
    ///
    /// Returns [`UpdateOutcome::Unchanged`] without mutating when the new
    /// value equals the current one. The caller is responsible for persisting
    /// the catalog afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`RecordNotFound`] if no provision matches; the catalog is
    /// left untouched.
    pub fn set_quantity(
        &mut self,
        name: &str,
        quantity: i64,
    ) -> Result<UpdateOutcome, RecordNotFound> {
        let provision = self.get_mut(name)?;
        if provision.quantity() == quantity {
            return Ok(UpdateOutcome::Unchanged);
        }
        provision.set_quantity(quantity);
        Ok(UpdateOutcome::Updated)
    }

    /// Sets the unit cost for the first provision matching `name`.
    ///
    /// Same contract as [`set_quantity`](Self::set_quantity), applied to the
    /// cost field.
    ///
    /// # Errors
    ///
    /// Returns [`RecordNotFound`] if no provision matches; the catalog is
    /// left untouched.
    #[allow(clippy::float_cmp)] // exact no-op detection, not numeric comparison
    pub fn set_unit_cost(
        &mut self,
        name: &str,
        unit_cost: f64,
    ) -> Result<UpdateOutcome, RecordNotFound> {
        let provision = self.get_mut(name)?;
        if provision.unit_cost() == unit_cost {
            return Ok(UpdateOutcome::Unchanged);
        }
        provision.set_unit_cost(unit_cost);
        Ok(UpdateOutcome::Updated)
    }

    fn get_mut(&mut self, name: &str) -> Result<&mut Provision, RecordNotFound> {
        self.provisions
            .iter_mut()
            .find(|p| p.name() == name)
            .ok_or_else(|| RecordNotFound(name.to_string()))
    }
}

impl FromIterator<Provision> for Catalog {
    fn from_iter<I: IntoIterator<Item = Provision>>(iter: I) -> Self {
        Self {
            provisions: iter.into_iter().collect(),
        }
    }
}

/// The result of a successful edit operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The field was changed; the catalog should be persisted.
    Updated,
    /// The new value already matched the current one; nothing was mutated.
    Unchanged,
}

/// Error returned when a name lookup fails during an edit.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("'{0}' is not in the inventory")]
pub struct RecordNotFound(String);
