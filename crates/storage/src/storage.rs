use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{debug, trace};

use grainstore_core::{StorageError, StorageResult};

use crate::cereal::Cereal;

/// Capacity-bounded store of cereals in fixed-size containers.
///
/// Each allocated cereal occupies exactly one container of
/// `container_capacity`; the number of containers is bounded so that
/// `container_count * container_capacity` never exceeds `storage_capacity`.
/// A container entry exists from the first successful add of its cereal until
/// it is explicitly removed while empty.
///
/// Serializes for diagnostic snapshots; deserialization is deliberately not
/// derived so capacities cannot bypass construction validation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CerealStorage {
    container_capacity: f32,
    storage_capacity: f32,
    contents: BTreeMap<Cereal, f32>,
}

impl CerealStorage {
    /// Create a storage with fixed capacities.
    ///
    /// Fails with `InvalidArgument` when `container_capacity` is negative or
    /// `storage_capacity` is smaller than a single container.
    pub fn new(container_capacity: f32, storage_capacity: f32) -> StorageResult<Self> {
        if container_capacity.is_nan() || container_capacity < 0.0 {
            return Err(StorageError::invalid_argument(
                "container capacity cannot be negative",
            ));
        }
        if storage_capacity.is_nan() || storage_capacity < container_capacity {
            return Err(StorageError::invalid_argument(
                "storage capacity cannot be smaller than one container",
            ));
        }
        Ok(Self {
            container_capacity,
            storage_capacity,
            contents: BTreeMap::new(),
        })
    }

    /// Add `amount` of a cereal, allocating a container on first add.
    ///
    /// Returns the leftover that did not fit into the container (0.0 when it
    /// all fit). Fails with `InvalidArgument` on a negative amount, or with
    /// `CapacityExceeded` when the cereal has no container yet and allocating
    /// one more would overflow the total storage footprint.
    pub fn add_cereal(&mut self, cereal: Cereal, amount: f32) -> StorageResult<f32> {
        ensure_non_negative(amount)?;

        if !self.contents.contains_key(&cereal) {
            let used = self.used_capacity();
            if used + self.container_capacity > self.storage_capacity {
                return Err(StorageError::capacity_exceeded(format!(
                    "no room for a new {cereal} container"
                )));
            }
            debug!(cereal = %cereal, "allocated container");
        }

        Ok(self.put_to_container(cereal, amount))
    }

    /// Withdraw up to `amount` of a cereal; returns the quantity actually
    /// removed.
    ///
    /// A cereal with no container yields 0.0 without allocating one. Fails
    /// with `InvalidArgument` on a negative amount. The stored quantity never
    /// goes below zero.
    pub fn take_cereal(&mut self, cereal: Cereal, amount: f32) -> StorageResult<f32> {
        ensure_non_negative(amount)?;

        let Some(stored) = self.contents.get(&cereal).copied() else {
            return Ok(0.0);
        };

        let removed = if stored > amount {
            self.contents.insert(cereal, stored - amount);
            amount
        } else {
            self.contents.insert(cereal, 0.0);
            stored
        };
        trace!(cereal = %cereal, removed, "took cereal");
        Ok(removed)
    }

    /// Discard the container of a cereal.
    ///
    /// Succeeds only when the container exists and is exactly empty; a
    /// missing or non-empty container returns `false` and changes nothing.
    pub fn remove_container(&mut self, cereal: Cereal) -> bool {
        match self.contents.get(&cereal).copied() {
            Some(stored) if stored == 0.0 => {
                self.contents.remove(&cereal);
                debug!(cereal = %cereal, "removed container");
                true
            }
            _ => false,
        }
    }

    /// Stored quantity of a cereal; 0.0 when it has no container.
    pub fn amount(&self, cereal: Cereal) -> f32 {
        self.contents.get(&cereal).copied().unwrap_or(0.0)
    }

    /// Free space left in the cereal's container.
    ///
    /// Unlike [`amount`](Self::amount) this fails with `NotFound` when no
    /// container exists; the asymmetry is part of the contract.
    pub fn space(&self, cereal: Cereal) -> StorageResult<f32> {
        let stored = self
            .contents
            .get(&cereal)
            .copied()
            .ok_or_else(StorageError::not_found)?;
        Ok(self.container_capacity - stored)
    }

    pub fn container_capacity(&self) -> f32 {
        self.container_capacity
    }

    pub fn storage_capacity(&self) -> f32 {
        self.storage_capacity
    }

    /// Number of currently allocated containers.
    pub fn container_count(&self) -> usize {
        self.contents.len()
    }

    /// Footprint of the allocated containers, full or not.
    pub fn used_capacity(&self) -> f32 {
        self.contents.len() as f32 * self.container_capacity
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    /// Cereals that currently have an allocated container.
    pub fn cereals(&self) -> impl Iterator<Item = Cereal> + '_ {
        self.contents.keys().copied()
    }

    fn put_to_container(&mut self, cereal: Cereal, amount: f32) -> f32 {
        let stored = self.amount(cereal);
        let new_amount = stored + amount;

        if new_amount <= self.container_capacity {
            self.contents.insert(cereal, new_amount);
            trace!(cereal = %cereal, stored = new_amount, "stored cereal");
            0.0
        } else {
            self.contents.insert(cereal, self.container_capacity);
            trace!(cereal = %cereal, stored = self.container_capacity, "container full");
            new_amount - self.container_capacity
        }
    }
}

impl core::fmt::Display for CerealStorage {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "CerealStorage(container_capacity={}, storage_capacity={}, contents=",
            self.container_capacity, self.storage_capacity
        )?;
        if self.contents.is_empty() {
            f.write_str("empty")?;
        } else {
            for (i, (cereal, amount)) in self.contents.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{cereal}={amount}")?;
            }
        }
        f.write_str(")")
    }
}

// NaN fails the check as well: quantities must be non-negative numbers.
fn ensure_non_negative(amount: f32) -> StorageResult<()> {
    if amount.is_nan() || amount < 0.0 {
        return Err(StorageError::invalid_argument("amount cannot be negative"));
    }
    Ok(())
}
