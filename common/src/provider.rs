use std::collections::{BTreeSet, HashMap};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::order::RideOrder;

/// Transportation provider identifier referenced by each order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProviderId(pub u64);

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Payload of `GET transportation-provider/{id}/`. Only the name is used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Provider {
    pub name: String,
}

/// Outcome of resolving one provider id.
#[derive(Debug, Clone)]
pub struct ProviderLookup {
    pub provider_id: ProviderId,
    pub result: Result<String, ApiError>,
}

/// Distinct provider ids referenced by `orders`, in ascending id order.
pub fn distinct_provider_ids(orders: &[RideOrder]) -> Vec<ProviderId> {
    orders
        .iter()
        .map(|o| o.provider_id)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Provider id → display name for the current batch of orders.
///
/// Rebuilt from scratch on every fetch; a missing id means the name is not
/// (or could not be) resolved and the row shows a placeholder.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProviderNameMap {
    names: HashMap<ProviderId, String>,
}

impl ProviderNameMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep the successful lookups, drop the failures.
    pub fn from_lookups<'a>(lookups: impl IntoIterator<Item = &'a ProviderLookup>) -> Self {
        let names = lookups
            .into_iter()
            .filter_map(|l| match &l.result {
                Ok(name) => Some((l.provider_id, name.clone())),
                Err(_) => None,
            })
            .collect();
        Self { names }
    }

    pub fn get(&self, id: ProviderId) -> Option<&str> {
        self.names.get(&id).map(String::as_str)
    }

    pub fn contains(&self, id: ProviderId) -> bool {
        self.names.contains_key(&id)
    }

    pub fn insert(&mut self, id: ProviderId, name: impl Into<String>) {
        self.names.insert(id, name.into());
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
