/// Upstream API clients. One file per data source; the EA flood-monitoring
/// measures endpoint is the only source today.

pub mod floodmon;

#[cfg(test)]
pub(crate) mod fixtures;
