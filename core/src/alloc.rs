use std::collections::TryReserveError;

use crate::error::{GraphError, Result};

/// Build a `Vec` of `len` copies of `value`, reporting allocation failure
/// instead of aborting.
pub(crate) fn try_filled<T: Clone>(len: usize, value: T) -> Result<Vec<T>> {
    let mut v = Vec::new();
    v.try_reserve_exact(len).map_err(|e| reserve_failed(len, e))?;
    v.resize(len, value);
    Ok(v)
}

pub(crate) fn reserve_failed(vertex_count: usize, err: TryReserveError) -> GraphError {
    GraphError::alloc(vertex_count, err.to_string())
}
