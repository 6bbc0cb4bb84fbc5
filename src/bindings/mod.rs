mod operations;

use pyo3::prelude::*;
use pyo3::types::PyModule;

/// kge_ops - array helpers for knowledge graph embedding in Rust
#[pymodule]
pub fn _rust(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    // Masks, ranks and rolling matrices
    operations::register(m)?;
    Ok(())
}
