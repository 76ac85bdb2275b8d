//! Black-box tests for the costar public API. See `tests/`.
