//! Workspace-level integration tests for polyfft. See `tests/`.
