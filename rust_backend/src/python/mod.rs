//! PyO3 bindings for the Streamlit frontend.

pub mod loaders;
