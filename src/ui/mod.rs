/// UI layer: pure rendering over [`crate::state::AppState`].  All numbers
/// shown here come pre-computed from the analysis layer.
pub mod panels;
pub mod plot;
