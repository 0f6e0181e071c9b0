//! End-to-end flow: the two most recent filings, each loaded with degrade-on-failure
//! semantics, then diffed.

mod api;
mod model;

pub use model::{Comparison, FilingHoldings, Stage, Warning};

pub(crate) use api::{compare, latest_holdings, load_holdings};
