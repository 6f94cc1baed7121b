//! Application services for the messaging relay.

mod relay;

pub use relay::{
    ACKNOWLEDGEMENT, APOLOGY, DUPLICATE_NOTICE, RelayError, RelayOutcome, RelayService,
    WELCOME,
};
