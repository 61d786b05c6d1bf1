//! Ledgerkit Transaction - The transaction DSL
//!
//! Build a request, validate it, turn it into a wire map for transport, and
//! rebuild it from a decoded payload on the way back.
//!
//! # Key Types
//! - `TransactionDslInput`: request envelope (description, code, metadata, Send)
//! - `Send`: asset and value moved from a `Source` to a `Distribute`
//! - `FromTo`: one leg, sized by an `Amount`, a `Share`, or left to `remaining`
//! - `WireMap`: the generic JSON object used on the wire
//!
//! # Example
//! ```
//! use ledgerkit_transaction::{FromTo, Send, TransactionDslInput};
//!
//! let send = Send::builder("USD", "100")
//!     .from(FromTo::new("acc-1"))
//!     .to(FromTo::new("acc-2"))
//!     .build();
//! let input = TransactionDslInput::builder(send)
//!     .description("Invoice 42")
//!     .try_build()
//!     .unwrap();
//!
//! let map = input.to_transaction_map();
//! assert_eq!(TransactionDslInput::from_transaction_map(&map), input);
//! ```

pub mod builder;
pub mod error;
pub mod model;
pub mod templates;
pub mod validation;
pub mod wire;

pub use builder::{SendBuilder, TransactionDslInputBuilder};
pub use error::{SendError, TransactionError, WireError};
pub use model::{Amount, Distribute, FromTo, LegSide, Rate, Send, Share, Source, TransactionDslInput};
pub use validation::{validate_send, validate_transaction, MAX_DESCRIPTION_LEN, MAX_GROUP_NAME_LEN};
pub use wire::{FromWire, ToWire, WireMap, WireObject};
