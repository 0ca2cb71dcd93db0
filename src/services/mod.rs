//! Service Layer
//!
//! Abstraction over the hosted table store.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                  TableStore (trait)                  │
//! │  ┌──────────────────┐      ┌──────────────────────┐  │
//! │  │  RestTableStore  │      │   MemoryTableStore   │  │
//! │  │  (hosted API)    │      │   (tests / demo)     │  │
//! │  └──────────────────┘      └──────────────────────┘  │
//! └──────────────────────────────────────────────────────┘
//!                            │
//!                            ▼ rows / store errors
//! ┌──────────────────────────────────────────────────────┐
//! │                     State Layer                      │
//! │              (Slice<Card|Service|Ticket>)            │
//! └──────────────────────────────────────────────────────┘
//! ```

mod memory_store;
mod rest_store;
mod table_store;

pub use memory_store::*;
pub use rest_store::*;
pub use table_store::*;
