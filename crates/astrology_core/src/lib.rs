pub mod accounts;
pub mod domain;
pub mod ports;
pub mod reading;
pub mod service;
pub mod session;
pub mod store;

pub use accounts::{AccountService, AuthError};
pub use domain::{Account, AccountRecord, ReadingRequest, ReadingResult, ZodiacSign};
pub use ports::{
    AccountRepository, LatencyKind, LatencyPolicy, NoLatency, PortError, PortResult, SessionStore,
};
pub use reading::generate_reading;
pub use service::{AstrologyService, ReadingOutcome};
pub use session::{MemorySessionStore, SessionError, SESSION_KEY};
pub use store::InMemoryAccountRepository;
