pub mod console;
pub mod history;
pub mod lookup;
pub mod profile;
pub mod server;
pub mod session;

pub use console::{ShellService, StatsService};
pub use history::load_history;
pub use lookup::{Snapshot, run_lookup};
pub use profile::load_profile;
pub use session::{LookupOutcome, Phase, Session, SessionEvent, SessionState};
