//! Domain Entities
//!
//! - `PrintHistory` / `HistoryRecord` - capped outcome log
//! - `PrintSettings` - per-request settings and their resolution
//! - `RecentlySeen` - duplicate-notification filter

mod history;
mod print_settings;
mod recently_seen;

pub use history::{HistoryRecord, PrintHistory, DEFAULT_HISTORY_LIMIT, TIMESTAMP_FORMAT};
pub use print_settings::{EffectiveSettings, PrintDefaults, PrintSettings};
pub use recently_seen::{RecentlySeen, RECENTLY_SEEN_CAPACITY};
