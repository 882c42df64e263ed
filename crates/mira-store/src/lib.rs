//! Reactive state stores for the Mira presentation core.
//!
//! Two stores coordinate the UI-visible state shared between screens:
//!
//! - [`BookmarkStore`]: the cards the user has saved this session
//! - [`GuideStore`]: the onboarding mascot's dialog, position, visibility,
//!   animation mode, and the active screen's scroll handle
//!
//! Both are synchronous and single-threaded: every mutation completes and
//! notifies subscribers before the call returns, so two calls from the
//! same logical caller are strictly ordered and no locking is needed.
//! Screens register a callback with `on_change` and pull fresh state when
//! it fires.

mod bookmarks;
mod guide;
mod subscription;

pub use bookmarks::BookmarkStore;
pub use guide::{GuideStore, TourToken};
pub use subscription::SubscriptionId;
