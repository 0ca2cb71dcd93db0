//! Constants
//!
//! Centralized table names, defaults and limits.

/// Remote table names
pub const CARDS_TABLE: &str = "cards";
pub const SERVICES_TABLE: &str = "services";
pub const TICKETS_TABLE: &str = "tickets";

/// Column the store orders by (newest first)
pub const ORDER_COLUMN: &str = "created_at";

/// REST path prefix of the hosted table API
pub const REST_PREFIX: &str = "rest/v1";

/// Default transport timeout for table store requests
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Environment overrides for the backend configuration
pub const ENV_BACKEND_URL: &str = "ADMIN_DASH_URL";
pub const ENV_BACKEND_API_KEY: &str = "ADMIN_DASH_API_KEY";

/// Backend configuration file name inside the config directory
pub const BACKEND_CONFIG_FILE: &str = "backend.toml";

/// Style tags applied to new records by the add forms
pub const DEFAULT_CARD_COLOR: &str = "text-foreground";
pub const DEFAULT_SERVICE_COLOR: &str = "bg-orange-500";

/// Ticket table pager (decorative)
pub const PAGE_SIZE_OPTIONS: [usize; 3] = [10, 20, 50];
pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const PAGER_PAGES: usize = 5;

/// Width of the text progress bar in the services list
pub const PROGRESS_BAR_WIDTH: usize = 20;
