pub const APP_NAME: &str = "devcircle";
pub const BRAND: &str = "DevCircle";
pub const TAGLINE: &str = "Join the ultimate hackathon platform";
pub const CONFIG_FILE: &str = ".devcircle.json";
pub const INVITE_ORIGIN_ENV: &str = "DEVCIRCLE_INVITE_ORIGIN";

// Defaults for the mock backend timings
pub const DEFAULT_INVITE_ORIGIN: &str = "http://localhost:5173";
pub const DEFAULT_LOAD_DELAY_MS: u64 = 1000;
pub const DEFAULT_SUBMIT_DELAY_MS: u64 = 1500;
pub const DEFAULT_SIGNUP_REDIRECT_MS: u64 = 2000;
pub const DEFAULT_NOTIFICATION_SECS: u64 = 4;
pub const DEFAULT_HACKATHON: &str = "hack2024";

pub const TEAM_SIZE_OPTIONS: [u32; 4] = [2, 3, 4, 5];
pub const DEFAULT_MAX_MEMBERS: u32 = 4;

pub const INVITE_CODE_LEN: usize = 8;
pub const INVITE_CODE_CHARSET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

pub const MIN_PASSWORD_LEN: usize = 6;

pub const TICK_RATE_MS: u64 = 100;
