pub const DEFAULT_PORT: u16 = 65500;

/// One pending browser connection at a time
pub const LISTEN_BACKLOG: i32 = 1;

pub const MIN_UNPRIVILEGED_PORT: u16 = 1024;

pub const CRLF: &str = "\r\n";
