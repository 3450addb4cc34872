// Default value functions

pub fn default_host() -> String {
    "127.0.0.1".to_string()
}

pub fn default_port() -> u16 {
    8080
}

pub fn default_workers() -> usize {
    0 // 0 = one worker per CPU core
}

pub fn default_api_prefix() -> String {
    "/api".to_string()
}

pub fn default_request_body_limit_bytes() -> usize {
    1048576 // 1MB; schema documents are small
}

pub fn default_log_level() -> String {
    "info".to_string()
}

pub fn default_log_format() -> String {
    "compact".to_string()
}

pub fn default_logs_path() -> String {
    "./logs".to_string()
}

pub fn default_true() -> bool {
    true
}
