//! Messages printed around an interactive session

const COLOR_INFO: &str = "\x1b[1;36m"; // Bold Cyan
const COLOR_SUCCESS: &str = "\x1b[1;32m"; // Bold Green
const COLOR_RESET: &str = "\x1b[0m";

#[derive(Debug, Clone)]
pub enum SessionMessage {
    Info(String),
    Success(String),
}

impl SessionMessage {
    pub fn info(msg: impl Into<String>) -> Self {
        Self::Info(msg.into())
    }

    pub fn success(msg: impl Into<String>) -> Self {
        Self::Success(msg.into())
    }

    pub fn print(&self) {
        match self {
            Self::Info(msg) => println!("{}[INFO]{} {}", COLOR_INFO, COLOR_RESET, msg),
            Self::Success(msg) => println!("{}[SUCCESS]{} {}", COLOR_SUCCESS, COLOR_RESET, msg),
        }
    }
}

pub fn print_session_starting(api_url: &str) {
    SessionMessage::info(format!("Starting forecast admin against {}", api_url)).print();
}

pub fn print_session_exit_success() {
    SessionMessage::success("Forecast admin exited").print();
}
